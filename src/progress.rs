//! Download progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a blocking download is in flight
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    /// Start a spinner labelled with the item being fetched
    pub fn start(label: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap();

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_message(format!("Downloading {}...", label));
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Replace the spinner with a final message
    pub fn finish(self, message: String) {
        self.bar.finish_with_message(message);
    }

    /// Clear the spinner on error, leaving stderr to the error report
    pub fn abandon(self) {
        self.bar.finish_and_clear();
    }
}
