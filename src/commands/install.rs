//! Install command implementation
//!
//! Resolves the project's latest compatible file, downloads it into
//! the type's directory and records it in the manifest. Fail-fast: no
//! retry, errors surface directly to the caller.

use std::path::PathBuf;

use console::Style;

use crate::cli::InstallArgs;
use crate::engine::Engine;
use crate::error::Result;
use crate::paths;
use crate::progress::DownloadProgress;
use crate::registry::ModrinthRegistry;

/// Run install command
pub fn run(
    minecraft_path: Option<PathBuf>,
    game_version: Option<String>,
    args: InstallArgs,
) -> Result<()> {
    let root = paths::resolve_minecraft_root(minecraft_path)?;
    let registry = ModrinthRegistry::new()?;
    let mut engine = Engine::open(root, &registry)?;

    let progress = DownloadProgress::start(&args.project_id);
    match engine.install(&args.project_id, args.content_type, game_version.as_deref()) {
        Ok(entry) => {
            progress.finish(format!(
                "{} {} ({})",
                Style::new().green().apply_to("Installed"),
                entry.name,
                entry.file_name
            ));
            Ok(())
        }
        Err(e) => {
            progress.abandon();
            Err(e)
        }
    }
}
