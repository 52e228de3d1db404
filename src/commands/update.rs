//! Update command implementation
//!
//! Processes every matching entry independently and prints one line
//! per entry plus a summary, so partial success stays visible. Batch
//! failures do not change the exit code; only a corrupt manifest or an
//! unmatched --name filter aborts.

use std::path::PathBuf;

use console::Style;

use crate::cli::UpdateArgs;
use crate::engine::{Engine, UpdateOutcome, UpdateReport};
use crate::error::Result;
use crate::paths;
use crate::registry::ModrinthRegistry;

/// Run update command
pub fn run(
    minecraft_path: Option<PathBuf>,
    game_version: Option<String>,
    args: UpdateArgs,
) -> Result<()> {
    let root = paths::resolve_minecraft_root(minecraft_path)?;
    let registry = ModrinthRegistry::new()?;
    let mut engine = Engine::open(root, &registry)?;

    let reports = engine.update(
        args.content_type,
        args.name.as_deref(),
        game_version.as_deref(),
    )?;

    if reports.is_empty() {
        println!("Nothing installed to update.");
        return Ok(());
    }

    println!("Checked {} installed item(s):", reports.len());
    println!();

    for report in &reports {
        print_report(report);
    }

    print_summary(&reports);
    Ok(())
}

fn print_report(report: &UpdateReport) {
    let name = Style::new().bold().apply_to(&report.name);
    match &report.outcome {
        UpdateOutcome::UpToDate => {
            println!(
                "  {} ({}) {}",
                name,
                report.content_type,
                Style::new().green().apply_to("up to date")
            );
        }
        UpdateOutcome::Updated { version } => {
            println!(
                "  {} ({}) {}",
                name,
                report.content_type,
                Style::new().blue().apply_to(format!("updated to {}", version))
            );
        }
        UpdateOutcome::Failed { error } => {
            println!(
                "  {} ({}) {}",
                name,
                report.content_type,
                Style::new().red().apply_to(format!("failed: {}", error))
            );
        }
    }
}

fn print_summary(reports: &[UpdateReport]) {
    let updated = reports
        .iter()
        .filter(|r| matches!(r.outcome, UpdateOutcome::Updated { .. }))
        .count();
    let up_to_date = reports
        .iter()
        .filter(|r| matches!(r.outcome, UpdateOutcome::UpToDate))
        .count();
    let failed = reports
        .iter()
        .filter(|r| matches!(r.outcome, UpdateOutcome::Failed { .. }))
        .count();

    println!();
    println!(
        "{} updated, {} up to date, {} failed",
        updated, up_to_date, failed
    );
}
