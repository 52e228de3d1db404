//! Search command implementation
//!
//! Prints catalog hits for a query; with `--select`, prompts to pick
//! one and installs it in the same invocation.

use std::path::PathBuf;

use console::Style;
use inquire::{InquireError, Select};

use crate::cli::SearchArgs;
use crate::engine::Engine;
use crate::error::{McpackError, Result};
use crate::paths;
use crate::progress::DownloadProgress;
use crate::registry::{CandidateContent, ModrinthRegistry};

/// Run search command
pub fn run(
    minecraft_path: Option<PathBuf>,
    game_version: Option<String>,
    args: SearchArgs,
) -> Result<()> {
    let root = paths::resolve_minecraft_root(minecraft_path)?;
    let registry = ModrinthRegistry::new()?;
    let mut engine = Engine::open(root, &registry)?;

    let results = engine.search(&args.query, args.content_type, game_version.as_deref())?;

    if results.is_empty() {
        println!("No results found for '{}'", args.query);
        return Ok(());
    }

    print_results(&args.query, &results);

    if args.select {
        select_and_install(&mut engine, game_version.as_deref(), &results)?;
    }

    Ok(())
}

fn print_results(query: &str, results: &[CandidateContent]) {
    println!(
        "{} '{}' ({}):",
        Style::new().bold().apply_to("Search results for"),
        query,
        results.len()
    );
    println!();

    for candidate in results {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(&candidate.title),
            Style::new().dim().apply_to(format!(
                "[{}] {} downloads",
                candidate.project_id, candidate.downloads
            ))
        );
        if !candidate.description.is_empty() {
            println!(
                "    {}",
                Style::new()
                    .cyan()
                    .apply_to(truncate(&candidate.description, 80))
            );
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut)
}

/// Prompt for a hit and install it; cancelling the prompt is not an error
fn select_and_install(
    engine: &mut Engine,
    game_version: Option<&str>,
    results: &[CandidateContent],
) -> Result<()> {
    let labels: Vec<String> = results
        .iter()
        .map(|c| format!("{} [{}]", c.title, c.project_id))
        .collect();

    let choice = match Select::new("Install which result?", labels.clone()).prompt() {
        Ok(choice) => choice,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            return Ok(());
        }
        Err(e) => {
            return Err(McpackError::Io {
                message: format!("Selection prompt failed: {}", e),
            });
        }
    };

    let index = labels.iter().position(|l| l == &choice).unwrap_or(0);
    let candidate = &results[index];

    let progress = DownloadProgress::start(&candidate.title);
    match engine.install(&candidate.project_id, candidate.content_type, game_version) {
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
