//! List command implementation
//!
//! Pure manifest read; order reflects install history. With
//! `--verify`, entries whose backing file is missing are flagged.

use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::engine::Engine;
use crate::error::Result;
use crate::paths;
use crate::registry::ModrinthRegistry;

/// Run list command
pub fn run(minecraft_path: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let root = paths::resolve_minecraft_root(minecraft_path)?;
    let registry = ModrinthRegistry::new()?;
    let engine = Engine::open(root, &registry)?;

    let entries = engine.list(args.content_type);
    if entries.is_empty() {
        println!("No {}s installed.", args.content_type);
        return Ok(());
    }

    let missing: Vec<&str> = if args.verify {
        engine
            .orphaned(args.content_type)
            .iter()
            .map(|e| e.name.as_str())
            .collect()
    } else {
        Vec::new()
    };

    println!(
        "Installed {}s ({}):",
        args.content_type,
        entries.len()
    );
    println!();

    for entry in entries {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(&entry.name),
            Style::new().dim().apply_to(format!(
                "[{}] {} ({})",
                entry.project_id, entry.file_name, entry.version_id
            ))
        );
        if missing.contains(&entry.name.as_str()) {
            println!(
                "    {}",
                Style::new()
                    .red()
                    .apply_to("file missing from disk (orphaned entry)")
            );
        }
    }

    Ok(())
}
