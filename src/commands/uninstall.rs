//! Uninstall command implementation
//!
//! Removes the backing file and the manifest entry for an exact
//! (name, type) match. An already-missing file is treated as clean.

use std::path::PathBuf;

use console::Style;

use crate::cli::UninstallArgs;
use crate::engine::Engine;
use crate::error::Result;
use crate::paths;
use crate::registry::ModrinthRegistry;

/// Run uninstall command
pub fn run(minecraft_path: Option<PathBuf>, args: UninstallArgs) -> Result<()> {
    let root = paths::resolve_minecraft_root(minecraft_path)?;
    let registry = ModrinthRegistry::new()?;
    let mut engine = Engine::open(root, &registry)?;

    let entry = engine.uninstall(&args.name, args.content_type)?;

    println!(
        "{} {} ({})",
        Style::new().green().apply_to("Removed"),
        entry.name,
        entry.file_name
    );

    Ok(())
}
