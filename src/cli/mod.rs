//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - search: Search command arguments
//! - install: Install command arguments
//! - list: List command arguments
//! - uninstall: Uninstall command arguments
//! - update: Update command arguments
//! - completions: Completions command arguments

use clap::builder::{styling::AnsiColor, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod search;
pub mod uninstall;
pub mod update;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use search::SearchArgs;
pub use uninstall::UninstallArgs;
pub use update::UpdateArgs;

/// mcpack - Minecraft content manager
///
/// Discover, install, update and remove mods, resource packs and
/// shader packs from Modrinth, tracked in a local manifest.
#[derive(Parser, Debug)]
#[command(
    name = "mcpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Lean content manager for Minecraft mods, resource packs and shader packs",
    long_about = "mcpack manages Minecraft content (mods, resource packs, shader packs) \
                  hosted on Modrinth, tracking installed items in a manifest inside the \
                  Minecraft directory so they can be updated in place or cleanly removed.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mcpack search sodium --type mod        \x1b[90m# Search for mods\x1b[0m\n   \
                  mcpack install AANobbMI --type mod     \x1b[90m# Install by project id\x1b[0m\n   \
                  mcpack list --type shader              \x1b[90m# List installed shader packs\x1b[0m\n   \
                  mcpack update                          \x1b[90m# Update everything installed\x1b[0m\n   \
                  mcpack uninstall Sodium --type mod     \x1b[90m# Remove by tracked name\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Minecraft directory (defaults to the platform's launcher location)
    #[arg(long, global = true, env = "MCPACK_MINECRAFT_PATH", value_name = "PATH")]
    pub minecraft_path: Option<PathBuf>,

    /// Only consider files compatible with this game version
    #[arg(long, global = true, value_name = "VERSION")]
    pub game_version: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search Modrinth for content
    Search(SearchArgs),

    /// Install content by project id
    Install(InstallArgs),

    /// List installed content
    List(ListArgs),

    /// Remove installed content
    Uninstall(UninstallArgs),

    /// Update installed content to the latest compatible versions
    Update(UpdateArgs),

    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}
