//! mcpack - Minecraft content manager
//!
//! A command line tool for discovering, installing, updating and
//! removing Minecraft content (mods, resource packs, shader packs)
//! from Modrinth, tracked in a local manifest for in-place updates and
//! clean removal.

use clap::Parser;

mod cli;
mod commands;
mod content;
mod engine;
mod error;
mod manifest;
mod paths;
mod progress;
mod registry;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search(args) => {
            commands::search::run(cli.minecraft_path, cli.game_version, args)
        }
        Commands::Install(args) => {
            commands::install::run(cli.minecraft_path, cli.game_version, args)
        }
        Commands::List(args) => commands::list::run(cli.minecraft_path, args),
        Commands::Uninstall(args) => commands::uninstall::run(cli.minecraft_path, args),
        Commands::Update(args) => {
            commands::update::run(cli.minecraft_path, cli.game_version, args)
        }
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
