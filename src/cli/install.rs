use clap::Parser;

use crate::content::ContentType;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install a mod by Modrinth project id:\n    mcpack install AANobbMI --type mod\n\n\
                   Install for a specific game version:\n    mcpack install AANobbMI --type mod --game-version 1.20.1\n\n\
                   Re-running install replaces the tracked entry (last write wins).")]
pub struct InstallArgs {
    /// Modrinth project id to install
    pub project_id: String,

    /// Type of content to install
    #[arg(long = "type", value_name = "TYPE", value_enum)]
    pub content_type: ContentType,
}
