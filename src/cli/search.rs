use clap::Parser;

use crate::content::ContentType;

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Search for mods:\n    mcpack search sodium --type mod\n\n\
                   Limit to a game version:\n    mcpack search shaders --type shader --game-version 1.20.1\n\n\
                   Pick a result to install right away:\n    mcpack search sodium --type mod --select")]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Type of content to search for
    #[arg(long = "type", value_name = "TYPE", value_enum)]
    pub content_type: ContentType,

    /// Prompt to install one of the results
    #[arg(long)]
    pub select: bool,
}
