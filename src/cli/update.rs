use clap::Parser;

use crate::content::ContentType;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Update everything installed:\n    mcpack update\n\n\
                   Update one content type:\n    mcpack update --type mod\n\n\
                   Update a single item:\n    mcpack update --type mod --name Sodium\n\n\
                   One item failing never aborts the rest of the batch.")]
pub struct UpdateArgs {
    /// Type of content to update (default: all types)
    #[arg(long = "type", value_name = "TYPE", value_enum)]
    pub content_type: Option<ContentType>,

    /// Update only the entry with this tracked name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}
