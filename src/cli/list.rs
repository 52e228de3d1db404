use clap::Parser;

use crate::content::ContentType;

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Type of content to list
    #[arg(long = "type", value_name = "TYPE", value_enum)]
    pub content_type: ContentType,

    /// Also flag entries whose file is missing from disk
    #[arg(long)]
    pub verify: bool,
}
