use clap::Parser;

use crate::content::ContentType;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Remove a tracked mod by its display name:\n    mcpack uninstall Sodium --type mod\n\n\
                   Names are matched exactly; 'mcpack list' shows tracked names.")]
pub struct UninstallArgs {
    /// Tracked display name of the content to remove
    pub name: String,

    /// Type of content to remove
    #[arg(long = "type", value_name = "TYPE", value_enum)]
    pub content_type: ContentType,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::{Cli, Commands};
    use crate::content::ContentType;
    use clap::Parser;

    #[test]
    fn test_cli_parsing_uninstall() {
        let cli =
            Cli::try_parse_from(["mcpack", "uninstall", "Sodium", "--type", "mod"]).unwrap();
        match cli.command {
            Commands::Uninstall(args) => {
                assert_eq!(args.name, "Sodium");
                assert_eq!(args.content_type, ContentType::Mod);
            }
            _ => panic!("Expected Uninstall command"),
        }
    }

    #[test]
    fn test_cli_parsing_uninstall_requires_type() {
        assert!(Cli::try_parse_from(["mcpack", "uninstall", "Sodium"]).is_err());
    }
}
