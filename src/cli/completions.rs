use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mcpack completions bash > ~/.bash_completion.d/mcpack\n\n\
                  Generate zsh completions:\n    mcpack completions zsh > ~/.zfunc/_mcpack\n\n\
                  Generate fish completions:\n    mcpack completions fish > ~/.config/fish/completions/mcpack.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
