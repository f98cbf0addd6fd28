use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    featurekit completions bash > ~/.bash_completion.d/featurekit\n\n\
                  Generate fish completions:\n    featurekit completions fish > ~/.config/fish/completions/featurekit.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
