use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall a primitive:\n    featurekit uninstall custommax\n\n\
                  Uninstall by class name:\n    featurekit uninstall CustomMax\n\n\
                  Uninstall several without confirmation:\n    featurekit uninstall custommax custommean -y")]
pub struct UninstallArgs {
    /// Primitive names to uninstall (class names are normalized)
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
