use clap::{Parser, ValueEnum};

/// Output format for listings
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Arguments for the list-primitives command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all primitives:\n    featurekit list-primitives\n\n\
                  List only installed primitives:\n    featurekit list-primitives --installed\n\n\
                  Machine-readable output:\n    featurekit list-primitives --format json")]
pub struct ListArgs {
    /// Only show installed primitives
    #[arg(long)]
    pub installed: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
