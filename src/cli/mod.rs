//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - list: List-primitives command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod uninstall;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::{ListArgs, OutputFormat};
pub use uninstall::UninstallArgs;

/// featurekit - primitive installer
///
/// Install and manage user-defined feature primitives.
#[derive(Parser, Debug)]
#[command(
    name = "featurekit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install and manage feature-engineering primitives",
    long_about = "featurekit installs bundles of user-defined primitives (aggregations and \
                  transforms) from a local directory, a local archive, or an archive on S3 or \
                  HTTPS into the library's installation directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  featurekit install ./primitives                       \x1b[90m# Install from a directory\x1b[0m\n   \
                  featurekit install s3://bucket/primitives.tar.gz -y   \x1b[90m# Install from S3 without prompting\x1b[0m\n   \
                  featurekit list-primitives --installed                \x1b[90m# List installed primitives\x1b[0m\n   \
                  featurekit uninstall custommax                        \x1b[90m# Remove an installed primitive\x1b[0m\n   \
                  featurekit info                                       \x1b[90m# Show library paths\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Primitive installation directory (defaults to <data dir>/featurekit/primitives)
    #[arg(long, global = true, value_name = "DIR", env = "FEATUREKIT_INSTALL_DIR")]
    pub install_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show library and installation paths
    Info,

    /// List available primitives
    #[command(name = "list-primitives")]
    ListPrimitives(ListArgs),

    /// Install primitives from a directory, archive or URL
    Install(InstallArgs),

    /// Remove installed primitives
    Uninstall(UninstallArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
