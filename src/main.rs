//! featurekit command line entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

use featurekit::cli::{Cli, Commands};
use featurekit::commands;
use featurekit::commands::helpers::resolve_config;
use featurekit::config::LOG_ENV;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "featurekit=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Info => resolve_config(cli.install_dir).and_then(|c| commands::info::run(&c)),
        Commands::ListPrimitives(args) => {
            resolve_config(cli.install_dir).and_then(|c| commands::list::run(&c, args))
        }
        Commands::Install(args) => {
            resolve_config(cli.install_dir).and_then(|c| commands::install::run(&c, args))
        }
        Commands::Uninstall(args) => {
            resolve_config(cli.install_dir).and_then(|c| commands::uninstall::run(&c, args))
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
