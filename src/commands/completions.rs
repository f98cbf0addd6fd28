//! Shell completions command

use std::io::Write;

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

const BIN_NAME: &str = "featurekit";

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    write_completions(args, &mut std::io::stdout().lock())
}

fn write_completions(args: CompletionsArgs, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, BIN_NAME, out);
    out.flush()?;
    Ok(())
}
