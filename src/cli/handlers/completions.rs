//! Shell completion generation.

use anyhow::Result;
use clap::CommandFactory;
use std::io::Write;

use crate::cli::{Cli, CompletionsArgs};

/// Writes the completion script for the requested shell.
pub(crate) fn write_completions(args: &CompletionsArgs, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, out);
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut stdout = std::io::stdout();
    write_completions(args, &mut stdout);
    stdout.flush()?;
    Ok(())
}
