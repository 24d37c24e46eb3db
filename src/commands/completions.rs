//! Command: print a shell completion script.
use anyhow::{Context as _, Result};
use clap::CommandFactory as _;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::{Cli, CompletionsOpts};

/// Write the completion script for `opts.shell` to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed.
pub fn run(opts: &CompletionsOpts) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_completions(opts.shell, &mut stdout);
    stdout.flush().context("flush completion script")
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}
