//! `winmklink` command-line entry point.
use clap::Parser;
use std::process::ExitCode;

use winmklink::cli::Cli;
use winmklink::commands;
use winmklink::logging::{Logger, init_subscriber};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let command = args.command.log_name();
    init_subscriber(args.verbose, command);
    let log = Logger::new(command);
    ExitCode::from(commands::report(commands::run(&args, &log), &log))
}
