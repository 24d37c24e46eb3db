//! Command: create a link by running `mklink`, directly or elevated.
use anyhow::Result;

use super::CommandSetup;
use crate::cli::CreateOpts;
use crate::command::{self, BuiltCommand};
use crate::error::{RequestError, WinMklinkError};
use crate::exec::{ExecSettings, Executor, Shell};
use crate::logging::Logger;

/// Build the command for `opts` and run it.
///
/// # Errors
///
/// Returns an error if the request is invalid or incomplete, the exec
/// settings cannot be resolved, or the interpreter or broker could not be
/// launched. A non-zero `mklink` exit code is not an error; its message is
/// already in the captured output.
pub fn run(setup: &CommandSetup, opts: &CreateOpts, dry_run: bool, log: &Logger) -> Result<()> {
    let request = setup.request(&opts.link)?;
    let Some(cmd) = command::build(&request) else {
        return Err(WinMklinkError::from(RequestError::Incomplete).into());
    };

    super::warn_on_target_kind(&request, log);
    log.stage(&format!(
        "{} {} -> {}",
        request.link_type().label(setup.language),
        request.link_path(),
        request.target_path()
    ));

    if dry_run {
        let mode = if opts.elevated { " (elevated)" } else { "" };
        log.dry_run(&format!("would run{mode}: {cmd}"));
        return Ok(());
    }

    let settings = ExecSettings::from_config(&setup.config).map_err(WinMklinkError::from)?;
    log.debug(&format!("output encoding: {}", settings.encoding.name()));
    execute(&Executor::system(settings), &cmd, opts.elevated, log)
}

/// Run `cmd` with `executor` and report the outcome through `log`.
///
/// # Errors
///
/// Returns an error if the interpreter (or broker, when `elevated`) could
/// not be launched.
pub fn execute<S: Shell>(
    executor: &Executor<S>,
    cmd: &BuiltCommand,
    elevated: bool,
    log: &Logger,
) -> Result<()> {
    log.info(&cmd.render());

    if elevated {
        let result = executor.run_elevated(cmd);
        if let Some(diagnostic) = result.diagnostic {
            return Err(WinMklinkError::Launch {
                program: executor.settings().broker.clone(),
                diagnostic,
            }
            .into());
        }
        log.info("elevation requested; mklink output appears in the elevated console");
        return Ok(());
    }

    let result = executor.run(cmd);
    if let Some(diagnostic) = result.diagnostic {
        return Err(WinMklinkError::Launch {
            program: executor.settings().interpreter.clone(),
            diagnostic,
        }
        .into());
    }
    log.output(&result.output_text());
    if let Some(code) = result.code {
        log.debug(&format!(
            "{} exited with code {code}",
            executor.settings().interpreter
        ));
    }
    Ok(())
}
