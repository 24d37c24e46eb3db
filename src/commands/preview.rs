//! Command: show the `mklink` command line for a request without running it.
use anyhow::Result;

use super::CommandSetup;
use crate::cli::LinkArgs;
use crate::command::{self, BuiltCommand};
use crate::i18n::INCOMPLETE_FORM_WARNING;
use crate::link::LinkRequest;
use crate::logging::Logger;

/// Build the command for `args` and print it.
///
/// An incomplete request is not an error here: the warning is shown and
/// nothing is printed.
///
/// # Errors
///
/// Returns an error if the arguments cannot form a [`LinkRequest`].
pub fn run(setup: &CommandSetup, args: &LinkArgs, log: &Logger) -> Result<()> {
    let request = setup.request(args)?;
    show(setup, &request, log);
    Ok(())
}

fn show(setup: &CommandSetup, request: &LinkRequest, log: &Logger) -> Option<BuiltCommand> {
    let Some(cmd) = command::build(request) else {
        log.warn(INCOMPLETE_FORM_WARNING);
        return None;
    };
    super::warn_on_target_kind(request, log);
    log.debug(&format!(
        "{}: {}",
        request.link_type().id(),
        request.link_type().label(setup.language)
    ));
    log.output(&cmd.render());
    Some(cmd)
}
