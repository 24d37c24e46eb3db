//! Command: save the preferred display language.
use super::CommandSetup;
use crate::cli::LangOpts;
use crate::config::prefs;
use crate::error::PrefsError;
use crate::logging::Logger;

/// Persist `opts.language` to the preferences file.
///
/// A failed save is reported as a warning; the language still applies to
/// the current run.
pub fn run(setup: &CommandSetup, opts: &LangOpts, log: &Logger) {
    let saved = setup
        .prefs_path
        .as_deref()
        .ok_or(PrefsError::NoHome)
        .and_then(|path| prefs::save_language(path, opts.language));
    match saved {
        Ok(()) => log.info(&format!(
            "language set to {} ({})",
            opts.language.native_name(),
            opts.language
        )),
        Err(e) => log.warn(&format!("language preference not saved: {e}")),
    }
}
