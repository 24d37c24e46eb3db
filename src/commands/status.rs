//! Command: report whether links can be created on this machine.
use anyhow::Result;

use super::CommandSetup;
use crate::exec::ExecSettings;
use crate::logging::Logger;
use crate::platform::{DeveloperMode, Platform};

/// Print platform, Developer Mode, output encoding and tool availability.
///
/// Missing tools are warnings, not errors.
///
/// # Errors
///
/// Returns an error if the configured output encoding is unknown.
pub fn run(setup: &CommandSetup, log: &Logger) -> Result<()> {
    let platform = Platform::detect();
    log.stage("Platform");
    log.info(&format!("os: {}", platform.os));
    if !platform.is_windows() {
        log.warn("mklink is only available on Windows");
    }
    let mode = platform.developer_mode();
    log.info(&format!("developer mode: {mode}"));
    if mode == DeveloperMode::Disabled {
        log.info("symbolic links need an elevated console (create --elevated)");
    }

    log.stage("Execution");
    let settings = ExecSettings::from_config(&setup.config)?;
    log.info(&format!("output encoding: {}", settings.encoding.name()));
    for (role, program) in [
        ("interpreter", &settings.interpreter),
        ("elevation broker", &settings.broker),
    ] {
        match which::which(program) {
            Ok(path) => log.info(&format!("{role}: {}", path.display())),
            Err(_) => log.warn(&format!("{role} '{program}' not found on PATH")),
        }
    }

    log.stage("Preferences");
    log.info(&format!(
        "language: {} ({})",
        setup.language.native_name(),
        setup.language
    ));
    if let Some(path) = &setup.config_path {
        let state = if path.exists() { "" } else { " (not found, using defaults)" };
        log.info(&format!("config: {}{state}", path.display()));
    }
    if let Some(path) = &setup.prefs_path {
        log.info(&format!("preferences: {}", path.display()));
    }
    Ok(())
}
