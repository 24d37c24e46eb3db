//! Execution of built link commands.
//!
//! Two modes:
//!
//! - [`Executor::run`] hands the rendered command to the command
//!   interpreter, blocks until it finishes and captures its output.
//! - [`Executor::run_elevated`] asks the elevation broker to open a new
//!   elevated console running the command and returns as soon as that
//!   request is dispatched. There is no channel back from the elevated
//!   console: the result says whether the request went out, never whether a
//!   link was created.
//!
//! In both modes `success` means "the process was launched". The exit status
//! of `mklink` is not inspected; native errors ("file already exists", "you
//! do not have sufficient privilege") only show up in the captured text.
mod elevate;
pub mod encoding;
mod shell;

pub use elevate::ElevatedInvocation;
#[cfg(test)]
pub use shell::MockShell;
pub use shell::{RawOutput, Shell, SystemShell};

use encoding_rs::Encoding;

use crate::command::BuiltCommand;
use crate::config::Config;
use crate::error::ConfigError;

/// Settings the executor needs, resolved from [`Config`].
#[derive(Debug, Clone)]
pub struct ExecSettings {
    /// Command interpreter (`cmd` on Windows).
    pub interpreter: String,
    /// Elevation broker (`powershell`).
    pub broker: String,
    /// Keep the elevated console open after the command finishes.
    pub keep_console_open: bool,
    /// Encoding of the interpreter's output.
    pub encoding: &'static Encoding,
}

impl ExecSettings {
    /// Resolve settings from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEncoding`] if the configured output
    /// encoding is not recognised.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            interpreter: config.exec.interpreter.clone(),
            broker: config.elevation.broker.clone(),
            keep_console_open: config.elevation.keep_console_open,
            encoding: encoding::resolve(&config.exec.encoding)?,
        })
    }
}

/// Outcome of running a [`BuiltCommand`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Decoded standard output. Always empty for elevated runs.
    pub stdout: String,
    /// Decoded standard error. Always empty for elevated runs.
    pub stderr: String,
    /// Whether the interpreter (or broker) was launched.
    pub success: bool,
    /// Interpreter exit code, for diagnostics only.
    pub code: Option<i32>,
    /// System error text when the launch failed.
    pub diagnostic: Option<String>,
}

impl ExecutionResult {
    fn launch_failed(message: String) -> Self {
        Self {
            diagnostic: Some(message),
            ..Self::default()
        }
    }

    const fn dispatched() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            success: true,
            code: None,
            diagnostic: None,
        }
    }

    /// Text to append to the output log: stdout, then stderr if any.
    #[must_use]
    pub fn output_text(&self) -> String {
        let mut text = self.stdout.clone();
        if !self.stderr.is_empty() {
            text.push_str(&self.stderr);
        }
        text
    }
}

/// Runs built commands through a [`Shell`].
#[derive(Debug)]
pub struct Executor<S = SystemShell> {
    shell: S,
    settings: ExecSettings,
}

impl Executor<SystemShell> {
    /// Executor that spawns real processes.
    #[must_use]
    pub const fn system(settings: ExecSettings) -> Self {
        Self::new(SystemShell, settings)
    }
}

impl<S: Shell> Executor<S> {
    /// Create an executor over `shell`.
    #[must_use]
    pub const fn new(shell: S, settings: ExecSettings) -> Self {
        Self { shell, settings }
    }

    /// Settings in use.
    #[must_use]
    pub const fn settings(&self) -> &ExecSettings {
        &self.settings
    }

    /// Run `cmd` through the interpreter and wait for it.
    ///
    /// Never fails: a launch failure comes back as `success == false` with
    /// the system error text in `diagnostic` and no captured output.
    #[must_use]
    pub fn run(&self, cmd: &BuiltCommand) -> ExecutionResult {
        let line = cmd.render();
        tracing::debug!("running via {}: {line}", self.settings.interpreter);
        match self.shell.capture(&self.settings.interpreter, &line) {
            Ok(raw) => ExecutionResult {
                stdout: encoding::decode(self.settings.encoding, &raw.stdout),
                stderr: encoding::decode(self.settings.encoding, &raw.stderr),
                success: true,
                code: raw.code,
                diagnostic: None,
            },
            Err(e) => ExecutionResult::launch_failed(e.to_string()),
        }
    }

    /// Dispatch `cmd` to an elevated console and return immediately.
    ///
    /// The result only reflects whether the elevation request was handed to
    /// the broker. Whether the user approved the prompt, and what `mklink`
    /// printed in the elevated console, is never reported back.
    #[must_use]
    pub fn run_elevated(&self, cmd: &BuiltCommand) -> ExecutionResult {
        let invocation = ElevatedInvocation::new(&self.settings, &cmd.render());
        tracing::debug!(
            "elevating via {}: {}",
            invocation.program(),
            invocation.args().join(" ")
        );
        match self
            .shell
            .spawn_detached(invocation.program(), invocation.args())
        {
            Ok(()) => ExecutionResult::dispatched(),
            Err(e) => ExecutionResult::launch_failed(e.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::command::build;
    use crate::link::{LinkRequest, LinkType};
    use mockall::predicate::eq;
    use std::io;

    fn settings() -> ExecSettings {
        ExecSettings {
            interpreter: "cmd".to_string(),
            broker: "powershell".to_string(),
            keep_console_open: true,
            encoding: encoding_rs::GBK,
        }
    }

    fn dir_symlink() -> BuiltCommand {
        let req = LinkRequest::new(r"C:\data", r"C:\link", LinkType::SymbolicDirectory).unwrap();
        build(&req).unwrap()
    }

    #[test]
    fn run_passes_rendered_line_to_interpreter() {
        let mut shell = MockShell::new();
        shell
            .expect_capture()
            .with(eq("cmd"), eq(r#"mklink /D "C:\link" "C:\data""#))
            .times(1)
            .returning(|_, _| Ok(RawOutput::default()));
        let result = Executor::new(shell, settings()).run(&dir_symlink());
        assert!(result.success);
    }

    #[test]
    fn run_decodes_with_configured_code_page() {
        let mut shell = MockShell::new();
        shell.expect_capture().returning(|_, _| {
            Ok(RawOutput {
                stdout: b"\xb4\xb4\xbd\xa8\r\n".to_vec(),
                stderr: Vec::new(),
                code: Some(0),
            })
        });
        let result = Executor::new(shell, settings()).run(&dir_symlink());
        assert_eq!(result.stdout, "创建\r\n");
        assert_eq!(result.stderr, "");
        assert_eq!(result.code, Some(0));
    }

    #[test]
    fn run_nonzero_exit_still_counts_as_launched() {
        let mut shell = MockShell::new();
        shell.expect_capture().returning(|_, _| {
            Ok(RawOutput {
                stdout: Vec::new(),
                stderr: b"Cannot create a file when that file already exists.\r\n".to_vec(),
                code: Some(1),
            })
        });
        let result = Executor::new(shell, settings()).run(&dir_symlink());
        assert!(result.success, "exit status must not affect success");
        assert_eq!(result.code, Some(1));
        assert_eq!(
            result.output_text(),
            "Cannot create a file when that file already exists.\r\n"
        );
    }

    #[test]
    fn run_launch_failure_reports_diagnostic_and_no_output() {
        let mut shell = MockShell::new();
        shell
            .expect_capture()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::NotFound, "program not found")));
        let result = Executor::new(shell, settings()).run(&dir_symlink());
        assert!(!result.success);
        assert_eq!(result.diagnostic.as_deref(), Some("program not found"));
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
        assert_eq!(result.code, None);
    }

    #[test]
    fn run_elevated_dispatches_broker_without_capture() {
        let mut shell = MockShell::new();
        shell.expect_capture().never();
        shell
            .expect_spawn_detached()
            .withf(|program, args| {
                program == "powershell"
                    && args.len() == 3
                    && args[2].starts_with("Start-Process cmd -ArgumentList '/k mklink /D")
                    && args[2].ends_with("-Verb RunAs")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let result = Executor::new(shell, settings()).run_elevated(&dir_symlink());
        assert!(result.success);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
        assert_eq!(result.diagnostic, None);
    }

    #[test]
    fn run_elevated_broker_failure_has_no_fallback() {
        let mut shell = MockShell::new();
        shell.expect_capture().never();
        shell.expect_spawn_detached().returning(|_, _| {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "broker unavailable",
            ))
        });
        let result = Executor::new(shell, settings()).run_elevated(&dir_symlink());
        assert!(!result.success);
        assert_eq!(result.diagnostic.as_deref(), Some("broker unavailable"));
    }

    #[test]
    fn output_text_skips_empty_stderr() {
        let result = ExecutionResult {
            stdout: "ok\r\n".to_string(),
            success: true,
            ..ExecutionResult::default()
        };
        assert_eq!(result.output_text(), "ok\r\n");
    }

    #[test]
    fn output_text_appends_stderr() {
        let result = ExecutionResult {
            stdout: "out\n".to_string(),
            stderr: "err\n".to_string(),
            success: true,
            ..ExecutionResult::default()
        };
        assert_eq!(result.output_text(), "out\nerr\n");
    }

    #[test]
    fn settings_from_default_config() {
        let settings = ExecSettings::from_config(&Config::default()).unwrap();
        assert_eq!(settings.broker, "powershell");
        assert!(settings.keep_console_open);
    }

    #[test]
    fn settings_reject_unknown_encoding() {
        let mut config = Config::default();
        config.exec.encoding = "klingon".to_string();
        assert!(ExecSettings::from_config(&config).is_err());
    }

    #[cfg(not(windows))]
    #[test]
    fn system_executor_launch_failure() {
        let settings = ExecSettings {
            interpreter: "this-interpreter-does-not-exist-12345".to_string(),
            ..settings()
        };
        let result = Executor::system(settings).run(&dir_symlink());
        assert!(!result.success);
        assert!(result.diagnostic.as_deref().is_some_and(|d| !d.is_empty()));
        assert!(result.output_text().is_empty());
    }
}
