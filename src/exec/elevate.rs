//! Wrapping a command line in a privilege-elevation request.
use super::ExecSettings;

/// The broker invocation that opens an elevated console running a command.
///
/// With the default settings this is
///
/// ```text
/// powershell -NoProfile -Command "Start-Process cmd -ArgumentList '/k <line>' -Verb RunAs"
/// ```
///
/// `/k` keeps the elevated console open so the user can read the native
/// success or error text there. Nothing flows back from that console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatedInvocation {
    program: String,
    args: Vec<String>,
}

impl ElevatedInvocation {
    /// Wrap `line` for elevated execution.
    #[must_use]
    pub fn new(settings: &ExecSettings, line: &str) -> Self {
        let switch = if settings.keep_console_open { "/k" } else { "/c" };
        let script = format!(
            "Start-Process {} -ArgumentList '{switch} {}' -Verb RunAs",
            settings.interpreter,
            escape_single_quoted(line)
        );
        Self {
            program: settings.broker.clone(),
            args: vec!["-NoProfile".to_string(), "-Command".to_string(), script],
        }
    }

    /// Broker executable.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Broker arguments; the last one is the PowerShell script.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Double every `'` so `s` fits inside a PowerShell single-quoted string.
fn escape_single_quoted(s: &str) -> String {
    s.replace('\'', "''")
}
