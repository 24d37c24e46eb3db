//! Structured logger facade over [`tracing`].
use std::path::PathBuf;

use super::utils::log_file_path;

/// Event target for stage headers.
pub(super) const STAGE_TARGET: &str = "winmklink::stage";
/// Event target for dry-run notices.
pub(super) const DRY_RUN_TARGET: &str = "winmklink::dry_run";
/// Event target for verbatim native command output.
pub(super) const OUTPUT_TARGET: &str = "winmklink::output";

/// Structured logger with dry-run awareness.
///
/// Every message is also written to a persistent log file at
/// `$XDG_CACHE_HOME/winmklink/<command>.log` (default
/// `~/.cache/winmklink/<command>.log`) with timestamps and ANSI codes
/// stripped, regardless of the verbose flag.
#[derive(Debug)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

#[allow(clippy::unused_self)]
impl Logger {
    /// Create a new logger.
    ///
    /// Stores the log file path for display. The file itself is created by
    /// [`init_subscriber`](super::subscriber::init_subscriber).
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            log_file: log_file_path(command),
        }
    }

    /// Return the log file path, if available.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Append text to the output log verbatim: captured native output, or a
    /// rendered command. Empty text is dropped.
    pub fn output(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        tracing::info!(target: OUTPUT_TARGET, "{text}");
    }
}
