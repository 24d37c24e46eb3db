//! Domain-specific error types.
//!
//! Library modules return these typed errors; command handlers at the CLI
//! boundary convert them to [`anyhow::Error`] with `?`.
//!
//! # Error hierarchy
//!
//! ```text
//! WinMklinkError
//! ├── Request(RequestError) — paths and link types from the command line
//! ├── Config(ConfigError)   — config file and output encoding
//! ├── Prefs(PrefsError)     — saving the language preference
//! └── Launch                — interpreter or broker could not start
//! ```
//!
//! Failing to launch the interpreter or the elevation broker is *not* an
//! error here: it is reported inside
//! [`ExecutionResult`](crate::exec::ExecutionResult) so every execution path
//! hands a result back to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for winmklink commands.
///
/// Aggregates the domain errors and is convertible to [`anyhow::Error`] for
/// use at command boundaries.
#[derive(Error, Debug)]
pub enum WinMklinkError {
    /// The link request is invalid or incomplete.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Configuration could not be loaded or resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The language preference could not be saved.
    #[error("Preferences error: {0}")]
    Prefs(#[from] PrefsError),

    /// The interpreter or elevation broker could not be started.
    #[error("failed to launch {program}: {diagnostic}")]
    Launch {
        /// Program that failed to start.
        program: String,
        /// System error text.
        diagnostic: String,
    },
}

/// Errors raised while turning user input into a [`LinkRequest`](crate::link::LinkRequest).
#[derive(Error, Debug)]
pub enum RequestError {
    /// A path would break out of its quotes in the rendered command.
    #[error("{field} path contains a double quote, percent sign or line break: {path}")]
    UnsafePath {
        /// Which path was rejected (`"target"` or `"link"`).
        field: &'static str,
        /// The offending path.
        path: String,
    },

    /// A link-type identifier that is not one of the four known ids.
    #[error("unknown link type '{0}': expected one of symlink, symlink-dir, hardlink, junction")]
    UnknownLinkType(String),

    /// Execution was requested before both paths were filled in.
    #[error("Please fill target and link paths.")]
    Incomplete,

    /// A path could not be represented as UTF-8 text.
    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
}

/// Errors that arise from loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("IO error reading config file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unexpected keys or values.
    #[error("Invalid config file {path}: {source}")]
    Parse {
        /// Path to the offending file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The configured output encoding label is not recognised.
    #[error("Unknown output encoding '{0}'")]
    UnknownEncoding(String),
}

/// Errors that arise from saving the preferences file.
#[derive(Error, Debug)]
pub enum PrefsError {
    /// No home directory could be determined.
    #[error("cannot locate home directory for preferences")]
    NoHome,

    /// The preferences could not be serialized.
    #[error("cannot serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The preferences file could not be written.
    #[error("cannot write preferences to {path}: {source}")]
    Io {
        /// Path of the preferences file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
