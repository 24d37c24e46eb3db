//! User configuration: interpreter, output encoding, elevation broker and
//! the default link type.
//!
//! Loaded from `$XDG_CONFIG_HOME/winmklink/config.toml` (default
//! `~/.config/winmklink/config.toml`). Every key is optional.
pub mod prefs;
pub mod toml_loader;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::link::LinkType;
use crate::platform;

/// All loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Direct execution settings.
    pub exec: ExecSection,
    /// Elevated execution settings.
    pub elevation: ElevationSection,
    /// Defaults for omitted command-line options.
    pub defaults: DefaultsSection,
}

/// `[exec]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecSection {
    /// Command interpreter the link command is run through.
    pub interpreter: String,
    /// Output encoding label, or `"auto"` for the system code page.
    pub encoding: String,
}

impl Default for ExecSection {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter().to_string(),
            encoding: crate::exec::encoding::AUTO.to_string(),
        }
    }
}

/// `[elevation]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElevationSection {
    /// Program that raises the elevation prompt.
    pub broker: String,
    /// Keep the elevated console open after the command finishes.
    pub keep_console_open: bool,
}

impl Default for ElevationSection {
    fn default() -> Self {
        Self {
            broker: "powershell".to_string(),
            keep_console_open: true,
        }
    }
}

/// `[defaults]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsSection {
    /// Link type used when `--type` is not given.
    pub link_type: LinkType,
}

impl Config {
    /// Load configuration from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not valid
    /// TOML, or contains unknown keys or link types.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        toml_loader::load_config(path)
    }

    /// Default location of the config file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| platform::home_dir().map(|home| home.join(".config")))?;
        Some(base.join("winmklink").join("config.toml"))
    }
}

const fn default_interpreter() -> &'static str {
    if cfg!(windows) { "cmd" } else { "sh" }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn load_str(content: &str) -> Result<Config, ConfigError> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        Config::load(&path)
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.exec.encoding, "auto");
        assert_eq!(config.elevation.broker, "powershell");
        assert!(config.elevation.keep_console_open);
        assert_eq!(config.defaults.link_type, LinkType::SymbolicFile);
        #[cfg(windows)]
        assert_eq!(config.exec.interpreter, "cmd");
        #[cfg(not(windows))]
        assert_eq!(config.exec.interpreter, "sh");
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(load_str("").unwrap(), Config::default());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = load_str("[exec]\nencoding = \"gbk\"\n\n[defaults]\nlink_type = \"junction\"\n")
            .unwrap();
        assert_eq!(config.exec.encoding, "gbk");
        assert_eq!(config.exec.interpreter, ExecSection::default().interpreter);
        assert_eq!(config.defaults.link_type, LinkType::JunctionDirectory);
        assert_eq!(config.elevation, ElevationSection::default());
    }

    #[test]
    fn elevation_section() {
        let config =
            load_str("[elevation]\nbroker = \"pwsh\"\nkeep_console_open = false\n").unwrap();
        assert_eq!(config.elevation.broker, "pwsh");
        assert!(!config.elevation.keep_console_open);
    }

    #[test]
    fn unknown_link_type_is_rejected() {
        let err = load_str("[defaults]\nlink_type = \"/D\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "unexpected: {err:?}");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = load_str("[exec]\nshell = \"bash\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "unexpected: {err:?}");
    }
}
