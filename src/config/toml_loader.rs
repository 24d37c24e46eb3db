//! TOML configuration file parsing.
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::ConfigError;

/// Load and deserialize a TOML file.
///
/// A missing file is not an error: it yields `T::default()`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq, Eq)]
    #[serde(default)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let got: Sample = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(got, Sample::default());
    }

    #[test]
    fn parses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.toml");
        std::fs::write(&path, "name = \"x\"\ncount = 3\n").unwrap();
        let got: Sample = load_config(&path).unwrap();
        assert_eq!(
            got,
            Sample {
                name: "x".to_string(),
                count: 3
            }
        );
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "name = ").unwrap();
        let err = load_config::<Sample>(&path).unwrap_err();
        assert!(
            matches!(err, ConfigError::Parse { .. }),
            "unexpected error: {err:?}"
        );
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn directory_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config::<Sample>(dir.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Io { .. }),
            "unexpected error: {err:?}"
        );
    }
}
