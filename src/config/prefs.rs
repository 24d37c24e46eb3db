//! Persisted display-language preference (`~/.winmklink_prefs.json`).
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PrefsError;
use crate::i18n::Language;
use crate::platform;

/// File name of the preferences file in the home directory.
pub const PREFS_FILE_NAME: &str = ".winmklink_prefs.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Prefs {
    #[serde(default)]
    lang: Option<String>,
}

/// Default location of the preferences file.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    platform::home_dir().map(|home| home.join(PREFS_FILE_NAME))
}

/// Load the saved language.
///
/// Any problem (missing file, unreadable, bad JSON, unknown code) falls back
/// to the default language.
#[must_use]
pub fn load_language(path: &Path) -> Language {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str::<Prefs>(&content).ok())
        .and_then(|prefs| prefs.lang)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Save `lang` as the preferred language.
///
/// # Errors
///
/// Returns an error if the preferences cannot be serialized or written.
pub fn save_language(path: &Path, lang: Language) -> Result<(), PrefsError> {
    let prefs = Prefs {
        lang: Some(lang.code().to_string()),
    };
    let json = serde_json::to_string(&prefs)?;
    std::fs::write(path, json).map_err(|source| PrefsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
