//! Display languages and the localized link-type labels.
//!
//! Labels are presentation data only. The core never switches on them; a
//! label coming back from a picker is mapped to its [`LinkType`] with
//! [`LinkType::from_label`], whatever language it was shown in.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::link::LinkType;

/// Warning shown when a command is requested before both paths are filled.
pub const INCOMPLETE_FORM_WARNING: &str = "Please fill target and link paths.";

/// Display language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Simplified Chinese.
    #[default]
    Zh,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    /// Short code stored in the preferences file.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Parse a short code; unknown codes yield `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Name of the language in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl LinkType {
    /// Localized label for this variant.
    #[must_use]
    pub const fn label(self, lang: Language) -> &'static str {
        match (lang, self) {
            (Language::En, Self::SymbolicFile) => "Symbolic Link (File)",
            (Language::En, Self::SymbolicDirectory) => "Symbolic Link (Directory)",
            (Language::En, Self::HardLinkFile) => "Hard Link (File)",
            (Language::En, Self::JunctionDirectory) => "Junction (Directory)",
            (Language::Zh, Self::SymbolicFile) => "符号链接（文件）",
            (Language::Zh, Self::SymbolicDirectory) => "符号链接（目录）",
            (Language::Zh, Self::HardLinkFile) => "硬链接（文件）",
            (Language::Zh, Self::JunctionDirectory) => "目录联接（Junction）",
        }
    }

    /// Map a label shown in any supported language back to its variant.
    ///
    /// Matching is exact; unknown labels yield `None` rather than a default.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Language::ALL
            .into_iter()
            .flat_map(|lang| Self::ALL.into_iter().map(move |t| (t, t.label(lang))))
            .find_map(|(t, l)| (l == label).then_some(t))
    }
}
