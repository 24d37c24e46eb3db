//! Link variants and the request value object handed to the command builder.
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Kind of link to create.
///
/// The set is closed: every variant maps to exactly one native `mklink`
/// modifier (or none), and nothing outside this enum is ever turned into a
/// flag.
///
/// # Examples
///
/// ```
/// use winmklink::link::LinkType;
///
/// assert_eq!(LinkType::SymbolicFile.flag(), None);
/// assert_eq!(LinkType::JunctionDirectory.flag(), Some("/J"));
/// assert_eq!("hardlink".parse::<LinkType>().ok(), Some(LinkType::HardLinkFile));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum LinkType {
    /// Symbolic link to a file. Plain `mklink`, no modifier.
    #[default]
    #[serde(rename = "symlink")]
    #[value(name = "symlink")]
    SymbolicFile,
    /// Symbolic link to a directory (`/D`).
    #[serde(rename = "symlink-dir")]
    #[value(name = "symlink-dir")]
    SymbolicDirectory,
    /// Hard link to a file (`/H`).
    #[serde(rename = "hardlink")]
    #[value(name = "hardlink")]
    HardLinkFile,
    /// Directory junction (`/J`).
    #[serde(rename = "junction")]
    #[value(name = "junction")]
    JunctionDirectory,
}

impl LinkType {
    /// Every variant, in display order.
    pub const ALL: [Self; 4] = [
        Self::SymbolicFile,
        Self::SymbolicDirectory,
        Self::HardLinkFile,
        Self::JunctionDirectory,
    ];

    /// Native `mklink` modifier for this variant.
    #[must_use]
    pub const fn flag(self) -> Option<&'static str> {
        match self {
            Self::SymbolicFile => None,
            Self::SymbolicDirectory => Some("/D"),
            Self::HardLinkFile => Some("/H"),
            Self::JunctionDirectory => Some("/J"),
        }
    }

    /// Language-independent identifier used on the command line, in config
    /// files and in JSON.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SymbolicFile => "symlink",
            Self::SymbolicDirectory => "symlink-dir",
            Self::HardLinkFile => "hardlink",
            Self::JunctionDirectory => "junction",
        }
    }

    /// Whether the link target must be a directory rather than a file.
    #[must_use]
    pub const fn targets_directory(self) -> bool {
        matches!(self, Self::SymbolicDirectory | Self::JunctionDirectory)
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LinkType {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| RequestError::UnknownLinkType(s.to_string()))
    }
}

/// What the user asked for: an existing target, a new link path, and the
/// kind of link.
///
/// Empty paths are allowed and represent an incomplete form. Paths that
/// would break out of their quotes in the rendered command (double quotes,
/// line breaks) or be rewritten by variable expansion (`%`) are rejected at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkRequest {
    target_path: String,
    link_path: String,
    link_type: LinkType,
}

impl LinkRequest {
    /// Create a request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::UnsafePath`] if either path contains a double
    /// quote, a percent sign, a carriage return or a line feed.
    pub fn new(
        target_path: impl Into<String>,
        link_path: impl Into<String>,
        link_type: LinkType,
    ) -> Result<Self, RequestError> {
        let target_path = target_path.into();
        let link_path = link_path.into();
        check_path("target", &target_path)?;
        check_path("link", &link_path)?;
        Ok(Self {
            target_path,
            link_path,
            link_type,
        })
    }

    /// Existing file or directory the link will point to.
    #[must_use]
    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    /// Path of the link to create.
    #[must_use]
    pub fn link_path(&self) -> &str {
        &self.link_path
    }

    /// Selected link variant.
    #[must_use]
    pub const fn link_type(&self) -> LinkType {
        self.link_type
    }

    /// `true` when both paths are filled in.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !self.target_path.is_empty() && !self.link_path.is_empty()
    }
}

fn check_path(field: &'static str, path: &str) -> Result<(), RequestError> {
    // cmd expands %NAME% even inside double quotes
    if path.contains(['"', '%', '\r', '\n']) {
        return Err(RequestError::UnsafePath {
            field,
            path: path.to_string(),
        });
    }
    Ok(())
}

/// Suggest where the link should live, reusing the target's file name.
///
/// - no link given: `<cwd>/<target name>`
/// - link is an existing directory: `<link>/<target name>`
/// - otherwise the link is used as given
///
/// Returns `None` when a name is needed but the target has none (e.g. a
/// drive root), or when the derived path is the target itself. Both paths
/// are expected to be absolute.
#[must_use]
pub fn suggest_link_path(target: &Path, link: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    let dir = match link {
        Some(link) if link.is_dir() => link,
        Some(link) => return Some(link.to_path_buf()),
        None => cwd,
    };
    target
        .file_name()
        .map(|name| dir.join(name))
        .filter(|suggested| suggested != target)
}
