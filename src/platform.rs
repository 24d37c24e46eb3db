//! Operating system detection, Developer Mode and the home directory.
use std::fmt;
use std::path::PathBuf;

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// Linux.
    Linux,
    /// Windows, where `mklink` exists.
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Whether Windows Developer Mode is on.
///
/// With Developer Mode on, symbolic links can be created without
/// elevation; otherwise `mklink` and `mklink /D` need an elevated console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeveloperMode {
    /// Symbolic links work without elevation.
    Enabled,
    /// Symbolic links need elevation.
    Disabled,
    /// Not on Windows, or the registry could not be read.
    Unknown,
}

impl fmt::Display for DeveloperMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Platform information for the current system.
#[derive(Debug, Clone)]
pub struct Platform {
    /// Operating system.
    pub os: Os,
}

impl Platform {
    /// Detect the current platform.
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            os: Self::detect_os(),
        }
    }

    /// Create a platform with an explicit OS (for testing).
    #[must_use]
    pub const fn new(os: Os) -> Self {
        Self { os }
    }

    /// `true` on Windows.
    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.os == Os::Windows
    }

    /// Read the Developer Mode flag; [`DeveloperMode::Unknown`] off Windows.
    #[must_use]
    pub fn developer_mode(&self) -> DeveloperMode {
        if self.is_windows() {
            read_developer_mode()
        } else {
            DeveloperMode::Unknown
        }
    }

    const fn detect_os() -> Os {
        if cfg!(target_os = "windows") {
            Os::Windows
        } else {
            // Other Unix-like systems behave like Linux here
            Os::Linux
        }
    }
}

/// Registry subkey holding the Developer Mode flag.
#[cfg(windows)]
const DEVELOPER_MODE_SUBKEY: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\AppModelUnlock";

/// Registry value name for the Developer Mode flag.
#[cfg(windows)]
const DEVELOPER_MODE_VALUE: &str = "AllowDevelopmentWithoutDevLicense";

#[cfg(windows)]
fn read_developer_mode() -> DeveloperMode {
    use winreg::RegKey;
    use winreg::enums::HKEY_LOCAL_MACHINE;
    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    match hklm.open_subkey(DEVELOPER_MODE_SUBKEY) {
        Ok(key) => match key.get_value::<u32, _>(DEVELOPER_MODE_VALUE) {
            Ok(1) => DeveloperMode::Enabled,
            Ok(_) => DeveloperMode::Disabled,
            Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => DeveloperMode::Disabled,
            Err(_) => DeveloperMode::Unknown,
        },
        Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => DeveloperMode::Disabled,
        Err(_) => DeveloperMode::Unknown,
    }
}

#[cfg(not(windows))]
const fn read_developer_mode() -> DeveloperMode {
    DeveloperMode::Unknown
}

/// The user's home directory (`HOME`, then `USERPROFILE`).
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
