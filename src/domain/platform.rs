//! Host platform value object

use std::fmt;

/// Operating system family, selected once per process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS
    Mac,
    /// Windows
    Windows,
    /// Linux, the BSDs and anything unrecognized
    LinuxLike,
}

impl Platform {
    /// Detect the platform this binary was built for
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a Rust OS identifier (`std::env::consts::OS`) to a platform.
    ///
    /// Unrecognized identifiers land in `LinuxLike`, where players are
    /// looked up on PATH and missing ones degrade to a no-op.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Self::Mac,
            "windows" => Self::Windows,
            _ => Self::LinuxLike,
        }
    }

    /// Get the string identifier for this platform
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::Windows => "windows",
            Self::LinuxLike => "linux-like",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
