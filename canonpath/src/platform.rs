//! Target platform classification for path rendering and validation.
//!
//! Operations in this crate never inspect the environment themselves. The
//! caller states which separator convention applies by passing a [`Platform`]
//! value, which keeps every operation pure and testable without process-level
//! mocking.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The path separator convention of a target platform.
///
/// # Examples
///
/// ```
/// use canonpath::Platform;
///
/// assert_eq!(Platform::Posix.separator(), '/');
/// assert_eq!(Platform::Windows.separator(), '\\');
/// assert!(Platform::Windows.is_windows());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Forward-slash separated paths (Unix-like systems).
    Posix,
    /// Backslash separated paths, optionally carrying a drive prefix.
    Windows,
}

impl Platform {
    /// Returns the platform this process is running on.
    ///
    /// This is a convenience for callers that want host conventions; the
    /// library itself never calls it on their behalf.
    ///
    /// # Examples
    ///
    /// ```
    /// use canonpath::Platform;
    ///
    /// let host = Platform::host();
    /// assert_eq!(host.is_windows(), cfg!(windows));
    /// ```
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Returns `true` for [`Platform::Windows`].
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Returns the native separator character for this platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use canonpath::Platform;
    ///
    /// assert_eq!(Platform::Posix.separator(), '/');
    /// ```
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Parses a platform name from a string.
    ///
    /// Recognizes: "posix", "windows" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use canonpath::Platform;
    ///
    /// assert_eq!(Platform::parse("posix").unwrap(), Platform::Posix);
    /// assert_eq!(Platform::parse("WINDOWS").unwrap(), Platform::Windows);
    /// assert!(Platform::parse("beos").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("invalid platform: {s}")),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}
