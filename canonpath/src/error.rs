//! Error types for the canonpath library.
//!
//! Almost every operation in this crate is total over arbitrary string input;
//! the single failure mode is asking for path validation on a platform that
//! has no validation rules. Errors use `thiserror` for ergonomic handling.

use thiserror::Error;

use crate::platform::Platform;

/// Result type alias for operations that may fail with a canonpath error.
///
/// # Examples
///
/// ```
/// use canonpath::{Error, Result};
///
/// fn example_operation() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the canonpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// Path validation was requested for a platform with no validation rules.
    ///
    /// This is a programmer-usage error: the caller invoked a Windows-only
    /// validation against a non-Windows target. It propagates to the caller
    /// unmodified and is never swallowed.
    #[error("unsupported platform: path validation is not implemented for {platform}")]
    UnsupportedPlatform {
        /// The platform the caller asked to validate against.
        platform: Platform,
    },
}

impl Error {
    /// Check if error indicates an unsupported validation platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use canonpath::{Error, Platform};
    ///
    /// let err = Error::UnsupportedPlatform { platform: Platform::Posix };
    /// assert!(err.is_unsupported_platform());
    /// ```
    #[must_use]
    pub fn is_unsupported_platform(&self) -> bool {
        matches!(self, Self::UnsupportedPlatform { .. })
    }
}
