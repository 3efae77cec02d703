//! Printability checks and advisory path validation.
//!
//! A path that reached us with control characters in it usually means a
//! double-quoted string in the host tool's configuration swallowed a
//! backslash as an escape sequence (`"C:\temp"` turns into `C:<TAB>emp`).
//! Validation flags such paths through the injected [`WarningSink`]; it never
//! fails, because a path with unusual characters may still be valid.

use crate::error::{Error, Result};
use crate::logging::WarningSink;
use crate::platform::Platform;

/// Returns `true` if the string is free of non-printable characters.
///
/// Any control character (newline, tab, escape, NUL, the C1 range, ...) makes
/// a string non-printable; every other Unicode character counts as printable.
/// The empty string is printable.
///
/// # Examples
///
/// ```
/// use canonpath::is_printable;
///
/// assert!(is_printable("C:\\Program Files (x86)\\Microsoft Office\\Files.lst"));
/// assert!(is_printable(""));
/// assert!(!is_printable("\tline\n"));
/// ```
#[must_use]
pub fn is_printable(s: &str) -> bool {
    !s.chars().any(char::is_control)
}

/// Validates a path against the escaping rules of the given platform.
///
/// Validation rules only exist for Windows-style paths; for
/// [`Platform::Windows`] this delegates to [`validate_windows_path`] and
/// always succeeds. Findings are advisory and reported through `warnings`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPlatform`] for any non-Windows platform:
/// callers must not rely on this operation silencing known-safe cases there.
///
/// # Examples
///
/// ```
/// use canonpath::{validate_path, LogSink, Platform};
///
/// assert!(validate_path("C:\\ok", Platform::Windows, &LogSink).is_ok());
/// assert!(validate_path("/etc/hosts", Platform::Posix, &LogSink).is_err());
/// ```
pub fn validate_path(path: &str, platform: Platform, warnings: &dyn WarningSink) -> Result<()> {
    if platform.is_windows() {
        validate_windows_path(path, warnings);
        Ok(())
    } else {
        Err(Error::UnsupportedPlatform { platform })
    }
}

/// Validates a Windows-style path, warning on non-printable characters.
///
/// Emits exactly one warning through `warnings` when the path contains
/// non-printable characters, advising that backslashes be escaped in
/// double-quoted strings; succeeds silently otherwise. Never fails.
///
/// # Examples
///
/// ```
/// use canonpath::{validate_windows_path, LogSink};
///
/// validate_windows_path("C:\\Program Files\\app.exe", &LogSink);
/// ```
pub fn validate_windows_path(path: &str, warnings: &dyn WarningSink) {
    if !is_printable(path) {
        warnings.warn(&format!(
            "Path '{path}' contains non-printable characters. Check that backslashes are escaped (C:\\Windows) in double-quoted strings."
        ));
    }
}
