//! Platform-native path rendering.
//!
//! A canonical path is always forward-slash separated; these functions
//! re-render it using the separator convention of a target platform, e.g. for
//! handing a path string to a Windows API.

use crate::canonicalize::canonicalize;
use crate::platform::Platform;

/// Canonicalizes a path and renders it with the target platform's separator.
///
/// For [`Platform::Windows`] every forward slash in the canonical form is
/// rewritten to a backslash; for [`Platform::Posix`] the canonical form is
/// returned unchanged. The output uses exactly one separator character set
/// per platform, never a mixture.
///
/// # Examples
///
/// ```
/// use canonpath::{native_path, Platform};
///
/// assert_eq!(
///     native_path("/windows/win.ini", Platform::Windows, "c:/"),
///     "c:\\windows\\win.ini",
/// );
/// assert_eq!(
///     native_path("/etc//apache.d/sites-enabled/../sites-available/default", Platform::Posix, "/"),
///     "/etc/apache.d/sites-available/default",
/// );
/// ```
#[must_use]
pub fn native_path(path: &str, platform: Platform, cwd: &str) -> String {
    let canonical = canonicalize(path, cwd);
    match platform {
        Platform::Windows => canonical.replace('/', "\\"),
        Platform::Posix => canonical,
    }
}

/// Renders a Windows-style absolute path regardless of the host platform.
///
/// Windows API calls often require an absolute path using backslashes, e.g.
/// `C:\Program Files (x86)\Microsoft Office`. This forces the Windows
/// rendering even when the helper runs elsewhere.
///
/// # Examples
///
/// ```
/// use canonpath::native_windows_path;
///
/// assert_eq!(native_windows_path("c:/temp//notes.txt", "/"), "c:\\temp\\notes.txt");
/// ```
#[must_use]
pub fn native_windows_path(path: &str, cwd: &str) -> String {
    native_path(path, Platform::Windows, cwd)
}
