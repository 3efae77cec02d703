#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # canonpath
//!
//! Cross-platform path canonicalization and validation helpers for
//! configuration tooling.
//!
//! Given a path string supplied by a user or generated by the host system,
//! this crate produces a canonical, comparable representation, renders paths
//! with a target platform's native separators, and flags paths containing
//! characters that would be misinterpreted (e.g. unescaped backslashes in a
//! double-quoted string being read as escape sequences). Everything is a pure
//! string transformation: no operation touches the filesystem, and no
//! operation inspects the environment — the caller supplies the working
//! directory and the target [`Platform`] explicitly.
//!
//! ## Core operations
//!
//! - [`canonicalize`] and [`paths_equal`]: canonical form and comparison
//! - [`native_path`] and [`native_windows_path`]: separator rendering
//! - [`is_printable`], [`validate_path`] and [`validate_windows_path`]:
//!   printability classification and advisory validation
//! - [`WarningSink`], [`Logger`] and [`LogSink`]: the warning side channel
//!
//! ## Examples
//!
//! ```
//! use canonpath::{canonicalize, native_path, paths_equal, Platform};
//!
//! let canonical = canonicalize("/etc//apache.d/sites-enabled/../sites-available/default", "/");
//! assert_eq!(canonical, "/etc/apache.d/sites-available/default");
//!
//! let rendered = native_path("/windows/win.ini", Platform::Windows, "c:/");
//! assert_eq!(rendered, "c:\\windows\\win.ini");
//!
//! assert!(paths_equal("bandit", "../bandit/bandit", "c:/bandit"));
//! ```

pub mod canonicalize;
pub mod error;
pub mod logging;
pub mod native;
pub mod platform;
pub mod validate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key items at crate root for convenience
pub use canonicalize::{canonicalize, paths_equal};
pub use error::{Error, Result};
pub use logging::{LogLevel, LogSink, Logger, WarningSink};
pub use native::{native_path, native_windows_path};
pub use platform::Platform;
pub use validate::{is_printable, validate_path, validate_windows_path};
