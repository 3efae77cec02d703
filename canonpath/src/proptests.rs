//! Property-based tests across the crate's public surface.
//!
//! Note: The canonicalize module already has inline property tests for
//! canonicalization itself. This module exercises the cross-operation
//! contracts: native rendering, validation dispatch and printability.

use proptest::prelude::*;

use crate::canonicalize::{canonicalize, paths_equal};
use crate::logging::WarningSink;
use crate::native::{native_path, native_windows_path};
use crate::platform::Platform;
use crate::validate::{is_printable, validate_path};

/// A sink that drops every warning; dispatch properties only care about the
/// returned result.
struct NullSink;

impl WarningSink for NullSink {
    fn warn(&self, _message: &str) {}
}

// Strategy for generating path-like strings with mixed separators
fn path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("/"), Just("c:/"), Just("C:\\"), Just("//")],
        prop::collection::vec(
            prop_oneof![
                Just(String::from(".")),
                Just(String::from("..")),
                "[a-zA-Z0-9 _.-]{1,12}",
            ],
            0..8,
        ),
        prop_oneof![Just("/"), Just("\\")],
    )
        .prop_map(|(root, segments, sep)| format!("{root}{}", segments.join(sep)))
}

fn cwd_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("c:"), Just("D:")],
        prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 0..5),
    )
        .prop_map(|(drive, parts)| format!("{drive}/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Canonicalization is idempotent across drive and UNC roots as well
    #[test]
    fn canonicalize_idempotent(path in path_strategy(), cwd in cwd_strategy()) {
        let once = canonicalize(&path, &cwd);
        prop_assert_eq!(canonicalize(&once, &cwd), once);
    }

    // Windows rendering contains no forward slashes
    #[test]
    fn native_windows_no_forward_slash(path in path_strategy(), cwd in cwd_strategy()) {
        let rendered = native_path(&path, Platform::Windows, &cwd);
        prop_assert!(!rendered.contains('/'));
    }

    // Posix rendering contains no backslashes
    #[test]
    fn native_posix_no_backslash(path in path_strategy(), cwd in cwd_strategy()) {
        let rendered = native_path(&path, Platform::Posix, &cwd);
        prop_assert!(!rendered.contains('\\'));
    }

    // The forced-Windows rendering matches native_path with Windows
    #[test]
    fn native_windows_path_matches_dispatch(path in path_strategy(), cwd in cwd_strategy()) {
        prop_assert_eq!(
            native_windows_path(&path, &cwd),
            native_path(&path, Platform::Windows, &cwd)
        );
    }

    // Both renderings agree modulo separator choice
    #[test]
    fn native_renderings_agree(path in path_strategy(), cwd in cwd_strategy()) {
        let posix = native_path(&path, Platform::Posix, &cwd);
        let windows = native_path(&path, Platform::Windows, &cwd);
        prop_assert_eq!(posix.replace('/', "\\"), windows);
    }

    // paths_equal is exactly canonical-form equality
    #[test]
    fn paths_equal_matches_canonical(
        path1 in path_strategy(),
        path2 in path_strategy(),
        cwd in cwd_strategy(),
    ) {
        let expected = canonicalize(&path1, &cwd) == canonicalize(&path2, &cwd);
        prop_assert_eq!(paths_equal(&path1, &path2, &cwd), expected);
    }

    // paths_equal is reflexive for any input string
    #[test]
    fn paths_equal_reflexive(path in any::<String>(), cwd in cwd_strategy()) {
        prop_assert!(paths_equal(&path, &path, &cwd));
    }

    // Windows validation never fails, for any string whatsoever
    #[test]
    fn validate_windows_never_fails(path in any::<String>()) {
        prop_assert!(validate_path(&path, Platform::Windows, &NullSink).is_ok());
    }

    // Posix validation always fails, regardless of the path
    #[test]
    fn validate_posix_always_fails(path in any::<String>()) {
        let err = validate_path(&path, Platform::Posix, &NullSink).unwrap_err();
        prop_assert!(err.is_unsupported_platform());
    }

    // Printability is decided solely by the presence of control characters
    #[test]
    fn printable_iff_no_control_chars(s in any::<String>()) {
        let has_control = s.chars().any(char::is_control);
        prop_assert_eq!(is_printable(&s), !has_control);
    }
}
