//! Lexical path canonicalization.
//!
//! Canonicalization here is a pure string transformation: no component of the
//! path needs to exist and the filesystem is never consulted. The canonical
//! form is absolute, forward-slash separated, free of `.`/`..` segments and
//! free of duplicate or trailing separators, which makes canonical paths
//! directly comparable regardless of which host produced the input.

/// A canonical path decomposed into a root prefix and plain segments.
///
/// The root is one of `/`, `//` (UNC share or POSIX implementation-defined
/// double slash) or `X:/` for a drive. Joining the root with the segments
/// yields the rendered canonical string.
struct Parts {
    root: String,
    segments: Vec<String>,
}

impl Parts {
    fn slash() -> Self {
        Self {
            root: String::from("/"),
            segments: Vec::new(),
        }
    }

    fn drive(&self) -> Option<&str> {
        // "X:/" roots carry a drive; "/" and "//" do not.
        if self.root.len() == 3 && self.root.as_bytes()[1] == b':' {
            Some(&self.root[..2])
        } else {
            None
        }
    }

    /// Appends the segments of `rest`, resolving `.` and `..` as it goes.
    ///
    /// Empty segments (duplicate or trailing separators) are dropped and
    /// excess `..` clamps at the root instead of failing.
    fn push_all(&mut self, rest: &str) {
        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    self.segments.pop();
                }
                other => self.segments.push(other.to_string()),
            }
        }
    }

    fn render(self) -> String {
        if self.segments.is_empty() {
            // A bare double-slash root degenerates to the plain root.
            if self.root == "//" {
                String::from("/")
            } else {
                self.root
            }
        } else {
            let mut rendered = self.root;
            rendered.push_str(&self.segments.join("/"));
            rendered
        }
    }
}

/// Splits a leading `X:` drive prefix off a separator-normalized path.
fn split_drive(path: &str) -> Option<(&str, &str)> {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        Some((&path[..2], &path[2..]))
    } else {
        None
    }
}

/// Decomposes a separator-normalized path into parts, or `None` if relative.
fn rooted_parts(path: &str) -> Option<Parts> {
    if let Some((drive, rest)) = split_drive(path) {
        // Both "X:/..." and the drive-relative "X:rest" are rooted at the
        // drive; per-drive working directories are not modeled.
        let mut parts = Parts {
            root: format!("{drive}/"),
            segments: Vec::new(),
        };
        parts.push_all(rest);
        return Some(parts);
    }

    if path.starts_with("//") && !path.starts_with("///") {
        // Exactly two leading slashes name a UNC share (or a POSIX
        // implementation-defined root); three or more collapse to one.
        let mut parts = Parts {
            root: String::from("//"),
            segments: Vec::new(),
        };
        parts.push_all(&path[2..]);
        return Some(parts);
    }

    if let Some(rest) = path.strip_prefix('/') {
        let mut parts = Parts::slash();
        parts.push_all(rest);
        return Some(parts);
    }

    None
}

/// Canonicalizes the working directory itself; a rootless `cwd` is
/// best-effort rooted at `/`.
fn cwd_parts(cwd: &str) -> Parts {
    let cwd = cwd.replace('\\', "/");
    rooted_parts(&cwd).unwrap_or_else(|| {
        let mut parts = Parts::slash();
        parts.push_all(&cwd);
        parts
    })
}

fn canonical_parts(path: &str, cwd: &str) -> Parts {
    let path = path.replace('\\', "/");

    if let Some(mut parts) = rooted_parts(&path) {
        if parts.root == "/" {
            // A single leading slash adopts the working directory's drive,
            // mirroring drive-relative absolute paths on Windows.
            if let Some(drive) = cwd_parts(cwd).drive() {
                parts.root = format!("{drive}/");
            }
        }
        return parts;
    }

    let mut base = cwd_parts(cwd);
    base.push_all(&path);
    base
}

/// Resolves a path to its canonical, comparable string form.
///
/// The result is absolute, forward-slash separated, and free of `.`/`..`
/// segments and duplicate or trailing separators. Relative paths are resolved
/// against `cwd`; backslashes in either argument are treated as separators.
/// This is a total function: it never fails and never touches the filesystem,
/// so nonexistent paths canonicalize just as well as real ones.
///
/// Canonicalization is idempotent: canonicalizing a canonical path yields the
/// same string.
///
/// # Examples
///
/// ```
/// use canonpath::canonicalize;
///
/// assert_eq!(
///     canonicalize("/etc//apache.d/sites-enabled/../sites-available/default", "/"),
///     "/etc/apache.d/sites-available/default",
/// );
///
/// // Relative paths resolve against the working directory.
/// assert_eq!(canonicalize("notes.txt", "/home/fred"), "/home/fred/notes.txt");
///
/// // A leading slash adopts the working directory's drive.
/// assert_eq!(canonicalize("/windows/win.ini", "c:/"), "c:/windows/win.ini");
/// ```
#[must_use]
pub fn canonicalize(path: &str, cwd: &str) -> String {
    canonical_parts(path, cwd).render()
}

/// Compares two paths for equality after canonicalization.
///
/// The comparison is byte-exact: paths that differ only in case are unequal
/// even though Windows filesystems are typically case-insensitive.
///
/// # Examples
///
/// ```
/// use canonpath::paths_equal;
///
/// assert!(paths_equal("bandit", "../bandit/bandit", "c:/bandit"));
/// assert!(!paths_equal("/Bo/Bandit", "/bo/bandit", "/"));
/// ```
#[must_use]
pub fn paths_equal(path1: &str, path2: &str, cwd: &str) -> bool {
    canonicalize(path1, cwd) == canonicalize(path2, cwd)
}
