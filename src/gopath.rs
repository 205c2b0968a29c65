//! GOPATH discovery
//!
//! The goose checkout is expected to live at `<root>/src/gopkg.in/goose.v3`.
//! When the working directory sits inside such a layout, `<root>` is put at
//! the front of `GOPATH` so the toolchain builds the checkout under test
//! rather than some other copy. The result is an explicit [`SearchPath`]
//! value handed to every toolchain invocation; the runner's own
//! environment is left alone.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::common::{Error, Result};

/// Path segment that marks the goose source root
pub const MARKER: &str = "src/gopkg.in/goose.v3";

/// Environment variable consulted by the Go toolchain
pub const GOPATH_VAR: &str = "GOPATH";

/// Separator between GOPATH entries on this platform
#[cfg(windows)]
pub const LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const LIST_SEPARATOR: char = ':';

/// Outcome of merging a root into an existing GOPATH
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GopathUpdate {
    /// The existing value already mentions the root
    Unchanged,
    /// GOPATH should be set to this value
    Set(OsString),
}

/// Convert a Windows working directory to forward slashes
///
/// The marker is written with `/`, so backslash paths never match it.
pub fn normalize_cwd(cwd: &str, windows: bool) -> String {
    if windows {
        cwd.replace('\\', "/")
    } else {
        cwd.to_string()
    }
}

/// Find the GOPATH root for a working directory
///
/// Uses the last occurrence of [`MARKER`] and strips trailing slashes from
/// the prefix before it.
pub fn discover_root(cwd: &str) -> Option<String> {
    let offset = cwd.rfind(MARKER)?;
    Some(cwd[..offset].trim_end_matches('/').to_string())
}

/// Whether `needle` occurs anywhere in `haystack`
fn contains(haystack: &OsStr, needle: &str) -> bool {
    let needle = needle.as_bytes();
    needle.is_empty()
        || haystack
            .as_encoded_bytes()
            .windows(needle.len())
            .any(|window| window == needle)
}

/// Merge `root` into an existing GOPATH value
///
/// An empty existing value counts as unset. Containment is a plain
/// substring check, not a per-entry comparison. Existing entries are kept
/// byte for byte, even when they are not valid UTF-8.
pub fn merge(root: &str, existing: Option<&OsStr>, separator: char) -> GopathUpdate {
    match existing.filter(|value| !value.is_empty()) {
        Some(value) if contains(value, root) => GopathUpdate::Unchanged,
        Some(value) => {
            let mut gopath = OsString::from(format!("{root}{separator}"));
            gopath.push(value);
            GopathUpdate::Set(gopath)
        }
        None => GopathUpdate::Set(OsString::from(root)),
    }
}

/// GOPATH to pass to toolchain subprocesses
///
/// `None` means children inherit the runner's environment unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    gopath: Option<OsString>,
}

impl SearchPath {
    /// Leave the inherited GOPATH untouched
    pub fn inherit() -> Self {
        Self::default()
    }

    /// Work out the GOPATH for a working directory and existing value
    pub fn discover(cwd: &Path, existing: Option<&OsStr>) -> Self {
        let cwd = normalize_cwd(&cwd.to_string_lossy(), cfg!(windows));

        let Some(root) = discover_root(&cwd) else {
            tracing::warn!("Could not find \"{MARKER}\" in cwd: {cwd}");
            tracing::warn!("Unable to automatically set GOPATH");
            return Self::inherit();
        };
        tracing::debug!("Found GOPATH root {root:?}");

        match merge(&root, existing, LIST_SEPARATOR) {
            GopathUpdate::Unchanged => Self::inherit(),
            GopathUpdate::Set(gopath) => {
                tracing::info!("Setting GOPATH to: {}", gopath.to_string_lossy());
                Self {
                    gopath: Some(gopath),
                }
            }
        }
    }

    /// Discover from the process working directory and `GOPATH`
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(Error::CurrentDir)?;
        let existing = std::env::var_os(GOPATH_VAR);
        Ok(Self::discover(&cwd, existing.as_deref()))
    }

    /// GOPATH override for children, if any
    pub fn gopath(&self) -> Option<&OsStr> {
        self.gopath.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_prefix_before_marker() {
        assert_eq!(
            discover_root("/home/dev/go/src/gopkg.in/goose.v3").as_deref(),
            Some("/home/dev/go")
        );
        assert_eq!(
            discover_root("/home/dev/go/src/gopkg.in/goose.v3/nova").as_deref(),
            Some("/home/dev/go")
        );
    }

    #[test]
    fn test_root_uses_last_marker_and_strips_slashes() {
        assert_eq!(
            discover_root("/a/src/gopkg.in/goose.v3/b//src/gopkg.in/goose.v3").as_deref(),
            Some("/a/src/gopkg.in/goose.v3/b")
        );
    }

    #[test]
    fn test_root_missing_marker() {
        assert_eq!(discover_root("/home/dev/projects/goose"), None);
        assert_eq!(discover_root("/home/dev/go/src/gopkg.in/goose.v2"), None);
    }

    #[test]
    fn test_root_at_filesystem_top_is_empty() {
        assert_eq!(discover_root("/src/gopkg.in/goose.v3").as_deref(), Some(""));
    }

    #[test]
    fn test_normalize_windows_backslashes() {
        let cwd = r"C:\Users\dev\go\src\gopkg.in\goose.v3";
        let normalized = normalize_cwd(cwd, true);
        assert_eq!(normalized, "C:/Users/dev/go/src/gopkg.in/goose.v3");
        assert_eq!(discover_root(&normalized).as_deref(), Some("C:/Users/dev/go"));
        assert_eq!(normalize_cwd(cwd, false), cwd);
    }

    #[test]
    fn test_merge_unset_sets_root() {
        assert_eq!(
            merge("/home/dev/go", None, ':'),
            GopathUpdate::Set("/home/dev/go".into())
        );
        assert_eq!(
            merge("/home/dev/go", Some(OsStr::new("")), ':'),
            GopathUpdate::Set("/home/dev/go".into())
        );
    }

    #[test]
    fn test_merge_prepends_root() {
        assert_eq!(
            merge("/home/dev/go", Some(OsStr::new("/opt/gopath")), ':'),
            GopathUpdate::Set("/home/dev/go:/opt/gopath".into())
        );
        assert_eq!(
            merge("C:/go", Some(OsStr::new("D:/other")), ';'),
            GopathUpdate::Set("C:/go;D:/other".into())
        );
    }

    #[test]
    fn test_merge_substring_match_is_unchanged() {
        assert_eq!(
            merge("/home/dev/go", Some(OsStr::new("/opt/x:/home/dev/go")), ':'),
            GopathUpdate::Unchanged
        );
        // Plain substring containment, not per-entry
        assert_eq!(
            merge("/home/dev/go", Some(OsStr::new("/home/dev/gopath")), ':'),
            GopathUpdate::Unchanged
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let GopathUpdate::Set(first) =
            merge("/home/dev/go", Some(OsStr::new("/opt/gopath")), ':')
        else {
            panic!("expected a new GOPATH");
        };
        assert_eq!(merge("/home/dev/go", Some(first.as_os_str()), ':'), GopathUpdate::Unchanged);
    }

    #[test]
    fn test_search_path_without_marker_inherits() {
        let path =
            SearchPath::discover(Path::new("/tmp/elsewhere"), Some(OsStr::new("/opt/gopath")));
        assert_eq!(path, SearchPath::inherit());
        assert_eq!(path.gopath(), None);
    }

    #[test]
    fn test_search_path_with_marker() {
        let cwd = Path::new("/home/dev/go/src/gopkg.in/goose.v3");

        let fresh = SearchPath::discover(cwd, None);
        assert_eq!(fresh.gopath(), Some(OsStr::new("/home/dev/go")));

        let prepended = SearchPath::discover(cwd, Some(OsStr::new("/opt/gopath")));
        let expected = format!("/home/dev/go{LIST_SEPARATOR}/opt/gopath");
        assert_eq!(prepended.gopath(), Some(OsStr::new(&expected)));

        let present = SearchPath::discover(cwd, Some(OsStr::new("/home/dev/go")));
        assert_eq!(present.gopath(), None);
    }

    #[test]
    fn test_merge_empty_root_is_contained() {
        assert_eq!(
            merge("", Some(OsStr::new("/opt/gopath")), ':'),
            GopathUpdate::Unchanged
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_merge_keeps_non_utf8_entries() {
        use std::os::unix::ffi::OsStrExt;

        let existing = OsStr::from_bytes(b"/opt/\xffgo");
        let GopathUpdate::Set(merged) = merge("/home/dev/go", Some(existing), ':') else {
            panic!("expected a new GOPATH");
        };
        assert_eq!(merged.as_bytes(), b"/home/dev/go:/opt/\xffgo");

        let existing = OsStr::from_bytes(b"/home/dev/go:/opt/\xffgo");
        assert_eq!(merge("/home/dev/go", Some(existing), ':'), GopathUpdate::Unchanged);
    }
}
