//! Path helpers shared by the builder

use std::ffi::{OsStr, OsString};
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf, is_separator};

/// Check whether a path already ends in a separator.
pub fn has_trailing_separator(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| b.is_ascii() && is_separator(b as char))
}

/// Append a separator unless one is already present.
pub fn with_trailing_separator(path: &Path) -> PathBuf {
    if has_trailing_separator(path) {
        return path.to_path_buf();
    }
    let mut s = path.as_os_str().to_os_string();
    s.push(MAIN_SEPARATOR_STR);
    PathBuf::from(s)
}

/// Join by plain concatenation; the parent path is expected to end in a separator.
pub fn child_path(parent: &Path, entry_name: &OsStr) -> PathBuf {
    let mut s: OsString = parent.as_os_str().to_os_string();
    s.push(entry_name);
    PathBuf::from(s)
}

/// Listing pseudo-entries that never become nodes.
pub fn is_dot_entry(entry_name: &OsStr) -> bool {
    entry_name == "." || entry_name == ".."
}

/// Display form of a path or entry name.
pub fn display_name(name: &OsStr) -> String {
    name.to_string_lossy().into_owned()
}
