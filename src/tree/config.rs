//! Configuration types for the tree builder

use std::path::PathBuf;

/// Path used when none is given on the command line.
pub const DEFAULT_PATH: &str = "./";

/// Number of directory levels expanded when no depth is given.
pub const DEFAULT_DEPTH: usize = 1;

/// Resolved `{path, depth}` pair the builder works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    pub path: PathBuf,
    /// Number of directory levels to expand below the root.
    /// 0 shows the root alone.
    pub depth: usize,
}

impl TreeConfig {
    pub fn new(path: impl Into<PathBuf>, depth: usize) -> Self {
        Self {
            path: path.into(),
            depth,
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            depth: DEFAULT_DEPTH,
        }
    }
}
