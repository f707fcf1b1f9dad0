//! Dirtree - print a depth-limited tree of a directory

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{OutputConfig, TreeFormatter};
pub use tree::{NodeKind, TreeBuilder, TreeConfig, TreeNode, build_tree};
