//! Directory tree construction
//!
//! `TreeBuilder` walks the filesystem depth-first from a root path and
//! produces an owned `TreeNode` hierarchy, expanding at most
//! `TreeConfig::depth` directory levels. Directories at the cutoff are
//! kept as leaves.

mod builder;
mod config;
mod node;
mod utils;

pub use builder::{TreeBuilder, build_tree};
pub use config::{DEFAULT_DEPTH, DEFAULT_PATH, TreeConfig};
pub use node::{NodeKind, TreeNode};
