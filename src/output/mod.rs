//! Tree rendering
//!
//! Turns a built `TreeNode` into indented text. The root line is the
//! normalized root path; every other node is `"|- " + name`, indented two
//! spaces per level below the root.

mod config;
mod tree;

pub use config::OutputConfig;
pub use tree::TreeFormatter;
