//! In-memory representation of a walked directory tree

use std::path::{Path, PathBuf};

/// Classification of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    /// Regular files, and anything else that is never expanded (symlinks,
    /// sockets, devices).
    File,
}

/// One filesystem entry and the entries below it that were expanded.
///
/// Directory nodes carry a trailing separator on both `name` and `path`.
/// The root's `name` is the normalized path it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) kind: NodeKind,
    pub(crate) is_root: bool,
    pub(crate) remaining_depth: usize,
    pub(crate) children: Vec<TreeNode>,
}

impl TreeNode {
    pub(crate) fn new(
        name: String,
        path: PathBuf,
        kind: NodeKind,
        is_root: bool,
        remaining_depth: usize,
    ) -> Self {
        Self {
            name,
            path,
            kind,
            is_root,
            remaining_depth,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Levels that could still be expanded below this node.
    pub fn remaining_depth(&self) -> usize {
        self.remaining_depth
    }

    /// Children in directory-listing order.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Count directories and files below this node, not counting the node itself.
    pub fn counts(&self) -> (usize, usize) {
        let mut dir_count = 0;
        let mut file_count = 0;

        for child in &self.children {
            let (d, f) = child.counts();
            dir_count += d;
            file_count += f;
            if child.is_dir() {
                dir_count += 1;
            } else {
                file_count += 1;
            }
        }

        (dir_count, file_count)
    }

    pub(crate) fn push_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }
}
