//! TreeBuilder - walks the filesystem into an owned `TreeNode` hierarchy

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{MAIN_SEPARATOR_STR, Path};

use tracing::{debug, info, trace};

use crate::error::{Result, TreeError};

use super::config::TreeConfig;
use super::node::{NodeKind, TreeNode};
use super::utils::{child_path, display_name, is_dot_entry, with_trailing_separator};

/// Builds a depth-limited directory tree.
///
/// The walk is depth-first and sequential. Each directory is listed in full
/// and its handle closed before any of its children are expanded, so at
/// most one listing is open at a time. The first filesystem error aborts
/// the whole build.
pub struct TreeBuilder {
    config: TreeConfig,
}

impl TreeBuilder {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn build(&self) -> Result<TreeNode> {
        let root = self.build_root(&self.config.path, self.config.depth)?;
        let (dir_count, file_count) = root.counts();
        info!(
            root = %root.path().display(),
            depth = self.config.depth,
            "built tree: {} directories, {} files",
            dir_count,
            file_count
        );
        Ok(root)
    }

    fn build_root(&self, path: &Path, depth: usize) -> Result<TreeNode> {
        // The root follows symlinks: `tree link-to-dir` lists the target.
        let metadata =
            fs::metadata(path).map_err(|e| TreeError::from_metadata(path.to_path_buf(), e))?;

        let (kind, path) = if metadata.is_dir() {
            (NodeKind::Directory, with_trailing_separator(path))
        } else {
            (NodeKind::File, path.to_path_buf())
        };
        let name = display_name(path.as_os_str());

        let mut root = TreeNode::new(name, path, kind, true, depth);
        if root.is_dir() && depth > 0 {
            expand(&mut root)?;
        }
        Ok(root)
    }
}

/// Build the tree for `path`, expanding `depth` directory levels.
pub fn build_tree(path: impl AsRef<Path>, depth: usize) -> Result<TreeNode> {
    TreeBuilder::new(TreeConfig::new(path.as_ref(), depth)).build()
}

/// List `node` and attach a child for every entry, in listing order.
fn expand(node: &mut TreeNode) -> Result<()> {
    let entry_names = read_entry_names(node.path())?;

    for entry_name in entry_names {
        if is_dot_entry(&entry_name) {
            continue;
        }
        let child = build_child_node(&entry_name, node)?;
        node.push_child(child);
    }
    Ok(())
}

fn build_child_node(entry_name: &OsStr, parent: &TreeNode) -> Result<TreeNode> {
    let path = child_path(parent.path(), entry_name);

    let Some(remaining_depth) = parent.remaining_depth().checked_sub(1) else {
        return Err(TreeError::DepthExhausted { path });
    };

    // Children do not follow symlinks, so a link is never expanded.
    let metadata =
        fs::symlink_metadata(&path).map_err(|e| TreeError::from_metadata(path.clone(), e))?;

    let mut name = display_name(entry_name);
    let mut node = if metadata.is_dir() {
        name.push_str(MAIN_SEPARATOR_STR);
        let path = with_trailing_separator(&path);
        TreeNode::new(name, path, NodeKind::Directory, false, remaining_depth)
    } else {
        TreeNode::new(name, path, NodeKind::File, false, remaining_depth)
    };

    if node.is_dir() {
        if remaining_depth > 0 {
            expand(&mut node)?;
        } else {
            debug!(path = %node.path().display(), "depth cutoff, not expanding");
        }
    }
    Ok(node)
}

/// Read every entry name of a directory, closing the handle before returning.
fn read_entry_names(dir: &Path) -> Result<Vec<OsString>> {
    let entries = fs::read_dir(dir).map_err(|source| TreeError::DirectoryOpen {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(path = %dir.display(), "opened directory");

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TreeError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        trace!(entry = %name.to_string_lossy(), "read");
        names.push(name);
    }
    Ok(names)
}
