//! Tree formatter
//!
//! This module provides `TreeFormatter` which renders a complete `TreeNode`
//! hierarchy as text, either into a string or to stdout with colors.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;

const ENTRY_PREFIX: &str = "|- ";
const INDENT: &str = "  ";

/// One output line before it is written.
struct RenderedLine<'a> {
    level: usize,
    text: String,
    node: &'a TreeNode,
}

impl RenderedLine<'_> {
    fn indent(&self) -> String {
        INDENT.repeat(self.level)
    }

    fn prefix(&self) -> &'static str {
        if self.node.is_root() { "" } else { ENTRY_PREFIX }
    }
}

/// Formatter for tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render `node` and everything expanded below it, one entry per line.
    pub fn lines(&self, node: &TreeNode) -> Vec<String> {
        collect_lines(node)
            .iter()
            .map(|line| format!("{}{}{}", line.indent(), line.prefix(), line.text))
            .collect()
    }

    /// Render to a single string with a trailing newline.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        for line in self.lines(node) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        for line in collect_lines(node) {
            write!(stdout, "{}{}", line.indent(), line.prefix())?;
            if line.node.is_dir() {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(stdout, "{}", line.text)?;
            stdout.reset()?;
            writeln!(stdout)?;
        }
        stdout.flush()
    }
}

/// Pre-order walk of the built structure. Never touches the filesystem.
fn collect_lines(root: &TreeNode) -> Vec<RenderedLine<'_>> {
    let mut lines = Vec::new();
    push_node(root, 0, &mut lines);
    lines
}

fn push_node<'a>(node: &'a TreeNode, level: usize, lines: &mut Vec<RenderedLine<'a>>) {
    let text = if node.is_root() {
        node.path().display().to_string()
    } else {
        node.name().to_string()
    };
    lines.push(RenderedLine { level, text, node });

    if node.remaining_depth() > 0 {
        for child in node.children() {
            push_node(child, level + 1, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::MAIN_SEPARATOR_STR;

    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::build_tree;

    fn plain() -> TreeFormatter {
        TreeFormatter::new(OutputConfig { use_color: false })
    }

    fn sep() -> &'static str {
        MAIN_SEPARATOR_STR
    }

    #[test]
    fn test_root_line_is_normalized_path() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "a");

        let root = build_tree(dir.path(), 1).unwrap();
        let lines = plain().lines(&root);
        assert_eq!(lines[0], format!("{}{}", dir.path().display(), sep()));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "  |- a.txt");
    }

    #[test]
    fn test_depth_zero_renders_root_only() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "a");
        dir.add_dir("sub");

        let root = build_tree(dir.path(), 0).unwrap();
        let output = plain().format(&root);
        assert_eq!(output, format!("{}{}\n", dir.path().display(), sep()));
    }

    #[test]
    fn test_nested_indentation() {
        let dir = TestDir::new();
        dir.add_file("sub/inner/deep.txt", "x");

        let root = build_tree(dir.path(), 3).unwrap();
        let lines = plain().lines(&root);
        assert_eq!(
            &lines[1..],
            [
                format!("  |- sub{}", sep()),
                format!("    |- inner{}", sep()),
                "      |- deep.txt".to_string(),
            ]
        );
    }

    #[test]
    fn test_cutoff_directory_renders_as_leaf() {
        let dir = TestDir::new();
        dir.add_file("sub/hidden.txt", "x");

        let root = build_tree(dir.path(), 1).unwrap();
        let output = plain().format(&root);
        assert!(output.contains(&format!("  |- sub{}\n", sep())));
        assert!(!output.contains("hidden.txt"));
    }

    #[test]
    fn test_file_root_renders_path_only() {
        let dir = TestDir::new();
        let file = dir.add_file("plain.txt", "x");

        let root = build_tree(&file, 2).unwrap();
        assert_eq!(plain().lines(&root), [file.display().to_string()]);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let dir = TestDir::new();
        dir.populate(3, 2);

        let first = plain().format(&build_tree(dir.path(), 3).unwrap());
        let second = plain().format(&build_tree(dir.path(), 3).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_indentation_never_exceeds_depth() {
        let dir = TestDir::new();
        dir.populate(2, 4);

        for depth in 0..4 {
            let root = build_tree(dir.path(), depth).unwrap();
            let max_indent = plain()
                .lines(&root)
                .iter()
                .skip(1)
                .map(|l| (l.len() - l.trim_start().len()) / 2)
                .max()
                .unwrap_or(0);
            assert!(max_indent <= depth, "depth {} rendered {} levels", depth, max_indent);
        }
    }

    #[test]
    fn test_color_does_not_change_text() {
        let dir = TestDir::new();
        dir.add_dir("sub");

        let root = build_tree(dir.path(), 1).unwrap();
        let colored = TreeFormatter::new(OutputConfig { use_color: true });
        assert_eq!(colored.format(&root), plain().format(&root));
    }
}
