//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Style directory names when printing to a terminal.
    /// Never affects the text produced.
    pub use_color: bool,
}
