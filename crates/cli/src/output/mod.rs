//! Output formatting utilities
//!
//! stdout carries only the per-object progress lines (or their JSON form).
//! Diagnostics, status messages and the copy progress bar go to stderr.

mod formatter;
mod progress;

pub use formatter::Formatter;
pub use progress::{ProgressBar, Reporter};

/// Output configuration derived from CLI flags
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Use JSON output format
    pub json: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Disable progress bar
    pub no_progress: bool,
    /// Suppress non-error output
    pub quiet: bool,
}
