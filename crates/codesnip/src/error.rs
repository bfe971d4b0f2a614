//! CLI and pipeline errors.

use std::path::PathBuf;

use snip_render::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnipError {
    /// Bad command line. The message is shown above the usage text.
    #[error("{0}")]
    Usage(String),

    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is empty", path.display())]
    EmptyFile { path: PathBuf },

    #[error("invalid range '{text}': expected two line numbers like 10-20")]
    MalformedRange { text: String },

    #[error("range must be between 1 and {num_lines}")]
    RangeOutOfBounds { num_lines: usize },

    #[error("range {start}-{end} ends before it starts")]
    ReversedRange { start: usize, end: usize },

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl SnipError {
    /// Whether the usage text should follow the message.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
