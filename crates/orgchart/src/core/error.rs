//! Core error types for org chart processing
//!
//! Every failure the pipeline can report to a user maps onto one of these
//! variants. Library entry points return `anyhow::Result` carrying them, so
//! callers can `downcast_ref::<OrgChartError>()` when they need the kind.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, parsing or rendering an org outline
#[derive(Error, Debug)]
pub enum OrgChartError {
    #[error("file not found: {} (create a text file with one person per line, indented under their manager)", path.display())]
    FileNotFound { path: PathBuf },

    #[error("malformed hierarchy at line {line}: {message}")]
    MalformedHierarchy { line: usize, message: String },

    #[error("unknown output format '{format}' (expected one of: tree, visio, mermaid, svg)")]
    UnknownFormat { format: String },

    #[error("layout error: {message}")]
    Layout { message: String },

    #[error("render error: {message}")]
    Render { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl OrgChartError {
    /// Create a new file-not-found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new malformed hierarchy error
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedHierarchy {
            line,
            message: message.into(),
        }
    }

    /// Create a new unknown format error
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::UnknownFormat {
            format: format.into(),
        }
    }

    /// Create a new layout error
    pub fn layout_error(message: impl Into<String>) -> Self {
        Self::Layout {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render_error(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}
