//! Error types for SVG emission.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while emitting or writing an SVG document.
#[derive(Error, Debug)]
pub enum SvgError {
    /// Formatting into the document buffer failed.
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Writing the document to disk failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
