//! SVG document emission for positioned solviz graphs.
//!
//! The output is a plain SVG string (or file) with one line per link and
//! one circle per node. No rasterization happens here; the document is
//! meant to be opened directly in a browser or embedded elsewhere.

mod document;
mod error;

pub use document::{render, write_file, RenderOptions};
pub use error::SvgError;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, SvgError>;
