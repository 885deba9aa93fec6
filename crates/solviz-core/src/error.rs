//! Error types for instance parsing and view-graph extraction.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while parsing an instance or extracting its view
/// graph.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A node atom belongs to no color class.
    #[error("node '{node}' is not covered by any color class")]
    NodeWithoutColor { node: String },

    /// A node atom belongs to more than one color class.
    #[error("node '{node}' is claimed by color classes '{first}' and '{second}'")]
    ColorConflict {
        node: String,
        first: String,
        second: String,
    },

    /// More color atoms than palette entries.
    #[error("instance has {colors} color classes but the palette only has {palette} fills")]
    PaletteExhausted { colors: usize, palette: usize },

    /// An edge atom's pair string did not split into exactly two node labels.
    #[error("edge '{edge}' should name two nodes, found {found}")]
    MalformedEdgePair { edge: String, found: usize },

    /// Two node atoms derived the same view identifier.
    #[error("nodes '{first}' and '{second}' both derive the id '{id}'")]
    DuplicateNodeId {
        id: String,
        first: String,
        second: String,
    },

    /// Unrecognized identifier policy name.
    #[error("unknown id policy '{0}', expected 'full' or 'trailing-char'")]
    UnknownIdPolicy(String),

    /// A palette spec parsed to zero fills.
    #[error("palette must contain at least one fill")]
    EmptyPalette,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
