//! Error types for layout operations.

use thiserror::Error;

/// Errors that can occur while laying out a view graph.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A link endpoint matched no node id.
    #[error("link {ordinal} references unknown node id '{id}'")]
    UnknownEndpoint { ordinal: usize, id: String },

    /// The simulation produced a non-finite coordinate.
    #[error("node '{id}' settled at a non-finite position")]
    NonFinitePosition { id: String },
}
