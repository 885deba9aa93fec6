//! Force-directed layout for solviz view graphs.
//!
//! Turns an extracted [`solviz_core::Graph`] into a [`PositionedGraph`]
//! with concrete canvas coordinates. The physics comes from the
//! `force_graph` crate; this crate owns the seeding, the parameter mapping,
//! the per-tick recentering and the position readback.

mod error;
mod simulation;

pub use error::LayoutError;
pub use simulation::{layout, LayoutOptions, PositionedGraph, PositionedLink, PositionedNode};

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
