//! Core domain model for solviz.
//!
//! The pipeline starts from a solved [`Instance`] (node, edge and color
//! atoms as exported by the constraint solver) and [`extract`]s the
//! renderable view [`Graph`]: nodes carrying the fill of their color class
//! and links between derived node identifiers. Layout and SVG emission live
//! in their own crates on top of this model.

mod error;
mod extract;
mod instance;
mod palette;

pub use error::{CoreError, CoreResult};
pub use extract::{
    color_assignments, extract, ColorAssignment, EdgeView, ExtractOptions, Graph, IdPolicy,
    NodeView,
};
pub use instance::{Atom, ColorAtom, EdgeAtom, Instance};
pub use palette::{Palette, DEFAULT_FILLS};
