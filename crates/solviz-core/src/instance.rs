//! The solver-facing half of the data model: atoms and solved instances.
//!
//! An atom is opaque except for its string form. Edge atoms additionally
//! carry their endpoint pair and color atoms their membership set, both as
//! newline-delimited strings, which is the surface the solver export
//! provides.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// A plain solver atom, known only by its string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    /// The atom's string form, e.g. `"Node0"`.
    pub label: String,
}

impl Atom {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// An edge atom: a label plus its two endpoints as a newline-delimited pair
/// string, e.g. `"Node0\nNode1"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeAtom {
    pub label: String,
    /// Newline-delimited pair of node labels.
    pub node_pair: String,
}

/// A color atom: a label plus the nodes it covers as a newline-delimited
/// set string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAtom {
    pub label: String,
    /// Newline-delimited labels of the member nodes.
    pub node_set: String,
}

/// A solved instance as exported by the solver: the three atom collections.
///
/// Collection order is meaningful. Color atoms are matched to palette fills
/// positionally, so the first color atom always gets the first fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub nodes: Vec<Atom>,
    pub edges: Vec<EdgeAtom>,
    pub colors: Vec<ColorAtom>,
}

impl Instance {
    /// Parse an instance from its JSON export.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read an instance from a JSON file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize the instance to pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// The built-in demo model: a 5-cycle with a valid 3-coloring.
    pub fn sample() -> Self {
        let nodes = (0..5).map(|i| Atom::new(format!("Node{}", i))).collect();
        let edges = (0..5)
            .map(|i| EdgeAtom {
                label: format!("Edge{}", i),
                node_pair: format!("Node{}\nNode{}", i, (i + 1) % 5),
            })
            .collect();
        let colors = vec![
            ColorAtom {
                label: "Color0".to_string(),
                node_set: "Node0\nNode2".to_string(),
            },
            ColorAtom {
                label: "Color1".to_string(),
                node_set: "Node1\nNode3".to_string(),
            },
            ColorAtom {
                label: "Color2".to_string(),
                node_set: "Node4".to_string(),
            },
        ];
        Self {
            nodes,
            edges,
            colors,
        }
    }
}
