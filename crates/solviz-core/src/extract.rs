//! Extraction: from solver atoms to the renderable view graph.
//!
//! The pass resolves color atoms against the palette (positionally, in
//! enumeration order), derives a view identifier for every node atom, looks
//! up each node's fill through color membership, and splits every edge
//! atom's pair string into a source/target link. Structural violations
//! (uncolored nodes, overlapping color classes, exhausted palettes) are
//! reported as typed errors instead of rendering a misleading picture.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::instance::Instance;
use crate::palette::Palette;

/// How view identifiers are derived from atom labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// Use the whole atom label. Collision-free for well-formed instances.
    #[default]
    Full,
    /// Use the label's last character, the convention of solver front-ends
    /// that number their atoms `Node0..Node9`. Collisions are rejected.
    TrailingChar,
}

impl IdPolicy {
    /// Derive a view identifier from an atom label.
    pub fn derive(&self, label: &str) -> String {
        match self {
            IdPolicy::Full => label.to_string(),
            IdPolicy::TrailingChar => label.chars().last().map(String::from).unwrap_or_default(),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(IdPolicy::Full),
            "trailing-char" | "trailing" => Ok(IdPolicy::TrailingChar),
            other => Err(CoreError::UnknownIdPolicy(other.to_string())),
        }
    }
}

/// Options for the extraction pass.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Identifier derivation policy.
    pub id_policy: IdPolicy,
    /// Fill table assigned positionally to color atoms.
    pub palette: Palette,
}

/// A color atom resolved against the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAssignment {
    /// Derived identifier of the color atom. Carried for reporting; nothing
    /// dereferences it.
    pub id: String,
    /// Full labels of the nodes this color covers.
    pub members: HashSet<String>,
    /// Palette fill assigned to this color.
    pub fill: String,
}

/// A node ready to render: derived id plus the fill inherited from its
/// color class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: String,
    pub fill: String,
}

/// A link between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
}

/// The normalized view graph handed to layout and rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<NodeView>,
    pub links: Vec<EdgeView>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Links whose endpoints do not resolve to any node id.
    ///
    /// Extraction does not reject these; the layout pass does. This helper
    /// lets callers report them before attempting a layout.
    pub fn dangling_links(&self) -> Vec<&EdgeView> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.links
            .iter()
            .filter(|link| {
                !ids.contains(link.source.as_str()) || !ids.contains(link.target.as_str())
            })
            .collect()
    }

    /// Convert to a petgraph graph for analysis, along with the id to index
    /// mapping. Links with unresolvable endpoints are skipped.
    pub fn to_petgraph(&self) -> (UnGraph<NodeView, ()>, HashMap<String, NodeIndex>) {
        let mut graph = UnGraph::new_undirected();
        let mut id_to_index = HashMap::new();

        for node in &self.nodes {
            let index = graph.add_node(node.clone());
            id_to_index.insert(node.id.clone(), index);
        }

        for link in &self.links {
            if let (Some(&source), Some(&target)) = (
                id_to_index.get(&link.source),
                id_to_index.get(&link.target),
            ) {
                graph.add_edge(source, target, ());
            }
        }

        (graph, id_to_index)
    }
}

/// Resolve the instance's color atoms against the palette, in enumeration
/// order.
pub fn color_assignments(
    instance: &Instance,
    options: &ExtractOptions,
) -> CoreResult<Vec<ColorAssignment>> {
    if instance.colors.len() > options.palette.len() {
        return Err(CoreError::PaletteExhausted {
            colors: instance.colors.len(),
            palette: options.palette.len(),
        });
    }

    let mut assignments = Vec::with_capacity(instance.colors.len());
    for (color, fill) in instance.colors.iter().zip(options.palette.iter()) {
        let members = split_labels(&color.node_set).map(str::to_string).collect();
        assignments.push(ColorAssignment {
            id: options.id_policy.derive(&color.label),
            members,
            fill: fill.to_string(),
        });
    }

    Ok(assignments)
}

/// Extract the renderable view graph from a solved instance.
pub fn extract(instance: &Instance, options: &ExtractOptions) -> CoreResult<Graph> {
    let assignments = color_assignments(instance, options)?;

    let mut nodes = Vec::with_capacity(instance.nodes.len());
    let mut seen: HashMap<String, &str> = HashMap::new();
    for node in &instance.nodes {
        let id = options.id_policy.derive(&node.label);
        if let Some(first) = seen.insert(id.clone(), node.label.as_str()) {
            return Err(CoreError::DuplicateNodeId {
                id,
                first: first.to_string(),
                second: node.label.clone(),
            });
        }
        let fill = fill_for(&node.label, &assignments)?;
        nodes.push(NodeView { id, fill });
    }

    let mut links = Vec::with_capacity(instance.edges.len());
    for edge in &instance.edges {
        let pair: Vec<&str> = split_labels(&edge.node_pair).collect();
        if pair.len() != 2 {
            return Err(CoreError::MalformedEdgePair {
                edge: edge.label.clone(),
                found: pair.len(),
            });
        }
        links.push(EdgeView {
            source: options.id_policy.derive(pair[0]),
            target: options.id_policy.derive(pair[1]),
        });
    }

    debug!(
        nodes = nodes.len(),
        links = links.len(),
        colors = assignments.len(),
        "extracted view graph"
    );

    Ok(Graph { nodes, links })
}

/// Split a newline-delimited label list, dropping blank entries left by
/// trailing newlines in the solver export.
fn split_labels(set: &str) -> impl Iterator<Item = &str> {
    set.split('\n').filter(|entry| !entry.is_empty())
}

/// The fill of the unique color class containing `label`.
fn fill_for(label: &str, assignments: &[ColorAssignment]) -> CoreResult<String> {
    let mut containing = assignments.iter().filter(|a| a.members.contains(label));
    let first = match containing.next() {
        Some(assignment) => assignment,
        None => {
            return Err(CoreError::NodeWithoutColor {
                node: label.to_string(),
            })
        }
    };
    if let Some(second) = containing.next() {
        return Err(CoreError::ColorConflict {
            node: label.to_string(),
            first: first.id.clone(),
            second: second.id.clone(),
        });
    }
    Ok(first.fill.clone())
}
