//! The force simulation adapter.
//!
//! Physics integration is delegated to the `force_graph` crate. This module
//! seeds nodes deterministically on a circle, registers one spring per
//! link, runs a fixed number of ticks, and recenters the whole layout on
//! the canvas midpoint after every tick so disconnected components cannot
//! drift off screen.

use std::collections::HashMap;
use std::f32::consts::TAU;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use tracing::debug;

use solviz_core::Graph;

use crate::{LayoutError, Result};

/// Tuning for the simulation. The defaults follow the classic d3-force
/// setup: an 800x600 canvas, 300 ticks, and a repulsion budget of 12000
/// shared evenly across the nodes.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Canvas width in pixels; the centering target is `width / 2`.
    pub width: f32,
    /// Canvas height in pixels; the centering target is `height / 2`.
    pub height: f32,
    /// Simulation ticks to run before reading positions back.
    pub ticks: u32,
    /// Integration time step per tick.
    pub dt: f32,
    /// Total many-body repulsion; each node repels with
    /// `charge_budget / node_count`.
    pub charge_budget: f32,
    /// Spring stiffness of the link force.
    pub spring: f32,
    /// Clamp on the combined force magnitude per node.
    pub force_max: f32,
    /// Node movement speed factor.
    pub node_speed: f32,
    /// Velocity damping applied each tick.
    pub damping: f32,
    /// Mass given to every node.
    pub node_mass: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            ticks: 300,
            dt: 0.016,
            charge_budget: 12_000.0,
            spring: 0.05,
            force_max: 100.0,
            node_speed: 3000.0,
            damping: 0.9,
            node_mass: 10.0,
        }
    }
}

/// A node with its settled position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    pub id: String,
    pub fill: String,
    pub x: f32,
    pub y: f32,
}

/// A link with both endpoint positions resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLink {
    pub source: String,
    pub target: String,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// The settled layout handed to the renderer. Node and link order matches
/// the input graph.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedGraph {
    pub nodes: Vec<PositionedNode>,
    pub links: Vec<PositionedLink>,
    pub width: f32,
    pub height: f32,
}

/// Run the force simulation over a view graph and return settled positions.
///
/// Nodes are seeded evenly on a circle around the canvas midpoint, so runs
/// over the same graph are reproducible. Links whose endpoints match no
/// node id are rejected up front rather than silently dropped, including
/// when there are no nodes at all; self-loops stay in the output but get
/// no spring.
pub fn layout(graph: &Graph, options: &LayoutOptions) -> Result<PositionedGraph> {
    let node_count = graph.nodes.len();
    let center_x = options.width / 2.0;
    let center_y = options.height / 2.0;

    if node_count == 0 {
        // No node resolves anything, so any link is a dangling endpoint.
        if let Some(link) = graph.links.first() {
            return Err(LayoutError::UnknownEndpoint {
                ordinal: 0,
                id: link.source.clone(),
            });
        }
        debug!("empty graph, skipping simulation");
        return Ok(PositionedGraph {
            nodes: Vec::new(),
            links: Vec::new(),
            width: options.width,
            height: options.height,
        });
    }

    let mut sim = ForceGraph::<usize, ()>::new(SimulationParameters {
        force_charge: options.charge_budget / node_count as f32,
        force_spring: options.spring,
        force_max: options.force_max,
        node_speed: options.node_speed,
        damping_factor: options.damping,
    });

    let seed_radius = options.width.min(options.height) / 4.0;
    let mut by_id: HashMap<&str, (DefaultNodeIdx, usize)> = HashMap::with_capacity(node_count);
    for (ordinal, node) in graph.nodes.iter().enumerate() {
        let angle = ordinal as f32 * TAU / node_count as f32;
        let index = sim.add_node(NodeData {
            x: center_x + seed_radius * angle.cos(),
            y: center_y + seed_radius * angle.sin(),
            mass: options.node_mass,
            is_anchor: false,
            user_data: ordinal,
        });
        by_id.insert(node.id.as_str(), (index, ordinal));
    }

    let mut springs = Vec::with_capacity(graph.links.len());
    for (ordinal, link) in graph.links.iter().enumerate() {
        let (source_index, source) = resolve(&by_id, &link.source, ordinal)?;
        let (target_index, target) = resolve(&by_id, &link.target, ordinal)?;
        // The engine asserts distinct endpoints per spring; a self-loop is
        // rendered but not simulated.
        if source != target {
            sim.add_edge(source_index, target_index, EdgeData::default());
        }
        springs.push((source, target));
    }

    for _ in 0..options.ticks {
        sim.update(options.dt);
        recenter(&mut sim, node_count, center_x, center_y);
    }

    let mut positions = vec![(0.0_f32, 0.0_f32); node_count];
    sim.visit_nodes(|node| {
        positions[node.data.user_data] = (node.x(), node.y());
    });

    let mut nodes = Vec::with_capacity(node_count);
    for (node, &(x, y)) in graph.nodes.iter().zip(&positions) {
        if !x.is_finite() || !y.is_finite() {
            return Err(LayoutError::NonFinitePosition {
                id: node.id.clone(),
            });
        }
        nodes.push(PositionedNode {
            id: node.id.clone(),
            fill: node.fill.clone(),
            x,
            y,
        });
    }

    let links = graph
        .links
        .iter()
        .zip(&springs)
        .map(|(link, &(source, target))| {
            let (x1, y1) = positions[source];
            let (x2, y2) = positions[target];
            PositionedLink {
                source: link.source.clone(),
                target: link.target.clone(),
                x1,
                y1,
                x2,
                y2,
            }
        })
        .collect();

    debug!(
        nodes = node_count,
        links = graph.links.len(),
        ticks = options.ticks,
        "layout settled"
    );

    Ok(PositionedGraph {
        nodes,
        links,
        width: options.width,
        height: options.height,
    })
}

fn resolve(
    by_id: &HashMap<&str, (DefaultNodeIdx, usize)>,
    id: &str,
    ordinal: usize,
) -> Result<(DefaultNodeIdx, usize)> {
    by_id
        .get(id)
        .copied()
        .ok_or_else(|| LayoutError::UnknownEndpoint {
            ordinal,
            id: id.to_string(),
        })
}

/// Translate every node so the layout centroid sits on `(cx, cy)`.
/// Same contract as d3's forceCenter: a translation after integration,
/// not a force.
fn recenter(sim: &mut ForceGraph<usize, ()>, node_count: usize, cx: f32, cy: f32) {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    sim.visit_nodes(|node| {
        sum_x += node.x();
        sum_y += node.y();
    });
    let dx = cx - sum_x / node_count as f32;
    let dy = cy - sum_y / node_count as f32;
    sim.visit_nodes_mut(|node| {
        node.data.x += dx;
        node.data.y += dy;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use solviz_core::{extract, EdgeView, ExtractOptions, Instance, NodeView};

    fn sample_graph() -> Graph {
        extract(&Instance::sample(), &ExtractOptions::default()).unwrap()
    }

    #[test]
    fn test_layout_options_defaults() {
        let options = LayoutOptions::default();
        assert_eq!(options.width, 800.0);
        assert_eq!(options.height, 600.0);
        assert_eq!(options.ticks, 300);
        assert_eq!(options.charge_budget, 12_000.0);
    }

    #[test]
    fn test_empty_graph_is_ok() {
        let positioned = layout(&Graph::default(), &LayoutOptions::default()).unwrap();
        assert!(positioned.nodes.is_empty());
        assert!(positioned.links.is_empty());
        assert_eq!(positioned.width, 800.0);
        assert_eq!(positioned.height, 600.0);
    }

    #[test]
    fn test_links_without_nodes_rejected() {
        let graph = Graph {
            nodes: vec![],
            links: vec![EdgeView {
                source: "a".to_string(),
                target: "b".to_string(),
            }],
        };
        let err = layout(&graph, &LayoutOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::UnknownEndpoint { ordinal: 0, id } if id == "a"
        ));
    }

    #[test]
    fn test_single_node_sits_on_the_midpoint() {
        let graph = Graph {
            nodes: vec![NodeView {
                id: "only".to_string(),
                fill: "#FF0000".to_string(),
            }],
            links: vec![],
        };
        let positioned = layout(&graph, &LayoutOptions::default()).unwrap();
        assert!((positioned.nodes[0].x - 400.0).abs() < 1e-3);
        assert!((positioned.nodes[0].y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_sample_layout_is_centered_and_finite() {
        let positioned = layout(&sample_graph(), &LayoutOptions::default()).unwrap();
        assert_eq!(positioned.nodes.len(), 5);
        assert_eq!(positioned.links.len(), 5);

        let n = positioned.nodes.len() as f32;
        let cx: f32 = positioned.nodes.iter().map(|node| node.x).sum::<f32>() / n;
        let cy: f32 = positioned.nodes.iter().map(|node| node.y).sum::<f32>() / n;
        assert!((cx - 400.0).abs() < 0.5, "centroid x drifted to {}", cx);
        assert!((cy - 300.0).abs() < 0.5, "centroid y drifted to {}", cy);

        for node in &positioned.nodes {
            assert!(node.x.is_finite() && node.y.is_finite());
        }
    }

    #[test]
    fn test_nodes_spread_apart() {
        let positioned = layout(&sample_graph(), &LayoutOptions::default()).unwrap();
        let a = &positioned.nodes[0];
        let b = &positioned.nodes[1];
        let distance = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
        assert!(distance > 1.0, "nodes collapsed to distance {}", distance);
    }

    #[test]
    fn test_link_endpoints_match_node_positions() {
        let positioned = layout(&sample_graph(), &LayoutOptions::default()).unwrap();
        for link in &positioned.links {
            let source = positioned
                .nodes
                .iter()
                .find(|node| node.id == link.source)
                .unwrap();
            let target = positioned
                .nodes
                .iter()
                .find(|node| node.id == link.target)
                .unwrap();
            assert_eq!(link.x1, source.x);
            assert_eq!(link.y1, source.y);
            assert_eq!(link.x2, target.x);
            assert_eq!(link.y2, target.y);
        }
    }

    #[test]
    fn test_order_matches_input() {
        let graph = sample_graph();
        let positioned = layout(&graph, &LayoutOptions::default()).unwrap();
        for (input, output) in graph.nodes.iter().zip(&positioned.nodes) {
            assert_eq!(input.id, output.id);
            assert_eq!(input.fill, output.fill);
        }
    }

    #[test]
    fn test_self_loop_renders_without_a_spring() {
        let graph = Graph {
            nodes: vec![
                NodeView {
                    id: "a".to_string(),
                    fill: "#FF0000".to_string(),
                },
                NodeView {
                    id: "b".to_string(),
                    fill: "#FFFF00".to_string(),
                },
            ],
            links: vec![
                EdgeView {
                    source: "a".to_string(),
                    target: "a".to_string(),
                },
                EdgeView {
                    source: "a".to_string(),
                    target: "b".to_string(),
                },
            ],
        };
        let positioned = layout(&graph, &LayoutOptions::default()).unwrap();
        assert_eq!(positioned.links.len(), 2, "the self-loop stays in the output");

        let loop_link = &positioned.links[0];
        let a = &positioned.nodes[0];
        assert_eq!(loop_link.x1, a.x);
        assert_eq!(loop_link.y1, a.y);
        assert_eq!(loop_link.x2, a.x);
        assert_eq!(loop_link.y2, a.y);
        for node in &positioned.nodes {
            assert!(node.x.is_finite() && node.y.is_finite());
        }
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let graph = Graph {
            nodes: vec![NodeView {
                id: "a".to_string(),
                fill: "#FF0000".to_string(),
            }],
            links: vec![EdgeView {
                source: "a".to_string(),
                target: "ghost".to_string(),
            }],
        };
        let err = layout(&graph, &LayoutOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::UnknownEndpoint { ordinal: 0, id } if id == "ghost"
        ));
    }
}
