//! Builds the SVG document for a positioned graph.
//!
//! One `<line>` per link first, then one `<circle>` per node, so nodes
//! always paint on top of their links. Circle centers carry a small fixed
//! offset from the simulated position; line endpoints use the raw
//! positions.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use solviz_layout::PositionedGraph;

use crate::error::SvgError;
use crate::Result;

/// Visual options. Defaults: radius 20 circles offset by (+6, -6), `#aaa`
/// link strokes, no background.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Circle radius in pixels.
    pub node_radius: f32,
    /// Stroke color of link lines.
    pub edge_stroke: String,
    /// Offset applied to circle centers, not to line endpoints.
    pub node_offset: (f32, f32),
    /// Optional background fill; `None` leaves the canvas transparent.
    pub background: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            node_radius: 20.0,
            edge_stroke: "#aaa".to_string(),
            node_offset: (6.0, -6.0),
            background: None,
        }
    }
}

/// Render the positioned graph to an SVG document string.
pub fn render(graph: &PositionedGraph, options: &RenderOptions) -> Result<String> {
    let mut svg = String::new();

    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
        w = graph.width,
        h = graph.height,
    )?;

    if let Some(background) = &options.background {
        writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}" />"#,
            escape_attr(background)
        )?;
    }

    for link in &graph.links {
        writeln!(
            svg,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" />"#,
            link.x1,
            link.y1,
            link.x2,
            link.y2,
            escape_attr(&options.edge_stroke)
        )?;
    }

    let (dx, dy) = options.node_offset;
    for node in &graph.nodes {
        writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.0}" fill="{}" />"#,
            node.x + dx,
            node.y + dy,
            options.node_radius,
            escape_attr(&node.fill)
        )?;
    }

    svg.push_str("</svg>\n");

    debug!(
        bytes = svg.len(),
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        "rendered svg document"
    );

    Ok(svg)
}

/// Render the graph and write the document to `path`, replacing whatever
/// was there before.
pub fn write_file(path: &Path, graph: &PositionedGraph, options: &RenderOptions) -> Result<()> {
    let svg = render(graph, options)?;
    std::fs::write(path, svg).map_err(|source| SvgError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Escape a string for use inside an XML attribute value.
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
