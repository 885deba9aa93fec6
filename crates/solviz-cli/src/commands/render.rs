//! Render command implementation.
//!
//! The full pipeline: load the instance, extract the colored view graph,
//! run the force simulation, write the SVG document.
//!
//! Examples:
//! ```bash
//! solviz render solution.json                    # writes graph.svg
//! solviz render solution.json -o out.svg
//! solviz sample | solviz render -                # read from stdin
//! solviz render solution.json --id-policy trailing-char
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use solviz_core::{extract, ExtractOptions, IdPolicy, Palette};
use solviz_layout::LayoutOptions;
use solviz_svg::RenderOptions;

/// Inputs for the render command, assembled from parsed CLI arguments.
#[derive(Debug)]
pub struct RenderRequest {
    pub instance: PathBuf,
    pub output: PathBuf,
    pub width: f32,
    pub height: f32,
    pub ticks: u32,
    pub id_policy: IdPolicy,
    pub palette: Palette,
    pub background: Option<String>,
    pub dump_graph: Option<PathBuf>,
}

/// Execute the render command.
pub fn execute(request: RenderRequest) -> Result<()> {
    let instance = super::load_instance(&request.instance)?;

    let extract_options = ExtractOptions {
        id_policy: request.id_policy,
        palette: request.palette,
    };
    let graph = extract(&instance, &extract_options).with_context(|| {
        format!(
            "failed to extract a view graph from {}",
            request.instance.display()
        )
    })?;

    info!(
        nodes = graph.node_count(),
        links = graph.link_count(),
        "extracted view graph"
    );

    if let Some(dump_path) = &request.dump_graph {
        let json = serde_json::to_string_pretty(&graph)?;
        std::fs::write(dump_path, json)
            .with_context(|| format!("failed to write {}", dump_path.display()))?;
        println!("💾 View graph dumped to: {}", dump_path.display());
    }

    let layout_options = LayoutOptions {
        width: request.width,
        height: request.height,
        ticks: request.ticks,
        ..LayoutOptions::default()
    };
    let positioned = solviz_layout::layout(&graph, &layout_options)?;

    let render_options = RenderOptions {
        background: request.background,
        ..RenderOptions::default()
    };
    solviz_svg::write_file(&request.output, &positioned, &render_options)?;

    println!(
        "✅ Rendered {} nodes and {} links to {}",
        positioned.nodes.len(),
        positioned.links.len(),
        request.output.display()
    );

    Ok(())
}
