//! Inspect command implementation.
//!
//! Summarizes an instance without rendering: atom counts, connectivity,
//! color classes, and any links that point at unknown node ids.

use std::path::Path;

use anyhow::Result;
use petgraph::algo::connected_components;

use solviz_core::{color_assignments, extract, ExtractOptions, IdPolicy};

/// Execute the inspect command.
pub fn execute(instance_path: &Path, id_policy: IdPolicy) -> Result<()> {
    let instance = super::load_instance(instance_path)?;
    let options = ExtractOptions {
        id_policy,
        ..ExtractOptions::default()
    };

    let assignments = color_assignments(&instance, &options)?;
    let graph = extract(&instance, &options)?;
    let (analysis, _) = graph.to_petgraph();

    println!("📊 Instance summary");
    println!(
        "   Atoms:      {} nodes, {} edges, {} colors",
        instance.node_count(),
        instance.edge_count(),
        instance.color_count()
    );
    println!("   Components: {}", connected_components(&analysis));
    println!();
    println!("🎨 Color classes:");
    for assignment in &assignments {
        println!(
            "   {} → {} ({} members)",
            assignment.id,
            assignment.fill,
            assignment.members.len()
        );
    }

    let dangling = graph.dangling_links();
    if !dangling.is_empty() {
        println!();
        println!("⚠️  {} link(s) reference unknown node ids:", dangling.len());
        for link in dangling {
            println!("   {} → {}", link.source, link.target);
        }
    }

    Ok(())
}
