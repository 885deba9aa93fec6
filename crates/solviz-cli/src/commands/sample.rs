//! Sample command implementation.
//!
//! Emits the built-in demo instance (a 5-cycle with a 3-coloring) so users
//! can see the input format and try the pipeline without a solver.

use std::path::PathBuf;

use anyhow::{Context, Result};

use solviz_core::Instance;

/// Execute the sample command.
pub fn execute(output: Option<PathBuf>) -> Result<()> {
    let json = Instance::sample().to_json()?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("💾 Sample instance written to: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
