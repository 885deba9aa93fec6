//! CLI command implementations.

pub mod inspect;
pub mod render;
pub mod sample;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use solviz_core::Instance;

/// Load an instance from a JSON file, or from stdin when the path is `-`.
pub(crate) fn load_instance(path: &Path) -> Result<Instance> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read instance from stdin")?;
        Instance::from_json(&buffer).context("failed to parse instance from stdin")
    } else {
        Instance::from_path(path)
            .with_context(|| format!("failed to load instance from {}", path.display()))
    }
}
