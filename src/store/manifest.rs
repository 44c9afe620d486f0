use crate::core::types::ComponentId;
use crate::error::{PlugctlError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE: &str = "plugin.json";

/// Per-component `plugin.json`. Only `dependencies` matters to the engine;
/// the rest is bookkeeping surfaced by `plugctl info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub dependencies: Vec<ComponentId>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Load the manifest from one component directory.
pub fn load(dir: &Path) -> Result<Manifest> {
    let path = dir.join(MANIFEST_FILE);
    let raw = fs::read_to_string(&path).map_err(|e| PlugctlError::IoError {
        path: path.clone(),
        source: e,
    })?;
    serde_json::from_str(&raw).map_err(|e| PlugctlError::ManifestError {
        file: path.display().to_string(),
        message: e.to_string(),
    })
}
