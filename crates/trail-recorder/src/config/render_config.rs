use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Trail rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// GeoJSON file rewritten on every render, for external map viewers.
    pub output_path: PathBuf,
}
