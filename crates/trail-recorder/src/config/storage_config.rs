use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Durable trail storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the key/value store file holding the trail.
    pub path: PathBuf,
}
