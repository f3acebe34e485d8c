use crate::config::default_interval_secs;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sampling schedule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Seconds between two position samples.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl SamplingConfig {
    /// Sampling period as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
