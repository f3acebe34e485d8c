use crate::config::{
    default_origin_latitude, default_origin_longitude, default_step_degrees,
    default_unavailable_every,
};

use serde::{Deserialize, Serialize};

/// Simulated position source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Longitude of the first fix.
    #[serde(default = "default_origin_longitude")]
    pub origin_longitude: f64,

    /// Latitude of the first fix.
    #[serde(default = "default_origin_latitude")]
    pub origin_latitude: f64,

    /// Degrees moved per sample, on both axes.
    #[serde(default = "default_step_degrees")]
    pub step_degrees: f64,

    /// Report "unavailable" on every Nth sample (0 = never).
    #[serde(default = "default_unavailable_every")]
    pub unavailable_every: u64,
}
