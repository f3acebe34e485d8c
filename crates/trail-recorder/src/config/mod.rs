#[allow(clippy::module_inception)]
mod config;
mod render_config;
mod sampling_config;
mod simulation_config;
mod storage_config;

pub(crate) use {
    config::Config, render_config::RenderConfig, sampling_config::SamplingConfig,
    simulation_config::SimulationConfig, storage_config::StorageConfig,
};

pub(crate) const DEFAULT_INTERVAL_SECS: u64 = 60;
pub(crate) const DEFAULT_ORIGIN_LONGITUDE: f64 = 139.7671;
pub(crate) const DEFAULT_ORIGIN_LATITUDE: f64 = 35.6812;
pub(crate) const DEFAULT_STEP_DEGREES: f64 = 0.0005;
pub(crate) const DEFAULT_UNAVAILABLE_EVERY: u64 = 0;

pub(crate) fn default_interval_secs() -> u64 {
    DEFAULT_INTERVAL_SECS
}

pub(crate) fn default_origin_longitude() -> f64 {
    DEFAULT_ORIGIN_LONGITUDE
}

pub(crate) fn default_origin_latitude() -> f64 {
    DEFAULT_ORIGIN_LATITUDE
}

pub(crate) fn default_step_degrees() -> f64 {
    DEFAULT_STEP_DEGREES
}

pub(crate) fn default_unavailable_every() -> u64 {
    DEFAULT_UNAVAILABLE_EVERY
}
