//! Configuration management for trail-recorder.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, lazy validation, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{RenderConfig, SamplingConfig, SimulationConfig, StorageConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use crate::config::{
    DEFAULT_INTERVAL_SECS, DEFAULT_ORIGIN_LATITUDE, DEFAULT_ORIGIN_LONGITUDE,
    DEFAULT_STEP_DEGREES, DEFAULT_UNAVAILABLE_EVERY,
};
use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use trail_recorder_core::Position;
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sampling schedule.
    #[serde(default = "default_sampling")]
    pub sampling: SamplingConfig,
    /// Durable trail storage.
    pub storage: StorageConfig,
    /// Trail rendering output.
    pub render: RenderConfig,
    /// Simulated position source.
    #[serde(default = "default_simulation")]
    pub simulation: SimulationConfig,
}

fn default_sampling() -> SamplingConfig {
    SamplingConfig {
        interval_secs: DEFAULT_INTERVAL_SECS,
    }
}

fn default_simulation() -> SimulationConfig {
    SimulationConfig {
        origin_longitude: DEFAULT_ORIGIN_LONGITUDE,
        origin_latitude: DEFAULT_ORIGIN_LATITUDE,
        step_degrees: DEFAULT_STEP_DEGREES,
        unavailable_every: DEFAULT_UNAVAILABLE_EVERY,
    }
}

impl Config {
    /// Load configuration from the platform config directory, creating a
    /// default file if none exists.
    ///
    /// Note: This does NOT validate the values. Call `validate()` before
    /// building the recorder.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let proj_dirs = Self::project_dirs()?;
        let config_path = Self::config_path(&proj_dirs)?;

        Self::load_from(&config_path, proj_dirs.data_dir())
    }

    /// Load configuration from `config_path`. When the file is missing, a
    /// default configuration storing its data under `data_dir` is written
    /// there and returned.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path, data_dir: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            info!("No config found, creating default");
            let config = Self::default_in(data_dir);
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Default configuration with all files under `data_dir`.
    pub fn default_in(data_dir: &Path) -> Self {
        Config {
            sampling: default_sampling(),
            storage: StorageConfig {
                path: data_dir.join("trail-store.json"),
            },
            render: RenderConfig {
                output_path: data_dir.join("trail.geojson"),
            },
            simulation: default_simulation(),
        }
    }

    /// Check values that would otherwise fail at runtime.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> AppResult<()> {
        if self.sampling.interval_secs == 0 {
            return Err(AppError::ConfigError {
                reason: "sampling.interval_secs must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let sim = &self.simulation;
        if Position::new(sim.origin_longitude, sim.origin_latitude).is_err() {
            return Err(AppError::ConfigError {
                reason: format!(
                    "simulation origin ({}, {}) is not a valid position",
                    sim.origin_longitude, sim.origin_latitude
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !sim.step_degrees.is_finite() {
            return Err(AppError::ConfigError {
                reason: format!("simulation.step_degrees must be finite, got {}", sim.step_degrees),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.storage.path == self.render.output_path {
            return Err(AppError::ConfigError {
                reason: format!(
                    "storage.path and render.output_path must differ: {:?}",
                    self.storage.path
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            debug!(config_dir = ?parent, "Created config directory");
        }

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        if let Err(e) = Self::replace_file(&temp_path, config_path, contents.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn replace_file(temp_path: &Path, config_path: &Path, contents: &[u8]) -> AppResult<()> {
        let mut temp_file = fs::File::create(temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents)
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "trail-recorder", "Trail-Recorder").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    fn config_path(proj_dirs: &ProjectDirs) -> AppResult<PathBuf> {
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }
}
