//! Trail-Recorder: samples the position on a fixed interval and keeps the
//! trail across pause, resume and restart.

mod app;
mod app_command;
mod config;
mod console_reader;
mod console_toggle;
mod error;
mod geojson_file_renderer;
mod simulated_position_source;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    console_toggle::ConsoleToggle,
    error::{AppError, Result as AppResult},
    geojson_file_renderer::GeoJsonFileRenderer,
    simulated_position_source::SimulatedPositionSource,
};

use crate::{config::Config, console_reader::spawn_console_reader};

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "trail_recorder=debug,trail_recorder_core=debug";

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Config validation failed: {:?}", e);
        std::process::exit(1);
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let (command_tx, command_rx) = mpsc::channel(32);

        let app = match App::new(config, command_rx) {
            Ok(app) => app,
            Err(e) => {
                error!("Failed to create App: {:?}", e);
                std::process::exit(1);
            }
        };

        let _console = spawn_console_reader(command_tx);
        println!("Commands: toggle | pause | resume | recreate | status | quit");

        if let Err(e) = app.run().await {
            error!(error = ?e, "App error");
        }
    });

    // The console reader may be parked in a blocking stdin read; don't wait on it.
    rt.shutdown_timeout(Duration::from_secs(1));
    info!("Exited");
}
