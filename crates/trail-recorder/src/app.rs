use crate::{
    AppCommand, AppResult, ConsoleToggle, GeoJsonFileRenderer, SimulatedPositionSource,
    config::Config,
};

use tokio::sync::mpsc;
use trail_recorder_core::{
    FileKeyValueStore, LifecycleEvent, RecorderController, RecordingState, SavedState, Tick,
    TrailStore,
};
use tracing::{error, info, instrument};

/// Main application state.
///
/// Owns the single recorder controller. Commands from the console and ticks
/// from the sample schedule are both drained by [`App::run`], so every
/// trail mutation and render happens on this one task.
pub struct App {
    pub(crate) config: Config,
    pub(crate) controller: RecorderController,
    pub(crate) tick_rx: mpsc::UnboundedReceiver<Tick>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    /// Transient bundle handed across a recreate. Never written to disk.
    pub(crate) saved: SavedState,
}

impl App {
    /// Build the screen and bring it to the foreground.
    ///
    /// Must be called from within the tokio runtime: a restored recording
    /// resumes sampling immediately.
    #[instrument(skip(config, command_rx))]
    pub(crate) fn new(config: Config, command_rx: mpsc::Receiver<AppCommand>) -> AppResult<Self> {
        let mut saved = SavedState::new();
        let (controller, tick_rx) = Self::create_screen(&config, &mut saved)?;

        Ok(Self {
            config,
            controller,
            tick_rx,
            command_rx,
            saved,
        })
    }

    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!(
            interval_secs = self.config.sampling.interval_secs,
            store = ?self.config.storage.path,
            output = ?self.config.render.output_path,
            "Trail recorder starting"
        );

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    if cmd == AppCommand::Shutdown {
                        info!("Shutdown requested");
                        break;
                    }
                    if let Err(e) = self.handle_command(cmd) {
                        error!(command = ?cmd, error = ?e, "Failed to handle command");
                    }
                }

                Some(tick) = self.tick_rx.recv() => {
                    self.controller.handle_tick(tick);
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        // Persist the trail on the way out, as a stop would.
        Self::destroy_screen(&mut self.controller, &mut self.saved);

        info!("Trail recorder shut down successfully");

        Ok(())
    }

    /// Apply one console command.
    #[instrument(skip(self))]
    pub(crate) fn handle_command(&mut self, cmd: AppCommand) -> AppResult<()> {
        match cmd {
            AppCommand::Toggle => self.controller.toggle(),
            AppCommand::Pause => {
                self.controller
                    .on_lifecycle(LifecycleEvent::Pause, &mut self.saved);
                self.controller
                    .on_lifecycle(LifecycleEvent::Stop, &mut self.saved);
                self.controller
                    .on_lifecycle(LifecycleEvent::SaveState, &mut self.saved);
            }
            AppCommand::Resume => {
                self.controller
                    .on_lifecycle(LifecycleEvent::Start, &mut self.saved);
                self.controller
                    .on_lifecycle(LifecycleEvent::Resume, &mut self.saved);
            }
            AppCommand::Recreate => {
                Self::destroy_screen(&mut self.controller, &mut self.saved);
                let (controller, tick_rx) = match Self::create_screen(&self.config, &mut self.saved)
                {
                    Ok(screen) => screen,
                    Err(e) => {
                        // Keep the old screen, brought back to the foreground.
                        self.controller
                            .on_lifecycle(LifecycleEvent::Start, &mut self.saved);
                        self.controller
                            .on_lifecycle(LifecycleEvent::Resume, &mut self.saved);
                        return Err(e);
                    }
                };
                // Ticks still queued for the old controller go with its channel.
                self.controller = controller;
                self.tick_rx = tick_rx;
                info!("Screen recreated");
            }
            AppCommand::Status => println!("{}", self.status_line()),
            AppCommand::Shutdown => {}
        }

        Ok(())
    }

    /// One-line summary of the recorder.
    pub(crate) fn status_line(&self) -> String {
        let state = match self.controller.state() {
            RecordingState::Idle => "idle".to_string(),
            RecordingState::Recording {
                started_at,
                session_id,
            } => format!(
                "recording (session {}, {}s)",
                session_id,
                started_at.elapsed().as_secs()
            ),
        };

        format!(
            "{} | {} point(s) | sampling {}",
            state,
            self.controller.trail().len(),
            if self.controller.has_active_schedule() {
                "active"
            } else {
                "suspended"
            }
        )
    }

    /// Build a controller and run it through the host's start-up callbacks.
    fn create_screen(
        config: &Config,
        saved: &mut SavedState,
    ) -> AppResult<(RecorderController, mpsc::UnboundedReceiver<Tick>)> {
        let backend = FileKeyValueStore::open(&config.storage.path)?;

        let (mut controller, tick_rx) = RecorderController::new(
            TrailStore::new(backend),
            SimulatedPositionSource::new(&config.simulation),
            GeoJsonFileRenderer::new(&config.render.output_path),
            ConsoleToggle::new(),
            config.sampling.interval(),
        );

        controller.on_lifecycle(LifecycleEvent::Create, saved);
        controller.on_lifecycle(LifecycleEvent::RestoreState, saved);
        controller.on_map_ready();
        controller.on_lifecycle(LifecycleEvent::Start, saved);
        controller.on_lifecycle(LifecycleEvent::Resume, saved);

        Ok((controller, tick_rx))
    }

    /// Run a controller through the host's tear-down callbacks.
    fn destroy_screen(controller: &mut RecorderController, saved: &mut SavedState) {
        controller.on_lifecycle(LifecycleEvent::Pause, saved);
        controller.on_lifecycle(LifecycleEvent::Stop, saved);
        controller.on_lifecycle(LifecycleEvent::SaveState, saved);
        controller.on_lifecycle(LifecycleEvent::Destroy, saved);
    }
}
