//! Sampling-and-persistence state machine.
//!
//! Owns the trail, the recording state and the sample schedule. Every
//! mutation happens through `&mut self`, so the owner decides which single
//! task drives it; the schedule only feeds [`Tick`]s back through a channel.

use crate::{
    LifecycleEvent, PositionSource, RECORDING_KEY, RecordingState, SampleSchedule, SavedState,
    ScheduleId, Tick, ToggleLabel, ToggleView, Trail, TrailRenderer, TrailStore,
};

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Default time between two samples.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(60);

/// The recorder state machine.
pub struct RecorderController {
    trail: Trail,
    state: RecordingState,
    store: TrailStore,
    source: Box<dyn PositionSource>,
    renderer: Box<dyn TrailRenderer>,
    toggle_view: Box<dyn ToggleView>,
    interval: Duration,
    tick_tx: mpsc::UnboundedSender<Tick>,
    schedule: Option<SampleSchedule>,
    /// Most recently started schedule, kept after cancellation so an
    /// in-flight tick from it still lands.
    latest_schedule: Option<ScheduleId>,
    next_schedule_id: u64,
    /// Resume flag restored from the transient bundle, not yet acted on.
    resume_pending: bool,
    trail_loaded: bool,
    map_ready: bool,
}

impl RecorderController {
    /// Build an idle controller.
    ///
    /// Returns the receiving end of the tick channel. The owner must feed
    /// every received tick back into [`RecorderController::handle_tick`].
    pub fn new<S, R, V>(
        store: TrailStore,
        source: S,
        renderer: R,
        toggle: V,
        interval: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<Tick>)
    where
        S: PositionSource + 'static,
        R: TrailRenderer + 'static,
        V: ToggleView + 'static,
    {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();

        let mut toggle_view: Box<dyn ToggleView> = Box::new(toggle);
        toggle_view.set_label(ToggleLabel::Start);

        let controller = Self {
            trail: Trail::new(),
            state: RecordingState::Idle,
            store,
            source: Box::new(source),
            renderer: Box::new(renderer),
            toggle_view,
            interval,
            tick_tx,
            schedule: None,
            latest_schedule: None,
            next_schedule_id: 0,
            resume_pending: false,
            trail_loaded: false,
            map_ready: false,
        };

        (controller, tick_rx)
    }

    /// In-memory trail.
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Current recording state.
    pub fn state(&self) -> RecordingState {
        self.state
    }

    /// True while recording, including while the schedule is suspended by a pause.
    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    /// True while a schedule is issuing ticks.
    pub fn has_active_schedule(&self) -> bool {
        self.schedule.is_some()
    }

    /// Sampling period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start a fresh recording. No-op while already recording.
    ///
    /// Wipes the stored trail and the in-memory trail, renders the empty
    /// trail, then starts sampling immediately and every interval after.
    #[instrument(skip(self))]
    pub fn start_recording(&mut self) {
        if self.state.is_recording() {
            debug!("Already recording, ignoring start");
            return;
        }

        if let Err(e) = self.store.clear() {
            error!(error = %e, "Failed to clear stored trail");
        }
        self.trail.clear();
        self.reload_trail();

        if let Err(e) = self.restart_schedule() {
            error!(error = %e, "Failed to start sampling, staying idle");
            return;
        }

        self.state = RecordingState::recording();
        self.resume_pending = false;
        self.toggle_view.set_label(ToggleLabel::Stop);

        if let RecordingState::Recording { session_id, .. } = self.state {
            info!(session_id = %session_id, interval_ms = self.interval.as_millis(), "Recording started");
        }
    }

    /// Stop sampling. Keeps the trail and leaves storage untouched.
    /// No-op while idle.
    #[instrument(skip(self))]
    pub fn stop_recording(&mut self) {
        let RecordingState::Recording {
            started_at,
            session_id,
        } = self.state
        else {
            debug!("Not recording, ignoring stop");
            return;
        };

        self.cancel_schedule();
        self.state = RecordingState::Idle;
        self.toggle_view.set_label(ToggleLabel::Start);

        info!(
            session_id = %session_id,
            duration_ms = started_at.elapsed().as_millis(),
            points = self.trail.len(),
            "Recording stopped"
        );
    }

    /// Flip between recording and idle, as the toggle control does.
    pub fn toggle(&mut self) {
        if self.state.is_recording() {
            self.stop_recording();
        } else {
            self.start_recording();
        }
    }

    /// The host is going invisible: suspend sampling and persist the trail.
    ///
    /// The recording state is left as is so that it can be resumed. Before
    /// the stored trail has been loaded there is nothing to persist, and the
    /// stored value is left alone.
    #[instrument(skip(self))]
    pub fn on_process_pause(&mut self) {
        self.cancel_schedule();

        if !self.trail_loaded {
            debug!("Trail not loaded yet, keeping stored trail");
            return;
        }

        if let Err(e) = self.store.save(&self.trail) {
            // Trail stays in memory; the next pause retries.
            error!(error = %e, points = self.trail.len(), "Failed to persist trail");
        }
    }

    /// The host is visible again: restore the resume flag and, if it says
    /// recording, restart sampling without clearing the trail.
    ///
    /// Once the trail is loaded the in-memory state is authoritative and the
    /// bundle is only consulted by a fresh controller.
    #[instrument(skip(self, saved))]
    pub fn on_process_resume(&mut self, saved: &SavedState) {
        if !self.trail_loaded {
            self.restore_state(saved);
            self.reload_trail();
        }

        if self.resume_pending || self.state.is_recording() {
            self.resume_recording();
        }
    }

    /// One-time initialization once the map can draw: load and render the
    /// stored trail, then auto-resume if the restored flag says recording.
    #[instrument(skip(self))]
    pub fn on_map_ready(&mut self) {
        if self.map_ready {
            debug!("Map already initialized");
            return;
        }
        self.map_ready = true;

        if self.trail_loaded {
            self.render();
        } else {
            self.reload_trail();
        }

        if self.resume_pending {
            self.resume_recording();
        }
    }

    /// Write the resume flag into the transient bundle.
    pub fn save_state(&self, saved: &mut SavedState) {
        saved.put_bool(
            RECORDING_KEY,
            self.state.is_recording() || self.resume_pending,
        );
    }

    /// Read the resume flag from the transient bundle.
    pub fn restore_state(&mut self, saved: &SavedState) {
        self.resume_pending = saved.get_bool(RECORDING_KEY);
    }

    /// Route a host lifecycle callback.
    #[instrument(skip(self, saved))]
    pub fn on_lifecycle(&mut self, event: LifecycleEvent, saved: &mut SavedState) {
        match event {
            LifecycleEvent::Start => self.on_process_resume(saved),
            LifecycleEvent::Stop => self.on_process_pause(),
            LifecycleEvent::SaveState => self.save_state(saved),
            LifecycleEvent::RestoreState => self.restore_state(saved),
            LifecycleEvent::Destroy => self.cancel_schedule(),
            LifecycleEvent::LowMemory => warn!(points = self.trail.len(), "Low memory"),
            LifecycleEvent::Create | LifecycleEvent::Resume | LifecycleEvent::Pause => {
                debug!("No controller action")
            }
        }
    }

    /// Apply one tick: sample, append, render.
    ///
    /// Ticks from a schedule superseded by a newer one are dropped. An
    /// unavailable position skips the tick without rendering.
    #[instrument(skip(self))]
    pub fn handle_tick(&mut self, tick: Tick) {
        if self.latest_schedule != Some(tick.schedule) {
            debug!("Dropping tick from superseded schedule");
            return;
        }

        match self.source.current_position() {
            Ok(position) => {
                self.trail.append(position);
                self.render();
                debug!(
                    longitude = position.longitude(),
                    latitude = position.latitude(),
                    points = self.trail.len(),
                    "Sample recorded"
                );
            }
            Err(e) => debug!(error = %e, "Sample skipped"),
        }
    }

    fn resume_recording(&mut self) {
        self.resume_pending = false;

        if self.schedule.is_some() {
            debug!("Schedule already active");
            return;
        }

        if let Err(e) = self.restart_schedule() {
            error!(error = %e, "Failed to resume sampling");
            return;
        }

        if !self.state.is_recording() {
            self.state = RecordingState::recording();
        }
        self.toggle_view.set_label(ToggleLabel::Stop);

        if let RecordingState::Recording { session_id, .. } = self.state {
            info!(session_id = %session_id, points = self.trail.len(), "Recording resumed");
        }
    }

    fn reload_trail(&mut self) {
        self.trail = self.store.load();
        self.trail_loaded = true;
        self.render();
    }

    fn render(&mut self) {
        if let Err(e) = self.renderer.render(&self.trail) {
            warn!(error = %e, points = self.trail.len(), "Failed to render trail");
        }
    }

    fn restart_schedule(&mut self) -> crate::CoreResult<()> {
        self.cancel_schedule();

        let id = ScheduleId::new(self.next_schedule_id);
        self.next_schedule_id += 1;

        let schedule = SampleSchedule::start(id, self.interval, self.tick_tx.clone())?;
        self.latest_schedule = Some(id);
        self.schedule = Some(schedule);

        Ok(())
    }

    fn cancel_schedule(&mut self) {
        if let Some(schedule) = self.schedule.take() {
            debug!(schedule = %schedule.id(), "Cancelling sample schedule");
            schedule.cancel();
        }
    }
}
