//! Cancellable repeating sample schedule.
//!
//! The schedule never touches the trail. It runs as its own task and only
//! emits [`Tick`]s into the owner's channel; the owner applies them one at a
//! time, in the order they were issued.

use crate::{CoreResult, TrailError};

use std::{fmt, panic::Location, time::Duration};

use error_location::ErrorLocation;
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, instrument};

/// Shortest period accepted. `tokio::time::interval` rejects zero.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Identifies one started schedule, so ticks can be matched to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleId(u64);

impl ScheduleId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One firing of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Schedule that issued this tick.
    pub schedule: ScheduleId,
    /// Zero-based tick number within that schedule.
    pub sequence: u64,
}

/// Handle to a running schedule. Cancelled on [`SampleSchedule::cancel`] or drop.
pub struct SampleSchedule {
    id: ScheduleId,
    cancel_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl SampleSchedule {
    /// Start ticking: first tick immediately, then every `period`.
    ///
    /// Ticks missed while the owner is slow are skipped, not replayed.
    /// Must be called from within a tokio runtime.
    #[track_caller]
    #[instrument(skip(tick_tx))]
    pub fn start(
        id: ScheduleId,
        period: Duration,
        tick_tx: mpsc::UnboundedSender<Tick>,
    ) -> CoreResult<Self> {
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|e| TrailError::Schedule {
                reason: format!("No tokio runtime: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let period = period.max(MIN_PERIOD);
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut sequence = 0u64;

            loop {
                tokio::select! {
                    // Cancellation wins over a tick that became ready at the same time.
                    biased;

                    _ = cancel_rx.changed() => break,

                    _ = interval.tick() => {
                        if *cancel_rx.borrow() {
                            break;
                        }
                        if tick_tx.send(Tick { schedule: id, sequence }).is_err() {
                            debug!(schedule = %id, "Tick receiver dropped");
                            break;
                        }
                        sequence += 1;
                    }
                }
            }

            debug!(schedule = %id, ticks = sequence, "Sample schedule stopped");
        });

        debug!(schedule = %id, period_ms = period.as_millis(), "Sample schedule started");

        Ok(Self {
            id,
            cancel_tx,
            handle,
        })
    }

    /// Schedule identity carried by its ticks.
    pub fn id(&self) -> ScheduleId {
        self.id
    }

    /// True until the ticking task has exited.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop issuing ticks. Ticks already sent stay in the channel.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for SampleSchedule {
    fn drop(&mut self) {
        let _ = self.cancel_tx.send(true);
    }
}
