use std::time::Instant;

use uuid::Uuid;

/// Recording state for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    /// Not sampling.
    Idle,
    /// Sampling on the fixed interval.
    Recording {
        /// When this session started or was resumed.
        started_at: Instant,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}

impl RecordingState {
    /// Enter `Recording` with a fresh session ID.
    pub(crate) fn recording() -> Self {
        RecordingState::Recording {
            started_at: Instant::now(),
            session_id: Uuid::new_v4(),
        }
    }

    /// True while sampling.
    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingState::Recording { .. })
    }
}
