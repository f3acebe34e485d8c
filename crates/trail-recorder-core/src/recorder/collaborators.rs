//! Seams to the host: position fixes, trail rendering, the toggle control.

use crate::{CoreResult, Position, Trail};

/// Source of the device's current position.
pub trait PositionSource: Send {
    /// Latest fix, or [`crate::TrailError::PositionUnavailable`].
    ///
    /// Must not block waiting for a fix.
    fn current_position(&mut self) -> CoreResult<Position>;
}

/// Draws the trail on screen.
pub trait TrailRenderer: Send {
    /// Replace the whole displayed point set with `trail`.
    ///
    /// Idempotent. An empty trail renders nothing. The backing source is
    /// created on the first call.
    fn render(&mut self, trail: &Trail) -> CoreResult<()>;
}

/// Label shown on the single start/stop control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleLabel {
    /// Pressing the control starts recording.
    Start,
    /// Pressing the control stops recording.
    Stop,
}

impl ToggleLabel {
    /// Text displayed on the control.
    pub fn text(self) -> &'static str {
        match self {
            ToggleLabel::Start => "Start",
            ToggleLabel::Stop => "Stop",
        }
    }
}

/// The start/stop control.
pub trait ToggleView: Send {
    /// Show `label` on the control.
    fn set_label(&mut self, label: ToggleLabel);
}
