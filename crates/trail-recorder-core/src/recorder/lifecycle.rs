/// Host lifecycle callbacks forwarded to [`crate::RecorderController::on_lifecycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Screen created.
    Create,
    /// Screen became visible.
    Start,
    /// Screen gained focus.
    Resume,
    /// Screen lost focus but is still visible.
    Pause,
    /// Screen is no longer visible; the process may be frozen afterwards.
    Stop,
    /// Host is short on memory.
    LowMemory,
    /// Screen is being torn down.
    Destroy,
    /// Host asks for the transient bundle to be filled.
    SaveState,
    /// Host hands back the transient bundle.
    RestoreState,
}
