use std::collections::HashMap;

/// Transient key for the resume flag. Distinct from [`crate::TRAIL_KEY`].
pub const RECORDING_KEY: &str = "trail.recording";

/// Lifecycle bundle that survives a pause/resume cycle but not process exit.
///
/// Never written to durable storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState {
    flags: HashMap<String, bool>,
}

impl SavedState {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a boolean under `key`.
    pub fn put_bool(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_string(), value);
    }

    /// Read a boolean, `false` when absent.
    pub fn get_bool(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }
}
