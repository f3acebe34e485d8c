//! Test doubles for the controller's collaborators.

use crate::{
    CoreResult, KeyValueStore, MemoryKeyValueStore, Position, PositionSource, ToggleLabel,
    ToggleView, Trail, TrailError, TrailRenderer,
};

use std::{
    collections::VecDeque,
    panic::Location,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use error_location::ErrorLocation;

/// Yields scripted fixes in order; `None` or an exhausted script is "unavailable".
#[derive(Clone, Default)]
pub(crate) struct ScriptedSource {
    fixes: Arc<Mutex<VecDeque<Option<(f64, f64)>>>>,
}

impl ScriptedSource {
    pub(crate) fn new<I: IntoIterator<Item = Option<(f64, f64)>>>(fixes: I) -> Self {
        Self {
            fixes: Arc::new(Mutex::new(fixes.into_iter().collect())),
        }
    }
}

impl PositionSource for ScriptedSource {
    fn current_position(&mut self) -> CoreResult<Position> {
        let next = self
            .fixes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .flatten();

        match next {
            Some((longitude, latitude)) => Position::new(longitude, latitude),
            None => Err(TrailError::PositionUnavailable {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Keeps a snapshot of every rendered trail.
#[derive(Clone, Default)]
pub(crate) struct RecordingRenderer {
    renders: Arc<Mutex<Vec<Trail>>>,
}

impl RecordingRenderer {
    pub(crate) fn render_count(&self) -> usize {
        self.renders.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub(crate) fn last(&self) -> Option<Trail> {
        self.renders
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl TrailRenderer for RecordingRenderer {
    fn render(&mut self, trail: &Trail) -> CoreResult<()> {
        self.renders
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(trail.clone());
        Ok(())
    }
}

/// Keeps every label shown on the toggle.
#[derive(Clone, Default)]
pub(crate) struct RecordingToggle {
    labels: Arc<Mutex<Vec<ToggleLabel>>>,
}

impl RecordingToggle {
    pub(crate) fn current(&self) -> Option<ToggleLabel> {
        self.labels
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .copied()
    }
}

impl ToggleView for RecordingToggle {
    fn set_label(&mut self, label: ToggleLabel) {
        self.labels
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(label);
    }
}

/// Memory store that counts writes and can be told to fail them.
#[derive(Clone, Default)]
pub(crate) struct CountingStore {
    inner: MemoryKeyValueStore,
    writes: Arc<AtomicUsize>,
    fail_writes: Arc<Mutex<bool>>,
}

impl CountingStore {
    pub(crate) fn over(inner: MemoryKeyValueStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub(crate) fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner()) = fail;
    }

    fn check_writable(&self) -> CoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(TrailError::StorageWrite {
                reason: "disk full".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn put(&mut self, key: &str, value: String) -> CoreResult<()> {
        self.check_writable()?;
        self.inner.put(key, value)
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        self.check_writable()?;
        self.inner.remove(key)
    }
}

#[allow(clippy::unwrap_used)]
pub(crate) fn position(longitude: f64, latitude: f64) -> Position {
    Position::new(longitude, latitude).unwrap()
}

pub(crate) fn trail_of(points: &[(f64, f64)]) -> Trail {
    points
        .iter()
        .map(|&(longitude, latitude)| position(longitude, latitude))
        .collect()
}
