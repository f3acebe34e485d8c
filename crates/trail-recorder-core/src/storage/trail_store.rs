use crate::{CoreResult, KeyValueStore, Trail, TrailError, TransportRecord};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Durable key holding the JSON array of point features.
pub const TRAIL_KEY: &str = "trail.locations";

/// Persists a [`Trail`] as a single value under [`TRAIL_KEY`].
pub struct TrailStore {
    backend: Box<dyn KeyValueStore>,
}

impl TrailStore {
    /// Wrap a key/value backend.
    pub fn new<K: KeyValueStore + 'static>(backend: K) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Overwrite the stored trail with `trail`.
    ///
    /// The whole trail is written as one value, so a failed write leaves
    /// the previous trail intact.
    #[track_caller]
    #[instrument(skip(self, trail), fields(points = trail.len()))]
    pub fn save(&mut self, trail: &Trail) -> CoreResult<()> {
        let records = trail.to_transport()?;
        let json =
            serde_json::to_string(&records).map_err(|source| TrailError::Serialization {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.backend.put(TRAIL_KEY, json)?;

        info!(points = trail.len(), "Trail saved");

        Ok(())
    }

    /// Read the stored trail. Missing, unreadable or malformed data all
    /// yield an empty trail.
    #[instrument(skip(self))]
    pub fn load(&self) -> Trail {
        let json = match self.backend.get(TRAIL_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => {
                debug!("No stored trail");
                return Trail::new();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored trail");
                return Trail::new();
            }
        };

        let records: Vec<TransportRecord> = match serde_json::from_str(&json) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Stored trail is not a JSON array, ignoring");
                return Trail::new();
            }
        };

        let trail = Trail::from_transport_or_empty(&records);

        info!(points = trail.len(), "Trail loaded");

        trail
    }

    /// Remove the stored trail.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> CoreResult<()> {
        self.backend.remove(TRAIL_KEY)?;

        debug!("Stored trail cleared");

        Ok(())
    }
}
