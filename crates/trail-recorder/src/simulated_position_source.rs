//! Position source that walks diagonally away from a configured origin.
//!
//! Stands in for the device's location provider on hosts without one.

use crate::config::SimulationConfig;

use std::panic::Location;

use error_location::ErrorLocation;
use trail_recorder_core::{CoreResult, Position, PositionSource, TrailError};
use tracing::trace;

/// Simulated location provider.
pub struct SimulatedPositionSource {
    origin_longitude: f64,
    origin_latitude: f64,
    step_degrees: f64,
    unavailable_every: u64,
    requests: u64,
    fixes: u64,
}

impl SimulatedPositionSource {
    /// Create a source from the simulation settings.
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            origin_longitude: config.origin_longitude,
            origin_latitude: config.origin_latitude,
            step_degrees: config.step_degrees,
            unavailable_every: config.unavailable_every,
            requests: 0,
            fixes: 0,
        }
    }
}

impl PositionSource for SimulatedPositionSource {
    fn current_position(&mut self) -> CoreResult<Position> {
        self.requests += 1;

        if self.unavailable_every > 0 && self.requests % self.unavailable_every == 0 {
            trace!(request = self.requests, "Simulated fix unavailable");
            return Err(TrailError::PositionUnavailable {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let offset = self.step_degrees * self.fixes as f64;
        self.fixes += 1;

        // Longitude wraps at the antimeridian, latitude stops at the poles.
        let longitude = (self.origin_longitude + offset + 180.0).rem_euclid(360.0) - 180.0;
        let latitude = (self.origin_latitude + offset).clamp(-90.0, 90.0);

        Position::new(longitude, latitude)
    }
}
