use crate::{CoreResult, TrailError};

use std::panic::Location;

use error_location::ErrorLocation;

/// Valid longitude range in degrees.
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Valid latitude range in degrees.
const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// A single WGS84 fix. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    longitude: f64,
    latitude: f64,
}

impl Position {
    /// Create a position, rejecting NaN, infinities and out-of-range degrees.
    #[track_caller]
    pub fn new(longitude: f64, latitude: f64) -> CoreResult<Self> {
        // RangeInclusive::contains is false for NaN, and infinities are out of range.
        if !LONGITUDE_RANGE.contains(&longitude) || !LATITUDE_RANGE.contains(&latitude) {
            return Err(TrailError::InvalidPosition {
                longitude,
                latitude,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}
