use error_location::ErrorLocation;
use thiserror::Error;

/// Trail recording errors with source location tracking.
#[derive(Error, Debug)]
pub enum TrailError {
    /// The position source had no fix for this sample.
    #[error("Position unavailable {location}")]
    PositionUnavailable {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Coordinates outside the WGS84 range, or not finite.
    #[error("Invalid position: longitude={longitude}, latitude={latitude} {location}")]
    InvalidPosition {
        /// Rejected longitude.
        longitude: f64,
        /// Rejected latitude.
        latitude: f64,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A single transport record could not be decoded.
    #[error("Malformed record at index {index}: {reason} {location}")]
    MalformedRecord {
        /// Position of the record in the transport list.
        index: usize,
        /// Description of the decode failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {source} {location}")]
    Serialization {
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Reading durable storage failed.
    #[error("Storage read failed: {reason} {location}")]
    StorageRead {
        /// Description of the read failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Writing durable storage failed. The previous value is left in place.
    #[error("Storage write failed: {reason} {location}")]
    StorageWrite {
        /// Description of the write failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The sampling schedule could not be started.
    #[error("Schedule error: {reason} {location}")]
    Schedule {
        /// Description of the scheduling failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Rendering the trail failed.
    #[error("Render failed: {reason} {location}")]
    Render {
        /// Description of the render failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`TrailError`].
pub type Result<T> = std::result::Result<T, TrailError>;
