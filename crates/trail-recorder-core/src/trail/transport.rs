//! GeoJSON transport records.
//!
//! Every recorded position travels as one GeoJSON `Point` feature so that
//! the persisted value and the rendered source share a single format.

use crate::{CoreResult, Position, TrailError};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// One serialized position: a GeoJSON `Feature` with a `Point` geometry.
///
/// Kept as a raw JSON value so that each record can be decoded on its own
/// and a bad record can be reported by index.
pub type TransportRecord = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureTag {
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum GeometryTag {
    Point,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PointGeometry {
    #[serde(rename = "type")]
    kind: GeometryTag,
    /// `[longitude, latitude]`, GeoJSON axis order.
    coordinates: [f64; 2],
}

/// GeoJSON point feature as written to storage and to renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointFeature {
    #[serde(rename = "type")]
    kind: FeatureTag,
    geometry: PointGeometry,
    #[serde(default)]
    properties: serde_json::Map<String, serde_json::Value>,
}

impl PointFeature {
    /// Wrap a position as a point feature with empty properties.
    pub fn from_position(position: Position) -> Self {
        Self {
            kind: FeatureTag::Feature,
            geometry: PointGeometry {
                kind: GeometryTag::Point,
                coordinates: [position.longitude(), position.latitude()],
            },
            properties: serde_json::Map::new(),
        }
    }

    /// Extract the validated position.
    #[track_caller]
    pub fn position(&self) -> CoreResult<Position> {
        let [longitude, latitude] = self.geometry.coordinates;
        Position::new(longitude, latitude)
    }
}

/// GeoJSON `FeatureCollection` handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<TransportRecord>,
}

impl FeatureCollection {
    pub(crate) fn new(features: Vec<TransportRecord>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }

    /// The point features, in trail order.
    pub fn features(&self) -> &[TransportRecord] {
        &self.features
    }

    /// Number of features in the collection.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Encode one position. Plain structs never fail to convert to a `Value`,
/// but the error path is kept typed rather than unwrapped.
#[track_caller]
pub(crate) fn encode_record(position: Position) -> CoreResult<TransportRecord> {
    serde_json::to_value(PointFeature::from_position(position)).map_err(|source| {
        TrailError::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    })
}

/// Decode the record found at `index` of a transport list.
#[track_caller]
pub(crate) fn decode_record(index: usize, record: &TransportRecord) -> CoreResult<Position> {
    let feature: PointFeature =
        PointFeature::deserialize(record).map_err(|e| TrailError::MalformedRecord {
            index,
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    feature.position().map_err(|e| TrailError::MalformedRecord {
        index,
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
