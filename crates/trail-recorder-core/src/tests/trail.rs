use crate::{
    Position, Trail, TrailError,
    tests::support::{position, trail_of},
};

use serde_json::json;

/// WHAT: Appended samples come back in recording order
/// WHY: The trail is a chronological record
#[test]
#[allow(clippy::unwrap_used)]
fn given_samples_when_appending_then_transport_preserves_order() {
    // Given: An empty trail
    let mut trail = Trail::new();

    // When: Appending three samples
    trail.append(position(0.0, 0.0));
    trail.append(position(10.5, -3.25));
    trail.append(position(-179.0, 89.0));

    // Then: Transport records are in the same order
    let records = trail.to_transport().unwrap();
    let coordinates: Vec<_> = records
        .iter()
        .map(|r| r["geometry"]["coordinates"].clone())
        .collect();
    assert_eq!(
        coordinates,
        vec![json!([0.0, 0.0]), json!([10.5, -3.25]), json!([-179.0, 89.0])]
    );
}

/// WHAT: Encoding then decoding reproduces the trail
/// WHY: A resumed session must see exactly what was saved
#[test]
#[allow(clippy::unwrap_used)]
fn given_trail_when_round_tripping_transport_then_equal() {
    // Given: A trail with repeated and boundary positions
    let trail = trail_of(&[(1.0, 1.0), (1.0, 1.0), (180.0, -90.0), (-180.0, 90.0)]);

    // When: Encoding and decoding
    let decoded = Trail::from_transport(&trail.to_transport().unwrap()).unwrap();

    // Then: Same content, same order, no deduplication
    assert_eq!(decoded, trail);
    assert_eq!(decoded.len(), 4);
}

/// WHAT: Records are GeoJSON point features with [lon, lat] coordinates
/// WHY: Storage and renderers share the GeoJSON format
#[test]
#[allow(clippy::unwrap_used)]
fn given_position_when_encoding_then_geojson_point_feature() {
    // Given: A single-sample trail
    let trail = trail_of(&[(2.35, 48.85)]);

    // When: Encoding
    let records = trail.to_transport().unwrap();

    // Then: The record is a Point feature, longitude first
    assert_eq!(
        records[0],
        json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [2.35, 48.85] },
            "properties": {}
        })
    );
}

/// WHAT: One malformed record fails the whole decode
/// WHY: Resume is all or nothing; a partial trail would hide data loss
#[test]
fn given_one_malformed_record_when_decoding_then_fails_with_its_index() {
    // Given: Two valid records around a malformed one
    let records = vec![
        json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}}),
        json!({"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [0.0, 0.0]}}),
        json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}}),
    ];

    // When: Decoding strictly
    let result = Trail::from_transport(&records);

    // Then: MalformedRecord points at index 1
    assert!(matches!(
        result,
        Err(TrailError::MalformedRecord { index: 1, .. })
    ));
}

/// WHAT: Lenient decode of a list with a bad record yields an empty trail
/// WHY: Load must return nothing rather than N-1 records
#[test]
fn given_one_malformed_record_among_valid_when_decoding_or_empty_then_empty_trail() {
    // Given: Three valid records and one with out-of-range latitude
    let mut records = trail_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])
        .to_transport()
        .unwrap_or_default();
    records.push(
        json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 91.0]}}),
    );

    // When: Decoding leniently
    let trail = Trail::from_transport_or_empty(&records);

    // Then: Nothing is kept
    assert!(trail.is_empty());
}

/// WHAT: Non-object records are rejected
/// WHY: Storage may hold anything after a crash or manual edit
#[test]
fn given_string_record_when_decoding_then_malformed() {
    // Given: A record that is a bare string
    let records = vec![json!("not a feature")];

    // When: Decoding strictly
    let result = Trail::from_transport(&records);

    // Then: Malformed at index 0
    assert!(matches!(
        result,
        Err(TrailError::MalformedRecord { index: 0, .. })
    ));
}

/// WHAT: Non-finite and out-of-range coordinates are rejected
/// WHY: A sensor glitch must not poison the stored trail
#[test]
fn given_invalid_coordinates_when_creating_position_then_invalid_position() {
    // Given/When: Constructing positions from bad values
    let cases = [
        (f64::NAN, 0.0),
        (0.0, f64::NAN),
        (f64::INFINITY, 0.0),
        (0.0, f64::NEG_INFINITY),
        (180.1, 0.0),
        (0.0, -90.1),
    ];

    // Then: Every one fails
    for (longitude, latitude) in cases {
        assert!(
            matches!(
                Position::new(longitude, latitude),
                Err(TrailError::InvalidPosition { .. })
            ),
            "accepted ({longitude}, {latitude})"
        );
    }
}

/// WHAT: Clearing empties the trail
/// WHY: Start-of-recording relies on a clean slate
#[test]
fn given_non_empty_trail_when_clearing_then_empty() {
    // Given: A trail with samples
    let mut trail = trail_of(&[(0.0, 0.0), (1.0, 1.0)]);

    // When: Clearing
    trail.clear();

    // Then: Empty
    assert!(trail.is_empty());
    assert_eq!(trail.positions(), &[] as &[Position]);
}
