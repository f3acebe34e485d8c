use crate::GeoJsonFileRenderer;

use trail_recorder_core::{Position, Trail, TrailRenderer};

#[allow(clippy::unwrap_used)]
fn trail_of(points: &[(f64, f64)]) -> Trail {
    points
        .iter()
        .map(|&(lon, lat)| Position::new(lon, lat).unwrap())
        .collect()
}

/// WHAT: Rendering writes a GeoJSON FeatureCollection file
/// WHY: External map viewers read the trail from this file
#[test]
#[allow(clippy::unwrap_used)]
fn given_trail_when_rendering_then_feature_collection_written() {
    // Given: A renderer targeting a nested path that does not exist yet
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("trail.geojson");
    let mut renderer = GeoJsonFileRenderer::new(&path);

    // When: Rendering two points
    renderer.render(&trail_of(&[(1.0, 2.0), (3.0, 4.0)])).unwrap();

    // Then: The file holds both features in order
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["type"], "FeatureCollection");
    assert_eq!(
        written["features"][1]["geometry"]["coordinates"],
        serde_json::json!([3.0, 4.0])
    );
    assert_eq!(written["features"].as_array().unwrap().len(), 2);
    assert!(!path.with_extension("geojson.tmp").exists());
}

/// WHAT: Rendering the same trail twice leaves the same file
/// WHY: Render is idempotent
#[test]
#[allow(clippy::unwrap_used)]
fn given_trail_when_rendering_twice_then_file_unchanged() {
    // Given: A renderer that has rendered once
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.geojson");
    let mut renderer = GeoJsonFileRenderer::new(&path);
    let trail = trail_of(&[(5.0, 6.0)]);
    renderer.render(&trail).unwrap();
    let once = std::fs::read_to_string(&path).unwrap();

    // When: Rendering again
    renderer.render(&trail).unwrap();

    // Then: Same contents
    assert_eq!(std::fs::read_to_string(&path).unwrap(), once);
}

/// WHAT: An empty trail renders an empty collection
/// WHY: Start of recording shows a cleared map
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_trail_when_rendering_then_empty_collection() {
    // Given: A renderer
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.geojson");
    let mut renderer = GeoJsonFileRenderer::new(&path);

    // When: Rendering nothing
    renderer.render(&Trail::new()).unwrap();

    // Then: Empty features array
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(written["features"].as_array().unwrap().is_empty());
}

/// WHAT: A failed file replace reports an error and removes the temp file
/// WHY: Repeated failures must not litter the output directory
#[test]
#[allow(clippy::unwrap_used)]
fn given_output_path_is_directory_when_rendering_then_error_and_no_temp_file() {
    // Given: A directory sitting where the output file should go
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.geojson");
    std::fs::create_dir(&path).unwrap();
    let mut renderer = GeoJsonFileRenderer::new(&path);

    // When: Rendering
    let result = renderer.render(&trail_of(&[(1.0, 2.0)]));

    // Then: Render error, nothing left behind
    assert!(matches!(result, Err(trail_recorder_core::TrailError::Render { .. })));
    assert!(!path.with_extension("geojson.tmp").exists());
    assert!(path.is_dir());
}
