use crate::{
    ICON_ID, INITIAL_ZOOM, LAYER_ID, MapLayerRenderer, SOURCE_ID, Trail, TrailRenderer,
    tests::support::trail_of,
};

/// WHAT: The style starts with the icon and layer but no source
/// WHY: The source is created lazily by the first render
#[test]
fn given_new_style_when_inspecting_then_layer_and_icon_without_source() {
    // Given/When: A fresh style
    let map = MapLayerRenderer::new();

    // Then: Layer reads the trail source and allows icon overlap
    assert!(map.has_icon(ICON_ID));
    assert_eq!(map.layers().len(), 1);
    assert_eq!(map.layers()[0].id, LAYER_ID);
    assert_eq!(map.layers()[0].source_id, SOURCE_ID);
    assert!(map.layers()[0].icon_allow_overlap);
    assert!(map.trail_source().is_none());
    assert!((map.zoom() - INITIAL_ZOOM).abs() < f64::EPSILON);
}

/// WHAT: Rendering an empty trail creates an empty source
/// WHY: Render must tolerate empty input and a missing source
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_source_when_rendering_empty_trail_then_empty_source_created() {
    // Given: A fresh style
    let mut map = MapLayerRenderer::new();

    // When: Rendering an empty trail
    map.render(&Trail::new()).unwrap();

    // Then: Source exists with no features
    assert!(map.trail_source().unwrap().is_empty());
}

/// WHAT: Rendering the same trail twice equals rendering it once
/// WHY: Render replaces the whole point set
#[test]
#[allow(clippy::unwrap_used)]
fn given_trail_when_rendering_twice_then_same_state_as_once() {
    // Given: Two styles and one trail
    let trail = trail_of(&[(0.0, 0.0), (1.0, 1.0)]);
    let mut once = MapLayerRenderer::new();
    let mut twice = MapLayerRenderer::new();

    // When: Rendering once vs twice
    once.render(&trail).unwrap();
    twice.render(&trail).unwrap();
    twice.render(&trail).unwrap();

    // Then: Identical sources
    assert_eq!(once.trail_source(), twice.trail_source());
    assert_eq!(twice.trail_source().unwrap().len(), 2);
}

/// WHAT: A shorter trail replaces a longer one
/// WHY: Stale points must not linger after a restart
#[test]
#[allow(clippy::unwrap_used)]
fn given_rendered_trail_when_rendering_shorter_then_replaced() {
    // Given: A style showing three points
    let mut map = MapLayerRenderer::new();
    map.render(&trail_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]))
        .unwrap();

    // When: Rendering an empty trail
    map.render(&Trail::new()).unwrap();

    // Then: Nothing shown
    assert!(map.trail_source().unwrap().is_empty());
}
