//! In-memory model of the map style the trail is drawn into.
//!
//! Mirrors what a map widget holds for the trail: one GeoJSON source, one
//! symbol layer reading it, and the marker icon the layer draws.

use crate::{CoreResult, FeatureCollection, Trail, TrailRenderer};

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, instrument};

/// Name of the GeoJSON source holding the trail.
pub const SOURCE_ID: &str = "trail-source";
/// Name of the symbol layer drawing the trail.
pub const LAYER_ID: &str = "trail-layer";
/// Name of the marker icon used by the layer.
pub const ICON_ID: &str = "trail-marker";
/// Camera zoom applied when the map is first shown.
pub const INITIAL_ZOOM: f64 = 15.0;

/// Symbol layer definition.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolLayer {
    /// Layer name.
    pub id: &'static str,
    /// Source the layer reads features from.
    pub source_id: &'static str,
    /// Icon drawn for every feature.
    pub icon_id: &'static str,
    /// Draw icons even when they collide.
    pub icon_allow_overlap: bool,
}

/// Map style holding the trail source, layer and icon.
#[derive(Debug, Clone)]
pub struct MapLayerRenderer {
    sources: HashMap<String, FeatureCollection>,
    layers: Vec<SymbolLayer>,
    icons: BTreeSet<&'static str>,
    zoom: f64,
}

impl MapLayerRenderer {
    /// Style with the marker icon and trail layer installed, but no source
    /// yet. The source is created by the first render.
    pub fn new() -> Self {
        let mut icons = BTreeSet::new();
        icons.insert(ICON_ID);

        Self {
            sources: HashMap::new(),
            layers: vec![SymbolLayer {
                id: LAYER_ID,
                source_id: SOURCE_ID,
                icon_id: ICON_ID,
                icon_allow_overlap: true,
            }],
            icons,
            zoom: INITIAL_ZOOM,
        }
    }

    /// Features currently held by a source.
    pub fn source(&self, id: &str) -> Option<&FeatureCollection> {
        self.sources.get(id)
    }

    /// The trail source, once rendered at least once.
    pub fn trail_source(&self) -> Option<&FeatureCollection> {
        self.source(SOURCE_ID)
    }

    /// Installed layers.
    pub fn layers(&self) -> &[SymbolLayer] {
        &self.layers
    }

    /// True if `icon_id` is registered with the style.
    pub fn has_icon(&self, icon_id: &str) -> bool {
        self.icons.contains(icon_id)
    }

    /// Current camera zoom.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

impl Default for MapLayerRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailRenderer for MapLayerRenderer {
    #[instrument(skip(self, trail), fields(points = trail.len()))]
    fn render(&mut self, trail: &Trail) -> CoreResult<()> {
        let collection = trail.to_feature_collection()?;

        match self.sources.get_mut(SOURCE_ID) {
            Some(source) => *source = collection,
            None => {
                self.sources.insert(SOURCE_ID.to_string(), collection);
                debug!(source = SOURCE_ID, "Trail source created");
            }
        }

        Ok(())
    }
}
