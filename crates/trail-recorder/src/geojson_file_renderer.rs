//! Renders the trail into a GeoJSON file.
//!
//! Keeps the in-memory map style up to date and mirrors its trail source to
//! disk so any external map viewer can display it. The file is replaced
//! atomically on every render.

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use trail_recorder_core::{CoreResult, MapLayerRenderer, Trail, TrailError, TrailRenderer};
use tracing::{debug, instrument};

/// Trail renderer writing the map's trail source to a file.
pub struct GeoJsonFileRenderer {
    map: MapLayerRenderer,
    output_path: PathBuf,
}

impl GeoJsonFileRenderer {
    /// Render into `output_path`. Nothing is written until the first render.
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self {
            map: MapLayerRenderer::new(),
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    #[track_caller]
    fn write_source(&self) -> CoreResult<()> {
        let Some(collection) = self.map.trail_source() else {
            return Ok(());
        };

        let contents =
            serde_json::to_string_pretty(collection).map_err(|source| TrailError::Serialization {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| TrailError::Render {
                reason: format!("Failed to create output directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let temp_path = self.output_path.with_extension("geojson.tmp");

        if let Err(e) = Self::replace_file(&temp_path, &self.output_path, contents.as_bytes()) {
            // A failed write must not leave a partial temp file behind.
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        Ok(())
    }

    /// Write `contents` to `temp_path`, fsync, then rename over `final_path`.
    #[track_caller]
    fn replace_file(temp_path: &Path, final_path: &Path, contents: &[u8]) -> CoreResult<()> {
        let mut temp_file = fs::File::create(temp_path).map_err(|e| TrailError::Render {
            reason: format!("Failed to create temp output file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file.write_all(contents).map_err(|e| TrailError::Render {
            reason: format!("Failed to write temp output file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file.sync_all().map_err(|e| TrailError::Render {
            reason: format!("Failed to sync temp output file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(temp_path, final_path).map_err(|e| TrailError::Render {
            reason: format!("Failed to rename temp output file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl TrailRenderer for GeoJsonFileRenderer {
    #[instrument(skip(self, trail), fields(points = trail.len()))]
    fn render(&mut self, trail: &Trail) -> CoreResult<()> {
        self.map.render(trail)?;
        self.write_source()?;

        debug!(output_path = ?self.output_path, "Trail rendered");

        Ok(())
    }
}
