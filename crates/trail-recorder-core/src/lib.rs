//! Trail Recorder Core Library
//!
//! Samples the device position on a fixed interval, keeps the samples as an
//! ordered trail, renders it, and persists it so recording survives a
//! pause/resume of the host.
//!
//! # Example
//!
//! ```no_run
//! use trail_recorder_core::{
//!     CoreResult, MapLayerRenderer, MemoryKeyValueStore, Position, PositionSource,
//!     RecorderController, ToggleLabel, ToggleView, TrailStore, DEFAULT_SAMPLE_INTERVAL,
//! };
//!
//! struct Fixed;
//!
//! impl PositionSource for Fixed {
//!     fn current_position(&mut self) -> CoreResult<Position> {
//!         Position::new(-0.1276, 51.5072)
//!     }
//! }
//!
//! struct Label;
//!
//! impl ToggleView for Label {
//!     fn set_label(&mut self, label: ToggleLabel) {
//!         println!("[{}]", label.text());
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = TrailStore::new(MemoryKeyValueStore::new());
//!     let (mut controller, mut ticks) = RecorderController::new(
//!         store,
//!         Fixed,
//!         MapLayerRenderer::new(),
//!         Label,
//!         DEFAULT_SAMPLE_INTERVAL,
//!     );
//!
//!     controller.on_map_ready();
//!     controller.start_recording();
//!
//!     while let Some(tick) = ticks.recv().await {
//!         controller.handle_tick(tick);
//!     }
//! }
//! ```

mod error;
mod recorder;
mod storage;
mod trail;

pub use {
    error::{Result as CoreResult, TrailError},
    recorder::{
        DEFAULT_SAMPLE_INTERVAL, ICON_ID, INITIAL_ZOOM, LAYER_ID, LifecycleEvent,
        MapLayerRenderer, PositionSource, RecorderController, RecordingState, SOURCE_ID,
        SampleSchedule, ScheduleId, SymbolLayer, Tick, ToggleLabel, ToggleView, TrailRenderer,
    },
    storage::{
        FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, RECORDING_KEY, SavedState,
        TRAIL_KEY, TrailStore,
    },
    trail::{FeatureCollection, PointFeature, Position, Trail, TransportRecord},
};

#[cfg(test)]
mod tests;
