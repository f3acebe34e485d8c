mod collaborators;
mod controller;
mod lifecycle;
mod map_layer;
mod recording_state;
mod schedule;

pub use {
    collaborators::{PositionSource, ToggleLabel, ToggleView, TrailRenderer},
    controller::{DEFAULT_SAMPLE_INTERVAL, RecorderController},
    lifecycle::LifecycleEvent,
    map_layer::{ICON_ID, INITIAL_ZOOM, LAYER_ID, MapLayerRenderer, SOURCE_ID, SymbolLayer},
    recording_state::RecordingState,
    schedule::{SampleSchedule, ScheduleId, Tick},
};
