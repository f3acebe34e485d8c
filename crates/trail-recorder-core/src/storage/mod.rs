mod key_value;
mod saved_state;
mod trail_store;

pub use {
    key_value::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore},
    saved_state::{RECORDING_KEY, SavedState},
    trail_store::{TRAIL_KEY, TrailStore},
};
