mod position;
#[allow(clippy::module_inception)]
mod trail;
pub(crate) mod transport;

pub use {
    position::Position,
    trail::Trail,
    transport::{FeatureCollection, PointFeature, TransportRecord},
};
