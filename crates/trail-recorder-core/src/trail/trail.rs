use crate::{
    CoreResult, Position,
    trail::transport::{FeatureCollection, TransportRecord, decode_record, encode_record},
};

use tracing::warn;

/// Ordered sequence of recorded positions, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    positions: Vec<Position>,
}

impl Trail {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample at the end of the trail.
    pub fn append(&mut self, position: Position) {
        self.positions.push(position);
    }

    /// Drop every sample.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Samples in recording order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no sample has been recorded.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Encode every sample as a GeoJSON point feature, in recording order.
    #[track_caller]
    pub fn to_transport(&self) -> CoreResult<Vec<TransportRecord>> {
        self.positions.iter().copied().map(encode_record).collect()
    }

    /// Decode a transport list. The first malformed record fails the whole
    /// decode; no partial trail is ever returned.
    #[track_caller]
    pub fn from_transport(records: &[TransportRecord]) -> CoreResult<Self> {
        let positions = records
            .iter()
            .enumerate()
            .map(|(index, record)| decode_record(index, record))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(Self { positions })
    }

    /// Like [`Trail::from_transport`], but a malformed list yields an empty trail.
    pub fn from_transport_or_empty(records: &[TransportRecord]) -> Self {
        match Self::from_transport(records) {
            Ok(trail) => trail,
            Err(e) => {
                warn!(error = %e, records = records.len(), "Discarding malformed trail");
                Self::new()
            }
        }
    }

    /// Snapshot of the trail as a GeoJSON `FeatureCollection`.
    #[track_caller]
    pub fn to_feature_collection(&self) -> CoreResult<FeatureCollection> {
        Ok(FeatureCollection::new(self.to_transport()?))
    }
}

impl FromIterator<Position> for Trail {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}
