//! Coordinate → incident street segments.
//!
//! Every coordinate that matters to routing gets a bucket: both endpoints of
//! each segment, plus the location of every point of interest on it.  A
//! bucket lists the [`SegmentId`]s touching that coordinate, in the order the
//! segments were supplied.  Buckets are never deduplicated: a segment whose
//! two endpoints are the same coordinate appears twice in that bucket.
//!
//! The index is immutable once built and is shared read-only by every
//! routing query.

use tracing::debug;

use nav_core::{Coordinate, SegmentId, StreetSegment};

use crate::OrderedMap;

/// Lookup from exact coordinate text to the segments touching it.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    buckets: OrderedMap<Coordinate, Vec<SegmentId>>,
}

impl SpatialIndex {
    /// Index `segments`, using each segment's position as its `SegmentId`.
    pub fn build(segments: &[StreetSegment]) -> Self {
        let mut index = Self { buckets: OrderedMap::new() };

        for (i, seg) in segments.iter().enumerate() {
            let id = SegmentId(i as u32);

            index.insert(&seg.geometry.start, id);
            index.insert(&seg.geometry.end, id);
            for poi in &seg.points_of_interest {
                index.insert(&poi.location, id);
            }
        }

        debug!(
            segments = segments.len(),
            coordinates = index.buckets.size(),
            "built spatial index"
        );
        index
    }

    fn insert(&mut self, coord: &Coordinate, id: SegmentId) {
        if let Some(bucket) = self.buckets.find_mut(coord) {
            bucket.push(id);
        } else {
            self.buckets.associate(coord.clone(), vec![id]);
        }
    }

    /// Owned copy of the segments touching `coord`; empty if unknown.
    pub fn segments_at(&self, coord: &Coordinate) -> Vec<SegmentId> {
        self.bucket(coord).to_vec()
    }

    /// Borrowed view of the segments touching `coord`; empty if unknown.
    #[inline]
    pub fn bucket(&self, coord: &Coordinate) -> &[SegmentId] {
        self.buckets.find(coord).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct coordinates with at least one incident segment.
    pub fn coordinate_count(&self) -> usize {
        self.buckets.size()
    }
}
