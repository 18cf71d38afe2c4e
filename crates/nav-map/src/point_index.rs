//! Case-insensitive point-of-interest name → coordinate lookup.

use tracing::debug;

use nav_core::{Coordinate, StreetSegment};

use crate::OrderedMap;

/// Folded name → location of every point of interest on the map.
///
/// Names that collide after case folding keep the location seen last.
#[derive(Debug, Default)]
pub struct PointIndex {
    by_name: OrderedMap<String, Coordinate>,
}

impl PointIndex {
    pub fn build(segments: &[StreetSegment]) -> Self {
        let mut by_name = OrderedMap::new();
        for poi in segments.iter().flat_map(|s| &s.points_of_interest) {
            by_name.associate(fold(&poi.name), poi.location.clone());
        }

        debug!(points = by_name.size(), "built point-of-interest index");
        Self { by_name }
    }

    /// Location of the point of interest called `name`, ignoring case.
    pub fn resolve(&self, name: &str) -> Option<&Coordinate> {
        self.by_name.find(fold(name).as_str())
    }

    /// Number of distinct folded names.
    pub fn len(&self) -> usize {
        self.by_name.size()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[inline]
fn fold(name: &str) -> String {
    name.to_lowercase()
}
