//! Street segments and the points of interest placed along them.

use crate::{Coordinate, GeoSegment};

/// A named place located on a street segment, not necessarily at either end.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Name as written in the map file.  Lookups fold case; storage doesn't.
    pub name:     String,
    pub location: Coordinate,
}

impl PointOfInterest {
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self { name: name.into(), location }
    }
}

/// One straight stretch of a street between two coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreetSegment {
    pub street:             String,
    pub geometry:           GeoSegment,
    pub points_of_interest: Vec<PointOfInterest>,
}

impl StreetSegment {
    pub fn new(street: impl Into<String>, start: Coordinate, end: Coordinate) -> Self {
        Self {
            street:             street.into(),
            geometry:           GeoSegment::new(start, end),
            points_of_interest: Vec::new(),
        }
    }

    /// Builder-style helper used by loaders and tests.
    pub fn with_point(mut self, name: impl Into<String>, location: Coordinate) -> Self {
        self.points_of_interest.push(PointOfInterest::new(name, location));
        self
    }

    /// `true` if any point of interest on this segment sits at `coord`.
    pub fn hosts(&self, coord: &Coordinate) -> bool {
        self.points_of_interest.iter().any(|p| p.location == *coord)
    }
}
