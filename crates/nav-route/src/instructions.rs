//! Coordinate path → navigation steps.
//!
//! Each consecutive pair of path coordinates becomes one `Proceed` step along
//! the street segment connecting them.  When the street name changes between
//! pairs a `Turn` is emitted first, classified from the counter-clockwise
//! angle between the previous pair's line and the current one.

use nav_core::{
    Coordinate, GeoSegment, Octant, StreetSegment, bearing_deg, distance_miles, turn_angle_deg,
};
use nav_map::SpatialIndex;

use crate::step::{NavigationStep, TurnDirection};

/// Build steps for `path`.  Returns `None` if some pair has no connecting
/// segment in the index.
pub(crate) fn build_steps(
    segments: &[StreetSegment],
    spatial: &SpatialIndex,
    path: &[&Coordinate],
) -> Option<Vec<NavigationStep>> {
    let mut steps = Vec::with_capacity(path.len());

    for i in 1..path.len() {
        let (first, second) = (path[i - 1], path[i]);
        let seg = connecting_segment(segments, spatial, first, second)?;

        let turning = steps
            .last()
            .is_some_and(|prev: &NavigationStep| prev.street() != seg.street);
        if turning {
            // A previous step exists, so `i >= 2`.
            let before = GeoSegment::new(path[i - 2].clone(), first.clone());
            let after = GeoSegment::new(first.clone(), second.clone());
            steps.push(NavigationStep::Turn {
                direction: TurnDirection::from_angle(turn_angle_deg(&before, &after)),
                street:    seg.street.clone(),
            });
        }

        steps.push(NavigationStep::Proceed {
            direction:      Octant::from_bearing(bearing_deg(first, second)),
            street:         seg.street.clone(),
            distance_miles: distance_miles(first, second),
            geometry:       seg.geometry.clone(),
        });
    }

    Some(steps)
}

/// Segment carrying the hop `first → second`.
///
/// A segment whose endpoints are exactly the pair wins.  Otherwise the last
/// incident segment hosting either coordinate as a point of interest is used.
fn connecting_segment<'s>(
    segments: &'s [StreetSegment],
    spatial: &SpatialIndex,
    first: &Coordinate,
    second: &Coordinate,
) -> Option<&'s StreetSegment> {
    let mut hosting = None;
    for &id in spatial.bucket(first) {
        let seg = &segments[id.index()];
        if seg.geometry.joins(first, second) {
            return Some(seg);
        }
        if seg.hosts(first) || seg.hosts(second) {
            hosting = Some(seg);
        }
    }
    hosting
}
