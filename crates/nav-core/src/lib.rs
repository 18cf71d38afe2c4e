//! `nav-core` — foundational types for the street navigation workspace.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`geo`]       | `Coordinate`, `GeoSegment`, distance / bearing / angle    |
//! | [`direction`] | `Octant` compass buckets                                  |
//! | [`street`]    | `StreetSegment`, `PointOfInterest`                        |
//! | [`ids`]       | `SegmentId`                                               |
//! | [`error`]     | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod street;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Octant;
pub use error::{CoreError, CoreResult};
pub use geo::{bearing_deg, distance_miles, turn_angle_deg, Coordinate, GeoSegment};
pub use ids::SegmentId;
pub use street::{PointOfInterest, StreetSegment};
