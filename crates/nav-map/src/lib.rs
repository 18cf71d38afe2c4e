//! `nav-map` — map data structures and loading.
//!
//! # Crate layout
//!
//! | Module            | Contents                                              |
//! |-------------------|-------------------------------------------------------|
//! | [`ordered_map`]   | `OrderedMap<K, V>` unbalanced binary search tree      |
//! | [`spatial_index`] | `SpatialIndex`: coordinate → incident `SegmentId`s    |
//! | [`point_index`]   | `PointIndex`: folded name → coordinate                |
//! | [`loader`]        | `load_map`, `load_map_reader`                         |
//! | [`error`]         | `MapError`, `MapResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `nav-core` types.       |

pub mod error;
pub mod loader;
pub mod ordered_map;
pub mod point_index;
pub mod spatial_index;


pub use error::{MapError, MapResult};
pub use loader::{load_map, load_map_reader};
pub use ordered_map::OrderedMap;
pub use point_index::PointIndex;
pub use spatial_index::SpatialIndex;
