//! `nav-route` — route search and turn-by-turn instructions.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`engine`]      | `RouteEngine`: index construction, `route`, `route_many`|
//! | [`step`]        | `NavigationStep`, `TurnDirection`, `Route`              |
//! | [`config`]      | `RouteConfig` (search deadline)                         |
//! | [`error`]       | `RouteError`, `RouteResult<T>`                          |
//! | `search`        | A* over the coordinate graph (internal)                 |
//! | `instructions`  | path → steps, turn classification (internal)           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `route_many` fans queries out over Rayon.                 |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod config;
pub mod engine;
pub mod error;
pub mod step;

mod instructions;
mod search;

#[cfg(test)]
mod tests;

pub use config::RouteConfig;
pub use engine::RouteEngine;
pub use error::{RouteError, RouteResult};
pub use step::{NavigationStep, Route, TurnDirection};
