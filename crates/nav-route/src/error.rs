//! Routing error type.
//!
//! Every variant is a terminal outcome for the query that produced it.  The
//! search is deterministic, so retrying the same query gives the same error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown starting point {name:?}")]
    BadSource { name: String },

    #[error("unknown destination {name:?}")]
    BadDestination { name: String },

    #[error("no route from {from:?} to {to:?}")]
    NoRoute { from: String, to: String },

    #[error("route search exceeded its {limit_ms} ms deadline")]
    Timeout { limit_ms: u64 },
}

pub type RouteResult<T> = Result<T, RouteError>;
