//! Core error type.
//!
//! Sub-crates define their own error enums and carry `CoreError` as the
//! `#[source]` of a variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate ({latitude:?}, {longitude:?}): expected decimal degrees")]
    InvalidCoordinate { latitude: String, longitude: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
