//! Map-subsystem error type.

use thiserror::Error;

use nav_core::CoreError;

/// Errors produced by `nav-map`.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("bad coordinate at line {line}: {source}")]
    Coordinate {
        line:   usize,
        #[source]
        source: CoreError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
