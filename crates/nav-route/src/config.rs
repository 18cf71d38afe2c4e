//! Route engine configuration.

use std::time::Duration;

/// Tunables applied to every query run by a [`RouteEngine`](crate::RouteEngine).
///
/// Typically built by the application from command-line flags or loaded from
/// a JSON file (with the `serde` feature).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// Wall-clock budget for one search, in milliseconds.  `None` lets the
    /// search run until the frontier is exhausted.  Default: 10 000.
    pub search_timeout_ms: Option<u64>,
}

impl RouteConfig {
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

    /// Configuration with no search deadline.
    pub fn unbounded() -> Self {
        Self { search_timeout_ms: None }
    }

    pub fn with_timeout_ms(ms: u64) -> Self {
        Self { search_timeout_ms: Some(ms) }
    }

    #[inline]
    pub fn search_timeout(&self) -> Option<Duration> {
        self.search_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self::with_timeout_ms(Self::DEFAULT_TIMEOUT_MS)
    }
}
