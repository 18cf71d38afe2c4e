//! `RouteEngine`: owns the map and its indexes, answers routing queries.
//!
//! The engine is immutable once built.  Every query allocates its own search
//! state, so one engine can serve any number of threads at once (see
//! [`RouteEngine::route_many`]).

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use nav_core::{SegmentId, StreetSegment};
use nav_map::{MapResult, PointIndex, SpatialIndex, load_map};

use crate::config::RouteConfig;
use crate::error::{RouteError, RouteResult};
use crate::instructions::build_steps;
use crate::search::{AStar, SearchFailure};
use crate::step::Route;

pub struct RouteEngine {
    segments: Vec<StreetSegment>,
    spatial:  SpatialIndex,
    points:   PointIndex,
    config:   RouteConfig,
}

impl RouteEngine {
    /// Index `segments` with the default configuration.
    pub fn build(segments: Vec<StreetSegment>) -> Self {
        Self::with_config(segments, RouteConfig::default())
    }

    pub fn with_config(segments: Vec<StreetSegment>, config: RouteConfig) -> Self {
        let spatial = SpatialIndex::build(&segments);
        let points = PointIndex::build(&segments);

        info!(
            segments    = segments.len(),
            coordinates = spatial.coordinate_count(),
            points      = points.len(),
            timeout_ms  = ?config.search_timeout_ms,
            "route engine ready"
        );
        Self { segments, spatial, points, config }
    }

    /// Load a map file and index it.
    ///
    /// # Errors
    ///
    /// Any [`nav_map::MapError`] from reading or parsing the file.
    pub fn load(path: &Path, config: RouteConfig) -> MapResult<Self> {
        let segments = load_map(path)?;
        Ok(Self::with_config(segments, config))
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Turn-by-turn route between two named points of interest.
    ///
    /// Names are matched ignoring case.  Two names at the same coordinate give
    /// an empty route.
    ///
    /// # Errors
    ///
    /// - [`RouteError::BadSource`] / [`RouteError::BadDestination`] for
    ///   unknown names (the source is checked first).
    /// - [`RouteError::NoRoute`] if the destination is unreachable.
    /// - [`RouteError::Timeout`] if the configured deadline passes.
    pub fn route(&self, start: &str, destination: &str) -> RouteResult<Route> {
        let from = self
            .points
            .resolve(start)
            .ok_or_else(|| RouteError::BadSource { name: start.to_owned() })?;
        let to = self
            .points
            .resolve(destination)
            .ok_or_else(|| RouteError::BadDestination { name: destination.to_owned() })?;

        let no_route = || RouteError::NoRoute {
            from: start.to_owned(),
            to:   destination.to_owned(),
        };

        if from == to {
            debug!(start, destination, "start and destination coincide");
            return Ok(Route::default());
        }

        let began = Instant::now();
        let deadline = self.config.search_timeout().map(|t| began + t);

        let mut search = AStar::new(&self.segments, &self.spatial, to);
        let outcome = search.run(from, deadline);
        let stats = search.stats();

        debug!(
            start,
            destination,
            popped     = stats.popped,
            pushed     = stats.pushed,
            reopened   = stats.reopened,
            elapsed_us = began.elapsed().as_micros() as u64,
            "search finished"
        );

        let path = match outcome {
            Ok(path) => path,
            Err(SearchFailure::Exhausted) => return Err(no_route()),
            Err(SearchFailure::DeadlineExceeded) => {
                let limit_ms = self.config.search_timeout_ms.unwrap_or_default();
                warn!(start, destination, limit_ms, "route search timed out");
                return Err(RouteError::Timeout { limit_ms });
            }
            Err(SearchFailure::BrokenChain) => {
                warn!(start, destination, "predecessor chain did not reach the start");
                return Err(no_route());
            }
        };

        match build_steps(&self.segments, &self.spatial, &path) {
            Some(steps) => Ok(Route { steps }),
            None => {
                warn!(start, destination, hops = path.len() - 1, "path hop has no connecting segment");
                Err(no_route())
            }
        }
    }

    /// Run several queries, returning results in query order.
    ///
    /// With the `parallel` feature queries run on the Rayon pool.
    pub fn route_many<S>(&self, queries: &[(S, S)]) -> Vec<RouteResult<Route>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries
                .par_iter()
                .map(|(from, to)| self.route(from.as_ref(), to.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|(from, to)| self.route(from.as_ref(), to.as_ref()))
                .collect()
        }
    }

    // ── Introspection ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of distinct (case-folded) point-of-interest names.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn segment(&self, id: SegmentId) -> Option<&StreetSegment> {
        self.segments.get(id.index())
    }

    pub fn segments(&self) -> &[StreetSegment] {
        &self.segments
    }
}
