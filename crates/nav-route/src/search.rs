//! A* over the coordinate graph.
//!
//! Nodes are coordinates; the neighbours of a coordinate are the endpoints of
//! every street segment incident to it (via the [`SpatialIndex`]).  A segment
//! that hosts the destination as a point of interest also yields a direct
//! edge to the destination, so mid-block places are reachable.
//!
//! # Costs
//!
//! `g` is the accumulated great-circle distance in miles and `h` the
//! great-circle distance to the destination.  The heuristic never
//! overestimates, so the first time the destination is popped its `g` is
//! optimal.
//!
//! # Closed set
//!
//! A popped coordinate is closed with its `f` value.  A closed coordinate is
//! pushed again only with a strictly smaller `f`, and is re-expanded when
//! that entry is popped.  Entries with equal `f` pop in push order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use nav_core::{Coordinate, StreetSegment, distance_miles};
use nav_map::SpatialIndex;
use rustc_hash::FxHashMap;

/// The deadline is checked on the first pop and then every this many pops.
const DEADLINE_CHECK_INTERVAL: u64 = 64;

// ── Outcome ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchFailure {
    /// Frontier emptied without reaching the destination.
    Exhausted,
    /// The wall-clock deadline passed.
    DeadlineExceeded,
    /// Predecessor chain did not lead back to the start.
    BrokenChain,
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SearchStats {
    pub popped: u64,
    pub pushed: u64,
    pub reopened: u64,
}

// ── Open list entry ───────────────────────────────────────────────────────────

struct OpenEntry<'a> {
    f:      f64,
    g:      f64,
    seq:    u64,
    coord:  &'a Coordinate,
    parent: Option<&'a Coordinate>,
}

// Reversed so `BinaryHeap` (a max-heap) pops the smallest `f`; on equal `f`
// the earlier push wins.
impl Ord for OpenEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.total_cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry<'_> {}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// State for one query.  Borrows every coordinate from the engine's
/// segments, so the search itself allocates no coordinate copies.
pub(crate) struct AStar<'a> {
    segments: &'a [StreetSegment],
    spatial:  &'a SpatialIndex,
    dest:     &'a Coordinate,
    open:     BinaryHeap<OpenEntry<'a>>,
    /// Best `f` with which each coordinate was closed.
    closed:   FxHashMap<&'a Coordinate, f64>,
    parents:  FxHashMap<&'a Coordinate, Option<&'a Coordinate>>,
    seq:      u64,
    stats:    SearchStats,
}

impl<'a> AStar<'a> {
    pub(crate) fn new(
        segments: &'a [StreetSegment],
        spatial: &'a SpatialIndex,
        dest: &'a Coordinate,
    ) -> Self {
        Self {
            segments,
            spatial,
            dest,
            open: BinaryHeap::new(),
            closed: FxHashMap::default(),
            parents: FxHashMap::default(),
            seq: 0,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search from `start` and return the coordinate path, start first and
    /// destination last.
    pub(crate) fn run(
        &mut self,
        start: &'a Coordinate,
        deadline: Option<Instant>,
    ) -> Result<Vec<&'a Coordinate>, SearchFailure> {
        let h = distance_miles(start, self.dest);
        self.push(start, 0.0, h, None);

        while let Some(entry) = self.open.pop() {
            if self.stats.popped % DEADLINE_CHECK_INTERVAL == 0 {
                if let Some(deadline) = deadline {
                    if Instant::now() >= deadline {
                        return Err(SearchFailure::DeadlineExceeded);
                    }
                }
            }
            self.stats.popped += 1;

            if entry.coord == self.dest {
                self.parents.insert(entry.coord, entry.parent);
                return self.path_to(start);
            }

            match self.closed.get(entry.coord) {
                Some(&best) if entry.f < best => self.stats.reopened += 1,
                Some(_) => continue,
                None => {}
            }
            self.closed.insert(entry.coord, entry.f);
            self.parents.insert(entry.coord, entry.parent);

            self.expand(&entry);
        }

        Err(SearchFailure::Exhausted)
    }

    fn expand(&mut self, current: &OpenEntry<'a>) {
        let segments = self.segments;
        let spatial = self.spatial;
        let dest = self.dest;

        for &id in spatial.bucket(current.coord) {
            let seg = &segments[id.index()];

            if seg.hosts(dest) {
                let g = current.g + distance_miles(current.coord, dest);
                self.push(dest, g, g, Some(current.coord));
            }

            for next in [&seg.geometry.start, &seg.geometry.end] {
                let g = current.g + distance_miles(current.coord, next);
                let f = g + distance_miles(next, dest);
                let improves = match self.closed.get(next) {
                    Some(&best) => f < best,
                    None => true,
                };
                if improves {
                    self.push(next, g, f, Some(current.coord));
                }
            }
        }
    }

    fn push(&mut self, coord: &'a Coordinate, g: f64, f: f64, parent: Option<&'a Coordinate>) {
        self.open.push(OpenEntry { f, g, seq: self.seq, coord, parent });
        self.seq += 1;
        self.stats.pushed += 1;
    }

    /// Walk predecessors back from the destination.
    fn path_to(&self, start: &'a Coordinate) -> Result<Vec<&'a Coordinate>, SearchFailure> {
        let mut path = vec![self.dest];
        let mut cur = self.dest;
        while let Some(&Some(parent)) = self.parents.get(cur) {
            // More hops than recorded coordinates means the chain loops.
            if path.len() > self.parents.len() {
                return Err(SearchFailure::BrokenChain);
            }
            path.push(parent);
            cur = parent;
        }
        if cur != start {
            return Err(SearchFailure::BrokenChain);
        }
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
impl<'a> AStar<'a> {
    /// Mark `coord` closed before the search starts.
    pub(crate) fn seed_closed(
        &mut self,
        coord: &'a Coordinate,
        f: f64,
        parent: Option<&'a Coordinate>,
    ) {
        self.closed.insert(coord, f);
        self.parents.insert(coord, parent);
    }

    pub(crate) fn closed_f(&self, coord: &Coordinate) -> Option<f64> {
        self.closed.get(coord).copied()
    }

    pub(crate) fn parent_of(&self, coord: &Coordinate) -> Option<Option<&'a Coordinate>> {
        self.parents.get(coord).copied()
    }
}
