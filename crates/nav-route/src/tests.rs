//! Unit tests for nav-route.
//!
//! Most tests share a small embedded map:
//!
//! ```text
//!            D (34.0650,-118.4400)
//!   E ─ Elm ─┤
//!   │        L  Public Library
//!  Elm       │ Oak Avenue
//!   │        │
//!   A ─S──── B ───T── C
//!     Main Street
//! ```
//!
//! S = Griffith Observatory, T = City Hall (also "Clock Tower").  A separate
//! "Island Road" carries Lonely Park and Island Pier and is unreachable from
//! the rest.

#[cfg(test)]
mod fixture {
    use std::io::Cursor;

    use nav_core::Coordinate;
    use nav_map::load_map_reader;

    use crate::{RouteConfig, RouteEngine};

    pub const MAP: &str = "\
Main Street
34.0600, -118.4500 34.0600, -118.4450
1
Griffith Observatory|34.0600, -118.4480
Main Street
34.0600, -118.4450 34.0600, -118.4400
2
City Hall|34.0600, -118.4420
Clock Tower|34.0600, -118.4420
Oak Avenue
34.0600, -118.4400 34.0650, -118.4400
1
Public Library|34.0630, -118.4400
Elm Street
34.0600, -118.4500 34.0650, -118.4500
0
Elm Street
34.0650, -118.4500 34.0650, -118.4400
0
Island Road
35.0000, -117.0000 35.0000, -117.0100
2
Lonely Park|35.0000, -117.0050
Island Pier|35.0000, -117.0100
";

    pub fn c(lat: &str, lon: &str) -> Coordinate {
        Coordinate::parse(lat, lon).unwrap()
    }

    pub fn engine() -> RouteEngine {
        engine_with(RouteConfig::default())
    }

    pub fn engine_with(config: RouteConfig) -> RouteEngine {
        RouteEngine::with_config(load_map_reader(Cursor::new(MAP)).unwrap(), config)
    }

    pub fn griffith() -> Coordinate { c("34.0600", "-118.4480") }
    pub fn b() -> Coordinate { c("34.0600", "-118.4450") }
    pub fn corner() -> Coordinate { c("34.0600", "-118.4400") }
    pub fn city_hall() -> Coordinate { c("34.0600", "-118.4420") }
    pub fn library() -> Coordinate { c("34.0630", "-118.4400") }
}

// ── Step types ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod steps {
    use nav_core::{GeoSegment, Octant};

    use super::fixture::c;
    use crate::{NavigationStep, Route, TurnDirection};

    fn proceed(miles: f64) -> NavigationStep {
        NavigationStep::Proceed {
            direction:      Octant::East,
            street:         "Main Street".into(),
            distance_miles: miles,
            geometry:       GeoSegment::new(c("0", "0"), c("0", "1")),
        }
    }

    #[test]
    fn turn_classification_boundary() {
        assert_eq!(TurnDirection::from_angle(0.0), TurnDirection::Left);
        assert_eq!(TurnDirection::from_angle(90.0), TurnDirection::Left);
        assert_eq!(TurnDirection::from_angle(179.999), TurnDirection::Left);
        assert_eq!(TurnDirection::from_angle(180.0), TurnDirection::Right);
        assert_eq!(TurnDirection::from_angle(270.0), TurnDirection::Right);
    }

    #[test]
    fn display() {
        assert_eq!(proceed(0.25).to_string(), "Proceed 0.25 miles east on Main Street");
        let turn = NavigationStep::Turn { direction: TurnDirection::Left, street: "Oak Avenue".into() };
        assert_eq!(turn.to_string(), "Turn left onto Oak Avenue");
        assert_eq!(turn.street(), "Oak Avenue");
    }

    #[test]
    fn route_summaries() {
        let route = Route {
            steps: vec![
                proceed(0.5),
                NavigationStep::Turn { direction: TurnDirection::Right, street: "Oak Avenue".into() },
                proceed(0.25),
            ],
        };
        assert!((route.total_distance_miles() - 0.75).abs() < 1e-12);
        assert_eq!(route.turn_count(), 1);
        assert!(!route.is_trivial());
        assert!(Route::default().is_trivial());
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::RouteConfig;

    #[test]
    fn default_has_ten_second_deadline() {
        let cfg = RouteConfig::default();
        assert_eq!(cfg.search_timeout_ms, Some(10_000));
        assert_eq!(cfg.search_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn unbounded_has_no_deadline() {
        assert_eq!(RouteConfig::unbounded().search_timeout(), None);
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use nav_core::{Octant, distance_miles};

    use super::fixture::{b, city_hall, corner, engine, engine_with, griffith, library};
    use crate::{NavigationStep, RouteConfig, RouteError, TurnDirection};

    /// `(street, direction)` of every step, turns rendered as their text.
    fn outline(steps: &[NavigationStep]) -> Vec<String> {
        steps.iter().map(|s| match s {
            NavigationStep::Proceed { direction, street, .. } => format!("{street}:{direction}"),
            NavigationStep::Turn { .. } => s.to_string(),
        }).collect()
    }

    #[test]
    fn engine_counts() {
        let e = engine();
        assert_eq!(e.segment_count(), 6);
        assert_eq!(e.point_count(), 6);
        assert_eq!(e.segment(nav_core::SegmentId(2)).map(|s| s.street.as_str()), Some("Oak Avenue"));
        assert!(e.segment(nav_core::SegmentId(99)).is_none());
    }

    #[test]
    fn straight_along_one_street() {
        let route = engine().route("Griffith Observatory", "City Hall").unwrap();
        assert_eq!(outline(&route.steps), vec!["Main Street:east", "Main Street:east"]);
        assert_eq!(route.turn_count(), 0);

        let expected = distance_miles(&griffith(), &b()) + distance_miles(&b(), &city_hall());
        assert!((route.total_distance_miles() - expected).abs() < 1e-12);
    }

    #[test]
    fn left_turn_onto_oak() {
        let route = engine().route("Griffith Observatory", "Public Library").unwrap();
        assert_eq!(
            outline(&route.steps),
            vec![
                "Main Street:east",
                "Main Street:east",
                "Turn left onto Oak Avenue",
                "Oak Avenue:north",
            ]
        );

        // Shorter than going round by Elm Street.
        let expected = distance_miles(&griffith(), &b())
            + distance_miles(&b(), &corner())
            + distance_miles(&corner(), &library());
        assert!((route.total_distance_miles() - expected).abs() < 1e-12);
    }

    #[test]
    fn right_turn_on_the_way_back() {
        let route = engine().route("Public Library", "Griffith Observatory").unwrap();
        assert_eq!(
            outline(&route.steps),
            vec![
                "Oak Avenue:south",
                "Turn right onto Main Street",
                "Main Street:west",
                "Main Street:west",
            ]
        );
        assert!(matches!(
            route.steps[1],
            NavigationStep::Turn { direction: TurnDirection::Right, .. }
        ));
    }

    #[test]
    fn proceed_carries_segment_geometry() {
        let route = engine().route("Public Library", "Griffith Observatory").unwrap();
        match &route.steps[0] {
            NavigationStep::Proceed { geometry, direction, .. } => {
                assert_eq!(*direction, Octant::South);
                assert_eq!(geometry.start, corner());
                assert_eq!(geometry.end, super::fixture::c("34.0650", "-118.4400"));
            }
            other => panic!("expected proceed, got {other}"),
        }
    }

    #[test]
    fn names_ignore_case() {
        let e = engine();
        let exact = e.route("Griffith Observatory", "Public Library").unwrap();
        let folded = e.route("griffith OBSERVATORY", "public library").unwrap();
        assert_eq!(exact, folded);
    }

    #[test]
    fn unknown_source_checked_first() {
        let err = engine().route("Atlantis", "Nowhere").unwrap_err();
        assert_eq!(err, RouteError::BadSource { name: "Atlantis".into() });
    }

    #[test]
    fn unknown_destination() {
        let err = engine().route("City Hall", "Nowhere").unwrap_err();
        assert_eq!(err, RouteError::BadDestination { name: "Nowhere".into() });
    }

    #[test]
    fn disconnected_component_is_no_route() {
        let err = engine().route("Griffith Observatory", "Lonely Park").unwrap_err();
        assert_eq!(
            err,
            RouteError::NoRoute { from: "Griffith Observatory".into(), to: "Lonely Park".into() }
        );
    }

    #[test]
    fn route_within_island() {
        let route = engine().route("Lonely Park", "Island Pier").unwrap();
        assert_eq!(outline(&route.steps), vec!["Island Road:west"]);
    }

    #[test]
    fn same_place_is_empty_route() {
        let e = engine();
        assert!(e.route("City Hall", "city hall").unwrap().is_trivial());
        // Two names on one coordinate are the same place.
        assert!(e.route("City Hall", "Clock Tower").unwrap().is_trivial());
    }

    #[test]
    fn shared_coordinate_names_route_identically() {
        let e = engine();
        assert_eq!(
            e.route("Griffith Observatory", "City Hall").unwrap(),
            e.route("Griffith Observatory", "Clock Tower").unwrap()
        );
    }

    #[test]
    fn zero_deadline_times_out() {
        let e = engine_with(RouteConfig::with_timeout_ms(0));
        let err = e.route("Griffith Observatory", "Public Library").unwrap_err();
        assert_eq!(err, RouteError::Timeout { limit_ms: 0 });
    }

    #[test]
    fn unbounded_config_routes() {
        let e = engine_with(RouteConfig::unbounded());
        assert!(e.route("Griffith Observatory", "Public Library").is_ok());
    }

    #[test]
    fn repeated_queries_agree() {
        let e = engine();
        let first = e.route("Public Library", "City Hall").unwrap();
        for _ in 0..5 {
            assert_eq!(e.route("Public Library", "City Hall").unwrap(), first);
        }
    }

    #[test]
    fn route_many_keeps_query_order() {
        let e = engine();
        let queries = [
            ("Griffith Observatory", "City Hall"),
            ("Atlantis", "City Hall"),
            ("Griffith Observatory", "Lonely Park"),
            ("Public Library", "Griffith Observatory"),
        ];
        let results = e.route_many(&queries);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0], e.route("Griffith Observatory", "City Hall"));
        assert!(matches!(results[1], Err(RouteError::BadSource { .. })));
        assert!(matches!(results[2], Err(RouteError::NoRoute { .. })));
        assert_eq!(results[3].as_ref().map(|r| r.turn_count()), Ok(1));
    }
}

// ── Optimality on random grids ────────────────────────────────────────────────

#[cfg(test)]
mod optimality {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use nav_core::{Coordinate, StreetSegment, distance_miles};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{NavigationStep, RouteConfig, RouteEngine};

    const SIDE: usize = 8;

    struct Grid {
        nodes:    Vec<Coordinate>,
        edges:    Vec<(usize, usize)>,
        segments: Vec<StreetSegment>,
    }

    /// Jittered `SIDE × SIDE` lattice with random diagonals.  "Start" sits on
    /// node 0 and "Goal" on the far corner.
    fn grid(seed: u64) -> Grid {
        let mut rng = SmallRng::seed_from_u64(seed);
        let idx = |r: usize, col: usize| r * SIDE + col;

        let nodes: Vec<Coordinate> = (0..SIDE * SIDE)
            .map(|i| {
                let (r, col) = (i / SIDE, i % SIDE);
                let lat = 34.0 + r as f64 * 0.01 + rng.gen_range(-0.003..0.003);
                let lon = -118.0 + col as f64 * 0.01 + rng.gen_range(-0.003..0.003);
                Coordinate::parse(&format!("{lat:.6}"), &format!("{lon:.6}")).unwrap()
            })
            .collect();

        let mut edges = Vec::new();
        for r in 0..SIDE {
            for col in 0..SIDE {
                if col + 1 < SIDE {
                    edges.push((idx(r, col), idx(r, col + 1)));
                }
                if r + 1 < SIDE {
                    edges.push((idx(r, col), idx(r + 1, col)));
                }
                if r + 1 < SIDE && col + 1 < SIDE && rng.gen_range(0..2) == 0 {
                    edges.push((idx(r, col), idx(r + 1, col + 1)));
                }
            }
        }

        let goal = SIDE * SIDE - 1;
        let mut segments: Vec<StreetSegment> = edges
            .iter()
            .enumerate()
            .map(|(k, &(a, b))| {
                StreetSegment::new(format!("Street {k}"), nodes[a].clone(), nodes[b].clone())
            })
            .collect();
        if let Some(first) = segments.iter_mut().find(|s| s.geometry.start == nodes[0]) {
            first.points_of_interest.push(nav_core::PointOfInterest::new("Start", nodes[0].clone()));
        }
        if let Some(last) = segments.iter_mut().find(|s| s.geometry.end == nodes[goal]) {
            last.points_of_interest.push(nav_core::PointOfInterest::new("Goal", nodes[goal].clone()));
        }

        Grid { nodes, edges, segments }
    }

    /// Plain Dijkstra from `source` over the lattice edges.
    fn shortest(grid: &Grid, source: usize) -> Vec<f64> {
        let n = grid.nodes.len();
        let mut adj = vec![Vec::new(); n];
        for &(a, b) in &grid.edges {
            let w = distance_miles(&grid.nodes[a], &grid.nodes[b]);
            adj[a].push((b, w));
            adj[b].push((a, w));
        }

        let mut dist = vec![f64::INFINITY; n];
        dist[source] = 0.0;
        // Distances are non-negative, so their bit patterns order like the values.
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0.0f64.to_bits(), source)));
        while let Some(Reverse((bits, u))) = heap.pop() {
            let d = f64::from_bits(bits);
            if d > dist[u] {
                continue;
            }
            for &(v, w) in &adj[u] {
                let nd = d + w;
                if nd < dist[v] {
                    dist[v] = nd;
                    heap.push(Reverse((nd.to_bits(), v)));
                }
            }
        }
        dist
    }

    #[test]
    fn heuristic_never_overestimates() {
        for seed in 0..5 {
            let g = grid(seed);
            let goal = g.nodes.len() - 1;
            let dist = shortest(&g, goal);
            for (i, node) in g.nodes.iter().enumerate() {
                assert!(
                    distance_miles(node, &g.nodes[goal]) <= dist[i] + 1e-9,
                    "seed {seed} node {i}"
                );
            }
        }
    }

    #[test]
    fn route_matches_dijkstra() {
        for seed in 0..20 {
            let g = grid(seed);
            let goal = g.nodes.len() - 1;
            let best = shortest(&g, 0)[goal];

            let engine = RouteEngine::with_config(g.segments, RouteConfig::unbounded());
            let route = engine.route("Start", "Goal").unwrap();

            assert!(
                (route.total_distance_miles() - best).abs() < 1e-9,
                "seed {seed}: got {} want {best}",
                route.total_distance_miles()
            );
            // Every street is distinct, so each hop after the first is a turn.
            let hops = route.steps.iter().filter(|s| matches!(s, NavigationStep::Proceed { .. })).count();
            assert_eq!(route.turn_count(), hops - 1, "seed {seed}");
        }
    }
}

// ── Lazy re-expansion ─────────────────────────────────────────────────────────

#[cfg(test)]
mod reexpansion {
    use nav_core::{StreetSegment, distance_miles};
    use nav_map::SpatialIndex;

    use super::fixture::c;
    use crate::search::{AStar, SearchFailure};

    /// `(0,0) ── (0,1) ── (0,2)` on one street, "Start" and "End" at the ends.
    fn line() -> Vec<StreetSegment> {
        vec![
            StreetSegment::new("Main Street", c("0", "0"), c("0", "1")).with_point("Start", c("0", "0")),
            StreetSegment::new("Main Street", c("0", "1"), c("0", "2")).with_point("End", c("0", "2")),
        ]
    }

    #[test]
    fn closed_coordinate_reopens_on_better_f() {
        let segs = line();
        let spatial = SpatialIndex::build(&segs);
        let (start, mid, dest) = (&segs[0].geometry.start, &segs[0].geometry.end, &segs[1].geometry.end);

        let mut search = AStar::new(&segs, &spatial, dest);
        search.seed_closed(mid, 1e9, Some(dest));

        let path = search.run(start, None).unwrap();
        assert_eq!(path, vec![start, mid, dest]);
        assert_eq!(search.stats().reopened, 1);

        let expected_f = distance_miles(start, mid) + distance_miles(mid, dest);
        let best = search.closed_f(mid).unwrap();
        assert!(best < 1e9);
        assert!((best - expected_f).abs() < 1e-12);
        assert_eq!(search.parent_of(mid), Some(Some(start)));
    }

    #[test]
    fn equal_f_is_not_reopened() {
        let segs = line();
        let spatial = SpatialIndex::build(&segs);
        let (start, mid, dest) = (&segs[0].geometry.start, &segs[0].geometry.end, &segs[1].geometry.end);

        // Exactly the f the search computes when it reaches `mid` from `start`.
        let g = 0.0 + distance_miles(start, mid);
        let same_f = g + distance_miles(mid, dest);

        let mut search = AStar::new(&segs, &spatial, dest);
        search.seed_closed(mid, same_f, Some(dest));

        // `mid` is the only way on, so discarding it exhausts the frontier.
        assert_eq!(search.run(start, None), Err(SearchFailure::Exhausted));
        assert_eq!(search.stats().reopened, 0);
        assert_eq!(search.closed_f(mid), Some(same_f));
        assert_eq!(search.parent_of(mid), Some(Some(dest)));
    }
}

// ── Parallel batch routing ────────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel {
    use super::fixture::engine;

    #[test]
    fn route_many_matches_sequential_order() {
        let e = engine();
        let names = [
            "Griffith Observatory",
            "City Hall",
            "Public Library",
            "Lonely Park",
            "Island Pier",
            "Atlantis",
        ];
        let queries: Vec<(&str, &str)> = names
            .iter()
            .flat_map(|&from| names.iter().map(move |&to| (from, to)))
            .collect();

        let results = e.route_many(&queries);

        assert_eq!(results.len(), queries.len());
        for ((from, to), got) in queries.iter().zip(&results) {
            assert_eq!(got, &e.route(from, to), "{from} -> {to}");
        }
    }
}
