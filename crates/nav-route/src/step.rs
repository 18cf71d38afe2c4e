//! Turn-by-turn output types.

use std::fmt;

use nav_core::{GeoSegment, Octant};

// ── TurnDirection ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TurnDirection {
    Left,
    Right,
}

impl TurnDirection {
    /// Classify a counter-clockwise turn angle in degrees.
    ///
    /// Strictly below 180 is `Left`; 180 itself and everything above is
    /// `Right`.
    pub fn from_angle(deg: f64) -> Self {
        if deg < 180.0 { TurnDirection::Left } else { TurnDirection::Right }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TurnDirection::Left  => "left",
            TurnDirection::Right => "right",
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NavigationStep ────────────────────────────────────────────────────────────

/// One instruction in a route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum NavigationStep {
    /// Travel in a straight line along one street segment.
    Proceed {
        direction:      Octant,
        street:         String,
        distance_miles: f64,
        /// Endpoints of the street segment being travelled.
        geometry:       GeoSegment,
    },
    /// Change onto a differently named street.
    Turn {
        direction: TurnDirection,
        street:    String,
    },
}

impl NavigationStep {
    pub fn street(&self) -> &str {
        match self {
            NavigationStep::Proceed { street, .. } | NavigationStep::Turn { street, .. } => street,
        }
    }

    pub fn is_turn(&self) -> bool {
        matches!(self, NavigationStep::Turn { .. })
    }
}

impl fmt::Display for NavigationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationStep::Proceed { direction, street, distance_miles, .. } => {
                write!(f, "Proceed {distance_miles:.2} miles {direction} on {street}")
            }
            NavigationStep::Turn { direction, street } => {
                write!(f, "Turn {direction} onto {street}")
            }
        }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a successful routing query.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Instructions in travel order, start to destination.
    pub steps: Vec<NavigationStep>,
}

impl Route {
    /// Sum of every `Proceed` distance.
    pub fn total_distance_miles(&self) -> f64 {
        self.steps
            .iter()
            .map(|s| match s {
                NavigationStep::Proceed { distance_miles, .. } => *distance_miles,
                NavigationStep::Turn { .. } => 0.0,
            })
            .sum()
    }

    pub fn turn_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_turn()).count()
    }

    /// `true` if start and destination are the same place.
    pub fn is_trivial(&self) -> bool {
        self.steps.is_empty()
    }
}
