//! Text-exact coordinates and the geometry primitives routing relies on.
//!
//! A [`Coordinate`] keeps the latitude/longitude exactly as written in the
//! map file.  Identity (`Eq`, `Hash`, `Ord`) is defined on that text alone:
//! two coordinates that differ only by a trailing zero are different graph
//! nodes.  The parsed `f64` values are carried alongside for geometry and
//! never take part in comparisons.
//!
//! Angles follow the map convention of `atan2(Δlat, Δlon)`: 0° points east,
//! 90° north, 180° west, 270° south.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{CoreError, CoreResult};

const EARTH_RADIUS_KM: f64 = 6_371.0;
const MILES_PER_KM: f64 = 0.621_371;

// ── Coordinate ────────────────────────────────────────────────────────────────

/// A latitude/longitude pair compared by its exact decimal text.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CoordinateText", into = "CoordinateText"))]
pub struct Coordinate {
    lat_text: String,
    lon_text: String,
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Parse a coordinate from its latitude and longitude text.
    ///
    /// Surrounding whitespace is trimmed before the text is stored.  Text
    /// that is not a finite decimal number is rejected.
    pub fn parse(latitude: &str, longitude: &str) -> CoreResult<Self> {
        let lat_text = latitude.trim();
        let lon_text = longitude.trim();

        let invalid = || CoreError::InvalidCoordinate {
            latitude:  latitude.to_owned(),
            longitude: longitude.to_owned(),
        };

        let lat: f64 = lat_text.parse().map_err(|_| invalid())?;
        let lon: f64 = lon_text.parse().map_err(|_| invalid())?;
        if !lat.is_finite() || !lon.is_finite() {
            return Err(invalid());
        }

        Ok(Self {
            lat_text: lat_text.to_owned(),
            lon_text: lon_text.to_owned(),
            lat,
            lon,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.lon
    }

    pub fn latitude_text(&self) -> &str {
        &self.lat_text
    }

    pub fn longitude_text(&self) -> &str {
        &self.lon_text
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.lat_text == other.lat_text && self.lon_text == other.lon_text
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat_text.hash(state);
        self.lon_text.hash(state);
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lat_text
            .cmp(&other.lat_text)
            .then_with(|| self.lon_text.cmp(&other.lon_text))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat_text, self.lon_text)
    }
}

/// Wire form of a [`Coordinate`]: only the text is serialized, the numeric
/// values are re-derived on the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CoordinateText {
    latitude:  String,
    longitude: String,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordinateText> for Coordinate {
    type Error = CoreError;

    fn try_from(raw: CoordinateText) -> Result<Self, Self::Error> {
        Coordinate::parse(&raw.latitude, &raw.longitude)
    }
}

#[cfg(feature = "serde")]
impl From<Coordinate> for CoordinateText {
    fn from(c: Coordinate) -> Self {
        CoordinateText { latitude: c.lat_text, longitude: c.lon_text }
    }
}

// ── GeoSegment ────────────────────────────────────────────────────────────────

/// A directed straight line between two coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoSegment {
    pub start: Coordinate,
    pub end:   Coordinate,
}

impl GeoSegment {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// `true` if `{a, b}` are this segment's endpoints, in either order.
    pub fn joins(&self, a: &Coordinate, b: &Coordinate) -> bool {
        (self.start == *a && self.end == *b) || (self.start == *b && self.end == *a)
    }

    #[inline]
    fn angle_rad(&self) -> f64 {
        line_angle_rad(&self.start, &self.end)
    }
}

impl fmt::Display for GeoSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

// ── Primitives ────────────────────────────────────────────────────────────────

/// Raw line angle in radians, in (-π, π].
#[inline]
fn line_angle_rad(start: &Coordinate, end: &Coordinate) -> f64 {
    (end.lat - start.lat).atan2(end.lon - start.lon)
}

/// Haversine great-circle distance in miles.
///
/// Used both as the edge cost and as the A* heuristic; since every edge is
/// itself a great-circle hop the heuristic never overestimates.
pub fn distance_miles(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c * MILES_PER_KM
}

/// Direction of travel from `a` to `b` in degrees, in `[0, 360)`.
pub fn bearing_deg(a: &Coordinate, b: &Coordinate) -> f64 {
    let deg = line_angle_rad(a, b).to_degrees();
    if deg < 0.0 { deg + 360.0 } else { deg }
}

/// Counter-clockwise angle from `first` to `second` in degrees, in `[0, 360)`.
///
/// Values below 180 mean `second` bends to the left of `first`.
pub fn turn_angle_deg(first: &GeoSegment, second: &GeoSegment) -> f64 {
    let deg = (second.angle_rad() - first.angle_rad()).to_degrees();
    if deg < 0.0 { deg + 360.0 } else { deg }
}
