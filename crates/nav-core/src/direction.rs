//! Compass octants used to label the direction of travel.

/// One of eight 45°-wide compass buckets.
///
/// Bucket edges are inclusive on the upper side: 22.5° is still `East`,
/// 67.5° still `Northeast`, and so on round to 337.5° (`Southeast`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Octant {
    East,
    Northeast,
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
}

impl Octant {
    /// Classify a bearing in degrees (0° = east, counter-clockwise).
    ///
    /// Anything outside `[0, 337.5]`, including NaN, reads as `East`.
    pub fn from_bearing(deg: f64) -> Self {
        if !(0.0..=337.5).contains(&deg) {
            return Octant::East;
        }
        match deg {
            d if d <= 22.5  => Octant::East,
            d if d <= 67.5  => Octant::Northeast,
            d if d <= 112.5 => Octant::North,
            d if d <= 157.5 => Octant::Northwest,
            d if d <= 202.5 => Octant::West,
            d if d <= 247.5 => Octant::Southwest,
            d if d <= 292.5 => Octant::South,
            _               => Octant::Southeast,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Octant::East      => "east",
            Octant::Northeast => "northeast",
            Octant::North     => "north",
            Octant::Northwest => "northwest",
            Octant::West      => "west",
            Octant::Southwest => "southwest",
            Octant::South     => "south",
            Octant::Southeast => "southeast",
        }
    }
}

impl std::fmt::Display for Octant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
