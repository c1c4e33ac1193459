use geo::Point;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(-?\d+\.\d+),\s*(-?\d+\.\d+)\]")
        .unwrap_or_else(|e| panic!("invalid coordinate pattern: {e}"))
});

/// a WGS84 position as written in the route table, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// sentinel returned when a coordinate string cannot be read
    pub const INVALID: Coordinate = Coordinate {
        lat: -1.0,
        lon: -1.0,
    };

    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }

    /// x/y ordered point for use with geo algorithms
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lat, self.lon)
    }
}

/// reads a `[lat, lon]` string. both numbers must carry a decimal part.
/// returns [`Coordinate::INVALID`] instead of failing.
///
/// ```
/// use ecoroutes_core::record::{parse_coordinates, Coordinate};
///
/// assert_eq!(parse_coordinates("[12.34, 56.78]"), Coordinate::new(12.34, 56.78));
/// assert_eq!(parse_coordinates("garbage"), Coordinate::INVALID);
/// ```
pub fn parse_coordinates(value: &str) -> Coordinate {
    let Some(captures) = COORDINATE_PATTERN.captures(value) else {
        return Coordinate::INVALID;
    };
    let lat = captures.get(1).and_then(|m| m.as_str().parse::<f64>().ok());
    let lon = captures.get(2).and_then(|m| m.as_str().parse::<f64>().ok());
    match (lat, lon) {
        (Some(lat), Some(lon)) => Coordinate { lat, lon },
        _ => Coordinate::INVALID,
    }
}
