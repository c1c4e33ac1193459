use ecoroutes_core::color::Rgb;
use geo::{MultiLineString, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Rgb,
    pub weight: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Departure,
    Arrival,
}

/// a graphical element drawn for a displayed route
#[derive(Debug, Clone, PartialEq)]
pub enum MapLayer {
    /// the route line. average routes are a single straight segment, flights
    /// a great-circle arc and trains the lines of the track file.
    Route {
        geometry: MultiLineString<f64>,
        style: LineStyle,
        co2: f64,
        popup: String,
    },
    Marker {
        kind: MarkerKind,
        position: Point<f64>,
        label: String,
    },
}

impl MapLayer {
    pub fn is_route(&self) -> bool {
        matches!(self, MapLayer::Route { .. })
    }
}
