use serde::{Deserialize, Serialize};

use super::{
    parse_coordinates,
    record_ops::{parse_or_zero, text_or_empty},
    Coordinate, RouteRow,
};

/// one end of a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteEndpoint {
    pub city: String,
    pub country: String,
    pub region: String,
    /// raw `[lat, lon]` text as found in the dataset
    pub coordinates: String,
}

impl RouteEndpoint {
    /// parsed position, or [`Coordinate::INVALID`] when the raw text is malformed
    pub fn coordinate(&self) -> Coordinate {
        parse_coordinates(&self.coordinates)
    }
}

/// emissions, energy and travel time of one transport mode along a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeMetrics {
    /// kg CO2
    pub co2: f64,
    /// kWh
    pub energy: f64,
    /// hours
    pub duration: f64,
    pub products: String,
}

/// one origin-destination pair of the route table with per-mode metrics.
///
/// records are immutable after loading. the transport mode chosen for display is
/// carried by [`super::DisplayRoute`], never by the record itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub id: String,
    pub departure: RouteEndpoint,
    pub arrival: RouteEndpoint,
    /// km
    pub distance: f64,
    pub train: ModeMetrics,
    pub car: ModeMetrics,
    pub flight: ModeMetrics,
    pub avg_co2: f64,
    pub avg_energy: f64,
    pub avg_co2_weighted: f64,
    pub avg_energy_weighted: f64,
    pub train_market_share: f64,
    pub flight_market_share: f64,
    pub train_flight_duration_delta: f64,
}

impl RouteRecord {
    /// identifier used when the dataset does not supply one
    pub fn route_id(departure_city: &str, arrival_city: &str) -> String {
        format!("{departure_city} to {arrival_city}")
    }
}

impl From<RouteRow> for RouteRecord {
    fn from(row: RouteRow) -> Self {
        let departure = RouteEndpoint {
            city: text_or_empty(row.departure_city.as_deref()),
            country: text_or_empty(row.departure_country.as_deref()),
            region: text_or_empty(row.departure_region.as_deref()),
            coordinates: text_or_empty(row.departure_coordinates.as_deref()),
        };
        let arrival = RouteEndpoint {
            city: text_or_empty(row.arrival_city.as_deref()),
            country: text_or_empty(row.arrival_country.as_deref()),
            region: text_or_empty(row.arrival_region.as_deref()),
            coordinates: text_or_empty(row.arrival_coordinates.as_deref()),
        };
        let id = match row.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_owned(),
            _ => RouteRecord::route_id(&departure.city, &arrival.city),
        };
        let num = |v: &Option<String>| parse_or_zero(v.as_deref());

        Self {
            id,
            distance: num(&row.distance),
            train: ModeMetrics {
                co2: num(&row.train_co2),
                energy: num(&row.train_energy),
                duration: num(&row.train_duration),
                products: text_or_empty(row.train_products.as_deref()),
            },
            car: ModeMetrics {
                co2: num(&row.car_co2),
                energy: num(&row.car_energy),
                duration: num(&row.car_duration),
                products: text_or_empty(row.car_products.as_deref()),
            },
            flight: ModeMetrics {
                co2: num(&row.flight_co2),
                energy: num(&row.flight_energy),
                duration: num(&row.flight_duration),
                products: text_or_empty(row.flight_products.as_deref()),
            },
            avg_co2: num(&row.avg_co2),
            avg_energy: num(&row.avg_energy),
            avg_co2_weighted: num(&row.avg_co2_weighted),
            avg_energy_weighted: num(&row.avg_energy_weighted),
            train_market_share: num(&row.train_market_share),
            flight_market_share: num(&row.flight_market_share),
            train_flight_duration_delta: num(&row.train_flight_duration_delta),
            departure,
            arrival,
        }
    }
}
