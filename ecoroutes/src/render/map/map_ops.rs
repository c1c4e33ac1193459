use ecoroutes_core::record::{Coordinate, DisplayRoute};
use geo::{Haversine, InterpolatePoint, LineString, MultiLineString, Point};

/// the shorter great-circle path from `start` to `end` as `segments` pieces
pub fn great_circle(start: Coordinate, end: Coordinate, segments: usize) -> LineString<f64> {
    let n = segments.max(1);
    let (a, b) = (start.to_point(), end.to_point());
    (0..=n)
        .map(|i| Haversine.point_at_ratio_between(a, b, i as f64 / n as f64))
        .collect::<Vec<Point<f64>>>()
        .into()
}

pub fn straight_line(start: Coordinate, end: Coordinate) -> LineString<f64> {
    vec![start.to_point(), end.to_point()].into()
}

/// geometry of average and flight routes, None when either endpoint failed
/// to parse
pub fn endpoint_geometry(
    route: &DisplayRoute,
    great_circle_segments: Option<usize>,
) -> Option<MultiLineString<f64>> {
    let start = route.record.departure.coordinate();
    let end = route.record.arrival.coordinate();
    if !start.is_valid() || !end.is_valid() {
        return None;
    }
    let line = match great_circle_segments {
        Some(segments) => great_circle(start, end, segments),
        None => straight_line(start, end),
    };
    Some(MultiLineString::new(vec![line]))
}

/// popup shown on hovering a route line
pub fn popup_text(route: &DisplayRoute) -> String {
    let record = &route.record;
    format!(
        "Route from {} to {} ({})<br>\
         CO2 Emissions: {:.2} kg<br>\
         Energy Consumption: {:.2} kWh<br>\
         Distance: {:.2} km<br>\
         Train Duration: {:.2} hours",
        record.departure.city,
        record.arrival.city,
        route.mode,
        route.mode.co2(record),
        route.mode.energy(record),
        record.distance,
        record.train.duration,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use ecoroutes_core::record::{RouteRecord, TravelMode};

    #[test]
    fn test_great_circle_keeps_endpoints_and_bends_poleward() {
        let start = Coordinate::new(50.0, 0.0);
        let end = Coordinate::new(50.0, 60.0);
        let arc = great_circle(start, end, 8);
        assert_eq!(arc.0.len(), 9);
        let first = arc.0[0];
        let last = arc.0[8];
        assert!((first.x - 0.0).abs() < 1e-6 && (first.y - 50.0).abs() < 1e-6);
        assert!((last.x - 60.0).abs() < 1e-6 && (last.y - 50.0).abs() < 1e-6);
        assert!(arc.0[4].y > 52.0);
    }

    #[test]
    fn test_invalid_endpoint_has_no_geometry() {
        let mut record = RouteRecord::default();
        record.departure.coordinates = String::from("[48.8566, 2.3522]");
        record.arrival.coordinates = String::from("unknown");
        let route = DisplayRoute::new(&record, TravelMode::Average);
        assert!(endpoint_geometry(&route, None).is_none());

        record.arrival.coordinates = String::from("[45.7640, 4.8357]");
        let route = DisplayRoute::new(&record, TravelMode::Average);
        let geometry = endpoint_geometry(&route, None).unwrap();
        assert_eq!(geometry.0[0].0.len(), 2);
    }

    #[test]
    fn test_popup_uses_mode_values() {
        let mut record = RouteRecord::default();
        record.departure.city = String::from("Paris");
        record.arrival.city = String::from("Lyon");
        record.flight.co2 = 93.2;
        record.avg_co2 = 18.5;
        let popup = popup_text(&DisplayRoute::new(&record, TravelMode::Flight));
        assert!(popup.starts_with("Route from Paris to Lyon (flight)"));
        assert!(popup.contains("CO2 Emissions: 93.20 kg"));
    }
}
