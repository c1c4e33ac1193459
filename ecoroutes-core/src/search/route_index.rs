use std::collections::HashMap;

use super::{SearchError, SearchQuery};
use crate::{
    bus::RouteBus,
    record::{DisplayRoute, RouteRecord, TravelMode},
};

/// the loaded route table with a lookup by route identifier.
#[derive(Debug, Clone, Default)]
pub struct RouteIndex {
    records: Vec<RouteRecord>,
    by_id: HashMap<String, usize>,
}

impl RouteIndex {
    /// indexes `records` by id. the table is expected to hold one row per
    /// direction; when an id repeats, the later row shadows the earlier one.
    pub fn new(records: Vec<RouteRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if let Some(previous) = by_id.insert(record.id.clone(), idx) {
                log::warn!(
                    "route id '{}' appears in rows {} and {}, keeping the later row",
                    record.id,
                    previous + 1,
                    idx + 1
                );
            }
        }
        Self { records, by_id }
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RouteRecord> {
        self.by_id.get(id).and_then(|idx| self.records.get(*idx))
    }

    /// route from `departure` to `arrival` in that direction
    pub fn find(&self, departure: &str, arrival: &str) -> Result<&RouteRecord, SearchError> {
        self.get(&RouteRecord::route_id(departure, arrival))
            .or_else(|| {
                self.records.iter().find(|r| {
                    r.departure.city.eq_ignore_ascii_case(departure)
                        && r.arrival.city.eq_ignore_ascii_case(arrival)
                })
            })
            .ok_or_else(|| SearchError::UnknownRoute {
                departure: departure.to_owned(),
                arrival: arrival.to_owned(),
            })
    }

    /// the lowest-emission destinations from a city, ranked by the query mode's
    /// CO2. cities are compared ignoring case and surrounding whitespace; ties
    /// keep table order. a count of zero is rejected.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<&RouteRecord>, SearchError> {
        if query.count == 0 {
            return Err(SearchError::ZeroCount);
        }
        let city = query.city.trim().to_lowercase();
        let mut matches = self
            .records
            .iter()
            .filter(|r| r.departure.city.to_lowercase() == city && r.distance <= query.max_distance)
            .collect::<Vec<_>>();
        if matches.is_empty() {
            return Err(SearchError::NoDestinationsFound {
                city: query.city.clone(),
                max_distance: query.max_distance,
            });
        }
        matches.sort_by(|a, b| query.mode.co2(a).total_cmp(&query.mode.co2(b)));
        matches.truncate(query.count);
        Ok(matches)
    }

    /// runs [`RouteIndex::search`] and publishes each result on the bus with
    /// the query mode. nothing is published when the search fails.
    pub fn search_and_publish(
        &self,
        query: &SearchQuery,
        bus: &mut RouteBus,
    ) -> Result<Vec<DisplayRoute>, SearchError> {
        let routes = self
            .search(query)?
            .into_iter()
            .map(|r| DisplayRoute::new(r, query.mode))
            .collect::<Vec<_>>();
        for route in routes.iter() {
            bus.add_route(route.clone());
        }
        Ok(routes)
    }

    /// publishes a single route found by its endpoints
    pub fn add_route(
        &self,
        departure: &str,
        arrival: &str,
        mode: TravelMode,
        bus: &mut RouteBus,
    ) -> Result<DisplayRoute, SearchError> {
        let route = DisplayRoute::new(self.find(departure, arrival)?, mode);
        bus.add_route(route.clone());
        Ok(route)
    }
}
