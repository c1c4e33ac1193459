use serde::{Deserialize, Serialize};

use super::{graph_ops as ops, AggregationLevel, AggregationRules, LevelGraph};
use crate::record::RouteRecord;

/// city, country and region views of a route table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteGraph {
    pub city: LevelGraph,
    pub country: LevelGraph,
    pub region: LevelGraph,
}

impl RouteGraph {
    /// aggregates a route table into its three levels. the result depends only
    /// on the records, their order, and the rules; callers rebuild rather than
    /// patch a graph when either changes.
    ///
    /// ```
    /// use ecoroutes_core::graph::{AggregationRules, RouteGraph};
    ///
    /// let graph = RouteGraph::build(&[], &AggregationRules::default());
    /// assert!(graph.city.is_empty());
    /// assert!(graph.region.is_empty());
    /// ```
    pub fn build(records: &[RouteRecord], rules: &AggregationRules) -> RouteGraph {
        let nodes = ops::collect_nodes(records, rules);
        let city_edges = ops::create_city_edges(records, rules);
        let country_edges = ops::create_country_edges(&city_edges);
        let region_edges = ops::create_region_edges(&city_edges, rules);
        log::debug!(
            "aggregated {} records into {} city, {} country and {} region edges",
            records.len(),
            city_edges.len(),
            country_edges.len(),
            region_edges.len()
        );

        RouteGraph {
            city: LevelGraph::new(
                AggregationLevel::City,
                nodes.cities.into_iter().collect(),
                city_edges,
            ),
            country: LevelGraph::new(
                AggregationLevel::Country,
                nodes.countries.into_iter().collect(),
                country_edges,
            ),
            region: LevelGraph::new(
                AggregationLevel::Region,
                nodes.regions.into_iter().collect(),
                region_edges,
            ),
        }
    }

    pub fn level(&self, level: AggregationLevel) -> &LevelGraph {
        match level {
            AggregationLevel::City => &self.city,
            AggregationLevel::Country => &self.country,
            AggregationLevel::Region => &self.region,
        }
    }
}
