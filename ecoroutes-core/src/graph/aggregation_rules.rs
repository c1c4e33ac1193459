use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::EdgeWeight;

/// routes longer than this (km) are left out of the city graph
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 5000.0;

/// regions recognized by the region view
pub const DEFAULT_REGIONS: [&str; 5] = [
    "Eastern Europe",
    "Southern Europe",
    "Western Europe",
    "British Isles",
    "Northern Europe",
];

/// parameters of [`super::RouteGraph::build`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationRules {
    /// inclusive upper bound on route distance for city edges
    pub distance_threshold: f64,
    pub weight: EdgeWeight,
    /// regions admitted to the region graph
    pub region_allow_list: IndexSet<String>,
}

impl Default for AggregationRules {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            weight: EdgeWeight::default(),
            region_allow_list: DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl AggregationRules {
    pub fn allows_region(&self, region: &str) -> bool {
        self.region_allow_list.contains(region)
    }
}
