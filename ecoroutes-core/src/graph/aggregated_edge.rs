use serde::{Deserialize, Serialize};

/// a link of a [`super::LevelGraph`]. keys are city, country or region names
/// depending on the level. region-level edges carry no country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    pub source_country: Option<String>,
    pub target_country: Option<String>,
    pub source_region: String,
    pub target_region: String,
}

impl AggregatedEdge {
    pub fn touches(&self, node: &str) -> bool {
        self.source == node || self.target == node
    }
}
