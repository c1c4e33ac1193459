use serde::{Deserialize, Serialize};

use crate::record::TravelMode;

/// "the `count` lowest-emission destinations from `city` within `max_distance` km"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub city: String,
    pub count: usize,
    pub max_distance: f64,
    /// mode whose CO2 ranks the results and which is displayed
    pub mode: TravelMode,
}

impl SearchQuery {
    pub fn new(city: &str, count: usize, max_distance: f64, mode: TravelMode) -> Self {
        Self {
            city: city.to_owned(),
            count,
            max_distance,
            mode,
        }
    }
}
