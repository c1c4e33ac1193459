use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// number of added routes replayed to late subscribers, unbounded when absent
    pub replay_capacity: Option<usize>,
}
