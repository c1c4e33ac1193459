use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{RouteRecord, TravelMode};

/// identifies one displayed route: the same record may be shown once per mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DisplayKey {
    pub id: String,
    pub mode: TravelMode,
}

impl Display for DisplayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.id, self.mode)
    }
}

/// a route record paired with the mode it is shown with. each display owns
/// its own copy, so setting the mode on one never leaks into another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRoute {
    pub record: RouteRecord,
    pub mode: TravelMode,
}

impl DisplayRoute {
    pub fn new(record: &RouteRecord, mode: TravelMode) -> Self {
        Self {
            record: record.clone(),
            mode,
        }
    }

    pub fn key(&self) -> DisplayKey {
        DisplayKey {
            id: self.record.id.clone(),
            mode: self.mode,
        }
    }

    /// kg CO2 for the displayed mode
    pub fn co2(&self) -> f64 {
        self.mode.co2(&self.record)
    }
}
