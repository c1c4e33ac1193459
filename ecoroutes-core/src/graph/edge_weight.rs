use serde::{Deserialize, Serialize};

use crate::record::RouteRecord;

/// record field used as the weight of a city-level edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeWeight {
    /// mean CO2 over the available modes
    #[default]
    AvgCo2,
    /// mean CO2 weighted by mode market share
    AvgCo2Weighted,
    AvgEnergy,
    AvgEnergyWeighted,
}

impl EdgeWeight {
    pub fn of(&self, record: &RouteRecord) -> f64 {
        match self {
            EdgeWeight::AvgCo2 => record.avg_co2,
            EdgeWeight::AvgCo2Weighted => record.avg_co2_weighted,
            EdgeWeight::AvgEnergy => record.avg_energy,
            EdgeWeight::AvgEnergyWeighted => record.avg_energy_weighted,
        }
    }
}
