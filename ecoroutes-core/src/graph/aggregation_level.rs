use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// granularity at which route edges are merged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationLevel {
    #[default]
    City,
    Country,
    Region,
}

impl Display for AggregationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AggregationLevel::City => "city",
            AggregationLevel::Country => "country",
            AggregationLevel::Region => "region",
        };
        write!(f, "{s}")
    }
}

impl FromStr for AggregationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "city" => Ok(AggregationLevel::City),
            "country" => Ok(AggregationLevel::Country),
            "region" => Ok(AggregationLevel::Region),
            other => Err(format!(
                "unknown aggregation level '{other}', expected city, country or region"
            )),
        }
    }
}
