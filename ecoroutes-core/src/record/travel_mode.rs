use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::RouteRecord;

/// transport mode a route is displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Train,
    /// mean over the modes available on the route
    Average,
    Flight,
}

impl TravelMode {
    pub const ALL: [TravelMode; 3] = [TravelMode::Train, TravelMode::Average, TravelMode::Flight];

    /// kg CO2 of a route for this mode
    pub fn co2(&self, record: &RouteRecord) -> f64 {
        match self {
            TravelMode::Train => record.train.co2,
            TravelMode::Average => record.avg_co2,
            TravelMode::Flight => record.flight.co2,
        }
    }

    /// kWh of a route for this mode
    pub fn energy(&self, record: &RouteRecord) -> f64 {
        match self {
            TravelMode::Train => record.train.energy,
            TravelMode::Average => record.avg_energy,
            TravelMode::Flight => record.flight.energy,
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TravelMode::Train => "train",
            TravelMode::Average => "average",
            TravelMode::Flight => "flight",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "train" => Ok(TravelMode::Train),
            "average" | "avg" => Ok(TravelMode::Average),
            "flight" | "plane" => Ok(TravelMode::Flight),
            other => Err(format!(
                "unknown travel mode '{other}', expected one of train, average, flight"
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("AVG".parse::<TravelMode>(), Ok(TravelMode::Average));
        assert_eq!(" plane ".parse::<TravelMode>(), Ok(TravelMode::Flight));
        assert!("bike".parse::<TravelMode>().is_err());
    }

    #[test]
    fn test_co2_selects_mode_field() {
        let mut record = RouteRecord::default();
        record.train.co2 = 4.0;
        record.avg_co2 = 40.0;
        record.flight.co2 = 140.0;
        assert_eq!(TravelMode::Train.co2(&record), 4.0);
        assert_eq!(TravelMode::Average.co2(&record), 40.0);
        assert_eq!(TravelMode::Flight.co2(&record), 140.0);
    }
}
