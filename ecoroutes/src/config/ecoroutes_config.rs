use std::path::Path;

use config::{Config, FileFormat};
use ecoroutes_core::{dataset::TrackNaming, graph::AggregationRules};
use serde::{Deserialize, Serialize};

use super::{BarPlotConfig, BusConfig, ChordConfig, MapConfig, RegionMatrixConfig};
use crate::app::EcoRoutesAppError;

/// settings of an ecoroutes run. every field has a default, so a configuration
/// file only lists what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcoRoutesConfig {
    /// route table csv
    pub dataset_file: String,
    /// region-to-region CO2 csv
    pub region_table_file: String,
    /// newline-delimited city names offered as suggestions
    pub city_names_file: String,
    /// directory of `<dep>_to_<arr>.kml` rail tracks
    pub track_directory: String,
    pub aggregation: AggregationRules,
    pub chord: ChordConfig,
    pub map: MapConfig,
    pub bar_plot: BarPlotConfig,
    pub region_matrix: RegionMatrixConfig,
    pub track_naming: TrackNaming,
    pub bus: BusConfig,
}

impl Default for EcoRoutesConfig {
    fn default() -> Self {
        Self {
            dataset_file: String::from("data/routes.csv"),
            region_table_file: String::from("data/regions_co2.csv"),
            city_names_file: String::from("data/cities.txt"),
            track_directory: String::from("data/tracks"),
            aggregation: AggregationRules::default(),
            chord: ChordConfig::default(),
            map: MapConfig::default(),
            bar_plot: BarPlotConfig::default(),
            region_matrix: RegionMatrixConfig::default(),
            track_naming: TrackNaming::default(),
            bus: BusConfig::default(),
        }
    }
}

impl EcoRoutesConfig {
    /// reads a TOML file, or JSON when the file has a `.json` extension.
    pub fn try_from_file(filepath: &str) -> Result<EcoRoutesConfig, EcoRoutesAppError> {
        let format = match Path::new(filepath).extension().and_then(|e| e.to_str()) {
            Some("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        };
        let config = Config::builder()
            .add_source(config::File::new(filepath, format))
            .build()
            .map_err(|e| EcoRoutesAppError::ConfigReadError {
                msg: format!("failed reading '{filepath}'"),
                source: e,
            })?;
        let result = config.try_deserialize::<EcoRoutesConfig>().map_err(|e| {
            EcoRoutesAppError::ConfigReadError {
                msg: format!("failed deserializing '{filepath}' as an ecoroutes configuration"),
                source: e,
            }
        })?;
        log::debug!("loaded configuration from '{filepath}'");
        Ok(result)
    }

    /// the file at `filepath` when given, otherwise the defaults
    pub fn load(filepath: Option<&str>) -> Result<EcoRoutesConfig, EcoRoutesAppError> {
        match filepath {
            Some(f) => Self::try_from_file(f),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ecoroutes_core::graph::EdgeWeight;
    use std::path::PathBuf;

    fn fixture(name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join(name)
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = EcoRoutesConfig::try_from_file(&fixture("ecoroutes.toml"))
            .expect("fixture config should load");
        assert_eq!(config.dataset_file, "../ecoroutes-core/test/routes.csv");
        assert_eq!(config.aggregation.weight, EdgeWeight::AvgCo2Weighted);
        assert_eq!(config.aggregation.distance_threshold, 2500.0);
        assert!(config.track_naming.keep_spaces.contains("Den Haag"));
        assert_eq!(config.bus.replay_capacity, Some(16));
        assert_eq!(config.chord.ramp.max, 120.0);
        assert_eq!(config.chord.ramp.intensity, 255);
        assert_eq!(config.chord.pad_angle, 0.05);
        assert_eq!(config.map, MapConfig::default());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = EcoRoutesConfig::try_from_file(&fixture("does_not_exist.toml"));
        assert!(matches!(
            result,
            Err(EcoRoutesAppError::ConfigReadError { .. })
        ));
    }

    #[test]
    fn test_no_file_gives_defaults() {
        let config = EcoRoutesConfig::load(None).unwrap();
        assert_eq!(config, EcoRoutesConfig::default());
        assert_eq!(config.chord.inner_radius(), 275.0);
        assert_eq!(config.chord.outer_radius(), 285.0);
    }
}
