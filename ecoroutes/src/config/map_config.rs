use ecoroutes_core::{color::EmissionColorRamp, record::TravelMode};
use serde::{Deserialize, Serialize};

/// CO2 range colored per travel mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeRamps {
    pub train: EmissionColorRamp,
    pub average: EmissionColorRamp,
    pub flight: EmissionColorRamp,
}

impl Default for ModeRamps {
    fn default() -> Self {
        Self {
            train: EmissionColorRamp::new(0.0, 30.0),
            average: EmissionColorRamp::new(0.0, 150.0),
            flight: EmissionColorRamp::new(0.0, 150.0),
        }
    }
}

impl ModeRamps {
    pub fn ramp(&self, mode: TravelMode) -> &EmissionColorRamp {
        match mode {
            TravelMode::Train => &self.train,
            TravelMode::Average => &self.average,
            TravelMode::Flight => &self.flight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub ramps: ModeRamps,
    pub line_weight: f64,
    pub line_opacity: f64,
    /// number of segments of a great-circle arc
    pub arc_segments: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            ramps: ModeRamps::default(),
            line_weight: 8.0,
            line_opacity: 0.7,
            arc_segments: 64,
        }
    }
}
