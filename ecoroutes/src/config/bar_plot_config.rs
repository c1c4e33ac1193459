use ecoroutes_core::color::EmissionColorRamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarPlotConfig {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    /// fraction of each band left empty around a bar
    pub padding: f64,
    pub ramp: EmissionColorRamp,
}

impl Default for BarPlotConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margin_top: 20.0,
            margin_right: 20.0,
            margin_bottom: 60.0,
            margin_left: 100.0,
            padding: 0.1,
            ramp: EmissionColorRamp::new(0.0, 30.0),
        }
    }
}

impl BarPlotConfig {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }
}
