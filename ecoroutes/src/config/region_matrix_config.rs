use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionMatrixConfig {
    pub cell_size: f64,
    /// width reserved for the row labels
    pub label_width: f64,
    /// saturated channel value of the cell colors
    pub intensity: u8,
    /// alpha of the cell fill, the border is drawn opaque
    pub fill_alpha: f64,
}

impl Default for RegionMatrixConfig {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            label_width: 140.0,
            intensity: 200,
            fill_alpha: 0.3,
        }
    }
}
