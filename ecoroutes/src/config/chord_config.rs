use ecoroutes_core::{color::EmissionColorRamp, graph::AggregationLevel};
use serde::{Deserialize, Serialize};

/// geometry and coloring of the chord diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordConfig {
    /// width and height of the drawing, in pixels
    pub size: f64,
    /// radians left empty between neighboring arcs
    pub pad_angle: f64,
    /// distance between the drawing edge and the outer ring
    pub ring_margin: f64,
    pub ring_width: f64,
    pub label_offset: f64,
    /// ribbon colors at the city level
    pub ramp: EmissionColorRamp,
    /// widens the red end of the ramp for the country and region levels
    pub aggregate_scale: f64,
    pub ribbon_opacity: f64,
    pub dimmed_opacity: f64,
    pub highlight_color: String,
}

impl Default for ChordConfig {
    fn default() -> Self {
        Self {
            size: 650.0,
            pad_angle: 0.05,
            ring_margin: 50.0,
            ring_width: 10.0,
            label_offset: 5.0,
            ramp: EmissionColorRamp::new(0.0, 150.0),
            aggregate_scale: 2.0,
            ribbon_opacity: 0.8,
            dimmed_opacity: 0.15,
            highlight_color: String::from("#FFD700"),
        }
    }
}

impl ChordConfig {
    pub fn inner_radius(&self) -> f64 {
        (self.size * 0.5 - self.ring_margin).max(0.0)
    }

    pub fn outer_radius(&self) -> f64 {
        self.inner_radius() + self.ring_width
    }

    pub fn ramp_for(&self, level: AggregationLevel) -> EmissionColorRamp {
        match level {
            AggregationLevel::City => self.ramp,
            AggregationLevel::Country | AggregationLevel::Region => {
                self.ramp.scaled(self.aggregate_scale)
            }
        }
    }
}
