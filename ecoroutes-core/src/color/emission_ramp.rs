use serde::{Deserialize, Serialize};

use super::Rgb;

/// green → yellow → red interpolation of a CO2 value over `[min, max]`.
/// values outside the range are clamped to its ends.
///
/// ```
/// use ecoroutes_core::color::{EmissionColorRamp, Rgb};
///
/// let ramp = EmissionColorRamp::new(0.0, 30.0);
/// assert_eq!(ramp.color(0.0), Rgb::new(0, 255, 0));
/// assert_eq!(ramp.color(15.0), Rgb::new(255, 255, 0));
/// assert_eq!(ramp.color(30.0), Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionColorRamp {
    pub min: f64,
    pub max: f64,
    /// value of a saturated channel, 255 for full brightness
    #[serde(default = "default_intensity")]
    pub intensity: u8,
}

fn default_intensity() -> u8 {
    255
}

impl EmissionColorRamp {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            intensity: default_intensity(),
        }
    }

    pub fn with_intensity(self, intensity: u8) -> Self {
        Self { intensity, ..self }
    }

    /// stretches the upper end of the range by `factor`, used where aggregated
    /// weights run higher than single routes
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            max: self.min + (self.max - self.min) * factor,
            ..self
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// position of `value` in the range, in [0, 1]. a degenerate range maps
    /// every value to 0.
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if !(span > 0.0) || !value.is_finite() {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: f64) -> Rgb {
        let ratio = self.ratio(value);
        let full = f64::from(self.intensity);
        if ratio <= 0.5 {
            Rgb::new((full * ratio * 2.0).floor() as u8, self.intensity, 0)
        } else {
            Rgb::new(self.intensity, (full * (1.0 - ratio) * 2.0).floor() as u8, 0)
        }
    }

    /// evenly spaced colors from min to max, for legends
    pub fn stops(&self, count: usize) -> Vec<(f64, Rgb)> {
        match count {
            0 => vec![],
            1 => vec![(self.min, self.color(self.min))],
            n => (0..n)
                .map(|i| {
                    let value = self.min + (self.max - self.min) * i as f64 / (n - 1) as f64;
                    (value, self.color(value))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_values_outside_range_are_clamped() {
        let ramp = EmissionColorRamp::new(0.0, 150.0);
        assert_eq!(ramp.color(-10.0), Rgb::new(0, 255, 0));
        assert_eq!(ramp.color(1000.0), Rgb::new(255, 0, 0));
        assert_eq!(ramp.color(f64::NAN), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_quarter_points() {
        let ramp = EmissionColorRamp::new(0.0, 100.0);
        assert_eq!(ramp.color(25.0), Rgb::new(127, 255, 0));
        assert_eq!(ramp.color(75.0), Rgb::new(255, 127, 0));
    }

    #[test]
    fn test_reduced_intensity() {
        let ramp = EmissionColorRamp::new(10.0, 30.0).with_intensity(200);
        assert_eq!(ramp.color(10.0), Rgb::new(0, 200, 0));
        assert_eq!(ramp.color(20.0), Rgb::new(200, 200, 0));
        assert_eq!(ramp.color(30.0), Rgb::new(200, 0, 0));
    }

    #[test]
    fn test_scaled_widens_red_end() {
        let ramp = EmissionColorRamp::new(0.0, 50.0).scaled(2.0);
        assert_eq!(ramp.max, 100.0);
        assert_eq!(ramp.color(50.0), Rgb::new(255, 255, 0));
    }

    #[test]
    fn test_degenerate_range() {
        let ramp = EmissionColorRamp::new(5.0, 5.0);
        assert_eq!(ramp.color(5.0), Rgb::new(0, 255, 0));
        assert_eq!(ramp.stops(3).len(), 3);
    }
}
