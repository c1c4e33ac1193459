mod emission_ramp;
mod rgb;

pub use emission_ramp::EmissionColorRamp;
pub use rgb::Rgb;
