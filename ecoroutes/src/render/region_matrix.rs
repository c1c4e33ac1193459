use std::fmt::Write;

use ecoroutes_core::{color::EmissionColorRamp, dataset::RegionTable, selection::SelectionState};

use super::{
    svg_ops::{close_svg, escape_xml, open_svg},
    RenderError,
};
use crate::config::RegionMatrixConfig;

const HEADER_HEIGHT: f64 = 40.0;

/// grid of region-to-region CO2, rows by departure and columns by arrival.
/// only cells whose two regions are selected show a value; their color spans
/// the range of the whole table.
pub struct RegionMatrixRenderer {
    config: RegionMatrixConfig,
}

impl RegionMatrixRenderer {
    pub fn new(config: RegionMatrixConfig) -> Self {
        Self { config }
    }

    pub fn ramp(&self, table: &RegionTable) -> Option<EmissionColorRamp> {
        table
            .co2_range()
            .map(|(min, max)| EmissionColorRamp::new(min, max).with_intensity(self.config.intensity))
    }

    pub fn render(
        &self,
        table: &RegionTable,
        selection: &SelectionState,
        regions: &[String],
    ) -> Result<String, RenderError> {
        let c = &self.config;
        let ramp = self.ramp(table);
        let width = c.label_width + c.cell_size * regions.len() as f64;
        let height = HEADER_HEIGHT + c.cell_size * regions.len() as f64;

        let mut svg = String::new();
        open_svg(&mut svg, width, height, (0.0, 0.0, width, height))?;
        for (col, region) in regions.iter().enumerate() {
            write!(
                svg,
                "  <text class=\"column\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>\n",
                c.label_width + c.cell_size * (col as f64 + 0.5),
                HEADER_HEIGHT / 2.0,
                escape_xml(region)
            )?;
        }
        for (row, departure) in regions.iter().enumerate() {
            let y = HEADER_HEIGHT + c.cell_size * row as f64;
            write!(
                svg,
                "  <text class=\"row\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{}</text>\n",
                c.label_width - 6.0,
                y + c.cell_size / 2.0,
                escape_xml(departure)
            )?;
            for (col, arrival) in regions.iter().enumerate() {
                let x = c.label_width + c.cell_size * col as f64;
                let shown = selection.contains(departure) && selection.contains(arrival);
                let value = table.get(departure, arrival).filter(|_| shown);
                match (value, ramp) {
                    (Some(co2), Some(ramp)) => {
                        let color = ramp.color(co2);
                        write!(
                            svg,
                            "  <rect class=\"cell filled\" x=\"{x:.1}\" y=\"{y:.1}\" width=\"{size:.1}\" height=\"{size:.1}\" fill=\"{}\" stroke=\"{color}\" />\n  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"{color}\">{co2:.2}</text>\n",
                            color.to_css_rgba(c.fill_alpha),
                            x + c.cell_size / 2.0,
                            y + c.cell_size / 2.0,
                            size = c.cell_size,
                        )?;
                    }
                    _ => {
                        write!(
                            svg,
                            "  <rect class=\"cell\" x=\"{x:.1}\" y=\"{y:.1}\" width=\"{size:.1}\" height=\"{size:.1}\" fill=\"none\" stroke=\"grey\" />\n",
                            size = c.cell_size,
                        )?;
                    }
                }
            }
        }
        close_svg(&mut svg);
        Ok(svg)
    }
}
