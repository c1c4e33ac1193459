use std::fmt::Write;

use ecoroutes_core::record::DisplayRoute;

use super::{
    svg_ops::{close_svg, escape_xml, open_svg},
    RenderError,
};
use crate::config::BarPlotConfig;

/// horizontal bars of the displayed CO2 per arrival city, one band per route
/// in input order.
pub struct BarPlotRenderer {
    config: BarPlotConfig,
}

impl BarPlotRenderer {
    pub fn new(config: BarPlotConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, routes: &[DisplayRoute]) -> Result<String, RenderError> {
        let c = &self.config;
        let width = c.inner_width();
        let height = c.inner_height();
        let max_co2 = routes.iter().map(|r| r.co2()).fold(0.0, f64::max);
        let x = |value: f64| {
            if max_co2 > 0.0 {
                (value / max_co2).clamp(0.0, 1.0) * width
            } else {
                0.0
            }
        };
        // band layout with equal inner and outer padding, centered
        let n = routes.len() as f64;
        let step = if routes.is_empty() {
            0.0
        } else {
            height / (n - c.padding + 2.0 * c.padding)
        };
        let bandwidth = step * (1.0 - c.padding);
        let offset = step * c.padding;

        let mut svg = String::new();
        open_svg(&mut svg, c.width, c.height, (0.0, 0.0, c.width, c.height))?;
        write!(
            svg,
            "  <g transform=\"translate({},{})\">\n",
            c.margin_left, c.margin_top
        )?;
        for (idx, route) in routes.iter().enumerate() {
            let co2 = route.co2();
            let y = offset + step * idx as f64;
            let city = escape_xml(&route.record.arrival.city);
            write!(
                svg,
                "    <rect class=\"bar\" x=\"0\" y=\"{y:.2}\" width=\"{:.2}\" height=\"{bandwidth:.2}\" fill=\"{}\"><title>City: {city}, CO2 Emissions: {co2:.2} kg</title></rect>\n",
                x(co2),
                c.ramp.color(co2),
            )?;
            write!(
                svg,
                "    <text class=\"tick\" x=\"-6\" y=\"{:.2}\" dy=\".32em\" text-anchor=\"end\">{city}</text>\n",
                y + bandwidth / 2.0
            )?;
        }
        write!(
            svg,
            "    <line class=\"axis\" x1=\"0\" y1=\"{height}\" x2=\"{width}\" y2=\"{height}\" stroke=\"#000\" />\n    <line class=\"axis\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"{height}\" stroke=\"#000\" />\n"
        )?;
        write!(
            svg,
            "    <text class=\"tick\" x=\"{width}\" y=\"{:.1}\" text-anchor=\"end\">{max_co2:.2}</text>\n",
            height + 14.0
        )?;
        write!(
            svg,
            "    <text class=\"label\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"18\" font-weight=\"bold\">CO2 Emissions (kg)</text>\n",
            width / 2.0,
            height + c.margin_bottom - 10.0
        )?;
        write!(
            svg,
            "    <text class=\"label\" transform=\"rotate(-90)\" x=\"{:.1}\" y=\"{:.1}\" dy=\"1em\" text-anchor=\"middle\" font-size=\"18\" font-weight=\"bold\">Arrival City</text>\n",
            -(height / 2.0),
            -c.margin_left + 10.0
        )?;
        svg.push_str("  </g>\n");
        close_svg(&mut svg);
        Ok(svg)
    }
}
