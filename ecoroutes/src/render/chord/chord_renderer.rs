use std::{f64::consts::PI, fmt::Write};

use ecoroutes_core::{graph::LevelGraph, selection::InteractionState};

use super::{ChordGroup, ChordLayout, ChordRibbon, ChordSide, WeightMatrix};
use crate::{
    config::ChordConfig,
    render::{
        svg_ops::{close_svg, escape_xml, open_svg, polar},
        RenderError,
    },
};

const ARC_FILL: &str = "#555555";

/// draws one aggregation level as a chord diagram.
///
/// ribbons are colored by the mean weight of the edges they stand for. the
/// interaction state only changes styling: while a node is hovered its ribbons
/// are highlighted and all others dimmed, and arcs of selected nodes are
/// outlined.
pub struct ChordRenderer {
    config: ChordConfig,
}

impl ChordRenderer {
    pub fn new(config: ChordConfig) -> Self {
        Self { config }
    }

    pub fn render(
        &self,
        graph: &LevelGraph,
        state: &InteractionState,
    ) -> Result<String, RenderError> {
        let matrix = WeightMatrix::from_level(graph);
        let layout = ChordLayout::compute(&matrix, self.config.pad_angle);
        let ramp = self.config.ramp_for(graph.level);
        let hovered = state.hovered().and_then(|node| matrix.index_of(node));
        let inner = self.config.inner_radius();
        let outer = self.config.outer_radius();
        let size = self.config.size;

        let mut svg = String::new();
        open_svg(&mut svg, size, size, (-size / 2.0, -size / 2.0, size, size))?;
        write!(
            svg,
            "  <g class=\"ribbons\" data-level=\"{}\">\n",
            graph.level
        )?;
        for ribbon in layout.ribbons.iter() {
            let (s, t) = (ribbon.source.index, ribbon.target.index);
            let weight = matrix.mean(s, t).unwrap_or_default();
            let (class, opacity, stroke) = match hovered {
                Some(h) if ribbon.touches(h) => ("ribbon highlighted", 1.0, self.config.highlight_color.as_str()),
                Some(_) => ("ribbon dimmed", self.config.dimmed_opacity, "#000"),
                None => ("ribbon", self.config.ribbon_opacity, "#000"),
            };
            let source_name = escape_xml(&matrix.nodes()[s]);
            let target_name = escape_xml(&matrix.nodes()[t]);
            write!(
                svg,
                "    <path class=\"{class}\" data-source=\"{source_name}\" data-target=\"{target_name}\" d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-opacity=\"0.8\" opacity=\"{}\"><title>{source_name} - {target_name}: {weight:.2}</title></path>\n",
                ribbon_path(inner, ribbon),
                ramp.color(weight),
                escape_xml(stroke),
                opacity,
            )?;
        }
        svg.push_str("  </g>\n  <g class=\"groups\">\n");
        for group in layout.groups.iter() {
            let name = escape_xml(&matrix.nodes()[group.index]);
            let selected = state.is_selected(&matrix.nodes()[group.index]);
            let (stroke, stroke_width) = if selected {
                (self.config.highlight_color.as_str(), 2.0)
            } else {
                ("#000", 1.0)
            };
            write!(
                svg,
                "    <g class=\"group\" data-node=\"{name}\">\n      <path class=\"arc\" d=\"{}\" fill=\"{ARC_FILL}\" stroke=\"{}\" stroke-width=\"{stroke_width}\"><title>{name}: {:.2}</title></path>\n",
                arc_path(inner, outer, group.start_angle, group.end_angle),
                escape_xml(stroke),
                group.value,
            )?;
            write_label(&mut svg, group, outer + self.config.label_offset, &name)?;
            svg.push_str("    </g>\n");
        }
        svg.push_str("  </g>\n");
        close_svg(&mut svg);
        log::debug!(
            "rendered {} chord diagram with {} arcs and {} ribbons",
            graph.level,
            layout.groups.len(),
            layout.ribbons.len()
        );
        Ok(svg)
    }
}

fn write_label(
    svg: &mut String,
    group: &ChordGroup,
    radius: f64,
    name: &str,
) -> Result<(), RenderError> {
    let angle = (group.start_angle + group.end_angle) / 2.0;
    let flip = angle > PI;
    write!(
        svg,
        "      <text dy=\".35em\" transform=\"rotate({:.3}) translate({radius:.1}){}\"{}>{name}</text>\n",
        angle.to_degrees() - 90.0,
        if flip { " rotate(180)" } else { "" },
        if flip { " text-anchor=\"end\"" } else { "" },
    )?;
    Ok(())
}

fn large_arc(start: f64, end: f64) -> u8 {
    u8::from(end - start > PI)
}

/// annular sector between `inner` and `outer` from `start` to `end`
fn arc_path(inner: f64, outer: f64, start: f64, end: f64) -> String {
    let (ox0, oy0) = polar(outer, start);
    let (ox1, oy1) = polar(outer, end);
    let (ix1, iy1) = polar(inner, end);
    let (ix0, iy0) = polar(inner, start);
    let large = large_arc(start, end);
    format!(
        "M{ox0:.3},{oy0:.3}A{outer},{outer} 0 {large} 1 {ox1:.3},{oy1:.3}L{ix1:.3},{iy1:.3}A{inner},{inner} 0 {large} 0 {ix0:.3},{iy0:.3}Z"
    )
}

/// two arcs of the inner circle joined by quadratic curves through the center
fn ribbon_path(radius: f64, ribbon: &ChordRibbon) -> String {
    let ChordRibbon { source, target } = ribbon;
    let (sx0, sy0) = polar(radius, source.start_angle);
    let mut d = format!("M{sx0:.3},{sy0:.3}");
    d.push_str(&side_arc(radius, source));
    if source.start_angle != target.start_angle || source.end_angle != target.end_angle {
        let (tx0, ty0) = polar(radius, target.start_angle);
        d.push_str(&format!("Q0,0 {tx0:.3},{ty0:.3}"));
        d.push_str(&side_arc(radius, target));
    }
    d.push_str(&format!("Q0,0 {sx0:.3},{sy0:.3}Z"));
    d
}

fn side_arc(radius: f64, side: &ChordSide) -> String {
    let (x1, y1) = polar(radius, side.end_angle);
    format!(
        "A{radius},{radius} 0 {} 1 {x1:.3},{y1:.3}",
        large_arc(side.start_angle, side.end_angle)
    )
}
