use std::fmt::Write;

use super::RenderError;

/// escapes text for use in svg content and attribute values
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// opens an svg document. `view_box` is `(min_x, min_y, width, height)`.
pub fn open_svg(
    out: &mut String,
    width: f64,
    height: f64,
    view_box: (f64, f64, f64, f64),
) -> Result<(), RenderError> {
    let (x, y, w, h) = view_box;
    write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"{x:.1} {y:.1} {w:.1} {h:.1}\" font-family=\"sans-serif\" font-size=\"10\">\n"
    )?;
    Ok(())
}

pub fn close_svg(out: &mut String) {
    out.push_str("</svg>\n");
}

/// point on a circle of radius `r` at `angle` radians, measured clockwise
/// from twelve o'clock
pub fn polar(r: f64, angle: f64) -> (f64, f64) {
    (r * angle.sin(), -r * angle.cos())
}
