use regex::Regex;
use std::sync::LazyLock;

/// longest numeric prefix accepted when reading a field, e.g. "12.5 kg" reads as 12.5
static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .unwrap_or_else(|e| panic!("invalid numeric prefix pattern: {e}"))
});

/// reads a numeric field from a dataset row. missing, empty, or unparseable values
/// become 0 so that a malformed row still produces a record.
///
/// ```
/// use ecoroutes_core::record::record_ops::parse_or_zero;
///
/// assert_eq!(parse_or_zero(Some("42.5")), 42.5);
/// assert_eq!(parse_or_zero(Some(" 7 kg")), 7.0);
/// assert_eq!(parse_or_zero(Some("n/a")), 0.0);
/// assert_eq!(parse_or_zero(None), 0.0);
/// ```
pub fn parse_or_zero(value: Option<&str>) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };
    LEADING_FLOAT
        .find(value.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
        .unwrap_or_default()
}

/// reads a text field, using an empty string when missing.
pub fn text_or_empty(value: Option<&str>) -> String {
    value.map(str::to_owned).unwrap_or_default()
}
