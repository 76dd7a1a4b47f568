//! Parsing for the numeric and hex text fields of the picker.
//!
//! Numbers are clamped into the field's range rather than rejected; only
//! blank or non-numeric text is an error.

use crate::color::{Hsv, Rgb};
use crate::error::ColorError;

/// Parse one bounded numeric field.
///
/// # Errors
///
/// [`ColorError::Validation`] if `raw` is blank, not a number, or NaN.
pub fn parse_field(
    field: &'static str,
    raw: &str,
    min: f64,
    max: f64,
) -> Result<f64, ColorError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| ColorError::Validation {
            field,
            input: raw.to_string(),
        })?;
    Ok(value.clamp(min, max))
}

/// Parse the R, G and B fields (0–255 each).
///
/// # Errors
///
/// [`ColorError::Validation`] naming the first field that fails.
pub fn parse_rgb_fields(r: &str, g: &str, b: &str) -> Result<Rgb, ColorError> {
    let channel = |field: &'static str, raw: &str| {
        parse_field(field, raw, 0.0, 255.0).map(|v| v.round() as u8)
    };
    Ok(Rgb::new(channel("R", r)?, channel("G", g)?, channel("B", b)?))
}

/// Parse the H (degrees, 0–360), S and V (percent, 0–100) fields.
///
/// # Errors
///
/// [`ColorError::Validation`] naming the first field that fails.
pub fn parse_hsv_fields(h: &str, s_percent: &str, v_percent: &str) -> Result<Hsv, ColorError> {
    let h = parse_field("H", h, 0.0, 360.0)?;
    let s = parse_field("S", s_percent, 0.0, 100.0)? / 100.0;
    let v = parse_field("V", v_percent, 0.0, 100.0)? / 100.0;
    Ok(Hsv::new(h, s, v))
}

/// Read the prune threshold field. Unparseable text yields `None`; range
/// checks happen in [`crate::PaletteConfig::effective_threshold`].
pub fn parse_threshold(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}
