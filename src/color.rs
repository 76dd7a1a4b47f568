//! Color value types shared by conversions, metrics, and palette curation.
//!
//! `Rgb` is the canonical interchange form; `HexColor` is the validated
//! `#RRGGBB` string the palette stores. `Xyz` and `Lab` exist only for
//! distance computation and are never shown to the user.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::math;

/// 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsv(self) -> Hsv {
        math::rgb_to_hsv(self)
    }

    pub fn to_hex(self) -> HexColor {
        math::rgb_to_hex(self)
    }

    pub fn to_lab(self) -> Lab {
        math::rgb_to_lab(self)
    }

    /// Clipboard payload, e.g. `rgb(59, 130, 246)`.
    pub fn to_copy_text(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue in degrees, saturation and value in 0.0–1.0.
///
/// Hue is not normalized on construction; conversions treat it modulo 360.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgb {
        math::hsv_to_rgb(self.h, self.s, self.v)
    }

    pub fn to_hex(self) -> HexColor {
        self.to_rgb().to_hex()
    }

    pub fn from_hex(hex: &HexColor) -> Self {
        hex.to_rgb().to_hsv()
    }

    /// Clipboard payload with rounded degrees and percentages, e.g. `hsv(217, 76, 96)`.
    pub fn to_copy_text(self) -> String {
        format!(
            "hsv({}, {}, {})",
            self.h.round() as i64,
            (self.s * 100.0).round() as i64,
            (self.v * 100.0).round() as i64,
        )
    }
}

/// CIE 1931 tristimulus values under D65.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L*a*b*. `l` in 0–100, `a`/`b` roughly -128–127.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// A `#RRGGBB` color with uppercase digits.
///
/// Only constructible from well-formed input, so every value in a palette is
/// already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse `#RRGGBB` (digits in either case). Anything else is a
    /// [`ColorError::Format`], never coerced.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError::Format {
                input: input.to_string(),
            })?;
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// Read a hex text field: surrounding whitespace is dropped and the `#`
    /// the field omits is prepended before validation.
    pub fn from_field(raw: &str) -> Result<Self, ColorError> {
        Self::parse(&format!("#{}", raw.trim()))
    }

    /// Wrap an already uppercase `#RRGGBB` string.
    pub(crate) fn from_normalized(hex: String) -> Self {
        Self(hex)
    }

    /// `#RRGGBB`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `RRGGBB`, as shown in the hex field.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    pub fn to_rgb(&self) -> Rgb {
        math::hex_to_rgb(self)
    }

    pub fn to_lab(&self) -> Lab {
        self.to_rgb().to_lab()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl From<&HexColor> for Rgb {
    fn from(hex: &HexColor) -> Self {
        hex.to_rgb()
    }
}

/// A palette entry paired with its Lab value for sorting and pruning.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteColor {
    pub hex: HexColor,
    pub lab: Lab,
}

impl PaletteColor {
    pub fn new(hex: HexColor) -> Self {
        let lab = hex.to_lab();
        Self { hex, lab }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("#3b82f6", "#3B82F6" ; "lowercase is normalized")]
    #[test_case("#ABCDEF", "#ABCDEF" ; "uppercase kept")]
    #[test_case("#00ff7F", "#00FF7F" ; "mixed case")]
    fn parse_accepts_six_digits(input: &str, expected: &str) {
        assert_eq!(HexColor::parse(input).unwrap().as_str(), expected);
    }

    #[test_case("3B82F6" ; "missing hash")]
    #[test_case("#3B82F" ; "five digits")]
    #[test_case("#3B82F6A" ; "seven digits")]
    #[test_case("#FFF" ; "shorthand")]
    #[test_case("#GG0000" ; "non hex digit")]
    #[test_case(" #3B82F6" ; "leading space")]
    #[test_case("" ; "empty")]
    fn parse_rejects_malformed(input: &str) {
        assert_eq!(
            HexColor::parse(input),
            Err(ColorError::Format {
                input: input.to_string()
            })
        );
    }

    #[test]
    fn from_field_trims_and_prefixes() {
        assert_eq!(HexColor::from_field("  ff8800 ").unwrap().as_str(), "#FF8800");
        assert!(HexColor::from_field("#ff8800").is_err());
    }

    #[test]
    fn digits_drop_the_hash() {
        assert_eq!(HexColor::parse("#0a0b0c").unwrap().digits(), "0A0B0C");
    }

    #[test]
    fn serde_uses_the_hash_string() {
        let hex = HexColor::parse("#12ab34").unwrap();
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#12AB34\"");
        let back: HexColor = serde_json::from_str("\"#12ab34\"").unwrap();
        assert_eq!(back, hex);
        assert!(serde_json::from_str::<HexColor>("\"12AB34\"").is_err());
    }

    #[test]
    fn copy_text_formats() {
        assert_eq!(Rgb::new(59, 130, 246).to_copy_text(), "rgb(59, 130, 246)");
        assert_eq!(Hsv::new(217.2, 0.76, 0.964).to_copy_text(), "hsv(217, 76, 96)");
    }

    #[test]
    fn palette_color_carries_lab() {
        let white = PaletteColor::new(HexColor::parse("#FFFFFF").unwrap());
        assert!((white.lab.l - 100.0).abs() < 0.01);
    }
}
