//! Color math: HSV, RGB, hex, XYZ and Lab conversions.
//!
//! All functions are pure. Floating point inputs that are NaN propagate as
//! NaN through the float conversions; the integer ones saturate instead of
//! panicking.

use crate::color::{HexColor, Hsv, Lab, Rgb, Xyz};
use crate::constants::{D65_WHITE, LAB_EPSILON, SRGB_LINEAR_CUTOFF, SRGB_TO_XYZ};
use crate::error::ColorError;

/// HSV → RGB. `h` in degrees (any real), `s` and `v` in 0.0–1.0.
///
/// Uses the six-term kernel `k = (n + h/60) mod 6` per channel. The modulo is
/// floored, so negative hues wrap the same way positive ones do.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let channel = |n: f64| {
        let k = (n + h / 60.0).rem_euclid(6.0);
        let f = v - v * s * k.min(4.0 - k).min(1.0).max(0.0);
        to_byte(f)
    };
    Rgb::new(channel(5.0), channel(3.0), channel(1.0))
}

/// RGB → HSV with hue in degrees. Achromatic colors get hue 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) * 60.0
    } else if max == g {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    Hsv::new(h, s, max)
}

/// RGB → `#RRGGBB`, uppercase and zero padded.
pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
    HexColor::from_normalized(format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b))
}

/// Validated hex → RGB. R is bits 16–23, G 8–15, B 0–7.
pub fn hex_to_rgb(hex: &HexColor) -> Rgb {
    let packed = hex
        .digits()
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0u32, |acc, d| (acc << 4) | d);
    Rgb::new(
        ((packed >> 16) & 0xFF) as u8,
        ((packed >> 8) & 0xFF) as u8,
        (packed & 0xFF) as u8,
    )
}

/// Parse and convert raw text in one step.
///
/// # Errors
///
/// [`ColorError::Format`] if `input` is not `#` followed by six hex digits.
pub fn parse_hex_rgb(input: &str) -> Result<Rgb, ColorError> {
    HexColor::parse(input).map(|hex| hex_to_rgb(&hex))
}

/// sRGB → XYZ (D65), after gamma decoding each channel.
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let lin = [
        srgb_to_linear(f64::from(rgb.r) / 255.0),
        srgb_to_linear(f64::from(rgb.g) / 255.0),
        srgb_to_linear(f64::from(rgb.b) / 255.0),
    ];
    let row = |m: [f64; 3]| m[0] * lin[0] + m[1] * lin[1] + m[2] * lin[2];
    Xyz {
        x: row(SRGB_TO_XYZ[0]),
        y: row(SRGB_TO_XYZ[1]),
        z: row(SRGB_TO_XYZ[2]),
    }
}

/// XYZ → CIE L*a*b* relative to the D65 white.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let (xn, yn, zn) = D65_WHITE;
    let fx = lab_f(xyz.x / xn);
    let fy = lab_f(xyz.y / yn);
    let fz = lab_f(xyz.z / zn);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

fn srgb_to_linear(c: f64) -> f64 {
    if c > SRGB_LINEAR_CUTOFF {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Scale 0.0–1.0 to 0–255, rounding half up. `as` saturates out-of-range
/// values and maps NaN to 0.
fn to_byte(f: f64) -> u8 {
    (f * 255.0).round() as u8
}
