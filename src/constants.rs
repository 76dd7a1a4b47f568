//! Design constants for conversion, distance, generation, and the picker UI.

/// sRGB → XYZ (D65) matrix rows
pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// D65 reference white (Xn, Yn, Zn)
pub const D65_WHITE: (f64, f64, f64) = (0.95047, 1.0, 1.08883);

/// Channel threshold below which sRGB decoding is linear
pub const SRGB_LINEAR_CUTOFF: f64 = 0.04045;

/// Lab `f(t)` switches from cube root to the linear segment below this
pub const LAB_EPSILON: f64 = 0.008856;

/// Hue weight in the HSV distance. Hue dominates perceived distinctness.
pub const WEIGHT_HUE: f64 = 2.0;

/// Saturation weight in the HSV distance
pub const WEIGHT_SATURATION: f64 = 1.0;

/// Value weight in the HSV distance
pub const WEIGHT_VALUE: f64 = 1.5;

/// Saturation range sampled by the generator
pub const GEN_SATURATION: std::ops::Range<f64> = 0.5..1.0;

/// Value range sampled by the generator
pub const GEN_VALUE: std::ops::Range<f64> = 0.7..1.0;

/// Generator gives up after `count * GEN_ATTEMPTS_PER_COLOR` samples
pub const GEN_ATTEMPTS_PER_COLOR: usize = 20;

/// Largest batch one generation request produces; larger requests are clamped
pub const GEN_MAX_COUNT: usize = 256;

/// Colors produced per generation request
pub const DEFAULT_GENERATE_COUNT: usize = 5;

/// Minimum weighted HSV distance between generated colors
pub const DEFAULT_MIN_DISTANCE: f64 = 0.2;

/// Delta-E under which a later palette entry counts as a near duplicate
pub const DEFAULT_PRUNE_THRESHOLD: f64 = 10.0;

/// Threshold substituted for unusable host input (NaN or below 1)
pub const FALLBACK_PRUNE_THRESHOLD: f64 = 7.0;

/// Storage key holding the persisted palette
pub const STORAGE_KEY: &str = "colorPalette";

/// Bucket used by the on-disk store
pub const STORE_BUCKET: &str = "palette";

/// Preset hues offered as one-click generation buttons
pub const RAINBOW_HUES: [f64; 8] = [0.0, 30.0, 60.0, 120.0, 180.0, 240.0, 270.0, 300.0];

/// Gap between picker elements
#[cfg(feature = "ui")]
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
#[cfg(feature = "ui")]
pub const PADDING: f32 = 8.0;

/// Border radius for swatches
#[cfg(feature = "ui")]
pub const RADIUS: f32 = 4.0;

/// Input field width
#[cfg(feature = "ui")]
pub const INPUT_WIDTH: f32 = 32.0;

/// Hex input field width
#[cfg(feature = "ui")]
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Palette swatch edge length
#[cfg(feature = "ui")]
pub const SWATCH_SIZE: f32 = 36.0;

/// Input font size
#[cfg(feature = "ui")]
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
#[cfg(feature = "ui")]
pub const LABEL_FONT: f32 = 10.0;
