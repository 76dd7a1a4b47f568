//! Runtime configuration for the palette host.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunables the host passes to the core. Every field has a default, so a
/// partial (or empty) JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Key the palette JSON array is stored under.
    pub storage_key: String,
    pub generate_count: usize,
    pub min_distance: f64,
    /// Delta-E used when the host supplies no threshold.
    pub prune_threshold: f64,
    /// Delta-E substituted for NaN or sub-1 thresholds.
    pub fallback_threshold: f64,
    pub rainbow_hues: Vec<f64>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            storage_key: constants::STORAGE_KEY.to_string(),
            generate_count: constants::DEFAULT_GENERATE_COUNT,
            min_distance: constants::DEFAULT_MIN_DISTANCE,
            prune_threshold: constants::DEFAULT_PRUNE_THRESHOLD,
            fallback_threshold: constants::FALLBACK_PRUNE_THRESHOLD,
            rainbow_hues: constants::RAINBOW_HUES.to_vec(),
        }
    }
}

impl PaletteConfig {
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid config document.
    pub fn from_json_str(json: &str) -> miette::Result<Self> {
        use miette::IntoDiagnostic;
        serde_json::from_str(json).into_diagnostic()
    }

    /// Threshold to hand to [`crate::curator::prune_similar`].
    ///
    /// `None` means the host field was left alone; NaN or anything below 1
    /// falls back to `fallback_threshold`.
    pub fn effective_threshold(&self, requested: Option<f64>) -> f64 {
        match requested {
            None => self.prune_threshold,
            Some(t) if t.is_nan() || t < 1.0 => self.fallback_threshold,
            Some(t) => t,
        }
    }
}
