//! Hue-preserving color normalization.
//!
//! Collapses an arbitrary sampled color into a fixed-intensity "signature"
//! palette: the hue survives, saturation and lightness are pinned.

use crate::color::{hsl_to_rgb, rgb_to_hsl, Rgba};

/// Saturation and lightness a normalized color is re-synthesized with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizeTarget {
    /// Target saturation (0.0-1.0).
    pub saturation: f64,
    /// Target lightness (0.0-1.0).
    pub lightness: f64,
}

impl NormalizeTarget {
    /// The default signature palette: saturation 0.6, lightness 0.5.
    pub const SIGNATURE: Self = Self::new(0.6, 0.5);

    /// Create a new target.
    #[must_use]
    pub const fn new(saturation: f64, lightness: f64) -> Self {
        Self {
            saturation,
            lightness,
        }
    }

    /// Normalize `color` towards this target.
    ///
    /// The input alpha is ignored and the output is opaque. Channels are
    /// rounded to the nearest integer.
    #[must_use]
    pub fn apply(self, color: Rgba) -> Rgba {
        let hsl = rgb_to_hsl(color.r, color.g, color.b, None);
        hsl_to_rgb(hsl.h, self.saturation, self.lightness, None).round()
    }
}

impl Default for NormalizeTarget {
    fn default() -> Self {
        Self::SIGNATURE
    }
}

/// Normalize `color` to the [`NormalizeTarget::SIGNATURE`] palette.
#[must_use]
pub fn normalize_color(color: Rgba) -> Rgba {
    NormalizeTarget::SIGNATURE.apply(color)
}
