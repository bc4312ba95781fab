//! Color types and RGB <-> HSL conversions.
//!
//! Channels are real-valued: [`Rgba`] lives on the 0-255 scale, [`Hsla`] on
//! the 0-1 scale with hue expressed as a fraction of a full turn.
//!
//! Two conventions coexist for alpha:
//!
//! - The free functions [`rgb_to_hsl`] and [`hsl_to_rgb`] keep the legacy
//!   defaults. An omitted alpha becomes `255` on the way to HSL (passed
//!   through unscaled) and `1` on the way back to RGB (then scaled by 255).
//! - The methods [`Rgba::to_hsla`] and [`Hsla::to_rgba`] always keep alpha in
//!   `[0, 1]` inside [`Hsla`] and scale at the boundary.
//!
//! Conversions never round. Use [`Rgba::round`] or [`Rgba::to_u8_array`] to
//! obtain whole channel values; both round half away from zero.

use crate::error::{Error, Result};

/// RGBA color with real-valued 0-255 components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red component (0-255).
    pub r: f64,
    /// Green component (0-255).
    pub g: f64,
    /// Blue component (0-255).
    pub b: f64,
    /// Alpha component (0-255, 255 = fully opaque).
    #[cfg_attr(feature = "config", serde(default = "opaque_rgba_alpha"))]
    pub a: f64,
}

#[cfg(feature = "config")]
fn opaque_rgba_alpha() -> f64 {
    255.0
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 255.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 255.0);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 255.0)
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Round every channel to the nearest integer (halves away from zero).
    #[must_use]
    pub fn round(self) -> Self {
        Self::new(self.r.round(), self.g.round(), self.b.round(), self.a.round())
    }

    /// Round and saturate into 8-bit channels `[r, g, b, a]`.
    #[must_use]
    pub fn to_u8_array(self) -> [u8; 4] {
        [
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            to_u8(self.a),
        ]
    }

    /// Rounded `[r, g, b]` values for a host's three numeric output slots.
    #[must_use]
    pub fn to_signals(self) -> [i32; 3] {
        [
            self.r.round() as i32,
            self.g.round() as i32,
            self.b.round() as i32,
        ]
    }

    /// Convert to HSLA with alpha rescaled into `[0, 1]`.
    #[must_use]
    pub fn to_hsla(self) -> Hsla {
        rgb_to_hsl(self.r, self.g, self.b, Some(self.a / 255.0))
    }

    /// Check that every channel lies in `[0, 255]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOutOfRange`] naming the first offending channel.
    pub fn validate(self) -> Result<Self> {
        check_channel("r", self.r, 255.0)?;
        check_channel("g", self.g, 255.0)?;
        check_channel("b", self.b, 255.0)?;
        check_channel("a", self.a, 255.0)?;
        Ok(self)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 3]> for Rgba {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_u8(r, g, b)
    }
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        hsla.to_rgba()
    }
}

/// HSLA color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    /// Hue (fraction of a full turn, 0.0-1.0).
    pub h: f64,
    /// Saturation (0.0-1.0).
    pub s: f64,
    /// Lightness (0.0-1.0).
    pub l: f64,
    /// Alpha (0.0-1.0).
    #[cfg_attr(feature = "config", serde(default = "opaque_hsla_alpha"))]
    pub a: f64,
}

#[cfg(feature = "config")]
fn opaque_hsla_alpha() -> f64 {
    1.0
}

impl Hsla {
    /// Create a new HSLA color.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Create an opaque HSL color (alpha = 1.0).
    #[must_use]
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Whether the color is a gray (zero saturation, hue irrelevant).
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }

    /// Convert to RGBA, scaling alpha from `[0, 1]` to `[0, 255]`.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        hsl_to_rgb(self.h, self.s, self.l, Some(self.a))
    }

    /// Check that every component lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOutOfRange`] naming the first offending component.
    pub fn validate(self) -> Result<Self> {
        check_channel("h", self.h, 1.0)?;
        check_channel("s", self.s, 1.0)?;
        check_channel("l", self.l, 1.0)?;
        check_channel("a", self.a, 1.0)?;
        Ok(self)
    }
}

impl Default for Hsla {
    fn default() -> Self {
        Self::hsl(0.0, 0.0, 0.0)
    }
}

impl From<Rgba> for Hsla {
    fn from(rgba: Rgba) -> Self {
        rgba.to_hsla()
    }
}

/// Convert 0-255 RGB channels to HSL.
///
/// An omitted alpha defaults to `255` and is passed through unscaled; a
/// supplied alpha is returned untouched.
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64, a: Option<f64>) -> Hsla {
    let a = a.unwrap_or(255.0);
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsla::new(0.0, 0.0, l, a);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsla::new(h / 6.0, s, l, a)
}

/// Convert HSL to 0-255 RGB channels.
///
/// An omitted alpha defaults to `1` in both the chromatic and achromatic
/// branches; alpha is then scaled by 255 like the color channels.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64, a: Option<f64>) -> Rgba {
    let a = a.unwrap_or(1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgba::new(r * 255.0, g * 255.0, b * 255.0, a * 255.0)
}

/// Evaluate one RGB channel of the HSL hexcone at hue offset `t`.
///
/// `t` is wrapped into `[0, 1)` by a single step, which covers the `±1/3`
/// offsets [`hsl_to_rgb`] produces for hues in `[0, 1]`.
#[must_use]
pub fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t >= 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn check_channel(channel: &'static str, value: f64, max: f64) -> Result<()> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::ChannelOutOfRange { channel, value, max })
    }
}
