//! # Biome-Tint
//!
//! Derives a stylized representative color from a noisy set of nearby,
//! labeled samples.
//!
//! The pipeline has two stages:
//!
//! 1. A plurality vote over category samples picks the dominant category,
//!    with a host-supplied fallback when no valid sample voted.
//! 2. The category's map color is converted RGB -> HSL -> RGB with saturation
//!    and lightness pinned, producing a consistent "signature" color.
//!
//! Everything is pure and synchronous. The host owns the samples and the
//! category color table; the library only reads them.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use biome_tint::prelude::*;
//!
//! let colors = HashMap::from([
//!     ("grass", Rgba::rgb(54.0, 86.0, 15.0)),
//!     ("sand", Rgba::rgb(190.0, 160.0, 90.0)),
//! ]);
//! let samples = [
//!     CategorySample::new("grass"),
//!     CategorySample::new("grass"),
//!     CategorySample::new("sand"),
//! ];
//!
//! let color = resolve(&samples, &colors, || "sand")?;
//! assert_eq!(color.to_signals(), [135, 204, 51]);
//! # Ok::<(), biome_tint::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config` (default): YAML resolver configuration and serde support on
//!   color types

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

// ============================================================================
// Color Modules
// ============================================================================

/// Color types and RGB <-> HSL conversions.
pub mod color;

/// Hue-preserving saturation/lightness normalization.
pub mod normalize;

// ============================================================================
// Aggregation Modules
// ============================================================================

/// Plurality vote over category samples.
pub mod vote;

/// Dominant-category color resolution.
pub mod resolver;

// ============================================================================
// Configuration
// ============================================================================

/// YAML resolver configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for biome-tint operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use biome_tint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{hsl_to_rgb, rgb_to_hsl, Hsla, Rgba};
    #[cfg(feature = "config")]
    pub use crate::config::ResolverConfig;
    pub use crate::error::{Error, Result};
    pub use crate::normalize::{normalize_color, NormalizeTarget};
    pub use crate::resolver::{resolve, BiomeColorResolver, CategoryColorMap, FnColorMap};
    pub use crate::vote::{dominant, dominant_with, CategorySample, Sample, Tally, TieBreak};
}
