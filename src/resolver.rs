//! Representative biome color resolution.
//!
//! Ties the pipeline together: vote for the dominant category among nearby
//! samples, fall back to a host-supplied category when nothing valid voted,
//! look the category's map color up and normalize it.
//!
//! The resolver holds no state between calls and never touches host types;
//! the color table is borrowed read-only through [`CategoryColorMap`].

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::normalize::NormalizeTarget;
use crate::vote::{Sample, Tally, TieBreak};

/// Read-only lookup from a category label to its map color.
pub trait CategoryColorMap<L: ?Sized> {
    /// The color associated with `category`, if any.
    fn map_color(&self, category: &L) -> Option<Rgba>;
}

impl<L, M> CategoryColorMap<L> for &M
where
    L: ?Sized,
    M: CategoryColorMap<L> + ?Sized,
{
    fn map_color(&self, category: &L) -> Option<Rgba> {
        (**self).map_color(category)
    }
}

impl<L: Eq + Hash, S: BuildHasher> CategoryColorMap<L> for HashMap<L, Rgba, S> {
    fn map_color(&self, category: &L) -> Option<Rgba> {
        self.get(category).copied()
    }
}

impl<L: Ord> CategoryColorMap<L> for BTreeMap<L, Rgba> {
    fn map_color(&self, category: &L) -> Option<Rgba> {
        self.get(category).copied()
    }
}

/// Adapts a closure into a [`CategoryColorMap`].
///
/// ```
/// use biome_tint::prelude::*;
///
/// let colors =
///     FnColorMap(|name: &&str| (*name == "sand").then_some(Rgba::rgb(230.0, 200.0, 120.0)));
/// assert!(colors.map_color(&"sand").is_some());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnColorMap<F>(pub F);

impl<L, F> CategoryColorMap<L> for FnColorMap<F>
where
    L: ?Sized,
    F: Fn(&L) -> Option<Rgba>,
{
    fn map_color(&self, category: &L) -> Option<Rgba> {
        (self.0)(category)
    }
}

/// Derives a normalized representative color from category samples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BiomeColorResolver {
    target: NormalizeTarget,
    tie_break: TieBreak,
    strict: bool,
}

impl BiomeColorResolver {
    /// Resolver with the signature palette and first-seen tie-break.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if the configuration fails validation.
    #[cfg(feature = "config")]
    pub fn from_config(config: &crate::config::ResolverConfig) -> Result<Self> {
        config.clone().into_resolver()
    }

    /// Use a different normalization target.
    #[must_use]
    pub fn with_target(mut self, target: NormalizeTarget) -> Self {
        self.target = target;
        self
    }

    /// Use a different tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Reject looked-up colors with channels outside `[0, 255]`.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The normalization target.
    #[must_use]
    pub const fn target(&self) -> NormalizeTarget {
        self.target
    }

    /// The tie-break policy.
    #[must_use]
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Whether strict validation is on.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Resolve the representative color of `samples`.
    ///
    /// `fallback` is only called when no valid sample voted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCategory`] if the chosen category has no map
    /// color, or [`Error::ChannelOutOfRange`] in strict mode if the map color
    /// is out of range.
    pub fn resolve<I, M, F>(&self, samples: I, colors: &M, fallback: F) -> Result<Rgba>
    where
        I: IntoIterator,
        I::Item: Sample,
        <I::Item as Sample>::Label: Ord + Display,
        M: CategoryColorMap<<I::Item as Sample>::Label> + ?Sized,
        F: FnOnce() -> <I::Item as Sample>::Label,
    {
        let tally = Tally::from_samples(samples);

        let category = match tally.winner(self.tie_break) {
            Some(winner) => {
                tracing::trace!(
                    category = %winner,
                    votes = tally.count(winner),
                    total = tally.total(),
                    distinct = tally.len(),
                    "dominant category"
                );
                winner.clone()
            }
            None => {
                let fallback = fallback();
                tracing::debug!(category = %fallback, "no valid samples, using fallback category");
                fallback
            }
        };

        self.color_for(&category, colors)
    }

    /// Look up and normalize the map color of a single category.
    ///
    /// # Errors
    ///
    /// Same as [`BiomeColorResolver::resolve`].
    pub fn color_for<L, M>(&self, category: &L, colors: &M) -> Result<Rgba>
    where
        L: Display + ?Sized,
        M: CategoryColorMap<L> + ?Sized,
    {
        let Some(color) = colors.map_color(category) else {
            tracing::warn!(category = %category, "category missing from color table");
            return Err(Error::UnknownCategory {
                category: category.to_string(),
            });
        };

        let color = if self.strict {
            color.validate()?
        } else {
            color
        };

        Ok(self.target.apply(color))
    }
}

/// Resolve with the default [`BiomeColorResolver`].
///
/// # Errors
///
/// Returns [`Error::UnknownCategory`] if the chosen category has no map color.
pub fn resolve<I, M, F>(samples: I, colors: &M, fallback: F) -> Result<Rgba>
where
    I: IntoIterator,
    I::Item: Sample,
    <I::Item as Sample>::Label: Ord + Display,
    M: CategoryColorMap<<I::Item as Sample>::Label> + ?Sized,
    F: FnOnce() -> <I::Item as Sample>::Label,
{
    BiomeColorResolver::new().resolve(samples, colors, fallback)
}
