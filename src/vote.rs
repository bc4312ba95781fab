//! Plurality voting over labeled samples.
//!
//! Every valid sample casts one vote for its effective category; the
//! category with the strictly greatest count wins. Ties are settled by a
//! [`TieBreak`] policy, first-seen order by default.

use std::collections::HashMap;
use std::hash::Hash;

/// A labeled observation that can vote for a category.
///
/// Hosts implement this for their own sample types; [`CategorySample`] is the
/// plain-data implementation.
pub trait Sample {
    /// Category label type.
    type Label: Eq + Hash + Clone;

    /// Whether the sample is still live. Invalid samples are skipped.
    fn is_valid(&self) -> bool;

    /// The label this sample votes for.
    fn category(&self) -> &Self::Label;
}

impl<S: Sample + ?Sized> Sample for &S {
    type Label = S::Label;

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }

    fn category(&self) -> &Self::Label {
        (**self).category()
    }
}

/// A sample with up to two layers of identity substitution.
///
/// The effective category is the double-hidden identity if present, else the
/// hidden identity, else the plain identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySample<L> {
    /// Plain identity.
    pub identity: L,
    /// First substitution layer.
    pub hidden: Option<L>,
    /// Substitution on top of `hidden`.
    pub double_hidden: Option<L>,
    /// Liveness flag; stale samples do not vote.
    pub valid: bool,
}

impl<L> CategorySample<L> {
    /// Create a valid sample with no substitutions.
    #[must_use]
    pub const fn new(identity: L) -> Self {
        Self {
            identity,
            hidden: None,
            double_hidden: None,
            valid: true,
        }
    }

    /// Set the hidden identity.
    #[must_use]
    pub fn with_hidden(mut self, hidden: L) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Set the double-hidden identity.
    #[must_use]
    pub fn with_double_hidden(mut self, double_hidden: L) -> Self {
        self.double_hidden = Some(double_hidden);
        self
    }

    /// Mark the sample as stale.
    #[must_use]
    pub fn invalidated(mut self) -> Self {
        self.valid = false;
        self
    }

    /// The most deeply substituted identity available.
    #[must_use]
    pub fn effective(&self) -> &L {
        self.double_hidden
            .as_ref()
            .or(self.hidden.as_ref())
            .unwrap_or(&self.identity)
    }
}

impl<L: Eq + Hash + Clone> Sample for CategorySample<L> {
    type Label = L;

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn category(&self) -> &L {
        self.effective()
    }
}

/// How to pick a winner among equally frequent categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum TieBreak {
    /// The category encountered first in input order wins.
    #[default]
    FirstSeen,
    /// The smallest label wins.
    Lexical,
    /// Hash-map traversal order. Callers must not rely on the outcome.
    Unspecified,
}

/// Vote counts per category, kept in first-seen order.
#[derive(Debug, Clone)]
pub struct Tally<L> {
    counts: Vec<(L, usize)>,
    index: HashMap<L, usize>,
}

impl<L: Eq + Hash + Clone> Default for Tally<L> {
    fn default() -> Self {
        Self {
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<L: Eq + Hash + Clone> Tally<L> {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every valid sample.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator,
        I::Item: Sample<Label = L>,
    {
        let mut tally = Self::new();
        for sample in samples {
            if sample.is_valid() {
                tally.add(sample.category());
            }
        }
        tally
    }

    /// Record one vote for `label`.
    pub fn add(&mut self, label: &L) {
        match self.index.get(label) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(label.clone(), self.counts.len());
                self.counts.push((label.clone(), 1));
            }
        }
    }

    /// Votes recorded for `label`.
    #[must_use]
    pub fn count(&self, label: &L) -> usize {
        self.index.get(label).map_or(0, |&slot| self.counts[slot].1)
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no votes were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of votes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Categories and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, usize)> {
        self.counts.iter().map(|(label, count)| (label, *count))
    }

    /// The plurality category, or `None` if nothing was tallied.
    #[must_use]
    pub fn winner(&self, tie_break: TieBreak) -> Option<&L>
    where
        L: Ord,
    {
        match tie_break {
            TieBreak::FirstSeen => strict_max(self.iter()),
            TieBreak::Unspecified => {
                strict_max(self.index.iter().map(|(label, &slot)| (label, self.counts[slot].1)))
            }
            TieBreak::Lexical => {
                let mut best: Option<(&L, usize)> = None;
                for (label, count) in self.iter() {
                    let better = match best {
                        None => count > 0,
                        Some((best_label, best_count)) => {
                            count > best_count || (count == best_count && label < best_label)
                        }
                    };
                    if better {
                        best = Some((label, count));
                    }
                }
                best.map(|(label, _)| label)
            }
        }
    }
}

// Running maximum starts at zero and only a strictly greater count replaces it.
fn strict_max<'a, L: 'a>(entries: impl Iterator<Item = (&'a L, usize)>) -> Option<&'a L> {
    let mut max = 0;
    let mut winner = None;
    for (label, count) in entries {
        if count > max {
            max = count;
            winner = Some(label);
        }
    }
    winner
}

/// The dominant category among `samples`, ties going to the first seen.
#[must_use]
pub fn dominant<I>(samples: I) -> Option<<I::Item as Sample>::Label>
where
    I: IntoIterator,
    I::Item: Sample,
    <I::Item as Sample>::Label: Ord,
{
    dominant_with(samples, TieBreak::FirstSeen)
}

/// The dominant category among `samples` under an explicit tie-break policy.
#[must_use]
pub fn dominant_with<I>(samples: I, tie_break: TieBreak) -> Option<<I::Item as Sample>::Label>
where
    I: IntoIterator,
    I::Item: Sample,
    <I::Item as Sample>::Label: Ord,
{
    Tally::from_samples(samples).winner(tie_break).cloned()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// The winner's count is never below any other category's count.
        #[test]
        fn prop_winner_has_max_count(labels in prop::collection::vec(0u8..6, 0..200)) {
            let input: Vec<_> = labels.iter().copied().map(CategorySample::new).collect();
            let tally = Tally::from_samples(&input);

            for tie_break in [TieBreak::FirstSeen, TieBreak::Lexical, TieBreak::Unspecified] {
                match tally.winner(tie_break) {
                    None => prop_assert!(labels.is_empty()),
                    Some(winner) => {
                        let best = tally.count(winner);
                        prop_assert!(tally.iter().all(|(_, count)| count <= best));
                    }
                }
            }
        }

        /// Tally total equals the number of valid samples.
        #[test]
        fn prop_total_counts_valid_only(
            entries in prop::collection::vec((0u8..6, any::<bool>()), 0..200)
        ) {
            let input: Vec<_> = entries
                .iter()
                .map(|&(label, valid)| CategorySample { valid, ..CategorySample::new(label) })
                .collect();
            let valid = entries.iter().filter(|(_, valid)| *valid).count();
            prop_assert_eq!(Tally::from_samples(&input).total(), valid);
        }
    }
}
