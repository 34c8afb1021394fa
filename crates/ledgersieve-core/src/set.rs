//! Entry sets and their algebra.
//!
//! An [`EntrySet`] is either a concrete ordered sequence of entries or the
//! universal set: "every possible entry, not yet materialized". The
//! universal set is the identity element of intersection and the absorbing
//! element of union, which lets a query fold start from it without special
//! cases. It is an explicit enum variant, never a sentinel value compared
//! by identity.
//!
//! All operations are pure: a set is never mutated in place, every
//! operation returns a new set.

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// An ordered collection of ledger entries, or the universal set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrySet {
    /// All possible entries, not yet materialized.
    Universal,
    /// A concrete ordered, duplicate-free sequence of entries.
    Concrete(Vec<Entry>),
}

impl EntrySet {
    /// Wrap a concrete sequence of entries.
    #[must_use]
    pub const fn concrete(entries: Vec<Entry>) -> Self {
        Self::Concrete(entries)
    }

    /// The empty concrete set. Distinct from [`EntrySet::Universal`].
    #[must_use]
    pub const fn empty() -> Self {
        Self::Concrete(Vec::new())
    }

    /// Whether this is the universal set.
    #[must_use]
    pub const fn is_universal(&self) -> bool {
        matches!(self, Self::Universal)
    }

    /// The concrete entries, or `None` for the universal set.
    #[must_use]
    pub fn entries(&self) -> Option<&[Entry]> {
        match self {
            Self::Universal => None,
            Self::Concrete(entries) => Some(entries),
        }
    }

    /// Materialize against a concrete universe: the universal set becomes
    /// the whole universe, a concrete set is returned as-is.
    #[must_use]
    pub fn into_entries(self, universe: &[Entry]) -> Vec<Entry> {
        match self {
            Self::Universal => universe.to_vec(),
            Self::Concrete(entries) => entries,
        }
    }

    /// Intersection of two sets.
    ///
    /// The universal set is the identity element. For two concrete sets the
    /// result keeps the entries structurally present in both, in the left
    /// operand's order.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Universal, _) => other.clone(),
            (_, Self::Universal) => self.clone(),
            (Self::Concrete(a), Self::Concrete(b)) => Self::Concrete(
                a.iter()
                    .filter(|entry| b.contains(entry))
                    .cloned()
                    .collect(),
            ),
        }
    }

    /// Union of two sets.
    ///
    /// The universal set absorbs. For two concrete sets the result contains
    /// every entry present in either operand exactly once, canonicalized by
    /// a stable sort on the numeric identifier. Canonicalizing here keeps
    /// the operation correct for operands in arbitrary order; a linear
    /// merge would silently require both sides to already be id-sorted.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Universal, _) | (_, Self::Universal) => Self::Universal,
            (Self::Concrete(a), Self::Concrete(b)) => {
                let mut merged = a.clone();
                for entry in b {
                    if !merged.contains(entry) {
                        merged.push(entry.clone());
                    }
                }
                merged.sort_by_key(Entry::id);
                Self::Concrete(merged)
            }
        }
    }

    /// Complement of this set within a concrete universe.
    ///
    /// Returns the entries of `universe` not structurally present in this
    /// set, preserving the universe's order. The complement of the
    /// universal set is empty within any universe.
    #[must_use]
    pub fn complement_within(&self, universe: &[Entry]) -> Self {
        match self {
            Self::Universal => Self::empty(),
            Self::Concrete(subset) => Self::Concrete(
                universe
                    .iter()
                    .filter(|entry| !subset.contains(entry))
                    .cloned()
                    .collect(),
            ),
        }
    }
}

impl FromIterator<Entry> for EntrySet {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::Concrete(iter.into_iter().collect())
    }
}
