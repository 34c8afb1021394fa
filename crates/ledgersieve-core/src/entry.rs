//! Ledger entry type.
//!
//! An [`Entry`] is one expense record: a string value per schema field,
//! immutable once built. The identifier and amount are parsed exactly once
//! at construction and kept alongside their display strings, so every later
//! comparison and sort uses the same numeric representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::schema::Field;

/// Error raised when an entry cannot be built from its raw field values.
#[derive(Debug, Error)]
pub enum EntryError {
    /// The identifier is not a string of digits.
    #[error("invalid identifier {0:?}: expected a string of digits")]
    InvalidId(String),
    /// The amount is not an integer-valued string.
    #[error("invalid amount {0:?}: expected an integer")]
    InvalidAmount(String),
}

/// One immutable expense record.
///
/// Equality is structural: two entries are equal iff all field values are
/// equal. Identity is never pointer-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    id: u64,
    amount: i64,
    values: [String; Field::COUNT],
}

impl Entry {
    /// Build an entry from raw field values in [`Field::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError`] when the identifier or amount string does not
    /// parse as an integer.
    pub fn new<S: Into<String>>(values: [S; Field::COUNT]) -> Result<Self, EntryError> {
        let values = values.map(Into::into);
        let id_str = &values[Field::Id.index()];
        let id = id_str
            .parse::<u64>()
            .map_err(|_| EntryError::InvalidId(id_str.clone()))?;
        let amount_str = &values[Field::Amount.index()];
        let amount = amount_str
            .parse::<i64>()
            .map_err(|_| EntryError::InvalidAmount(amount_str.clone()))?;
        Ok(Self { id, amount, values })
    }

    /// The numeric identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The integer amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// The raw string value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Iterate over all field values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {}", self.id, self.get(Field::Date), self.amount)
    }
}

/// Sum the amounts of a sequence of entries.
#[must_use]
pub fn total_amount(entries: &[Entry]) -> i64 {
    entries.iter().map(Entry::amount).sum()
}
