//! The fixed field schema of a ledger entry.
//!
//! The schema is process-wide static configuration: canonical field names
//! used in the query language, the column headers of the source CSV export,
//! display headings and widths for table rendering, and the subset of
//! fields that support ordering comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven fields every ledger entry carries.
///
/// Variant order is the canonical display and ingestion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Unique, monotonically assigned digit-string identifier.
    Id,
    /// Calendar date of the expense, slash- or dash-delimited.
    Date,
    /// Major spending category.
    MajorCategory,
    /// Minor spending category.
    MinorCategory,
    /// Integer-valued amount in the ledger currency.
    Amount,
    /// Free-text description.
    Description,
    /// Free-text label; may contain line breaks.
    Label,
}

impl Field {
    /// Number of fields in the schema.
    pub const COUNT: usize = 7;

    /// All fields in canonical display/ingestion order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Id,
        Self::Date,
        Self::MajorCategory,
        Self::MinorCategory,
        Self::Amount,
        Self::Description,
        Self::Label,
    ];

    /// The canonical name used to scope a query predicate (`amount>=200`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Date => "date",
            Self::MajorCategory => "major_category",
            Self::MinorCategory => "minor_category",
            Self::Amount => "amount",
            Self::Description => "description",
            Self::Label => "label",
        }
    }

    /// The column header of this field in the source CSV export.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Date => "日期",
            Self::MajorCategory => "主分類",
            Self::MinorCategory => "子分類",
            Self::Amount => "該幣別金額",
            Self::Description => "帳務說明",
            Self::Label => "標籤",
        }
    }

    /// The heading shown for this field in rendered tables.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Date => "日期",
            Self::MajorCategory => "主分類",
            Self::MinorCategory => "子分類",
            Self::Amount => "金額",
            Self::Description => "帳務說明",
            Self::Label => "標籤",
        }
    }

    /// Rendered column width in terminal cells (CJK characters count as two).
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Id => 5,
            Self::Date => 12,
            Self::MajorCategory => 8,
            Self::MinorCategory => 10,
            Self::Amount => 10,
            Self::Description => 40,
            Self::Label => 39,
        }
    }

    /// Whether ordering operators (`<`, `>`, `<=`, `>=`) apply to this field.
    ///
    /// All fields support substring matching via `:`; only `id`, `date` and
    /// `amount` have an ordering.
    #[must_use]
    pub const fn is_comparable(self) -> bool {
        matches!(self, Self::Id | Self::Date | Self::Amount)
    }

    /// Look up a field by its canonical query-language name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Positional index of this field within [`Field::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
