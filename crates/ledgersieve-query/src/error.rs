//! Query error types.
//!
//! Every failure mode is one of two kinds: syntax (the query text is not
//! well-formed) or semantic (the query is well-formed but asks for an
//! impossible comparison). Errors are fail-fast; there is no partial
//! evaluation or recovery inside this crate.

use ledgersieve_core::Field;
use thiserror::Error;

/// The kind of a [`QueryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The query text is not well-formed.
    Syntax,
    /// The query asks for an impossible comparison.
    Semantic,
}

/// Error returned when tokenizing or evaluating a query fails.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A `)` with no matching `(`.
    #[error("unbalanced parentheses: unexpected ')' at byte {position}")]
    UnexpectedCloseParen {
        /// Byte offset of the offending `)` within the trimmed query.
        position: usize,
    },
    /// A `(` that is never closed.
    #[error("unbalanced parentheses: missing ')'")]
    UnclosedParen,
    /// An `OR` with no preceding predicate in its group.
    #[error("misplaced OR: expected a predicate before it")]
    MisplacedOr,
    /// A comparison token missing its field or value side.
    #[error("malformed comparison {0:?}: expected <field><op><value>")]
    MalformedComparison(String),
    /// A comparison naming a field outside the schema.
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// An ordering operator applied to a field without an ordering.
    #[error("field {0} does not support ordering comparisons")]
    NotComparable(Field),
    /// A date that does not parse as year-month-day.
    #[error("invalid date {0:?}: expected year-month-day")]
    InvalidDate(String),
    /// An id or amount bound that does not parse as an integer.
    #[error("invalid integer {0:?}")]
    InvalidNumber(String),
}

impl QueryError {
    /// Which kind of error this is.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedCloseParen { .. }
            | Self::UnclosedParen
            | Self::MisplacedOr
            | Self::MalformedComparison(_) => ErrorKind::Syntax,
            Self::UnknownField(_)
            | Self::NotComparable(_)
            | Self::InvalidDate(_)
            | Self::InvalidNumber(_) => ErrorKind::Semantic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            QueryError::UnexpectedCloseParen { position: 0 }.kind(),
            ErrorKind::Syntax
        );
        assert_eq!(QueryError::MisplacedOr.kind(), ErrorKind::Syntax);
        assert_eq!(
            QueryError::NotComparable(Field::Label).kind(),
            ErrorKind::Semantic
        );
        assert_eq!(
            QueryError::InvalidDate("junk".into()).kind(),
            ErrorKind::Semantic
        );
    }
}
