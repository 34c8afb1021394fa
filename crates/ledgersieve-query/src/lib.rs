//! Boolean filter-query engine for ledgersieve.
//!
//! This crate implements the ad-hoc query language used to filter expense
//! records at the command line: free-text substring search, field-scoped
//! comparisons, negation, conjunction by juxtaposition, `OR`, and
//! parenthesized grouping.
//!
//! # Grammar
//!
//! ```text
//! query  := group ("OR" group)*
//! group  := token+
//! token  := "(" query ")" | "-" token | field ":" value | field op value | word
//! op     := ">=" | "<=" | "<" | ">"
//! ```
//!
//! `OR` has the lowest precedence, juxtaposition means AND, and `-` and
//! parentheses bind tightest. A negated token complements against the
//! universe of its enclosing evaluation, which for a parenthesized group is
//! that group's (possibly narrowed) universe.
//!
//! # Example
//!
//! ```
//! use ledgersieve_core::Entry;
//! use ledgersieve_query::query;
//!
//! let entries = vec![
//!     Entry::new(["1", "2020/06/21", "食", "晚餐", "285", "公館豚骨拉麵", "拉麵"]).unwrap(),
//!     Entry::new(["2", "2020/06/22", "交通", "計程車", "265", "東門站到公司", "車資"]).unwrap(),
//! ];
//!
//! let hits = query(&entries, "label:拉麵 amount>=200").unwrap();
//! assert_eq!(hits.entries().unwrap().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod eval;
pub mod tokenizer;

pub use error::{ErrorKind, QueryError};
pub use eval::{evaluate_token, query};
pub use tokenizer::tokenize;
