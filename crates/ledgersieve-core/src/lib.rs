//! Core types for ledgersieve
//!
//! This crate provides the fundamental types used throughout the ledgersieve
//! project:
//!
//! - [`Field`] - The fixed schema of a ledger entry (canonical names, CSV
//!   columns, display widths, comparable subset)
//! - [`Entry`] - One immutable expense record
//! - [`EntrySet`] - An ordered collection of entries, or the universal set,
//!   with union / intersection / complement
//!
//! # Example
//!
//! ```
//! use ledgersieve_core::{Entry, EntrySet, Field};
//!
//! let lunch = Entry::new([
//!     "1", "2020/06/21", "食", "晚餐", "285", "公館豚骨拉麵", "拉麵",
//! ]).unwrap();
//!
//! assert_eq!(lunch.id(), 1);
//! assert_eq!(lunch.amount(), 285);
//! assert_eq!(lunch.get(Field::Label), "拉麵");
//!
//! let all = EntrySet::concrete(vec![lunch.clone()]);
//! assert_eq!(EntrySet::Universal.intersection(&all), all);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod entry;
pub mod schema;
pub mod set;

pub use entry::{total_amount, Entry, EntryError};
pub use schema::Field;
pub use set::EntrySet;

// Re-export commonly used external types
pub use chrono::NaiveDate;
