//! Expense-ledger filtering CLI.
//!
//! This crate provides the `lsieve` command: it reads a personal expense
//! CSV, filters it with the boolean query language from
//! `ledgersieve-query`, and renders the surviving entries as a fixed-width,
//! wide-character-aware table with a total-amount line.
//!
//! # Example Usage
//!
//! ```bash
//! lsieve -i expense.csv -q '拉麵 OR amount>=500'
//! lsieve -i expense.csv -q '-(食 amount>=200)' -b 'date>=2020/06/01'
//! cat expense.csv | lsieve -q 'label:拉麵'
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ingest;
pub mod render;
