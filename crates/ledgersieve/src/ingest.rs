//! CSV ingestion.
//!
//! Reads the expense export into ordered [`Entry`] records. The export has
//! a fixed, named column schema; every column named by [`Field::column`]
//! must be present in the header. Input order is preserved, and in the
//! reference export it coincides with identifier order.

use anyhow::{bail, Context, Result};
use ledgersieve_core::{Entry, Field};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read entries from CSV content.
///
/// # Errors
///
/// Fails when a schema column is missing from the header, a row is
/// malformed CSV, or a row's identifier or amount does not parse.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<Entry>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let header_map: HashMap<String, usize> = csv_reader
        .headers()
        .context("failed to read CSV header")?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_string(), i))
        .collect();

    let mut columns = [0usize; Field::COUNT];
    for field in Field::ALL {
        let Some(&index) = header_map.get(field.column()) else {
            bail!("missing column {:?} in input header", field.column());
        };
        columns[field.index()] = index;
    }

    let mut entries = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        // Header is row 1; data starts at row 2.
        let row_num = i + 2;
        let record = record.with_context(|| format!("row {row_num}: malformed CSV"))?;
        let values = Field::ALL
            .map(|field| record.get(columns[field.index()]).unwrap_or("").to_string());
        let entry = Entry::new(values).with_context(|| format!("row {row_num}"))?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Read entries from a CSV file on disk.
pub fn read_entries_from_path(path: &Path) -> Result<Vec<Entry>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_entries(file).with_context(|| format!("failed to read {}", path.display()))
}

/// Read entries from standard input.
pub fn read_entries_from_stdin() -> Result<Vec<Entry>> {
    read_entries(io::stdin().lock()).context("failed to read CSV from stdin")
}
