//! Fixed-width table rendering.
//!
//! Renders an entry sequence as an aligned text table in [`Field::ALL`]
//! order, followed by a total-amount line. When a non-zero base total is
//! supplied, the total line is annotated with the percentage the rendered
//! total represents of that base.

use ledgersieve_core::{total_amount, Entry, Field};
use std::io::{self, Write};

/// Terminal cell width of a string.
///
/// Characters occupying three UTF-8 bytes (the CJK range of this data)
/// render double-width; everything else counts one cell.
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c.len_utf8() == 3 { 2 } else { 1 })
        .sum()
}

/// Write one cell padded to `width` display cells.
///
/// Newlines in the value are flattened to spaces. Overlong values are not
/// truncated; they simply get no padding.
fn write_cell<W: Write>(w: &mut W, text: &str, width: usize, pad: char) -> io::Result<()> {
    let flat = text.replace('\n', " ");
    write!(w, "{flat}")?;
    for _ in display_width(&flat)..width {
        write!(w, "{pad}")?;
    }
    Ok(())
}

fn write_rule<W: Write>(w: &mut W) -> io::Result<()> {
    for field in Field::ALL {
        write_cell(w, "-", field.width(), '-')?;
    }
    writeln!(w)
}

/// Render a table of entries plus the total line.
///
/// `base_total` is the denominator for the percentage annotation; pass
/// `None` (or a zero base) to omit the percentage.
pub fn write_table<W: Write>(
    w: &mut W,
    entries: &[Entry],
    base_total: Option<i64>,
) -> io::Result<()> {
    for field in Field::ALL {
        write_cell(w, field.display_name(), field.width(), ' ')?;
    }
    writeln!(w)?;
    write_rule(w)?;

    for entry in entries {
        for field in Field::ALL {
            write_cell(w, entry.get(field), field.width(), ' ')?;
        }
        writeln!(w)?;
    }
    write_rule(w)?;

    let total = total_amount(entries);
    write!(w, "總金額：{total}")?;
    match base_total {
        Some(base) if base != 0 => {
            let pct = 100.0 * total as f64 / base as f64;
            writeln!(w, ", 佔全部比例 {pct:.2}%")
        }
        _ => writeln!(w),
    }
}
