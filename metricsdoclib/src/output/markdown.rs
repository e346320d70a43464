//! GitHub-flavored Markdown pipe tables.
//!
//! ```text
//! | Name     | Kind       |
//! |----------|------------|
//! | /a:bytes | KindUint64 |
//! ```
//!
//! Every column is as wide as its widest cell, header included, measured
//! in terminal columns. Backslashes and pipes inside a cell are escaped
//! (`\\`, `\|`), line breaks become `<br>`, and other control characters
//! are replaced by their Unicode control pictures (ESC becomes `␛`), so
//! each row stays on a single line and terminal escape sequences cannot
//! skew the column widths.

use std::io::Write;

use console::{measure_text_width, pad_str, Alignment};

use super::write_line;
use crate::error::{RenderError, Stage};

/// Make a cell safe to place between pipes.
///
/// Backslashes are escaped before pipes, so a `\|` already in the cell
/// cannot turn into an escaped backslash followed by a column separator.
pub fn escape_cell(cell: &str) -> String {
    cell.replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\r', '\n'], "<br>")
        .chars()
        .map(control_picture)
        .collect()
}

/// Map a control character onto its visible stand-in from the Control
/// Pictures block; other characters pass through.
fn control_picture(c: char) -> char {
    match c {
        '\u{0}'..='\u{1f}' => char::from_u32(0x2400 + c as u32).unwrap_or(c),
        '\u{7f}' => '\u{2421}',
        _ => c,
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (index, width) in widths.iter().enumerate() {
        let cell = cells.get(index).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(&pad_str(cell, *width, Alignment::Left, None));
        line.push_str(" |");
    }
    line.push('\n');
    line
}

fn format_separator(widths: &[usize]) -> String {
    let mut line = String::from("|");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('|');
    }
    line.push('\n');
    line
}

fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.iter().map(Vec::len).chain([header.len()]).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }
    widths
}

fn escape_row(row: &[String]) -> Vec<String> {
    row.iter().map(|cell| escape_cell(cell)).collect()
}

pub(crate) fn write_table<W: Write>(
    sink: &mut W,
    header: Option<&[String]>,
    rows: &[Vec<String>],
) -> Result<(), RenderError> {
    // A pipe table always has a header line; without one, emit blank cells.
    let header = header.map(escape_row).unwrap_or_default();
    let rows: Vec<Vec<String>> = rows.iter().map(|row| escape_row(row)).collect();
    let widths = column_widths(&header, &rows);
    tracing::trace!(?widths, "computed markdown column widths");

    write_line(sink, &format_row(&header, &widths), Stage::Header)?;
    write_line(sink, &format_separator(&widths), Stage::Separator)?;
    for (index, row) in rows.iter().enumerate() {
        write_line(sink, &format_row(row, &widths), Stage::Row(index))?;
    }
    Ok(())
}
