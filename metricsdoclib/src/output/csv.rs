//! CSV encoding.
//!
//! Fields are separated by commas. A field is quoted when it contains a
//! comma, a double quote or a line break, when it starts with any Unicode
//! whitespace, or when it is exactly `\.` (an end-of-data marker for some
//! SQL loaders). Quotes inside a quoted field are doubled. Empty fields
//! are written bare.

use std::io::Write;

use super::write_line;
use crate::error::{RenderError, Stage};

/// Record terminator
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

const DELIMITER: char = ',';
const QUOTE: char = '"';

fn needs_quotes(field: &str) -> bool {
    if field.is_empty() {
        return false;
    }
    field == r"\."
        || field.starts_with(char::is_whitespace)
        || field.contains([DELIMITER, QUOTE, '\r', '\n'])
}

/// Encode one field, quoting it if needed.
pub fn encode_field(field: &str) -> String {
    if needs_quotes(field) {
        format!("{QUOTE}{}{QUOTE}", field.replace(QUOTE, "\"\""))
    } else {
        field.to_string()
    }
}

/// Encode one record including its terminator.
pub fn encode_record<S: AsRef<str>>(cells: &[S]) -> String {
    let mut record = cells
        .iter()
        .map(|cell| encode_field(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    record.push_str(LINE_ENDING);
    record
}

pub(crate) fn write_table<W: Write>(
    sink: &mut W,
    header: Option<&[String]>,
    rows: &[Vec<String>],
) -> Result<(), RenderError> {
    if let Some(header) = header {
        write_line(sink, &encode_record(header), Stage::Header)?;
    }
    for (index, row) in rows.iter().enumerate() {
        write_line(sink, &encode_record(row), Stage::Row(index))?;
    }
    Ok(())
}
