//! Output formatting: present rows as tables.
//!
//! - **TableRenderer**: buffers a header and rows, then writes them in one
//!   pass on [`TableRenderer::flush`]
//! - **Format**: the closed set of output encodings (CSV, Markdown)
//! - **table**: maps descriptors onto the four-column metrics table
//!
//! Each encoding lives in its own module and only ever sees the buffered
//! rows, so a new format is one more module plus one more `Format` arm.
//!
//! ## Example
//!
//! ```rust
//! use metricsdoclib::output::{Format, TableRenderer};
//!
//! let mut out = Vec::new();
//! let mut table = TableRenderer::new(&mut out, Format::Csv);
//! table.set_header(["Name", "Kind"]);
//! table.append(["/gc/heap/goal:bytes", "KindUint64"]);
//! table.flush().unwrap();
//!
//! assert!(String::from_utf8(out).unwrap().starts_with("Name,Kind"));
//! ```

pub mod csv;
pub mod markdown;
pub mod renderer;
pub mod table;

pub use renderer::{Format, Row, TableRenderer};
pub use table::{descriptor_row, render_descriptors, HEADER};

use std::io::Write;

use crate::error::{RenderError, Stage};

/// Write one already-terminated line, tagging failures with the stage.
fn write_line<W: Write>(sink: &mut W, line: &str, stage: Stage) -> Result<(), RenderError> {
    sink.write_all(line.as_bytes())
        .map_err(|source| RenderError::Write { stage, source })
}
