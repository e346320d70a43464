//! The metrics table: one row per descriptor.

use std::io::Write;

use super::renderer::{Format, Row, TableRenderer};
use crate::descriptor::Descriptor;
use crate::error::RenderError;

/// Column headers of the metrics table
pub const HEADER: [&str; 4] = ["Name", "Kind", "Cumulative", "Description"];

/// Cells for one descriptor, in [`HEADER`] order.
pub fn descriptor_row(desc: &Descriptor) -> Row {
    vec![
        desc.name.clone(),
        desc.kind.to_string(),
        desc.cumulative.to_string(),
        desc.description.clone(),
    ]
}

/// Render descriptors as a metrics table, in the order given.
pub fn render_descriptors<W: Write>(
    sink: W,
    format: Format,
    descriptors: &[Descriptor],
) -> Result<(), RenderError> {
    let mut table = TableRenderer::new(sink, format);
    table.set_header(HEADER);
    for desc in descriptors {
        table.append(descriptor_row(desc));
    }
    table.flush()
}
