//! Buffered table renderer.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{csv, markdown};
use crate::error::{ConfigError, RenderError, Stage};

/// One table row: an ordered list of cells.
pub type Row = Vec<String>;

/// Output encoding for a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Comma-separated values
    Csv,
    /// GitHub-flavored Markdown pipe table
    #[default]
    Markdown,
}

impl Format {
    /// All formats, in the order they are listed in help output
    pub const ALL: [Format; 2] = [Format::Csv, Format::Markdown];

    /// Name accepted by [`Format::from_str`]
    pub fn name(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Markdown => "markdown",
        }
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Format::Csv),
            "markdown" => Ok(Format::Markdown),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collects a header and rows, then writes them as a table on [`flush`].
///
/// Nothing reaches the sink before `flush`: Markdown needs every row to
/// size its columns. Rows keep their insertion order.
///
/// `flush` is meant to be called once. Calling it again writes the whole
/// table a second time.
///
/// [`flush`]: TableRenderer::flush
#[derive(Debug)]
pub struct TableRenderer<W: Write> {
    sink: W,
    format: Format,
    header: Option<Row>,
    rows: Vec<Row>,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(sink: W, format: Format) -> Self {
        tracing::debug!(%format, "created table renderer");
        Self {
            sink,
            format,
            header: None,
            rows: Vec::new(),
        }
    }

    /// Create a renderer from a format name such as `"csv"`.
    ///
    /// Unknown names fail with [`ConfigError::UnknownFormat`] and the sink
    /// is dropped untouched.
    pub fn with_format_name(sink: W, name: &str) -> Result<Self, ConfigError> {
        let format = name.parse()?;
        Ok(Self::new(sink, format))
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Set the header row, replacing any previous one.
    pub fn set_header<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(cells.into_iter().map(Into::into).collect());
    }

    /// Buffer one data row after those already appended.
    pub fn append<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of buffered data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the buffered table to the sink.
    ///
    /// Stops at the first failed write; whatever was written before it
    /// stays on the sink.
    pub fn flush(&mut self) -> Result<(), RenderError> {
        tracing::debug!(
            format = %self.format,
            rows = self.rows.len(),
            has_header = self.header.is_some(),
            "flushing table"
        );

        let header = self.header.as_deref();
        match self.format {
            Format::Csv => csv::write_table(&mut self.sink, header, &self.rows)?,
            Format::Markdown => markdown::write_table(&mut self.sink, header, &self.rows)?,
        }

        self.sink.flush().map_err(|source| RenderError::Write {
            stage: Stage::Flush,
            source,
        })
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}
