//! # metricsdoclib
//!
//! Runtime metric descriptors and the tables that document them.
//!
//! ## Overview
//!
//! A runtime exposes a fixed list of metrics. Each one is described by a
//! [`Descriptor`]: its name, the [`ValueKind`] of value it produces, whether
//! it is cumulative, and a free-text description. This library holds that
//! list ([`catalog`]) and renders it as a table ([`output`]).
//!
//! ## Features
//!
//! - **Two encodings**: CSV with standard quoting, or a GitHub-flavored
//!   Markdown pipe table with aligned columns
//! - **Buffered rendering**: rows are collected first and written in one
//!   pass, so column widths always fit the content
//! - **Stage-aware errors**: a failed write says whether the header, the
//!   separator or which row was being written
//! - **Pure data types**: descriptors are plain serde structs and can be
//!   loaded from JSON
//!
//! ## Example
//!
//! ```rust
//! use metricsdoclib::{catalog, render_descriptors, Format};
//!
//! let mut out = Vec::new();
//! render_descriptors(&mut out, Format::Markdown, &catalog::builtin()).unwrap();
//!
//! let table = String::from_utf8(out).unwrap();
//! assert!(table.starts_with("| Name"));
//! assert!(table.contains("/gc/heap/allocs:bytes"));
//! ```

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod output;

pub use descriptor::{Descriptor, ValueKind};
pub use error::{CatalogError, ConfigError, MetricsDocError, RenderError, Stage};
pub use output::{descriptor_row, render_descriptors, Format, Row, TableRenderer, HEADER};

/// Result type for metricsdoclib operations
pub type Result<T> = std::result::Result<T, MetricsDocError>;
