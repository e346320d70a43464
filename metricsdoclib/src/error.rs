//! Error types for metricsdoclib

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid renderer configuration, detected before any row is accepted
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Output format name is not one of the recognized formats
    #[error("unknown format {0:?}")]
    UnknownFormat(String),
}

/// Point in the flush at which a write failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The header row
    Header,
    /// The separator line below the header (Markdown only)
    Separator,
    /// A data row, by zero-based index
    Row(usize),
    /// The final flush of the sink
    Flush,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Header => f.write_str("header"),
            Stage::Separator => f.write_str("separator"),
            Stage::Row(n) => write!(f, "row {}", n),
            Stage::Flush => f.write_str("final flush"),
        }
    }
}

/// Errors raised while writing a rendered table
#[derive(Error, Debug)]
pub enum RenderError {
    /// The sink rejected a write
    #[error("failed to write {stage}: {source}")]
    Write {
        stage: Stage,
        source: std::io::Error,
    },
}

impl RenderError {
    /// Stage at which the write failed
    pub fn stage(&self) -> Stage {
        match self {
            RenderError::Write { stage, .. } => *stage,
        }
    }
}

/// Errors loading a descriptor list from disk
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the descriptor file
    #[error("failed to read descriptors from '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The descriptor file is not a valid JSON descriptor list
    #[error("invalid descriptor file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Any error produced by metricsdoclib
#[derive(Error, Debug)]
pub enum MetricsDocError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
