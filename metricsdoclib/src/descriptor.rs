//! Metric descriptors: the static identity of a runtime metric.
//!
//! A descriptor says what a metric is called, what kind of value it
//! carries and whether that value only ever grows. It never carries the
//! value itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of value a metric produces.
///
/// Serialized as its numeric code. Codes outside the known set are kept
/// as [`ValueKind::Unknown`] instead of being rejected, so descriptor lists
/// from newer runtimes still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ValueKind {
    /// Unsupported metric; the runtime cannot produce a value for it
    Bad,
    /// Unsigned 64-bit integer
    Uint64,
    /// 64-bit floating point
    Float64,
    /// Histogram of 64-bit floating point samples
    Float64Histogram,
    /// A code this version does not know about
    Unknown(u32),
}

impl ValueKind {
    /// Numeric code of this kind
    pub fn code(self) -> u32 {
        match self {
            ValueKind::Bad => 0,
            ValueKind::Uint64 => 1,
            ValueKind::Float64 => 2,
            ValueKind::Float64Histogram => 3,
            ValueKind::Unknown(code) => code,
        }
    }

    /// Name used in rendered tables
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Bad => "KindBad",
            ValueKind::Uint64 => "KindUint64",
            ValueKind::Float64 => "KindFloat64",
            ValueKind::Float64Histogram => "KindFloat64Histogram",
            ValueKind::Unknown(_) => "Unknown",
        }
    }
}

impl From<u32> for ValueKind {
    fn from(code: u32) -> Self {
        match code {
            0 => ValueKind::Bad,
            1 => ValueKind::Uint64,
            2 => ValueKind::Float64,
            3 => ValueKind::Float64Histogram,
            other => ValueKind::Unknown(other),
        }
    }
}

impl From<ValueKind> for u32 {
    fn from(kind: ValueKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one runtime metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Metric name, e.g. `/gc/heap/allocs:bytes`
    pub name: String,
    /// Kind of value the metric produces
    pub kind: ValueKind,
    /// Whether the value only increases over the process lifetime
    pub cumulative: bool,
    /// Free-text description
    pub description: String,
}

impl Descriptor {
    pub fn new(
        name: impl Into<String>,
        kind: ValueKind,
        cumulative: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            cumulative,
            description: description.into(),
        }
    }
}
