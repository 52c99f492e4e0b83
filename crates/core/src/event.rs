//! Trace event model.
//!
//! This module defines the typed representation of one decoded trace line.
//! It provides:
//! 1. **Event Kinds:** A closed enum over the recognized event tags with an
//!    explicit catch-all, so dispatch is exhaustiveness-checked.
//! 2. **Access Status:** Hit/miss classification of cache and TLB events.
//! 3. **Events:** The decoded record (timestamp, kind, detail map).

use crate::parse::DetailMap;

/// Event kinds recognized by the analyzer.
///
/// Constructed from the raw event tag with [`EventKind::from_tag`]; any tag
/// outside the recognized set maps to [`EventKind::Other`] and is ignored
/// during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A data cache access; counted by `status`.
    CacheAccess,
    /// A TLB lookup; counted by `status`.
    TlbLookup,
    /// A DRAM read; its `latency_ns` is appended to the latency sequence.
    MemRead,
    /// An unrecognized tag; parsed successfully but never counted.
    Other,
}

impl EventKind {
    /// Maps a raw event tag to its kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "CACHE_ACCESS" => Self::CacheAccess,
            "TLB_LOOKUP" => Self::TlbLookup,
            "MEM_READ" => Self::MemRead,
            _ => Self::Other,
        }
    }
}

/// Hit/miss classification of a cache or TLB event.
///
/// Any `status` value other than the exact strings `HIT` and `MISS`,
/// including an absent key, classifies as [`AccessStatus::Other`] and
/// touches neither counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    /// `status=HIT`.
    Hit,
    /// `status=MISS`.
    Miss,
    /// Any other or missing status value.
    Other,
}

impl AccessStatus {
    /// Classifies a raw status value; `None` means the key was absent.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("HIT") => Self::Hit,
            Some("MISS") => Self::Miss,
            _ => Self::Other,
        }
    }
}

/// One decoded trace line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// First line segment. Parsed but unused by the current metrics.
    pub timestamp: String,
    /// Dispatch tag of the event.
    pub kind: EventKind,
    /// Key/value pairs from the third line segment.
    pub details: DetailMap,
}
