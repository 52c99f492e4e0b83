//! Line and detail-map parsing.
//!
//! This module decodes raw trace lines into [`Event`](crate::event::Event)
//! records. It provides:
//! 1. **Line Splitting:** `timestamp::EVENT_TYPE::details` decomposition with
//!    a strict three-segment contract.
//! 2. **Detail Maps:** Validated `key=value,...` parsing with typed accessors.
//!
//! Parsing is tolerant: a malformed line yields a [`Diagnostic`] and is
//! skipped, it never aborts the run.

/// Validated detail map with typed accessors.
pub mod details;

pub use details::DetailMap;

use crate::common::error::Diagnostic;
use crate::event::{Event, EventKind};

/// Literal separating the three top-level line segments.
const SEGMENT_DELIMITER: &str = "::";

/// Decodes one raw trace line.
///
/// Returns `Ok(None)` for blank lines (skipped silently), `Ok(Some(event))`
/// for a well-formed line, and `Err(diagnostic)` for a line that must be
/// warned about and skipped. `line_no` is 1-based and counts physical lines,
/// blank ones included.
pub fn parse_line(line_no: usize, raw: &str) -> Result<Option<Event>, Diagnostic> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let segments: Vec<&str> = line.split(SEGMENT_DELIMITER).collect();
    let [timestamp, tag, details_str] = segments[..] else {
        return Err(Diagnostic::MalformedLine {
            line: line_no,
            content: line.to_string(),
        });
    };

    let Some(details) = DetailMap::parse(details_str) else {
        return Err(Diagnostic::MalformedDetails {
            line: line_no,
            details: details_str.to_string(),
        });
    };

    Ok(Some(Event {
        timestamp: timestamp.to_string(),
        kind: EventKind::from_tag(tag),
        details,
    }))
}
