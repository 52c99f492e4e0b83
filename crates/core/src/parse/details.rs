//! Validated detail map with typed accessors.

use std::collections::HashMap;

use crate::common::error::AnalyzeError;
use crate::event::AccessStatus;

/// Key/value pairs parsed from the details segment of a trace line.
///
/// Built atomically: if any `key=value` item is malformed the whole map is
/// rejected and the line is skipped. On duplicate keys the last occurrence
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailMap {
    entries: HashMap<String, String>,
}

impl DetailMap {
    /// Parses a `key1=value1,key2=value2,...` segment.
    ///
    /// Returns `None` if any comma-separated item does not contain exactly
    /// one `=`. An empty segment is malformed too (its sole item has no `=`).
    pub(crate) fn parse(details_str: &str) -> Option<Self> {
        let mut entries = HashMap::new();
        for item in details_str.split(',') {
            let mut parts = item.split('=');
            let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                return None;
            };
            let _ = entries.insert(key.to_string(), value.to_string());
        }
        Some(Self { entries })
    }

    /// Raw value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit/miss classification of the `status` value.
    pub fn status(&self) -> AccessStatus {
        AccessStatus::from_value(self.get("status"))
    }

    /// Read latency in nanoseconds from the `latency_ns` value.
    ///
    /// An absent key defaults to 0. A present but non-integer value is fatal
    /// for the whole run; this is the one place where malformed data escapes
    /// the per-line warn-and-skip path. `line_no` feeds the error message.
    pub fn latency_ns(&self, line_no: usize) -> Result<u64, AnalyzeError> {
        match self.get("latency_ns") {
            None => Ok(0),
            Some(raw) => raw.parse().map_err(|_| AnalyzeError::BadLatency {
                line: line_no,
                value: raw.to_string(),
            }),
        }
    }
}
