//! Error and diagnostic definitions.
//!
//! This module defines the two-tier error taxonomy of the analyzer:
//! 1. **Fatal Errors:** `AnalyzeError` aborts the whole run and suppresses the report.
//! 2. **Diagnostics:** `Diagnostic` records a skipped line; the run continues.
//!
//! Structurally malformed lines are recoverable (warn and skip), while a
//! non-integer `latency_ns` value on an otherwise well-formed `MEM_READ` line
//! is fatal. The asymmetry is deliberate and covered by tests.

use std::fmt;

use thiserror::Error;

/// Fatal analysis error.
///
/// Any variant terminates the run immediately; no report is produced.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The trace file could not be opened or read.
    #[error("could not read trace file '{path}': {source}")]
    Io {
        /// Path of the trace file as given by the caller.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A `MEM_READ` event carried a non-integer `latency_ns` value.
    #[error("line {line}: invalid latency_ns value '{value}'")]
    BadLatency {
        /// 1-based line number of the offending event.
        line: usize,
        /// The raw value that failed integer parsing.
        value: String,
    },
}

/// Recoverable warning recorded for a skipped line.
///
/// Diagnostics are collected in file order and returned alongside the final
/// statistics, so callers can inspect them without scraping text output.
/// A diagnosed line contributes nothing to any counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The line did not split into exactly `timestamp::event::details`.
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The trimmed line content as read.
        content: String,
    },

    /// A `key=value` item in the details segment was malformed.
    ///
    /// The whole line is skipped; no partial detail map is ever applied.
    MalformedDetails {
        /// 1-based line number.
        line: usize,
        /// The raw details segment.
        details: String,
    },
}

impl Diagnostic {
    /// 1-based line number the diagnostic refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line, .. } | Self::MalformedDetails { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line, content } => {
                write!(f, "Warning: skipping malformed line {line}: {content}")
            }
            Self::MalformedDetails { line, details } => {
                write!(f, "Warning: skipping malformed details on line {line}: {details}")
            }
        }
    }
}
