//! Single-pass trace file analysis.
//!
//! This module drives the full pipeline for one trace file. It performs:
//! 1. **Reading:** Buffered, sequential, start-to-end; the handle is scoped
//!    to the read and released on every exit path.
//! 2. **Folding:** Each well-formed line is decoded and folded into
//!    [`TraceStats`]; malformed lines become collected diagnostics.

use std::fs::File;
use std::io::{BufRead, BufReader};

use tracing::{debug, trace};

use crate::common::error::{AnalyzeError, Diagnostic};
use crate::parse;
use crate::stats::TraceStats;

/// Outcome of a completed analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Final counters and latencies.
    pub stats: TraceStats,
    /// Warnings for skipped lines, in file order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Reads a trace file and aggregates it into an [`Analysis`].
///
/// Lines are processed in file order, 1-indexed for diagnostics; blank lines
/// advance the line counter but are skipped silently. Returns an error if
/// the file cannot be opened or read, or if a `MEM_READ` event carries a
/// non-integer `latency_ns` value. No partial report survives a failure.
pub fn analyze_file(path: &str) -> Result<Analysis, AnalyzeError> {
    let file = File::open(path).map_err(|e| AnalyzeError::Io {
        path: path.to_string(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut analysis = Analysis::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| AnalyzeError::Io {
            path: path.to_string(),
            source: e,
        })?;
        let line_no = index + 1;

        match parse::parse_line(line_no, &line) {
            Ok(Some(event)) => {
                trace!(line_no, kind = ?event.kind, "recording event");
                analysis.stats.record(&event, line_no)?;
            }
            Ok(None) => {}
            Err(diagnostic) => {
                debug!(line_no, %diagnostic, "skipping line");
                analysis.diagnostics.push(diagnostic);
            }
        }
    }

    Ok(analysis)
}
