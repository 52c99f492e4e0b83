//! Memory trace analysis library.
//!
//! This crate parses line-oriented memory/cache trace logs and aggregates them
//! into performance metrics. It provides:
//! 1. **Events:** Decoding of trace lines into typed event records.
//! 2. **Parsing:** Tolerant line and detail-map parsing with collected diagnostics.
//! 3. **Statistics:** Cache/TLB hit counters, read latencies, and derived metrics.
//! 4. **Reporting:** Human-readable text report rendering.
//! 5. **Analysis:** A single-pass file analyzer tying the above together.

/// Common types (errors, diagnostics).
pub mod common;
/// Analyzer configuration (defaults, config structures).
pub mod config;
/// Trace event model (event kinds, access status).
pub mod event;
/// Line and detail-map parsing.
pub mod parse;
/// Single-pass trace file analysis.
pub mod run;
/// Statistics collection and report rendering.
pub mod stats;

/// Fatal analysis error; aborts the whole run.
pub use crate::common::error::AnalyzeError;
/// Recoverable per-line warning record.
pub use crate::common::error::Diagnostic;
/// Root configuration type; use `Config::default()`.
pub use crate::config::Config;
/// Analysis entry point; reads a trace file start to end.
pub use crate::run::{Analysis, analyze_file};
/// Statistics accumulator; render with `Display` or `print()`.
pub use crate::stats::TraceStats;
