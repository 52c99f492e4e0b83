//! Common types shared across the analyzer.
//!
//! This module provides the error taxonomy used by every stage of the
//! analysis pipeline. It includes:
//! 1. **Fatal Errors:** Conditions that abort the whole run (I/O, bad latency).
//! 2. **Diagnostics:** Recoverable per-line warnings collected during parsing.

/// Error and diagnostic definitions.
pub mod error;

pub use error::{AnalyzeError, Diagnostic};
