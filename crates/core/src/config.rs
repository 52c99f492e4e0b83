//! Configuration for the trace analyzer.
//!
//! This module defines the configuration structures used to parameterize an
//! analysis run. It provides:
//! 1. **Defaults:** Baseline constants (default trace path, warning stream).
//! 2. **Structures:** Hierarchical config for general analyzer behavior.
//!
//! The CLI runs on `Config::default()`; the structures also deserialize from
//! JSON for embedding callers.

use serde::Deserialize;

/// Default configuration constants for the analyzer.
mod defaults {
    /// Trace file consumed when no path argument is given.
    pub const TRACE_PATH: &str = "epyc_trace.log";
}

/// General analyzer behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Trace file path used when the caller does not supply one.
    pub trace_path: String,

    /// Route warnings to stderr instead of stdout.
    ///
    /// Either way, warnings are emitted before the report.
    pub warnings_to_stderr: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_path: defaults::TRACE_PATH.to_string(),
            warnings_to_stderr: false,
        }
    }
}

/// Root configuration type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General analyzer behavior.
    pub general: GeneralConfig,
}
