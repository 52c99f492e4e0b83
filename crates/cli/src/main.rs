//! Memory trace analyzer CLI.
//!
//! This binary provides the single entry point for trace analysis. It performs:
//! 1. **Argument handling:** One optional positional trace path; the built-in
//!    default filename is used when it is omitted.
//! 2. **Analysis:** Runs the single-pass analyzer over the file.
//! 3. **Output:** Prints collected warnings, then the formatted report. Any
//!    fatal error goes to stderr and exits with status 1, with no report.

use clap::Parser;
use std::process;

use memtrace_core::{Config, analyze_file};

#[derive(Parser, Debug)]
#[command(
    name = "memtrace",
    author,
    version,
    about = "Memory/cache trace log analyzer",
    long_about = "Parse a line-oriented memory trace log and report cache hit rate, TLB hit rate, and average DRAM read latency.\n\nTrace line format:\n  <timestamp>::<EVENT_TYPE>::<key1>=<value1>,<key2>=<value2>,...\n\nExamples:\n  memtrace epyc_trace.log\n  memtrace            (analyzes the default trace filename)"
)]
struct Cli {
    /// Trace log file to analyze (defaults to the built-in trace filename).
    trace: Option<String>,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::default();
    let path = cli.trace.unwrap_or(config.general.trace_path);

    println!("--- Starting analysis of {path} ---");

    match analyze_file(&path) {
        Ok(analysis) => {
            for diagnostic in &analysis.diagnostics {
                if config.general.warnings_to_stderr {
                    eprintln!("{diagnostic}");
                } else {
                    println!("{diagnostic}");
                }
            }
            println!();
            analysis.stats.print();
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Diagnostic logging to stderr, filtered by `RUST_LOG`. Off by default.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
