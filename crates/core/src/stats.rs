//! Statistics collection and report rendering.
//!
//! This module tracks the aggregate metrics of an analysis run. It provides:
//! 1. **Counters:** Cache and TLB hit/miss counts.
//! 2. **Latencies:** The ordered sequence of observed DRAM read latencies.
//! 3. **Derived Metrics:** Hit rates and average read latency.
//! 4. **Reporting:** Fixed-order text report (cache, TLB, memory).

use std::fmt;

use crate::common::error::AnalyzeError;
use crate::event::{AccessStatus, Event, EventKind};

/// Statistics accumulator for one analysis run.
///
/// Mutated once per recognized event during the parse pass; read-only during
/// report generation. `cache_hits + cache_misses` always equals the number of
/// `CACHE_ACCESS` events whose status was exactly `HIT` or `MISS` (same for
/// the TLB counters).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// `CACHE_ACCESS` events with `status=HIT`.
    pub cache_hits: u64,
    /// `CACHE_ACCESS` events with `status=MISS`.
    pub cache_misses: u64,
    /// `TLB_LOOKUP` events with `status=HIT`.
    pub tlb_hits: u64,
    /// `TLB_LOOKUP` events with `status=MISS`.
    pub tlb_misses: u64,
    /// Observed `MEM_READ` latencies in nanoseconds, in file order.
    pub read_latencies: Vec<u64>,
}

impl TraceStats {
    /// Folds one decoded event into the counters.
    ///
    /// Unknown event kinds and non-HIT/MISS statuses update nothing. A
    /// `MEM_READ` with a non-integer `latency_ns` aborts the run.
    pub fn record(&mut self, event: &Event, line_no: usize) -> Result<(), AnalyzeError> {
        match event.kind {
            EventKind::CacheAccess => match event.details.status() {
                AccessStatus::Hit => self.cache_hits += 1,
                AccessStatus::Miss => self.cache_misses += 1,
                AccessStatus::Other => {}
            },
            EventKind::TlbLookup => match event.details.status() {
                AccessStatus::Hit => self.tlb_hits += 1,
                AccessStatus::Miss => self.tlb_misses += 1,
                AccessStatus::Other => {}
            },
            EventKind::MemRead => {
                let latency = event.details.latency_ns(line_no)?;
                self.read_latencies.push(latency);
            }
            EventKind::Other => {}
        }
        Ok(())
    }

    /// Cache hit rate as a percentage, or `None` without any counted access.
    pub fn cache_hit_rate(&self) -> Option<f64> {
        hit_rate(self.cache_hits, self.cache_misses)
    }

    /// TLB hit rate as a percentage, or `None` without any counted lookup.
    pub fn tlb_hit_rate(&self) -> Option<f64> {
        hit_rate(self.tlb_hits, self.tlb_misses)
    }

    /// Arithmetic mean read latency in nanoseconds, or `None` without reads.
    pub fn avg_read_latency(&self) -> Option<f64> {
        if self.read_latencies.is_empty() {
            return None;
        }
        let sum: u64 = self.read_latencies.iter().sum();
        Some(sum as f64 / self.read_latencies.len() as f64)
    }

    /// Renders the report to an owned string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the rendered report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

fn hit_rate(hits: u64, misses: u64) -> Option<f64> {
    let total = hits + misses;
    if total == 0 {
        return None;
    }
    Some(hits as f64 / total as f64 * 100.0)
}

impl fmt::Display for TraceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Performance Analysis Report ---")?;

        writeln!(f)?;
        match self.cache_hit_rate() {
            Some(rate) => {
                writeln!(f, "[Cache Performance]")?;
                writeln!(f, "  Total Accesses: {}", self.cache_hits + self.cache_misses)?;
                writeln!(f, "  Cache Hits:     {}", self.cache_hits)?;
                writeln!(f, "  Cache Misses:   {}", self.cache_misses)?;
                writeln!(f, "  Cache Hit Rate: {rate:.2}%")?;
            }
            None => writeln!(f, "No cache data recorded.")?,
        }

        writeln!(f)?;
        match self.tlb_hit_rate() {
            Some(rate) => {
                writeln!(f, "[TLB Performance]")?;
                writeln!(f, "  Total Lookups: {}", self.tlb_hits + self.tlb_misses)?;
                writeln!(f, "  TLB Hits:      {}", self.tlb_hits)?;
                writeln!(f, "  TLB Misses:    {}", self.tlb_misses)?;
                writeln!(f, "  TLB Hit Rate:  {rate:.2}%")?;
            }
            None => writeln!(f, "No TLB data recorded.")?,
        }

        writeln!(f)?;
        match self.avg_read_latency() {
            Some(avg) => {
                writeln!(f, "[Memory Subsystem]")?;
                writeln!(f, "  Total DRAM Reads: {}", self.read_latencies.len())?;
                writeln!(f, "  Average Latency:  {avg:.2} ns")?;
            }
            None => writeln!(f, "No memory read data recorded.")?,
        }

        Ok(())
    }
}
