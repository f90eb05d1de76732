//!
//! Per-record derived metrics.
//!

use crate::input::record::Record;

///
/// Per-record derived metrics.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Metrics {
    /// The single-threaded minus the multi-threaded time.
    /// Negative if the multi-threaded run is slower.
    pub time_saved_ms: f64,
    /// The speedup relative to the ideal parallelism, in percent.
    pub efficiency_pct: f64,
}

impl Metrics {
    ///
    /// Derives the metrics of a validated record.
    ///
    pub fn new(record: &Record, ideal_parallelism: f64) -> Self {
        Self {
            time_saved_ms: record.single_thread_ms - record.multi_thread_ms,
            efficiency_pct: efficiency_pct(record.speedup, ideal_parallelism),
        }
    }
}

///
/// Normalizes the speedup against the ideal one.
///
pub fn efficiency_pct(speedup: f64, ideal_parallelism: f64) -> f64 {
    speedup / ideal_parallelism * 100.0
}
