//!
//! Aggregate speedup statistics.
//!

use crate::input::record::Record;

use super::metrics;
use super::parameters::Parameters;

///
/// Aggregate speedup statistics.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Statistics {
    /// The best speedup.
    pub max_speedup: f64,
    /// The worst speedup.
    pub min_speedup: f64,
    /// The arithmetic mean speedup.
    pub mean_speedup: f64,
    /// The median speedup.
    pub median_speedup: f64,
    /// Whether the last record is faster relative to its baseline than the first one.
    pub is_speedup_growing: bool,
    /// Whether the best speedup exceeds [`Parameters::SIGNIFICANT_SPEEDUP`].
    pub is_speedup_significant: bool,
    /// The efficiency of the best speedup, in percent.
    pub max_efficiency_pct: f64,
}

impl Statistics {
    ///
    /// Aggregates a non-empty slice of validated records.
    ///
    pub fn new(records: &[Record], ideal_parallelism: f64) -> Option<Self> {
        let first = records.first()?;
        let last = records.last()?;

        let mut speedups: Vec<f64> = records.iter().map(|record| record.speedup).collect();
        speedups.sort_by(f64::total_cmp);

        let min_speedup = speedups[0];
        let max_speedup = speedups[speedups.len() - 1];
        // Scaled before summing to stay finite. Rounding must not push the mean out of the range.
        let count = speedups.len() as f64;
        let mean_speedup = speedups
            .iter()
            .map(|speedup| speedup / count)
            .sum::<f64>()
            .clamp(min_speedup, max_speedup);
        let middle = speedups.len() / 2;
        let median_speedup = if speedups.len() % 2 == 0 {
            speedups[middle - 1] / 2.0 + speedups[middle] / 2.0
        } else {
            speedups[middle]
        };

        Some(Self {
            max_speedup,
            min_speedup,
            mean_speedup,
            median_speedup,
            is_speedup_growing: last.speedup > first.speedup,
            is_speedup_significant: max_speedup > Parameters::SIGNIFICANT_SPEEDUP,
            max_efficiency_pct: metrics::efficiency_pct(max_speedup, ideal_parallelism),
        })
    }
}
