//!
//! A single benchmark table row.
//!

///
/// A single benchmark table row.
///
/// The speedup is taken from the table as is and never recomputed from the timings.
/// The fields are decoded under their canonical column names.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// The number of processed samples.
    pub sample_count: u64,
    /// The single-threaded elapsed time, in milliseconds.
    pub single_thread_ms: f64,
    /// The multi-threaded elapsed time, in milliseconds.
    pub multi_thread_ms: f64,
    /// The stored single-to-multi-threaded time ratio.
    pub speedup: f64,
}

impl Record {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(sample_count: u64, single_thread_ms: f64, multi_thread_ms: f64, speedup: f64) -> Self {
        Self {
            sample_count,
            single_thread_ms,
            multi_thread_ms,
            speedup,
        }
    }

    ///
    /// The sample count as a plotting coordinate.
    ///
    pub fn x(&self) -> f64 {
        self.sample_count as f64
    }
}
