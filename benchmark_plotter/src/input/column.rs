//!
//! Benchmark input table column.
//!

///
/// Benchmark input table column.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// The number of processed samples.
    SampleCount,
    /// The single-threaded elapsed time.
    SingleThreadMs,
    /// The multi-threaded elapsed time.
    MultiThreadMs,
    /// The measured speedup.
    Speedup,
}

impl Column {
    /// All columns a valid table must contain.
    pub const REQUIRED: [Self; 4] = [
        Self::SampleCount,
        Self::SingleThreadMs,
        Self::MultiThreadMs,
        Self::Speedup,
    ];

    ///
    /// The canonical header name.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            Self::SampleCount => "sample_count",
            Self::SingleThreadMs => "single_thread_ms",
            Self::MultiThreadMs => "multi_thread_ms",
            Self::Speedup => "speedup",
        }
    }

    ///
    /// The header name written by the benchmark driver.
    ///
    pub fn legacy_name(&self) -> &'static str {
        match self {
            Self::SampleCount => "Students",
            Self::SingleThreadMs => "SingleThread(ms)",
            Self::MultiThreadMs => "MultiThread(ms)",
            Self::Speedup => "Speedup",
        }
    }

    ///
    /// The index of the header cell holding this column.
    ///
    /// The canonical name wins over the legacy one, and the leftmost cell over the others.
    ///
    pub fn position(&self, headers: &csv::StringRecord) -> Option<usize> {
        headers
            .iter()
            .position(|header| header == self.name())
            .or_else(|| {
                headers
                    .iter()
                    .position(|header| header == self.legacy_name())
            })
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
