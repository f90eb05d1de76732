//!
//! Benchmark analysis error.
//!

///
/// Benchmark analysis error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// There is nothing to analyze.
    #[error("No benchmark records to analyze")]
    NoRecords,
    /// The assumed core count cannot normalize the speedup.
    #[error("Ideal parallelism must be a positive finite number, found {0}")]
    InvalidParallelism(f64),
    /// A record violates the numeric invariants.
    #[error("Record #{index} ({sample_count} samples) is invalid: {violation}")]
    InvalidRecord {
        /// The zero-based row index.
        index: usize,
        /// The row sample count.
        sample_count: u64,
        /// The violated invariant.
        violation: Violation,
    },
}

///
/// A numeric invariant violated by a record.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The sample count is zero.
    ZeroSampleCount,
    /// A timing is negative or not finite.
    InvalidTime {
        /// The column name.
        column: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The speedup is not positive or not finite.
    InvalidSpeedup(f64),
    /// The stored speedup disagrees with the timings ratio.
    InconsistentSpeedup {
        /// The stored speedup.
        stored: f64,
        /// The single-to-multi-threaded time ratio.
        computed: f64,
    },
    /// The speedup normalized by the ideal parallelism does not fit a float.
    NonFiniteEfficiency {
        /// The stored speedup.
        speedup: f64,
        /// The ideal parallelism it is normalized by.
        ideal_parallelism: f64,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroSampleCount => write!(f, "the sample count is zero"),
            Self::InvalidTime { column, value } => {
                write!(f, "`{column}` must be non-negative and finite, found {value}")
            }
            Self::InvalidSpeedup(value) => {
                write!(f, "`speedup` must be positive and finite, found {value}")
            }
            Self::InconsistentSpeedup { stored, computed } => write!(
                f,
                "the stored speedup {stored:.3} disagrees with the timings ratio {computed:.3}"
            ),
            Self::NonFiniteEfficiency {
                speedup,
                ideal_parallelism,
            } => write!(
                f,
                "the speedup {speedup} over the ideal parallelism {ideal_parallelism} overflows the efficiency"
            ),
        }
    }
}
