//!
//! The benchmark analysis.
//!

pub mod error;
pub mod metrics;
pub mod parameters;
pub mod statistics;

#[cfg(test)]
mod tests;

use crate::input::column::Column;
use crate::input::record::Record;

use self::error::Error;
use self::error::Violation;
use self::metrics::Metrics;
use self::parameters::Parameters;
use self::statistics::Statistics;

///
/// The benchmark analysis.
///
/// Holds one [`Metrics`] entry per record, in the record order.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Analysis {
    /// The per-record metrics.
    pub metrics: Vec<Metrics>,
    /// The aggregate statistics.
    pub statistics: Statistics,
}

impl Analysis {
    ///
    /// Validates the records and derives the metrics.
    ///
    pub fn new(records: &[Record], parameters: &Parameters) -> Result<Self, Error> {
        let ideal_parallelism = parameters.ideal_parallelism;
        if !ideal_parallelism.is_finite() || ideal_parallelism <= 0.0 {
            return Err(Error::InvalidParallelism(ideal_parallelism));
        }

        for (index, record) in records.iter().enumerate() {
            Self::validate(record, parameters).map_err(|violation| Error::InvalidRecord {
                index,
                sample_count: record.sample_count,
                violation,
            })?;
        }

        let statistics =
            Statistics::new(records, ideal_parallelism).ok_or(Error::NoRecords)?;
        let metrics = records
            .iter()
            .map(|record| Metrics::new(record, ideal_parallelism))
            .collect();

        Ok(Self {
            metrics,
            statistics,
        })
    }

    ///
    /// Pairs the records with their metrics.
    ///
    pub fn zip<'a>(
        &'a self,
        records: &'a [Record],
    ) -> impl Iterator<Item = (&'a Record, &'a Metrics)> + 'a {
        records.iter().zip(self.metrics.iter())
    }

    ///
    /// Checks the numeric invariants of a single record.
    ///
    fn validate(record: &Record, parameters: &Parameters) -> Result<(), Violation> {
        if record.sample_count == 0 {
            return Err(Violation::ZeroSampleCount);
        }
        for (column, value) in [
            (Column::SingleThreadMs, record.single_thread_ms),
            (Column::MultiThreadMs, record.multi_thread_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Violation::InvalidTime {
                    column: column.name(),
                    value,
                });
            }
        }
        if !record.speedup.is_finite() || record.speedup <= 0.0 {
            return Err(Violation::InvalidSpeedup(record.speedup));
        }
        if !metrics::efficiency_pct(record.speedup, parameters.ideal_parallelism).is_finite() {
            return Err(Violation::NonFiniteEfficiency {
                speedup: record.speedup,
                ideal_parallelism: parameters.ideal_parallelism,
            });
        }

        if let Some(tolerance) = parameters.speedup_tolerance {
            if record.multi_thread_ms > 0.0 {
                let computed = record.single_thread_ms / record.multi_thread_ms;
                if (computed - record.speedup).abs() > tolerance * record.speedup {
                    return Err(Violation::InconsistentSpeedup {
                        stored: record.speedup,
                        computed,
                    });
                }
            }
        }

        Ok(())
    }
}
