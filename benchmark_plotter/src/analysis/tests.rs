//!
//! The benchmark analysis tests.
//!

use approx::assert_relative_eq;

use crate::input::record::Record;

use super::error::Error;
use super::error::Violation;
use super::parameters::Parameters;
use super::Analysis;

fn two_records() -> Vec<Record> {
    vec![
        Record::new(1000, 100.0, 90.0, 1.11),
        Record::new(100000, 5000.0, 1200.0, 4.17),
    ]
}

#[test]
fn ok_reference_pair() {
    let records = two_records();
    let analysis = Analysis::new(&records, &Parameters::default()).expect("Always valid");

    assert_eq!(analysis.metrics.len(), 2);
    assert_relative_eq!(analysis.metrics[0].time_saved_ms, 10.0, epsilon = 1e-9);
    assert_relative_eq!(analysis.metrics[1].time_saved_ms, 3800.0, epsilon = 1e-9);
    assert_relative_eq!(analysis.metrics[0].efficiency_pct, 27.75, epsilon = 1e-9);
    assert_relative_eq!(analysis.metrics[1].efficiency_pct, 104.25, epsilon = 1e-9);

    let statistics = analysis.statistics;
    assert_relative_eq!(statistics.max_speedup, 4.17);
    assert_relative_eq!(statistics.min_speedup, 1.11);
    assert_relative_eq!(statistics.mean_speedup, 2.64, epsilon = 1e-9);
    assert_relative_eq!(statistics.median_speedup, 2.64, epsilon = 1e-9);
    assert!(statistics.is_speedup_growing);
    assert!(statistics.is_speedup_significant);
    assert_relative_eq!(statistics.max_efficiency_pct, 104.25, epsilon = 1e-9);
}

#[test]
fn ok_input_is_untouched() {
    let records = two_records();
    let snapshot = records.clone();
    let _ = Analysis::new(&records, &Parameters::default()).expect("Always valid");
    assert_eq!(records, snapshot);
}

#[test]
fn ok_single_record() {
    let records = vec![Record::new(5000, 40.0, 25.0, 1.6)];
    let analysis = Analysis::new(&records, &Parameters::default()).expect("Always valid");
    let statistics = analysis.statistics;

    assert_eq!(statistics.mean_speedup, 1.6);
    assert_eq!(statistics.median_speedup, 1.6);
    assert_eq!(statistics.max_speedup, 1.6);
    assert_eq!(statistics.min_speedup, 1.6);
    assert!(!statistics.is_speedup_growing);
    assert!(!statistics.is_speedup_significant);
}

#[test]
fn ok_metrics_follow_record_order() {
    let records = vec![
        Record::new(1000, 10.0, 12.0, 0.83),
        Record::new(10000, 90.0, 60.0, 1.5),
        Record::new(50000, 450.0, 200.0, 2.25),
        Record::new(100000, 900.0, 350.0, 2.57),
    ];
    let analysis = Analysis::new(&records, &Parameters::default()).expect("Always valid");

    assert_eq!(analysis.metrics.len(), records.len());
    for (record, metrics) in analysis.zip(&records) {
        assert_relative_eq!(
            metrics.time_saved_ms,
            record.single_thread_ms - record.multi_thread_ms
        );
        assert_relative_eq!(metrics.efficiency_pct, record.speedup / 4.0 * 100.0);
    }
    assert!(analysis.metrics[0].time_saved_ms < 0.0);
}

#[test]
fn ok_mean_within_range() {
    let records: Vec<Record> = (1..=7)
        .map(|index| Record::new(index * 1000, 1.0, 1.0, 0.1))
        .collect();
    let statistics = Analysis::new(&records, &Parameters::default())
        .expect("Always valid")
        .statistics;

    assert!(statistics.max_speedup >= statistics.mean_speedup);
    assert!(statistics.mean_speedup >= statistics.min_speedup);
}

#[test]
fn ok_median_even_count() {
    let records = vec![
        Record::new(1000, 1.0, 1.0, 3.0),
        Record::new(2000, 1.0, 1.0, 1.0),
        Record::new(3000, 1.0, 1.0, 2.0),
        Record::new(4000, 1.0, 1.0, 10.0),
    ];
    let statistics = Analysis::new(&records, &Parameters::default())
        .expect("Always valid")
        .statistics;
    assert_relative_eq!(statistics.median_speedup, 2.5);
    assert_relative_eq!(statistics.mean_speedup, 4.0);
}

#[test]
fn ok_custom_parallelism() {
    let records = vec![Record::new(1000, 80.0, 10.0, 8.0)];
    let parameters = Parameters {
        ideal_parallelism: 16.0,
        ..Parameters::default()
    };
    let analysis = Analysis::new(&records, &parameters).expect("Always valid");
    assert_relative_eq!(analysis.metrics[0].efficiency_pct, 50.0);
}

#[test]
fn ok_consistent_speedup() {
    let records = vec![Record::new(1000, 100.0, 40.0, 2.49)];
    let parameters = Parameters {
        speedup_tolerance: Some(0.01),
        ..Parameters::default()
    };
    assert!(Analysis::new(&records, &parameters).is_ok());
}

#[test]
fn error_no_records() {
    let result = Analysis::new(&[], &Parameters::default());
    assert_eq!(result, Err(Error::NoRecords));
}

#[test]
fn error_zero_speedup() {
    let records = vec![
        Record::new(1000, 100.0, 90.0, 1.11),
        Record::new(2000, 100.0, 90.0, 0.0),
    ];
    let result = Analysis::new(&records, &Parameters::default());
    assert_eq!(
        result,
        Err(Error::InvalidRecord {
            index: 1,
            sample_count: 2000,
            violation: Violation::InvalidSpeedup(0.0),
        })
    );
}

#[test]
fn error_infinite_speedup() {
    let records = vec![Record::new(1000, 100.0, 0.0, f64::INFINITY)];
    let result = Analysis::new(&records, &Parameters::default());
    assert!(matches!(
        result,
        Err(Error::InvalidRecord {
            violation: Violation::InvalidSpeedup(_),
            ..
        })
    ));
}

#[test]
fn error_negative_time() {
    let records = vec![Record::new(1000, 100.0, -1.0, 1.11)];
    let result = Analysis::new(&records, &Parameters::default());
    assert!(matches!(
        result,
        Err(Error::InvalidRecord {
            violation: Violation::InvalidTime {
                column: "multi_thread_ms",
                ..
            },
            ..
        })
    ));
}

#[test]
fn error_zero_sample_count() {
    let records = vec![Record::new(0, 1.0, 1.0, 1.0)];
    let result = Analysis::new(&records, &Parameters::default());
    assert!(matches!(
        result,
        Err(Error::InvalidRecord {
            violation: Violation::ZeroSampleCount,
            ..
        })
    ));
}

#[test]
fn error_zero_parallelism() {
    let parameters = Parameters {
        ideal_parallelism: 0.0,
        ..Parameters::default()
    };
    let result = Analysis::new(&two_records(), &parameters);
    assert_eq!(result, Err(Error::InvalidParallelism(0.0)));
}

#[test]
fn error_inconsistent_speedup() {
    let records = vec![Record::new(1000, 100.0, 50.0, 3.0)];
    let parameters = Parameters {
        speedup_tolerance: Some(0.05),
        ..Parameters::default()
    };
    let result = Analysis::new(&records, &parameters);
    assert!(matches!(
        result,
        Err(Error::InvalidRecord {
            violation: Violation::InconsistentSpeedup { .. },
            ..
        })
    ));
}

#[test]
fn ok_statistics_of_huge_speedups() {
    let records = vec![
        Record::new(1000, 1.0, 1.0, 1.5e308),
        Record::new(2000, 1.0, 1.0, 1.5e308),
    ];
    let parameters = Parameters {
        ideal_parallelism: 1e6,
        ..Parameters::default()
    };
    let statistics = Analysis::new(&records, &parameters)
        .expect("Always valid")
        .statistics;

    assert!(statistics.mean_speedup.is_finite());
    assert!(statistics.median_speedup.is_finite());
    assert_relative_eq!(statistics.mean_speedup, 1.5e308);
    assert_relative_eq!(statistics.median_speedup, 1.5e308);
}

#[test]
fn error_huge_speedup_overflows_efficiency() {
    let records = vec![
        Record::new(1000, 100.0, 90.0, 1.11),
        Record::new(2000, 1.0, 1.0, 1e307),
    ];
    let result = Analysis::new(&records, &Parameters::default());
    assert!(matches!(
        result,
        Err(Error::InvalidRecord {
            index: 1,
            sample_count: 2000,
            violation: Violation::NonFiniteEfficiency { .. },
        })
    ));
}

#[test]
fn error_tiny_parallelism_overflows_efficiency() {
    let parameters = Parameters {
        ideal_parallelism: 1e-307,
        ..Parameters::default()
    };
    let result = Analysis::new(&two_records(), &parameters);
    assert!(matches!(
        result,
        Err(Error::InvalidRecord {
            index: 0,
            violation: Violation::NonFiniteEfficiency { .. },
            ..
        })
    ));
}
