//!
//! The benchmark plotter workflow tests.
//!

use std::path::Path;

use crate::analysis::error::Error as AnalysisError;
use crate::analysis::error::Violation;
use crate::config::Config;
use crate::output::format::Format;
use crate::summary::artifact::Kind;
use crate::summary::artifact::Status;

use super::error::Error;
use super::Workflow;

const TABLE: &str = "\
sample_count,single_thread_ms,multi_thread_ms,speedup
1000,100,90,1.11
10000,900,700,1.29
50000,2500,1400,1.79
100000,5000,1200,4.17
";

fn config(directory: &Path, table: Option<&str>) -> Config {
    let input_path = directory.join("benchmark_results.csv");
    if let Some(table) = table {
        std::fs::write(input_path.as_path(), table).expect("Always valid");
    }
    Config {
        input_path,
        output_directory: directory.join("docs"),
        image_format: Format::Svg,
        quiet: true,
        ..Config::default()
    }
}

#[test]
fn ok_all_artifacts() {
    let directory = tempfile::tempdir().expect("Always valid");
    let mut config = config(directory.path(), Some(TABLE));
    config.summary_json = Some(directory.path().join("docs").join("summary.json"));

    let summary = Workflow::new(config.clone()).run().expect("Always valid");

    assert!(summary.is_successful());
    let kinds: Vec<Kind> = summary.artifacts().iter().map(|artifact| artifact.kind).collect();
    assert_eq!(
        kinds,
        vec![Kind::Overview, Kind::LargeScale, Kind::Report, Kind::Json]
    );
    for artifact in summary.artifacts() {
        assert!(matches!(artifact.status, Status::Written(_)), "{artifact:?}");
    }

    let overview =
        std::fs::read_to_string(config.overview_path()).expect("Always valid");
    assert!(overview.starts_with("<svg"));
    assert!(config.large_scale_path().ends_with("benchmark_results_large_data.svg"));
    assert!(config.large_scale_path().exists());

    let report = std::fs::read_to_string(config.report_path()).expect("Always valid");
    assert!(report.contains("- Benchmark sizes: 4"));

    let json: serde_json::Value = serde_json::from_str(
        std::fs::read_to_string(directory.path().join("docs").join("summary.json"))
            .expect("Always valid")
            .as_str(),
    )
    .expect("Always valid");
    assert_eq!(json["records"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["records"][3]["sample_count"], 100000);
    assert_eq!(json["statistics"]["max_speedup"], 4.17);
}

#[test]
fn ok_png_images() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = Config {
        image_format: Format::Png,
        dpi: 10,
        ..config(directory.path(), Some(TABLE))
    };

    let summary = Workflow::new(config.clone()).run().expect("Always valid");

    assert!(summary.is_successful());
    let overview = std::fs::read(config.overview_path()).expect("Always valid");
    assert!(overview.starts_with(b"\x89PNG\r\n\x1a\n"));
    assert!(config.overview_path().ends_with("benchmark_results.png"));
}

#[test]
fn ok_large_scale_skipped() {
    let directory = tempfile::tempdir().expect("Always valid");
    let mut config = config(directory.path(), Some(TABLE));
    config.parameters.large_scale_threshold = 1_000_000;

    let summary = Workflow::new(config.clone()).run().expect("Always valid");

    assert!(summary.is_successful());
    assert!(matches!(
        summary.artifacts()[1].status,
        Status::Skipped(ref reason) if reason.contains("1,000,000")
    ));
    assert!(!config.large_scale_path().exists());
    assert!(config.overview_path().exists());
    assert!(config.report_path().exists());
}

#[test]
fn ok_report_overwritten() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = config(directory.path(), Some(TABLE));
    std::fs::create_dir_all(config.output_directory.as_path()).expect("Always valid");
    std::fs::write(config.report_path(), "stale").expect("Always valid");

    Workflow::new(config.clone()).run().expect("Always valid");

    let report = std::fs::read_to_string(config.report_path()).expect("Always valid");
    assert!(!report.contains("stale"));
}

#[test]
fn error_failed_artifact_is_isolated() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = config(directory.path(), Some(TABLE));
    std::fs::create_dir_all(config.report_path()).expect("Always valid");

    let summary = Workflow::new(config.clone()).run().expect("Always valid");

    assert!(!summary.is_successful());
    assert!(matches!(summary.artifacts()[2].status, Status::Failed(_)));
    assert!(config.overview_path().exists());
    assert!(config.large_scale_path().exists());
}

#[test]
fn error_failed_chart_keeps_report() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = config(directory.path(), Some(TABLE));
    std::fs::create_dir_all(config.overview_path()).expect("Always valid");

    let summary = Workflow::new(config.clone()).run().expect("Always valid");

    assert!(!summary.is_successful());
    assert!(matches!(summary.artifacts()[0].status, Status::Failed(_)));
    assert!(matches!(summary.artifacts()[1].status, Status::Written(_)));
    assert!(matches!(summary.artifacts()[2].status, Status::Written(_)));
    let report = std::fs::read_to_string(config.report_path()).expect("Always valid");
    assert!(report.contains("- Benchmark sizes: 4"));
}

#[test]
fn error_overflowing_efficiency() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = config(
        directory.path(),
        Some("sample_count,single_thread_ms,multi_thread_ms,speedup\n1000,100,90,1e307\n"),
    );

    let error = Workflow::new(config.clone()).run().expect_err("Always invalid");

    assert!(matches!(
        error,
        Error::Analysis(AnalysisError::InvalidRecord {
            violation: Violation::NonFiniteEfficiency { .. },
            ..
        })
    ));
    assert!(!config.output_directory.exists());
}

#[test]
fn error_missing_input() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = config(directory.path(), None);

    let error = Workflow::new(config.clone()).run().expect_err("Always invalid");

    assert!(error.is_missing_input());
    assert!(!config.output_directory.exists());
}

#[test]
fn error_header_only() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = config(
        directory.path(),
        Some("sample_count,single_thread_ms,multi_thread_ms,speedup\n"),
    );

    let error = Workflow::new(config.clone()).run().expect_err("Always invalid");

    assert!(matches!(error, Error::Input(_)));
    assert!(!error.is_missing_input());
    assert!(!config.output_directory.exists());
}

#[test]
fn error_invalid_record() {
    let directory = tempfile::tempdir().expect("Always valid");
    let config = config(
        directory.path(),
        Some("sample_count,single_thread_ms,multi_thread_ms,speedup\n1000,100,90,-1\n"),
    );

    let error = Workflow::new(config.clone()).run().expect_err("Always invalid");

    assert!(matches!(
        error,
        Error::Analysis(AnalysisError::InvalidRecord { index: 0, .. })
    ));
    assert!(!config.output_directory.exists());
}
