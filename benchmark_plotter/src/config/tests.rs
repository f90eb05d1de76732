//!
//! The benchmark plotter configuration tests.
//!

use std::path::PathBuf;

use crate::output::format::Format;

use super::Config;

#[test]
fn ok_default_paths() {
    let config = Config::default().validate().expect("Always valid");

    assert_eq!(
        config.input_path,
        PathBuf::from("docs/benchmark_results.csv")
    );
    assert_eq!(
        config.overview_path(),
        PathBuf::from("docs/benchmark_results.png")
    );
    assert_eq!(
        config.large_scale_path(),
        PathBuf::from("docs/benchmark_results_large_data.png")
    );
    assert_eq!(
        config.report_path(),
        PathBuf::from("docs/benchmark_report.md")
    );
    assert_eq!(config.dpi, 300);
    assert_eq!(config.parameters.large_scale_threshold, 50_000);
}

#[test]
fn ok_svg_extension() {
    let config = Config {
        output_directory: PathBuf::from("out"),
        image_format: Format::Svg,
        ..Config::default()
    };

    assert_eq!(config.overview_path(), PathBuf::from("out/benchmark_results.svg"));
    assert_eq!(config.report_path(), PathBuf::from("out/benchmark_report.md"));
}

#[test]
fn ok_zero_tolerance() {
    let mut config = Config::default();
    config.parameters.speedup_tolerance = Some(0.0);

    assert!(config.validate().is_ok());
}

#[test]
fn error_zero_dpi() {
    let config = Config {
        dpi: 0,
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn error_non_positive_parallelism() {
    for ideal_parallelism in [0.0, -2.0, f64::NAN] {
        let mut config = Config::default();
        config.parameters.ideal_parallelism = ideal_parallelism;

        assert!(config.validate().is_err(), "{ideal_parallelism}");
    }
}

#[test]
fn error_negative_tolerance() {
    let mut config = Config::default();
    config.parameters.speedup_tolerance = Some(-0.1);

    assert!(config.validate().is_err());
}
