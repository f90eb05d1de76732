//!
//! The benchmark plotter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark plotter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The benchmark results table.
    #[arg(default_value = benchmark_plotter::Input::DEFAULT_PATH)]
    pub input_path: PathBuf,

    /// The directory receiving the charts and the report.
    #[arg(short, long, default_value = benchmark_plotter::Config::DEFAULT_OUTPUT_DIRECTORY)]
    pub output_directory: PathBuf,

    /// Chart image format: `png` (default) or `svg`.
    #[arg(long, default_value_t = benchmark_plotter::OutputFormat::Png)]
    pub image_format: benchmark_plotter::OutputFormat,

    /// Raster chart resolution, in pixels per inch.
    #[arg(long, default_value_t = benchmark_plotter::Config::DEFAULT_DPI)]
    pub dpi: u32,

    /// The core count a perfect parallelization would reach as its speedup.
    #[arg(long, default_value_t = benchmark_plotter::Parameters::DEFAULT_IDEAL_PARALLELISM)]
    pub ideal_parallelism: f64,

    /// The minimal sample count shown on the large-scale chart.
    #[arg(long, default_value_t = benchmark_plotter::Parameters::DEFAULT_LARGE_SCALE_THRESHOLD)]
    pub large_scale_threshold: u64,

    /// Rejects records whose stored speedup deviates from the timing ratio by more than this relative amount.
    #[arg(long)]
    pub speedup_tolerance: Option<f64>,

    /// Writes the records, their metrics, and the statistics as JSON.
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Opens the written charts in the platform image viewer.
    #[arg(long)]
    pub show: bool,
}

impl Arguments {
    ///
    /// Converts the arguments into a validated configuration.
    ///
    pub fn into_config(self) -> anyhow::Result<benchmark_plotter::Config> {
        benchmark_plotter::Config {
            input_path: self.input_path,
            output_directory: self.output_directory,
            image_format: self.image_format,
            dpi: self.dpi,
            parameters: benchmark_plotter::Parameters {
                ideal_parallelism: self.ideal_parallelism,
                large_scale_threshold: self.large_scale_threshold,
                speedup_tolerance: self.speedup_tolerance,
            },
            summary_json: self.summary_json,
            show: self.show,
            quiet: self.quiet,
        }
        .validate()
    }
}
