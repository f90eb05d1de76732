//!
//! The benchmark plotter configuration.
//!

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::analysis::parameters::Parameters;
use crate::input::Input;
use crate::output::format::Format;

///
/// The benchmark plotter configuration.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The benchmark table location.
    pub input_path: PathBuf,
    /// The directory receiving every artifact.
    pub output_directory: PathBuf,
    /// The chart image format.
    pub image_format: Format,
    /// The raster chart resolution.
    pub dpi: u32,
    /// The analysis parameters.
    pub parameters: Parameters,
    /// The JSON analysis dump location. No dump is written if unset.
    pub summary_json: Option<PathBuf>,
    /// Whether to open the written charts in the platform viewer.
    pub show: bool,
    /// Whether the terminal output is suppressed.
    pub quiet: bool,
}

impl Config {
    /// The default artifact directory.
    pub const DEFAULT_OUTPUT_DIRECTORY: &'static str = "docs";

    /// The default raster resolution.
    pub const DEFAULT_DPI: u32 = 300;

    /// The overview chart file name without extension.
    pub const OVERVIEW_FILE_STEM: &'static str = "benchmark_results";

    /// The large-scale chart file name without extension.
    pub const LARGE_SCALE_FILE_STEM: &'static str = "benchmark_results_large_data";

    /// The report file name.
    pub const REPORT_FILE_NAME: &'static str = "benchmark_report.md";

    ///
    /// Checks the numeric settings.
    ///
    pub fn validate(self) -> anyhow::Result<Self> {
        if self.dpi == 0 {
            anyhow::bail!("The chart resolution must be positive");
        }
        let ideal_parallelism = self.parameters.ideal_parallelism;
        if !ideal_parallelism.is_finite() || ideal_parallelism <= 0.0 {
            anyhow::bail!(
                "The ideal parallelism must be a positive number, found {ideal_parallelism}"
            );
        }
        if let Some(tolerance) = self.parameters.speedup_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                anyhow::bail!(
                    "The speedup tolerance must be a non-negative number, found {tolerance}"
                );
            }
        }
        Ok(self)
    }

    ///
    /// The overview chart location.
    ///
    pub fn overview_path(&self) -> PathBuf {
        self.image_path(Self::OVERVIEW_FILE_STEM)
    }

    ///
    /// The large-scale chart location.
    ///
    pub fn large_scale_path(&self) -> PathBuf {
        self.image_path(Self::LARGE_SCALE_FILE_STEM)
    }

    ///
    /// The report location.
    ///
    pub fn report_path(&self) -> PathBuf {
        self.output_directory.join(Self::REPORT_FILE_NAME)
    }

    ///
    /// An image location with the extension of the configured format.
    ///
    fn image_path(&self, stem: &str) -> PathBuf {
        self.output_directory
            .join(format!("{stem}.{}", self.image_format.extension()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(Input::DEFAULT_PATH),
            output_directory: PathBuf::from(Self::DEFAULT_OUTPUT_DIRECTORY),
            image_format: Format::default(),
            dpi: Self::DEFAULT_DPI,
            parameters: Parameters::default(),
            summary_json: None,
            show: false,
            quiet: false,
        }
    }
}
