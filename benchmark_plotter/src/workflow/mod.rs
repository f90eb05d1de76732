//!
//! The benchmark plotter workflow.
//!

pub mod error;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use colored::Colorize;

use crate::analysis::Analysis;
use crate::chart::figure::Figure;
use crate::chart::large_scale;
use crate::chart::overview;
use crate::config::Config;
use crate::display;
use crate::input::record::Record;
use crate::input::Input;
use crate::output::json::Json;
use crate::output::Output;
use crate::report::Report;
use crate::summary::artifact::Artifact;
use crate::summary::artifact::Kind;
use crate::summary::artifact::Status;
use crate::summary::Summary;
use crate::util;

use self::error::Error;

///
/// The benchmark plotter workflow.
///
/// Loads and analyzes the table, then produces every artifact independently of the others.
///
#[derive(Debug)]
pub struct Workflow {
    /// The run configuration.
    config: Config,
}

impl Workflow {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    ///
    /// Runs the workflow.
    ///
    /// Nothing is written if the table cannot be loaded or analyzed.
    ///
    pub fn run(&self) -> Result<Summary, Error> {
        let input = Input::try_from(self.config.input_path.as_path())?;
        self.progress(
            "Loaded",
            format!("{} records from {:?}", input.len(), self.config.input_path),
        );

        let records = input.records.as_slice();
        let analysis = Analysis::new(records, &self.config.parameters)?;
        let smallest = records.iter().map(|record| record.sample_count).min();
        let largest = records.iter().map(|record| record.sample_count).max();
        self.progress(
            "Analyzed",
            format!(
                "sample counts {} to {}",
                util::thousands(smallest.unwrap_or_default()),
                util::thousands(largest.unwrap_or_default()),
            ),
        );

        let mut summary = Summary::new(records, &analysis, self.config.quiet);
        summary.push(self.overview(records, &analysis));
        summary.push(self.large_scale(records));
        summary.push(self.report(records, &analysis));
        if let Some(path) = self.config.summary_json.clone() {
            summary.push(self.json(records, &analysis, path));
        }
        Ok(summary)
    }

    ///
    /// Produces the overview chart.
    ///
    fn overview(&self, records: &[Record], analysis: &Analysis) -> Artifact {
        let status = match overview::render(
            records,
            analysis,
            self.config.parameters.ideal_parallelism,
        ) {
            Ok(figure) => self.write_figure(figure, self.config.overview_path()),
            Err(error) => Status::Failed(error.into()),
        };
        Artifact::new(Kind::Overview, status)
    }

    ///
    /// Produces the large-scale chart, if any record is large enough.
    ///
    fn large_scale(&self, records: &[Record]) -> Artifact {
        let threshold = self.config.parameters.large_scale_threshold;
        let status = match large_scale::render(records, threshold) {
            Ok(Some(figure)) => self.write_figure(figure, self.config.large_scale_path()),
            Ok(None) => Status::Skipped(format!(
                "no records with at least {} samples",
                util::thousands(threshold)
            )),
            Err(error) => Status::Failed(error.into()),
        };
        Artifact::new(Kind::LargeScale, status)
    }

    ///
    /// Produces the Markdown report.
    ///
    fn report(&self, records: &[Record], analysis: &Analysis) -> Artifact {
        let report = Report::new(records, analysis);
        let status = Self::write(Ok(report.into()), self.config.report_path());
        Artifact::new(Kind::Report, status)
    }

    ///
    /// Produces the JSON analysis dump.
    ///
    fn json(&self, records: &[Record], analysis: &Analysis, path: PathBuf) -> Artifact {
        let output = Json::new(records, analysis, &self.config.parameters).map(Output::from);
        Artifact::new(Kind::Json, Self::write(output, path))
    }

    ///
    /// Encodes and writes a figure, then shows it if requested.
    ///
    fn write_figure(&self, figure: Figure, path: PathBuf) -> Status {
        let output = figure
            .into_output(self.config.image_format, self.config.dpi)
            .map_err(anyhow::Error::from);
        let status = Self::write(output, path);
        if let Status::Written(ref path) = status {
            if self.config.show {
                if let Err(error) = display::show(path.as_path()) {
                    self.warning(format!("Displaying {path:?}: {error}"));
                }
            }
        }
        status
    }

    ///
    /// Writes an artifact if it has been produced.
    ///
    fn write(output: anyhow::Result<Output>, path: PathBuf) -> Status {
        match output.and_then(|output| output.write_to_file(path.as_path())) {
            Ok(()) => Status::Written(path),
            Err(error) => Status::Failed(error),
        }
    }

    ///
    /// Prints a progress line unless quiet.
    ///
    fn progress(&self, verb: &str, message: String) {
        if !self.config.quiet {
            println!("{:>12} {message}", verb.bright_green().bold());
        }
    }

    ///
    /// Prints a warning unless quiet.
    ///
    fn warning(&self, message: String) {
        if !self.config.quiet {
            eprintln!("{:>12} {message}", "Warning".bright_yellow().bold());
        }
    }
}
