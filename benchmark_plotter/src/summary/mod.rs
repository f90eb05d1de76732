//!
//! The benchmark plotter summary.
//!

pub mod artifact;


use colored::Colorize;

use crate::analysis::metrics::Metrics;
use crate::analysis::statistics::Statistics;
use crate::analysis::Analysis;
use crate::input::record::Record;
use crate::util;

use self::artifact::Artifact;
use self::artifact::Status;

///
/// The benchmark plotter summary.
///
#[derive(Debug)]
pub struct Summary {
    /// The aggregate statistics.
    statistics: Statistics,
    /// The records paired with their metrics.
    entries: Vec<(Record, Metrics)>,
    /// The artifacts, in the production order.
    artifacts: Vec<Artifact>,
    /// Whether the output is suppressed.
    quiet: bool,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(records: &[Record], analysis: &Analysis, quiet: bool) -> Self {
        Self {
            statistics: analysis.statistics,
            entries: analysis
                .zip(records)
                .map(|(record, metrics)| (*record, *metrics))
                .collect(),
            artifacts: Vec::with_capacity(4),
            quiet,
        }
    }

    ///
    /// Adds an artifact.
    ///
    pub fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    ///
    /// The artifacts, in the production order.
    ///
    pub fn artifacts(&self) -> &[Artifact] {
        self.artifacts.as_slice()
    }

    ///
    /// Whether every artifact has been either written or skipped.
    ///
    pub fn is_successful(&self) -> bool {
        !self.artifacts.iter().any(Artifact::is_failed)
    }

    ///
    /// The failed artifact diagnostics.
    ///
    /// They are meant for stderr and are not silenced by the quiet mode.
    ///
    pub fn failures(&self) -> Vec<String> {
        self.artifacts
            .iter()
            .filter_map(|artifact| match artifact.status {
                Status::Failed(ref error) => Some(format!(
                    "{:>12} {}: {error:#}",
                    "Failed".bright_red().bold(),
                    artifact.kind,
                )),
                _ => None,
            })
            .collect()
    }

    ///
    /// Writes a single statistics row of the box.
    ///
    fn row(
        f: &mut std::fmt::Formatter<'_>,
        name: &str,
        value: colored::ColoredString,
    ) -> std::fmt::Result {
        writeln!(f, "║     {name:24}{value:>28}     ║")
    }

    ///
    /// Colors a yes/no flag.
    ///
    fn flag(value: bool) -> colored::ColoredString {
        if value {
            "yes".green()
        } else {
            "no".bright_red()
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        let statistics = &self.statistics;
        writeln!(
            f,
            "╔═══════════════════╡ BENCHMARK STATISTICS ╞═══════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        Self::row(
            f,
            "MAXIMUM SPEEDUP",
            format!("{:.2}x", statistics.max_speedup).green(),
        )?;
        Self::row(
            f,
            "MINIMUM SPEEDUP",
            format!("{:.2}x", statistics.min_speedup).bright_red(),
        )?;
        Self::row(
            f,
            "MEAN SPEEDUP",
            format!("{:.2}x", statistics.mean_speedup).normal(),
        )?;
        Self::row(
            f,
            "MEDIAN SPEEDUP",
            format!("{:.2}x", statistics.median_speedup).normal(),
        )?;
        Self::row(
            f,
            "MAXIMUM EFFICIENCY",
            format!("{:.1}%", statistics.max_efficiency_pct).normal(),
        )?;
        Self::row(
            f,
            "SPEEDUP GROWS",
            Self::flag(statistics.is_speedup_growing),
        )?;
        Self::row(
            f,
            "SIGNIFICANT SPEEDUP",
            Self::flag(statistics.is_speedup_significant),
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        for (record, metrics) in self.entries.iter() {
            writeln!(
                f,
                "    {:>12} samples: speedup {:>6}, efficiency {:>6}, saved {}",
                util::thousands(record.sample_count),
                format!("{:.2}x", record.speedup).bright_white(),
                format!("{:.1}%", metrics.efficiency_pct).bright_white(),
                util::milliseconds(metrics.time_saved_ms),
            )?;
        }

        for artifact in self.artifacts.iter() {
            match artifact.status {
                Status::Written(ref path) => writeln!(
                    f,
                    "     {} {} to {path:?}",
                    "Written".bright_green().bold(),
                    artifact.kind,
                )?,
                Status::Skipped(ref reason) => writeln!(
                    f,
                    "     {} {}: {reason}",
                    "Skipped".bright_yellow().bold(),
                    artifact.kind,
                )?,
                Status::Failed(_) => {}
            }
        }

        Ok(())
    }
}
