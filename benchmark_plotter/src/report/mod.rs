//!
//! The benchmark Markdown report.
//!


use crate::analysis::Analysis;
use crate::input::record::Record;
use crate::output::Output;
use crate::util;

///
/// The benchmark Markdown report.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The document lines.
    pub lines: Vec<String>,
}

impl Report {
    /// The report title.
    pub const TITLE: &'static str = "# Benchmark report: single-threaded vs. multi-threaded";

    /// The results table header.
    pub const TABLE_HEADER: &'static str =
        "| Samples | Single-threaded (ms) | Multi-threaded (ms) | Speedup | Efficiency | Time saved |";

    /// The results table header separator.
    pub const TABLE_SEPARATOR: &'static str =
        "|---------|----------------------|---------------------|---------|------------|------------|";

    /// The recommendations keyed to sample count bands.
    pub const RECOMMENDATIONS: [&'static str; 4] = [
        "- Small inputs (<10,000 samples) do not benefit from multi-threading",
        "- Medium inputs (10,000-100,000 samples) show a moderate speedup",
        "- Large inputs (>100,000 samples) show a significant speedup",
        "- Multi-threading pays off starting from ~50,000 samples",
    ];

    ///
    /// Composes the report of the records and their analysis.
    ///
    pub fn new(records: &[Record], analysis: &Analysis) -> Self {
        let statistics = &analysis.statistics;
        let mut lines = Vec::with_capacity(records.len() + 24);

        lines.push(Self::TITLE.to_owned());
        lines.push(String::new());

        lines.push("## Summary".to_owned());
        lines.push(format!("- Benchmark sizes: {}", records.len()));
        let smallest = records.iter().map(|record| record.sample_count).min();
        let largest = records.iter().map(|record| record.sample_count).max();
        if let (Some(smallest), Some(largest)) = (smallest, largest) {
            lines.push(format!(
                "- Sample count range: {} - {} samples",
                util::thousands(smallest),
                util::thousands(largest)
            ));
        }
        lines.push(format!(
            "- Maximum speedup: {:.2}x",
            statistics.max_speedup
        ));
        lines.push(format!(
            "- Minimum speedup: {:.2}x",
            statistics.min_speedup
        ));
        lines.push(format!("- Mean speedup: {:.2}x", statistics.mean_speedup));
        lines.push(String::new());

        lines.push("## Detailed results".to_owned());
        lines.push(Self::TABLE_HEADER.to_owned());
        lines.push(Self::TABLE_SEPARATOR.to_owned());
        for (record, metrics) in analysis.zip(records) {
            lines.push(format!(
                "| {} | {:.1} | {:.1} | {:.2}x | {:.1}% | {} |",
                util::thousands(record.sample_count),
                record.single_thread_ms,
                record.multi_thread_ms,
                record.speedup,
                metrics.efficiency_pct,
                util::milliseconds(metrics.time_saved_ms),
            ));
        }
        lines.push(String::new());

        lines.push("## Findings".to_owned());
        if statistics.is_speedup_growing {
            lines.push("- ✅ **Speedup grows with the sample count**".to_owned());
        } else {
            lines.push("- ❌ Speedup does not grow with the sample count".to_owned());
        }
        if statistics.is_speedup_significant {
            lines.push(format!(
                "- ✅ **Significant speedup achieved ({:.2}x)**",
                statistics.max_speedup
            ));
        } else {
            lines.push("- ⚠️ Speedup is moderate (<2x)".to_owned());
        }
        lines.push(format!(
            "- 📊 **Maximum parallel efficiency: {:.1}%**",
            statistics.max_efficiency_pct
        ));
        lines.push(String::new());

        lines.push("## Recommendations".to_owned());
        lines.extend(Self::RECOMMENDATIONS.iter().map(|line| (*line).to_owned()));

        Self { lines }
    }

    ///
    /// The table rows, one per record.
    ///
    pub fn table_rows(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .skip_while(|line| line.as_str() != Self::TABLE_SEPARATOR)
            .skip(1)
            .take_while(|line| line.starts_with('|'))
            .map(String::as_str)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines.iter() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl From<Report> for Output {
    fn from(report: Report) -> Self {
        Output::Text(report.to_string())
    }
}
