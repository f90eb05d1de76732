//!
//! The JSON analysis dump.
//!

use crate::analysis::metrics::Metrics;
use crate::analysis::parameters::Parameters;
use crate::analysis::statistics::Statistics;
use crate::analysis::Analysis;
use crate::input::record::Record;

use super::Output;

///
/// A record paired with its metrics.
///
#[derive(Debug, serde::Serialize)]
struct Entry<'a> {
    /// The source row.
    #[serde(flatten)]
    record: &'a Record,
    /// The derived metrics.
    #[serde(flatten)]
    metrics: &'a Metrics,
}

///
/// The serialized document layout.
///
#[derive(Debug, serde::Serialize)]
struct Document<'a> {
    /// The parameters the analysis ran with.
    parameters: &'a Parameters,
    /// The aggregate statistics.
    statistics: &'a Statistics,
    /// The per-record entries, in the source order.
    records: Vec<Entry<'a>>,
}

///
/// The JSON analysis dump.
///
#[derive(Debug, Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl Json {
    ///
    /// Serializes the records, their metrics and the statistics.
    ///
    pub fn new(
        records: &[Record],
        analysis: &Analysis,
        parameters: &Parameters,
    ) -> anyhow::Result<Self> {
        let document = Document {
            parameters,
            statistics: &analysis.statistics,
            records: analysis
                .zip(records)
                .map(|(record, metrics)| Entry { record, metrics })
                .collect(),
        };
        let content = serde_json::to_string_pretty(&document)
            .map_err(|error| anyhow::anyhow!("Analysis JSON serializing: {error}"))?;
        Ok(Self { content })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::Text(value.content)
    }
}
