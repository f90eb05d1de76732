//!
//! Benchmark input table.
//!

pub mod column;
pub mod error;
pub mod record;


use std::path::Path;

use self::column::Column;
use self::error::Error as InputError;
use self::record::Record;

///
/// Benchmark input table.
///
/// The rows keep the source order, which is expected to be ascending by sample count.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    /// The table rows.
    pub records: Vec<Record>,
}

impl Input {
    /// The default input file location.
    pub const DEFAULT_PATH: &'static str = "docs/benchmark_results.csv";

    ///
    /// Parses the CSV text, attributing errors to `path`.
    ///
    /// The table is accepted as a whole or rejected as a whole.
    ///
    pub fn parse(text: &str, path: &Path) -> Result<Self, InputError> {
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());
        let headers = reader
            .headers()
            .map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?
            .clone();
        let mut columns = vec![""; headers.len()];
        for column in Column::REQUIRED.into_iter() {
            let index = column
                .position(&headers)
                .ok_or_else(|| InputError::MissingColumn {
                    column: column.name(),
                    path: path.to_path_buf(),
                })?;
            columns[index] = column.name();
        }
        // Unresolved cells get an empty name, which the row decoder ignores.
        reader.set_headers(csv::StringRecord::from(columns));

        let records = reader
            .deserialize::<Record>()
            .collect::<Result<Vec<Record>, csv::Error>>()
            .map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        if records.is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { records })
    }

    ///
    /// The number of rows.
    ///
    pub fn len(&self) -> usize {
        self.records.len()
    }

    ///
    /// Whether the table has no rows.
    ///
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| match error.kind() {
            std::io::ErrorKind::NotFound => InputError::Missing {
                path: path.to_path_buf(),
            },
            _ => InputError::Reading {
                error,
                path: path.to_path_buf(),
            },
        })?;
        Self::parse(text.as_str(), path)
    }
}
