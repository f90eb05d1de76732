//!
//! Benchmark input reading error.
//!

use std::path::PathBuf;

///
/// Benchmark input reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("Input file {path:?} not found")]
    Missing {
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Input file {path:?} contains no benchmark records")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
    /// A required column is absent from the header.
    #[error("Input file {path:?} lacks the required column `{column}`")]
    MissingColumn {
        /// The canonical name of the absent column.
        column: &'static str,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error parsing the input file.
    #[error("Parsing input file {path:?}: {error}")]
    Parsing {
        /// The underlying CSV parsing error.
        error: csv::Error,
        /// The path to the input file.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// Whether the input file is absent, as opposed to present but unusable.
    ///
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}
