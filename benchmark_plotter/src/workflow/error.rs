//!
//! The workflow abort reason.
//!

use crate::analysis::error::Error as AnalysisError;
use crate::input::error::Error as InputError;

///
/// The workflow abort reason.
///
/// Raised before any artifact is produced.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The benchmark table cannot be loaded.
    #[error(transparent)]
    Input(#[from] InputError),
    /// The benchmark table violates a numeric invariant.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl Error {
    ///
    /// Whether the benchmark table has not been produced yet.
    ///
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::Input(error) if error.is_missing())
    }
}
