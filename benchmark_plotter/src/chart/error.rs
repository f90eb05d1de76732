//!
//! Chart rendering error.
//!

use plotters::drawing::DrawingAreaErrorKind;

///
/// Chart rendering error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The drawing backend rejected an element.
    #[error("Drawing the chart: {0}")]
    Drawing(String),
    /// The vector image cannot be converted to a raster one.
    #[error("Rasterizing the chart: {0}")]
    Rasterizing(String),
}

impl From<DrawingAreaErrorKind<std::io::Error>> for Error {
    fn from(error: DrawingAreaErrorKind<std::io::Error>) -> Self {
        Self::Drawing(error.to_string())
    }
}
