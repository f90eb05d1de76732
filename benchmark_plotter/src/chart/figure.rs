//!
//! A rendered chart figure.
//!

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::output::format::Format;
use crate::output::Output;

use super::error::Error;

/// The drawing area every chart panel is drawn on.
pub type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

///
/// A rendered chart figure.
///
/// The figure is drawn as SVG with [`Figure::PIXELS_PER_INCH`] pixels per inch
/// and rasterized on demand.
///
#[derive(Debug, Clone)]
pub struct Figure {
    /// The SVG document.
    pub svg: String,
    /// The width in inches.
    pub width: u32,
    /// The height in inches.
    pub height: u32,
}

impl Figure {
    /// The SVG pixel density.
    pub const PIXELS_PER_INCH: u32 = 100;

    ///
    /// Draws a figure of `width` by `height` inches on a white canvas.
    ///
    pub fn draw<F>(width: u32, height: u32, draw: F) -> Result<Self, Error>
    where
        F: FnOnce(&Area<'_>) -> Result<(), Error>,
    {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(
                &mut svg,
                (width * Self::PIXELS_PER_INCH, height * Self::PIXELS_PER_INCH),
            )
            .into_drawing_area();
            root.fill(&WHITE)?;
            draw(&root)?;
            root.present()?;
        }
        Ok(Self { svg, width, height })
    }

    ///
    /// Converts the figure into a writable artifact of the given format.
    ///
    pub fn into_output(self, format: Format, dpi: u32) -> Result<Output, Error> {
        Ok(match format {
            Format::Svg => Output::Text(self.svg),
            Format::Png => Output::Binary(self.rasterize(dpi)?),
        })
    }

    ///
    /// Renders the figure into PNG bytes at `dpi` pixels per inch.
    ///
    pub fn rasterize(&self, dpi: u32) -> Result<Vec<u8>, Error> {
        let mut options = resvg::usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        let tree = resvg::usvg::Tree::from_str(self.svg.as_str(), &options)
            .map_err(|error| Error::Rasterizing(error.to_string()))?;

        let scale = dpi as f32 / Self::PIXELS_PER_INCH as f32;
        let size = tree
            .size()
            .to_int_size()
            .scale_by(scale)
            .ok_or_else(|| Error::Rasterizing(format!("{dpi} DPI yields an empty image")))?;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
            .ok_or_else(|| {
                Error::Rasterizing(format!(
                    "cannot allocate a {}x{} image",
                    size.width(),
                    size.height()
                ))
            })?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );
        pixmap
            .encode_png()
            .map_err(|error| Error::Rasterizing(error.to_string()))
    }
}
