//!
//! The benchmark charts.
//!
//! Figures are drawn as SVG with `plotters` and rasterized with `resvg`.
//!

pub mod axis;
pub mod error;
pub mod figure;
pub mod large_scale;
pub mod overview;
pub mod palette;
