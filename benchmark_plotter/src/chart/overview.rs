//!
//! The overview figure.
//!
//! Four panels characterize the scaling of the benchmark:
//! execution times, speedup, time saved, and parallel efficiency.
//!

use plotters::prelude::*;

use crate::analysis::metrics::Metrics;
use crate::analysis::Analysis;
use crate::input::record::Record;
use crate::util;

use super::axis;
use super::error::Error;
use super::figure::Area;
use super::figure::Figure;
use super::palette;

/// The figure width in inches.
pub const WIDTH: u32 = 16;
/// The figure height in inches.
pub const HEIGHT: u32 = 12;

/// The minimal sample count of execution time callouts.
pub const TIME_CALLOUT_SAMPLE_COUNT: u64 = 100_000;
/// Speedups above this value get a callout.
pub const SPEEDUP_CALLOUT: f64 = 1.5;
/// Efficiencies above this percentage get a label.
pub const EFFICIENCY_CALLOUT_PCT: f64 = 30.0;

/// The bar half-width relative to its sample count.
const BAR_HALF_WIDTH: f64 = 0.3;

///
/// Renders the overview figure.
///
pub fn render(
    records: &[Record],
    analysis: &Analysis,
    ideal_parallelism: f64,
) -> Result<Figure, Error> {
    Figure::draw(WIDTH, HEIGHT, |root| {
        let root = root.titled(
            "Benchmark results: single-threaded vs. multi-threaded execution",
            (palette::FONT_FAMILY, 30).into_font().style(FontStyle::Bold),
        )?;
        let panels = root.split_evenly((2, 2));

        execution_time(&panels[0], records)?;
        speedup(&panels[1], records, ideal_parallelism)?;
        time_saved(&panels[2], records, analysis.metrics.as_slice())?;
        efficiency(&panels[3], records, analysis.metrics.as_slice())?;
        Ok(())
    })
}

///
/// Draws both execution times against the sample count on linear axes.
///
fn execution_time(area: &Area<'_>, records: &[Record]) -> Result<(), Error> {
    let single: Vec<(f64, f64)> = records
        .iter()
        .map(|record| (record.x(), record.single_thread_ms))
        .collect();
    let multi: Vec<(f64, f64)> = records
        .iter()
        .map(|record| (record.x(), record.multi_thread_ms))
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Execution time vs. sample count", palette::caption_font())
        .margin(16)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            axis::linear_samples(records.iter().map(Record::x)),
            axis::values(single.iter().chain(multi.iter()).map(|(_, y)| *y), 0.0),
        )?;
    chart
        .configure_mesh()
        .x_desc("Sample count")
        .y_desc("Execution time (ms)")
        .axis_desc_style(palette::axis_font())
        .label_style(palette::tick_font())
        .x_label_formatter(&|x: &f64| util::thousands(*x as u64))
        .light_line_style(BLACK.mix(0.05).stroke_width(1))
        .draw()?;

    chart
        .draw_series(LineSeries::new(single.iter().copied(), RED.stroke_width(3)))?
        .label("Single-threaded")
        .legend(|(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], RED.stroke_width(3)));
    chart.draw_series(
        single
            .iter()
            .map(|point| Circle::new(*point, 6, RED.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(multi.iter().copied(), BLUE.stroke_width(3)))?
        .label("Multi-threaded")
        .legend(|(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], BLUE.stroke_width(3)));
    chart.draw_series(multi.iter().map(|point| {
        EmptyElement::at(*point) + Rectangle::new([(-6, -6), (6, 6)], BLUE.filled())
    }))?;

    chart.draw_series(
        records
            .iter()
            .filter(|record| record.sample_count >= TIME_CALLOUT_SAMPLE_COUNT)
            .flat_map(|record| {
                [
                    (record.x(), record.single_thread_ms, -16),
                    (record.x(), record.multi_thread_ms, 18),
                ]
            })
            .map(|(x, y, dy)| {
                EmptyElement::at((x, y))
                    + Text::new(util::milliseconds(y), (0, dy), palette::callout_style(14))
            }),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(palette::tick_font())
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()?;
    Ok(())
}

///
/// Draws the speedup against the logarithmic sample count with reference levels.
///
fn speedup(area: &Area<'_>, records: &[Record], ideal_parallelism: f64) -> Result<(), Error> {
    let points: Vec<(f64, f64)> = records
        .iter()
        .map(|record| (record.x(), record.speedup))
        .collect();
    let x_range = axis::log_samples(records.iter().map(Record::x));

    let mut chart = ChartBuilder::on(area)
        .caption("Speedup vs. sample count", palette::caption_font())
        .margin(16)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            x_range.clone().log_scale(),
            axis::values(points.iter().map(|(_, y)| *y), ideal_parallelism),
        )?;
    chart
        .configure_mesh()
        .x_desc("Sample count")
        .y_desc("Speedup (x)")
        .axis_desc_style(palette::axis_font())
        .label_style(palette::tick_font())
        .x_label_formatter(&|x: &f64| util::thousands(*x as u64))
        .light_line_style(BLACK.mix(0.05).stroke_width(1))
        .draw()?;

    let references = [
        (1.0, RED, "No speedup".to_owned()),
        (2.0, palette::ORANGE, "2x speedup".to_owned()),
        (
            ideal_parallelism,
            palette::PURPLE,
            format!("{ideal_parallelism}x speedup (ideal)"),
        ),
    ];
    for (level, color, label) in references.into_iter() {
        chart
            .draw_series(LineSeries::new(
                [(x_range.start, level), (x_range.end, level)],
                color.mix(0.7).stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x - 10, y), (x + 10, y)], color.mix(0.7).stroke_width(2))
            });
    }

    chart.draw_series(LineSeries::new(points.iter().copied(), GREEN.stroke_width(3)))?;
    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(*point, 6, GREEN.filled())),
    )?;

    chart.draw_series(
        points
            .iter()
            .filter(|(_, speedup)| *speedup > SPEEDUP_CALLOUT)
            .map(|&(x, speedup)| {
                let text = format!("{speedup:.2}x");
                EmptyElement::at((x, speedup))
                    + Rectangle::new(
                        palette::callout_box(text.as_str(), 14, -20),
                        YELLOW.mix(0.7).filled(),
                    )
                    + Text::new(text, (0, -20), palette::callout_style(14))
            }),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(palette::tick_font())
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()?;
    Ok(())
}

///
/// Draws the time saved by the multi-threaded run as bars.
///
fn time_saved(area: &Area<'_>, records: &[Record], metrics: &[Metrics]) -> Result<(), Error> {
    let bars: Vec<(f64, f64)> = records
        .iter()
        .zip(metrics.iter())
        .map(|(record, metrics)| (record.x(), metrics.time_saved_ms))
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Time saved by multi-threading", palette::caption_font())
        .margin(16)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            axis::log_samples(records.iter().map(Record::x)).log_scale(),
            axis::values(bars.iter().map(|(_, saved)| *saved), 0.0),
        )?;
    chart
        .configure_mesh()
        .x_desc("Sample count")
        .y_desc("Time saved (ms)")
        .axis_desc_style(palette::axis_font())
        .label_style(palette::tick_font())
        .x_label_formatter(&|x: &f64| util::thousands(*x as u64))
        .light_line_style(BLACK.mix(0.05).stroke_width(1))
        .draw()?;

    chart.draw_series(bars.iter().map(|&(x, saved)| {
        Rectangle::new(
            [
                (x * (1.0 - BAR_HALF_WIDTH), 0.0),
                (x * (1.0 + BAR_HALF_WIDTH), saved),
            ],
            palette::ORANGE.mix(0.7).filled(),
        )
    }))?;

    chart.draw_series(
        bars.iter()
            .filter(|(_, saved)| *saved > 0.0)
            .map(|&(x, saved)| {
                EmptyElement::at((x, saved))
                    + Text::new(util::milliseconds(saved), (0, -12), palette::callout_style(13))
            }),
    )?;
    Ok(())
}

///
/// Draws the parallel efficiency as bars with reference levels.
///
fn efficiency(area: &Area<'_>, records: &[Record], metrics: &[Metrics]) -> Result<(), Error> {
    let bars: Vec<(f64, f64)> = records
        .iter()
        .zip(metrics.iter())
        .map(|(record, metrics)| (record.x(), metrics.efficiency_pct))
        .collect();
    let x_range = axis::log_samples(records.iter().map(Record::x));

    let mut chart = ChartBuilder::on(area)
        .caption("Parallel efficiency", palette::caption_font())
        .margin(16)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            x_range.clone().log_scale(),
            axis::values(bars.iter().map(|(_, efficiency)| *efficiency), 100.0),
        )?;
    chart
        .configure_mesh()
        .x_desc("Sample count")
        .y_desc("Parallel efficiency (%)")
        .axis_desc_style(palette::axis_font())
        .label_style(palette::tick_font())
        .x_label_formatter(&|x: &f64| util::thousands(*x as u64))
        .light_line_style(BLACK.mix(0.05).stroke_width(1))
        .draw()?;

    chart.draw_series(bars.iter().map(|&(x, efficiency)| {
        Rectangle::new(
            [
                (x * (1.0 - BAR_HALF_WIDTH), 0.0),
                (x * (1.0 + BAR_HALF_WIDTH), efficiency),
            ],
            palette::PURPLE.mix(0.7).filled(),
        )
    }))?;

    let references = [
        (100.0, RED, "100% efficiency"),
        (50.0, palette::ORANGE, "50% efficiency"),
        (25.0, YELLOW, "25% efficiency"),
    ];
    for (level, color, label) in references.into_iter() {
        chart
            .draw_series(LineSeries::new(
                [(x_range.start, level), (x_range.end, level)],
                color.mix(0.7).stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x - 10, y), (x + 10, y)], color.mix(0.7).stroke_width(2))
            });
    }

    chart.draw_series(
        bars.iter()
            .filter(|(_, efficiency)| *efficiency > EFFICIENCY_CALLOUT_PCT)
            .map(|&(x, efficiency)| {
                let text = format!("{efficiency:.1}%");
                EmptyElement::at((x, efficiency))
                    + Rectangle::new(
                        palette::callout_box(text.as_str(), 13, -14),
                        palette::LIGHT_BLUE.mix(0.7).filled(),
                    )
                    + Text::new(text, (0, -14), palette::callout_style(13))
            }),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(palette::tick_font())
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()?;
    Ok(())
}
