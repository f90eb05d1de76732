//!
//! The focused large-scale comparison figure.
//!

use plotters::prelude::*;

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
pub const HEIGHT: u32 = 6;

/// The bar half-width relative to its sample count.
const BAR_HALF_WIDTH: f64 = 0.15;

///
/// Selects the records with at least `threshold` samples, keeping their order.
///
pub fn select(records: &[Record], threshold: u64) -> Vec<&Record> {
    records
        .iter()
        .filter(|record| record.sample_count >= threshold)
        .collect()
}

///
/// Renders the figure, or returns `None` if no record reaches `threshold`.
///
pub fn render(records: &[Record], threshold: u64) -> Result<Option<Figure>, Error> {
    let selected = select(records, threshold);
    if selected.is_empty() {
        return Ok(None);
    }

    Figure::draw(WIDTH, HEIGHT, |root| {
        let root = root.titled(
            format!(
                "Performance on large inputs (at least {} samples)",
                util::thousands(threshold)
            )
            .as_str(),
            (palette::FONT_FAMILY, 30).into_font().style(FontStyle::Bold),
        )?;
        let panels = root.split_evenly((1, 2));

        execution_time(&panels[0], selected.as_slice())?;
        speedup(&panels[1], selected.as_slice())?;
        Ok(())
    })
    .map(Some)
}

///
/// Draws both execution times with a callout at every point.
///
fn execution_time(area: &Area<'_>, records: &[&Record]) -> Result<(), Error> {
    let single: Vec<(f64, f64)> = records
        .iter()
        .map(|record| (record.x(), record.single_thread_ms))
        .collect();
    let multi: Vec<(f64, f64)> = records
        .iter()
        .map(|record| (record.x(), record.multi_thread_ms))
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Execution time on large inputs", palette::caption_font())
        .margin(16)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            axis::tight_samples(records.iter().map(|record| record.x())),
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
            .map(|point| Circle::new(*point, 7, RED.filled())),
    )?;
    chart
        .draw_series(LineSeries::new(multi.iter().copied(), BLUE.stroke_width(3)))?
        .label("Multi-threaded")
        .legend(|(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], BLUE.stroke_width(3)));
    chart.draw_series(multi.iter().map(|point| {
        EmptyElement::at(*point) + Rectangle::new([(-7, -7), (7, 7)], BLUE.filled())
    }))?;

    let callouts = single
        .iter()
        .map(|point| (*point, -24, palette::LIGHT_CORAL))
        .chain(multi.iter().map(|point| (*point, 26, palette::LIGHT_BLUE)));
    chart.draw_series(callouts.map(|((x, y), dy, fill)| {
        let text = util::milliseconds(y);
        EmptyElement::at((x, y))
            + Rectangle::new(
                palette::callout_box(text.as_str(), 15, dy),
                fill.mix(0.8).filled(),
            )
            + Text::new(text, (0, dy), palette::callout_style(15))
    }))?;

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
/// Draws the speedup bars, colored by the speedup level.
///
fn speedup(area: &Area<'_>, records: &[&Record]) -> Result<(), Error> {
    let x_range = axis::tight_samples(records.iter().map(|record| record.x()));

    let mut chart = ChartBuilder::on(area)
        .caption("Speedup on large inputs", palette::caption_font())
        .margin(16)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            x_range.clone(),
            axis::values(
                records.iter().map(|record| record.speedup),
                palette::STRONG_SPEEDUP,
            ),
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

    chart.draw_series(records.iter().map(|record| {
        Rectangle::new(
            [
                (record.x() * (1.0 - BAR_HALF_WIDTH), 0.0),
                (record.x() * (1.0 + BAR_HALF_WIDTH), record.speedup),
            ],
            palette::speedup_color(record.speedup).mix(0.7).filled(),
        )
    }))?;

    let references = [
        (1.0, RED, "No speedup"),
        (palette::STRONG_SPEEDUP, palette::ORANGE, "2x speedup"),
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

    chart.draw_series(records.iter().map(|record| {
        EmptyElement::at((record.x(), record.speedup))
            + Text::new(
                format!("{:.2}x", record.speedup),
                (0, 14),
                palette::bold_callout_style(16)
                    .color(palette::speedup_label_color(record.speedup)),
            )
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(palette::tick_font())
        .background_style(WHITE.mix(0.8).filled())
        .border_style(BLACK.stroke_width(1))
        .draw()?;
    Ok(())
}
