//!
//! Axis range helpers.
//!

use std::ops::Range;

/// The headroom above the highest value, leaving space for callouts.
const HEADROOM: f64 = 1.15;

///
/// A logarithmic sample count range with a margin of a factor of two around the samples.
///
pub fn log_samples<I>(samples: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (low, high) = bounds(samples);
    (low / 2.0)..(high * 2.0)
}

///
/// A linear sample count range starting at zero.
///
pub fn linear_samples<I>(samples: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (_, high) = bounds(samples);
    0.0..(high * 1.05)
}

///
/// A linear sample count range hugging the samples.
///
pub fn tight_samples<I>(samples: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (low, high) = bounds(samples);
    (low * 0.8)..(high * 1.2)
}

///
/// A value range covering zero, the values, and the `reference` level.
///
pub fn values<I>(values: I, reference: f64) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (low, high) = bounds(values.into_iter().chain([0.0, reference]));
    let low = if low < 0.0 { (low * HEADROOM).max(f64::MIN) } else { 0.0 };
    let high = if high > 0.0 { (high * HEADROOM).min(f64::MAX) } else { 1.0 };
    low..high
}

///
/// The minimum and maximum of the values, `(1, 1)` if there are none.
///
fn bounds<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .fold(None, |bounds: Option<(f64, f64)>, value| match bounds {
            None => Some((value, value)),
            Some((low, high)) => Some((low.min(value), high.max(value))),
        })
        .unwrap_or((1.0, 1.0))
}
