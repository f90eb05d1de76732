//!
//! The benchmark plotter utilities.
//!


///
/// Formats an integer with comma thousands separators, e.g. `1,000,000`.
///
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    result
}

///
/// Formats a millisecond value rounded to an integer, e.g. `3800 ms`.
///
pub fn milliseconds(value: f64) -> String {
    format!("{value:.0} ms")
}
