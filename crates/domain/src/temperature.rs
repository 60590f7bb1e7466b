//! Temperature display formatting.

/// Unit marker appended to displayed temperatures.
pub const CELSIUS: &str = "ºC";

/// Format a reported temperature for display.
///
/// The value is rounded to one decimal place, halves away from zero, and
/// followed by [`CELSIUS`]. A missing reading, `0.0` or `NaN` displays as an
/// empty string.
#[must_use]
pub fn format_temperature(temperature: Option<f64>) -> String {
    match temperature {
        Some(value) if value != 0.0 && !value.is_nan() => {
            // `{:.1}` alone rounds exact halves to even (21.25 -> 21.2).
            let rounded = (value * 10.0).round() / 10.0;
            format!("{rounded:.1}{CELSIUS}")
        }
        _ => String::new(),
    }
}
