/// Format a value with two decimals, the way every statistic and slider is shown.
///
/// Anything that rounds to zero prints as `0.00`, never `-0.00`.
pub fn format_value(value: f64) -> String {
    format_fixed(value, 2)
}

/// Format a value with a fixed number of decimals.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let value = if (value * scale).round() == 0.0 {
        0.0
    } else {
        value
    };
    format!("{:.*}", decimals, value)
}

/// Format an axis tick label (one decimal, trailing zero dropped for integers).
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format_fixed(value.round(), 0)
    } else {
        format_fixed(value, 1)
    }
}
