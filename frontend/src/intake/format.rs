//! Presentation of monetary totals.

use crate::config::CURRENCY_UNIT;

/// Round half toward positive infinity, like JavaScript's `Math.round`.
///
/// `2.5 → 3`, `-2.5 → -2`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Render an integer-valued amount with Korean digit grouping (`1,234,567`).
pub fn group_digits(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let infinity = if value > 0.0 { "∞" } else { "-∞" };
        return infinity.to_string();
    }

    let rounded = round_half_up(value);
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a total for display: rounded, grouped, suffixed with `원`.
///
/// The input is taken by value; callers keep the unrounded number.
pub fn format_won(value: f64) -> String {
    format!("{}{}", group_digits(value), CURRENCY_UNIT)
}
