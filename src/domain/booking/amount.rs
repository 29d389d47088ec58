//! Amount parsing for booking records.

use super::LooseValue;

/// Parses a booking amount, returning 0 for anything unusable.
///
/// Currency symbols, thousands separators and any other character that is
/// not a digit or a dot are dropped, then the longest leading decimal is
/// read. `"$1,234.56"` gives 1234.56 and `"12.5.1"` gives 12.5. A minus sign
/// is dropped with the rest, so amounts are never negative.
pub fn parse_booking_amount(value: Option<&LooseValue>) -> f64 {
    let Some(value) = value.filter(|v| v.is_present()) else {
        return 0.0;
    };

    let cleaned: String = value
        .render()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    leading_decimal(&cleaned).unwrap_or(0.0)
}

/// Reads `digits [. digits]` from the start of `s`; needs at least one digit.
fn leading_decimal(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    let number = s[..end].trim_end_matches('.');
    let number = if number.starts_with('.') {
        format!("0{}", number)
    } else {
        number.to_string()
    };
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}
