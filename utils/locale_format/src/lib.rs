//! pt-BR display formatting for numbers, currency and ISO date strings.
//!
//! These are the locale rules the restaurant analytics UI exposes to users:
//! thousands grouped with `.`, decimals separated by `,`, currency prefixed
//! with `R$`, and ISO dates rendered as `dd/mm/aaaa`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats a number the way the data table does: integral values get zero
/// decimal places, everything else exactly two.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 {
        format_integer(value)
    } else {
        format_fixed_two(value)
    }
}

/// Formats a number as a grouped integer, rounding away any fraction.
pub fn format_integer(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = format!("{:.0}", value.abs());
    with_sign(value, group_thousands(&digits))
}

/// Formats a number with exactly two decimal places.
pub fn format_fixed_two(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some(parts) => parts,
        None => (rounded.as_str(), "00"),
    };
    with_sign(value, format!("{},{}", group_thousands(int_part), frac_part))
}

/// Formats a monetary amount: `R$ 1.500,50`. Always two decimal places.
pub fn format_currency(value: f64) -> String {
    if value.is_finite() && value < 0.0 {
        format!("-R$ {}", format_fixed_two(value.abs()))
    } else {
        format!("R$ {}", format_fixed_two(value))
    }
}

/// Renders an ISO date or timestamp string in pt-BR notation, or `None`
/// when the text is not date-like. A time-of-day component (a `T` separator
/// or a space-separated time) yields `dd/mm/aaaa hh:mm:ss`; a plain date
/// yields `dd/mm/aaaa`.
pub fn format_date_like(text: &str) -> Option<String> {
    if !text.contains('-') {
        return None;
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.format("%d/%m/%Y %H:%M:%S").to_string());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(stamp.format("%d/%m/%Y %H:%M:%S").to_string());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(stamp.format("%d/%m/%Y %H:%M:%S").to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.format("%d/%m/%Y").to_string());
    }
    None
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

fn with_sign(value: f64, body: String) -> String {
    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_numbers_have_no_decimals() {
        assert_eq!(format_number(1500.0), "1.500");
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(1234567.0), "1.234.567");
    }

    #[test]
    fn test_fractional_numbers_have_two_decimals() {
        assert_eq!(format_number(1500.5), "1.500,50");
        assert_eq!(format_number(0.1), "0,10");
        assert_eq!(format_number(999.99), "999,99");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(format_number(-1500.0), "-1.500");
        assert_eq!(format_number(-1500.5), "-1.500,50");
    }

    #[test]
    fn test_format_integer_rounds_fractions() {
        assert_eq!(format_integer(1500.7), "1.501");
        assert_eq!(format_integer(1500.0), "1.500");
    }

    #[test]
    fn test_currency_always_shows_cents() {
        assert_eq!(format_currency(1500.0), "R$ 1.500,00");
        assert_eq!(format_currency(1500.5), "R$ 1.500,50");
        assert_eq!(format_currency(-12.3), "-R$ 12,30");
    }

    #[test]
    fn test_plain_date() {
        assert_eq!(format_date_like("2024-11-01"), Some("01/11/2024".to_string()));
    }

    #[test]
    fn test_timestamp_with_t_separator() {
        assert_eq!(
            format_date_like("2024-11-01T14:30:00"),
            Some("01/11/2024 14:30:00".to_string())
        );
    }

    #[test]
    fn test_timestamp_with_space_separator() {
        assert_eq!(
            format_date_like("2024-11-01 14:30:00"),
            Some("01/11/2024 14:30:00".to_string())
        );
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(
            format_date_like("2024-11-01T14:30:00+00:00"),
            Some("01/11/2024 14:30:00".to_string())
        );
    }

    #[test]
    fn test_non_dates_are_rejected() {
        assert_eq!(format_date_like("X-Burger"), None);
        assert_eq!(format_date_like("Balcão"), None);
        assert_eq!(format_date_like("2024"), None);
        assert_eq!(format_date_like("11/01/2024"), None);
    }
}
