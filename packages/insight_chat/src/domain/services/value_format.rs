//! Display formatting for result cells, shared by the table and KPI views.

use crate::domain::models::{MeasureKind, ScalarValue};

/// Formats a cell for table display: numbers by the integral/two-decimals
/// rule, date-like strings as localized dates, other strings verbatim,
/// nulls as empty text.
pub fn format_scalar(value: &ScalarValue) -> String {
    match value {
        ScalarValue::Number(n) => locale_format::format_number(*n),
        ScalarValue::String(s) => locale_format::format_date_like(s).unwrap_or_else(|| s.clone()),
        ScalarValue::Null => String::new(),
    }
}

/// Formats the KPI headline figure: quantities as plain grouped integers,
/// every other number as currency, non-numbers as-is.
pub fn format_kpi(value: &ScalarValue, kind: MeasureKind) -> String {
    match value {
        ScalarValue::Number(n) => match kind {
            MeasureKind::Quantity => locale_format::format_integer(*n),
            MeasureKind::Currency => locale_format::format_currency(*n),
        },
        ScalarValue::String(s) => s.clone(),
        ScalarValue::Null => String::new(),
    }
}

/// Header text for a column: underscores become spaces.
pub fn humanize_header(column: &str) -> String {
    column.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_number_formatting() {
        assert_eq!(format_scalar(&ScalarValue::from(1500.0)), "1.500");
    }

    #[test]
    fn test_fractional_number_formatting() {
        assert_eq!(format_scalar(&ScalarValue::from(1500.5)), "1.500,50");
    }

    #[test]
    fn test_date_strings_are_localized() {
        assert_eq!(
            format_scalar(&ScalarValue::from("2024-11-01")),
            "01/11/2024"
        );
        assert_eq!(
            format_scalar(&ScalarValue::from("2024-11-01T14:30:00")),
            "01/11/2024 14:30:00"
        );
    }

    #[test]
    fn test_other_strings_render_verbatim() {
        assert_eq!(format_scalar(&ScalarValue::from("X-Burger")), "X-Burger");
    }

    #[test]
    fn test_null_renders_empty() {
        assert_eq!(format_scalar(&ScalarValue::Null), "");
    }

    #[test]
    fn test_kpi_quantity_is_plain_integer() {
        assert_eq!(
            format_kpi(&ScalarValue::from(1500.0), MeasureKind::Quantity),
            "1.500"
        );
    }

    #[test]
    fn test_kpi_currency_formatting() {
        assert_eq!(
            format_kpi(&ScalarValue::from(1500.0), MeasureKind::Currency),
            "R$ 1.500,00"
        );
        assert_eq!(
            format_kpi(&ScalarValue::from(1500.5), MeasureKind::Currency),
            "R$ 1.500,50"
        );
    }

    #[test]
    fn test_kpi_non_number_is_verbatim() {
        assert_eq!(
            format_kpi(&ScalarValue::from("indisponível"), MeasureKind::Currency),
            "indisponível"
        );
    }

    #[test]
    fn test_humanize_header() {
        assert_eq!(humanize_header("total_quantity"), "total quantity");
        assert_eq!(humanize_header("canal"), "canal");
    }
}
