//! Structural classification of query result columns.
//!
//! The backend returns rows without a declared schema, so the visual role
//! of each column is inferred from the shape of the data itself: the first
//! string-valued column becomes the label axis, numeric columns become
//! measures, and measure names drive the quantity-vs-currency presentation.
//!
//! Only row 0 is inspected. This is an explicit contract, not an accident:
//! a backend that returns heterogeneous types per row yields undefined
//! classification, and that limitation is accepted rather than papered
//! over by scanning the whole result.

use crate::domain::models::{ColumnRole, MeasureKind, Row};

/// Lowercased name fragments that mark a measure as a plain item count
/// rather than a monetary total.
const QUANTITY_MARKERS: &[&str] = &["quantidade", "quantity", "contagem", "count"];

/// The inferred visual roles of a result's columns, in declared order.
/// At most one label column is ever selected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnClassification {
    pub label_columns: Vec<String>,
    pub measure_columns: Vec<String>,
}

impl ColumnClassification {
    pub fn label(&self) -> Option<&str> {
        self.label_columns.first().map(String::as_str)
    }

    pub fn first_measure(&self) -> Option<&str> {
        self.measure_columns.first().map(String::as_str)
    }
}

/// Classifies columns by the value types in row 0. Empty input yields an
/// empty classification; rows past the first are deliberately ignored.
pub fn classify(rows: &[Row]) -> ColumnClassification {
    let Some(first) = rows.first() else {
        return ColumnClassification::default();
    };

    let mut classification = ColumnClassification::default();
    for (name, value) in first.iter() {
        match value.role() {
            ColumnRole::Label => {
                if classification.label_columns.is_empty() {
                    classification.label_columns.push(name.to_string());
                }
            }
            ColumnRole::Measure => classification.measure_columns.push(name.to_string()),
            ColumnRole::Unclassified => {}
        }
    }
    classification
}

/// Whether a measure column holds a quantity or a currency-like total,
/// decided by name substring alone.
pub fn measure_kind(column: &str) -> MeasureKind {
    let lower = column.to_lowercase();
    if QUANTITY_MARKERS.iter().any(|marker| lower.contains(marker)) {
        MeasureKind::Quantity
    } else {
        MeasureKind::Currency
    }
}

/// The legend text for a plotted measure column.
pub fn series_name(column: &str) -> &'static str {
    match measure_kind(column) {
        MeasureKind::Quantity => "Quantidade",
        MeasureKind::Currency => "Total",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ScalarValue;

    #[test]
    fn test_empty_rows_classify_to_nothing() {
        let classification = classify(&[]);
        assert!(classification.label_columns.is_empty());
        assert!(classification.measure_columns.is_empty());
    }

    #[test]
    fn test_first_string_column_is_the_only_label() {
        let rows = vec![Row::from_pairs([
            ("canal", ScalarValue::from("iFood")),
            ("loja", ScalarValue::from("Centro")),
            ("faturamento", ScalarValue::from(1200.0)),
        ])];

        let classification = classify(&rows);
        assert_eq!(classification.label_columns, vec!["canal"]);
        assert_eq!(classification.label(), Some("canal"));
    }

    #[test]
    fn test_all_numeric_columns_are_measures_in_order() {
        let rows = vec![Row::from_pairs([
            ("dia", ScalarValue::from("2024-11-01")),
            ("faturamento", ScalarValue::from(100.0)),
            ("pedidos", ScalarValue::from(5.0)),
        ])];

        let classification = classify(&rows);
        assert_eq!(classification.measure_columns, vec!["faturamento", "pedidos"]);
        assert_eq!(classification.first_measure(), Some("faturamento"));
    }

    #[test]
    fn test_null_first_value_classifies_nothing() {
        let rows = vec![Row::from_pairs([
            ("produto", ScalarValue::Null),
            ("total", ScalarValue::from(3.0)),
        ])];

        let classification = classify(&rows);
        assert!(classification.label_columns.is_empty());
        assert_eq!(classification.measure_columns, vec!["total"]);
    }

    #[test]
    fn test_only_row_zero_is_inspected() {
        let rows = vec![
            Row::from_pairs([("produto", ScalarValue::from("X-Burger"))]),
            Row::from_pairs([("produto", ScalarValue::from(99.0))]),
        ];

        let classification = classify(&rows);
        assert_eq!(classification.label_columns, vec!["produto"]);
        assert!(classification.measure_columns.is_empty());
    }

    #[test]
    fn test_quantity_name_markers() {
        assert_eq!(measure_kind("quantidade"), MeasureKind::Quantity);
        assert_eq!(measure_kind("total_quantity"), MeasureKind::Quantity);
        assert_eq!(measure_kind("Contagem_Pedidos"), MeasureKind::Quantity);
        assert_eq!(measure_kind("order_count"), MeasureKind::Quantity);
    }

    #[test]
    fn test_other_names_are_currency_like() {
        assert_eq!(measure_kind("faturamento"), MeasureKind::Currency);
        assert_eq!(measure_kind("total_amount"), MeasureKind::Currency);
        assert_eq!(measure_kind("ticket_medio"), MeasureKind::Currency);
    }

    #[test]
    fn test_series_names() {
        assert_eq!(series_name("total_quantity"), "Quantidade");
        assert_eq!(series_name("faturamento"), "Total");
    }
}
