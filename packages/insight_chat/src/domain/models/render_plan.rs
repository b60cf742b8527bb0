use serde::Serialize;

use super::row::MeasureKind;

/// The resolved binding of result columns to visual channels for one
/// visualization kind. Computed on demand from a `QueryResult` and never
/// stored: it is a view over the result, not transcript state.
///
/// Malformed shapes become `Failed`, never a panic, so the presentation
/// layer can show a recoverable notice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderPlan {
    /// All columns as-is. The fallback for unrecognized hints.
    Table { columns: Vec<String> },
    /// One categorical axis, one value channel.
    BarChart {
        label_column: String,
        measure_column: String,
        series_name: String,
    },
    /// Same shape requirement as the bar chart; slices instead of bars.
    PieChart {
        label_column: String,
        measure_column: String,
        series_name: String,
    },
    /// One X axis plus every numeric column as a parallel series. The only
    /// multi-series visualization.
    LineChart {
        label_column: String,
        measure_columns: Vec<String>,
    },
    /// A single headline figure taken from row 0's first column.
    Kpi {
        column: String,
        measure_kind: MeasureKind,
    },
    /// The backend reported a failure; the message is displayed verbatim.
    ErrorNotice { message: String },
    /// Empty result set. Not a failure: every kind has a no-data rendering.
    NoData,
    /// The rows do not satisfy the hinted visualization's shape requirement.
    Failed { reason: String },
}

impl RenderPlan {
    pub fn is_failed(&self) -> bool {
        matches!(self, RenderPlan::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_failed() {
        let failed = RenderPlan::Failed {
            reason: "shape mismatch".to_string(),
        };
        assert!(failed.is_failed());
        assert!(!RenderPlan::NoData.is_failed());
    }

    #[test]
    fn test_plan_serialization_tag() {
        let plan = RenderPlan::Kpi {
            column: "faturamento_total".to_string(),
            measure_kind: MeasureKind::Currency,
        };
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["kind"], "kpi");
        assert_eq!(json["column"], "faturamento_total");
    }
}
