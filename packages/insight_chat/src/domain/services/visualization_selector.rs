//! Hint-keyed dispatch from a query result to a render plan.
//!
//! The selector is a pure function: it owns no state, never panics on
//! malformed shapes, and is cheap enough to recompute on every redraw.
//! A result whose rows do not satisfy the hinted visualization's shape
//! requirement produces a `Failed` plan - a distinct state from the
//! deliberate table fallback for unrecognized hints, so callers can tell
//! "asked for a table" apart from "data didn't fit the chart".

use crate::domain::models::{QueryResult, RenderPlan, Row, VisualizationHint};

use super::schema_inference::{self, classify};

/// Reason attached to every shape-check failure.
pub const SHAPE_MISMATCH_REASON: &str =
    "shape mismatch: expected one text column and one numeric column";

const DEFAULT_ERROR_MESSAGE: &str = "Ocorreu um erro ao processar a consulta.";

/// Resolves which visualization to render for a result and which columns
/// feed which visual channel.
pub fn select(result: &QueryResult) -> RenderPlan {
    match result.visualization_hint {
        VisualizationHint::Error => RenderPlan::ErrorNotice {
            message: result
                .error
                .clone()
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        },
        _ if result.rows.is_empty() => RenderPlan::NoData,
        VisualizationHint::Table | VisualizationHint::Unknown => RenderPlan::Table {
            columns: result.rows[0].columns().map(str::to_string).collect(),
        },
        VisualizationHint::BarChart => match single_series_binding(&result.rows) {
            Some((label_column, measure_column, series_name)) => RenderPlan::BarChart {
                label_column,
                measure_column,
                series_name,
            },
            None => shape_mismatch(),
        },
        VisualizationHint::PieChart => match single_series_binding(&result.rows) {
            Some((label_column, measure_column, series_name)) => RenderPlan::PieChart {
                label_column,
                measure_column,
                series_name,
            },
            None => shape_mismatch(),
        },
        VisualizationHint::LineChart => {
            let classification = classify(&result.rows);
            match classification.label() {
                Some(label) if !classification.measure_columns.is_empty() => {
                    RenderPlan::LineChart {
                        label_column: label.to_string(),
                        measure_columns: classification.measure_columns,
                    }
                }
                _ => shape_mismatch(),
            }
        }
        VisualizationHint::Kpi => match result.rows[0].first() {
            Some((column, _)) => RenderPlan::Kpi {
                column: column.to_string(),
                measure_kind: schema_inference::measure_kind(column),
            },
            None => RenderPlan::NoData,
        },
    }
}

/// Binds the single label column and the first measure column, or `None`
/// when either is missing.
fn single_series_binding(rows: &[Row]) -> Option<(String, String, String)> {
    let classification = classify(rows);
    let label = classification.label()?.to_string();
    let measure = classification.first_measure()?.to_string();
    let series = schema_inference::series_name(&measure).to_string();
    Some((label, measure, series))
}

fn shape_mismatch() -> RenderPlan {
    RenderPlan::Failed {
        reason: SHAPE_MISMATCH_REASON.to_string(),
    }
}
