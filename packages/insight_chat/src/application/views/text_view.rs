//! Terminal rendering of render plans.
//!
//! Reads a result and its plan, writes text. No decisions are made here:
//! the selector already chose the visualization and bound the columns.

use crate::domain::models::{MeasureKind, QueryResult, RenderPlan, Row, ScalarValue};
use crate::domain::services::{value_format, visualization_selector};

const NO_DATA_NOTICE: &str = "Sem dados para exibir.";
const BAR_WIDTH: usize = 30;

/// Renders a complete assistant answer: captions, the selected
/// visualization and the generated SQL echo.
pub fn render_result(result: &QueryResult) -> String {
    let mut out = String::new();
    if let Some(title) = &result.title {
        out.push_str(&format!("== {} ==\n", title));
    }
    if let Some(description) = &result.description {
        out.push_str(description);
        out.push('\n');
    }

    let plan = visualization_selector::select(result);
    out.push_str(&render_plan(&plan, &result.rows));

    let sql = result.generated_query.trim();
    if !sql.is_empty() && !result.is_error() {
        out.push_str(&format!("\nSQL gerado:\n{}\n", sql));
    }
    out
}

pub fn render_plan(plan: &RenderPlan, rows: &[Row]) -> String {
    match plan {
        RenderPlan::NoData => format!("{}\n", NO_DATA_NOTICE),
        RenderPlan::ErrorNotice { message } => format!("⚠️  {}\n", message),
        RenderPlan::Failed { reason } => {
            format!("⚠️  Formato de dados inesperado ({}).\n", reason)
        }
        RenderPlan::Table { columns } => render_table(columns, rows),
        RenderPlan::BarChart {
            label_column,
            measure_column,
            series_name,
        } => render_bars(label_column, measure_column, series_name, rows),
        RenderPlan::PieChart {
            label_column,
            measure_column,
            series_name,
        } => render_pie(label_column, measure_column, series_name, rows),
        RenderPlan::LineChart {
            label_column,
            measure_columns,
        } => render_series(label_column, measure_columns, rows),
        RenderPlan::Kpi {
            column,
            measure_kind,
        } => render_kpi(column, *measure_kind, rows),
    }
}

fn render_table(columns: &[String], rows: &[Row]) -> String {
    let headers: Vec<String> = columns
        .iter()
        .map(|column| value_format::humanize_header(column))
        .collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    let mut body: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| {
                row.get(column)
                    .map(value_format::format_scalar)
                    .unwrap_or_default()
            })
            .collect();
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
        body.push(cells);
    }

    let mut out = String::new();
    out.push_str(&padded_line(&headers, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&padded_line(&rule, &widths));
    for cells in &body {
        out.push_str(&padded_line(cells, &widths));
    }
    out
}

fn padded_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let padding = widths[i].saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(padding));
    }
    format!("{}\n", line.trim_end())
}

fn render_bars(label_column: &str, measure_column: &str, series_name: &str, rows: &[Row]) -> String {
    let max = rows
        .iter()
        .filter_map(|row| row.get(measure_column).and_then(ScalarValue::as_number))
        .fold(0.0_f64, f64::max);

    let mut out = format!("{} por {}\n", series_name, value_format::humanize_header(label_column));
    for row in rows {
        let label = row
            .get(label_column)
            .map(value_format::format_scalar)
            .unwrap_or_default();
        let value = row
            .get(measure_column)
            .and_then(ScalarValue::as_number)
            .unwrap_or(0.0);
        let width = if max > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round().max(0.0) as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<20} {} {}\n",
            label,
            "█".repeat(width),
            locale_format::format_number(value)
        ));
    }
    out
}

fn render_pie(label_column: &str, measure_column: &str, series_name: &str, rows: &[Row]) -> String {
    let total: f64 = rows
        .iter()
        .filter_map(|row| row.get(measure_column).and_then(ScalarValue::as_number))
        .sum();

    let mut out = format!("{} ({})\n", series_name, value_format::humanize_header(measure_column));
    for row in rows {
        let label = row
            .get(label_column)
            .map(value_format::format_scalar)
            .unwrap_or_default();
        let value = row
            .get(measure_column)
            .and_then(ScalarValue::as_number)
            .unwrap_or(0.0);
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        out.push_str(&format!(
            "{:<20} {:>4.0}%  {}\n",
            label,
            share,
            locale_format::format_number(value)
        ));
    }
    out
}

fn render_series(label_column: &str, measure_columns: &[String], rows: &[Row]) -> String {
    let legend: Vec<String> = measure_columns
        .iter()
        .map(|column| value_format::humanize_header(column))
        .collect();
    let mut out = format!("Séries: {}\n", legend.join(", "));

    let mut columns = vec![label_column.to_string()];
    columns.extend(measure_columns.iter().cloned());
    out.push_str(&render_table(&columns, rows));
    out
}

fn render_kpi(column: &str, kind: MeasureKind, rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return format!("{}\n", NO_DATA_NOTICE);
    };
    let header = value_format::humanize_header(column).to_uppercase();
    let figure = first
        .get(column)
        .map(|value| value_format::format_kpi(value, kind))
        .unwrap_or_default();

    let width = header.chars().count().max(figure.chars().count()) + 2;
    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", "─".repeat(width)));
    out.push_str(&format!("│ {:^1$} │\n", header, width - 2));
    out.push_str(&format!("│ {:^1$} │\n", figure, width - 2));
    out.push_str(&format!("└{}┘\n", "─".repeat(width)));
    out
}
