//! Text summary report.
//!
//! Aggregates shape, per-column type and missingness, summary
//! statistics, and the correlation matrix into a single UTF-8 text
//! artifact with a fixed section order.

use std::path::Path;

use crate::{
    error::{Error, Result},
    explore,
    stats::{self, CorrelationMatrix},
    table::Table,
};

/// Renders the full report text for a table.
///
/// Sections, in order: title, shape line, memory line, column info,
/// summary statistics, correlation matrix. The correlation section is
/// skipped entirely when the table has fewer than two numeric columns.
///
/// # Errors
///
/// Returns an error if statistics extraction fails.
#[allow(clippy::cast_precision_loss)]
pub fn render_report(table: &Table) -> Result<String> {
    let mut out = String::new();
    let schema = table.schema();
    let rows = table.len();

    out.push_str("=== Data Summary Report ===\n\n");
    out.push_str(&format!(
        "Shape: {} rows x {} columns\n",
        rows,
        schema.fields().len()
    ));
    out.push_str(&format!(
        "Memory usage: {:.2} MiB\n\n",
        table.memory_usage_bytes() as f64 / 1024.0 / 1024.0
    ));

    out.push_str("=== Column Info ===\n");
    for (idx, field) in schema.fields().iter().enumerate() {
        let missing: usize = table.batches().iter().map(|b| b.column(idx).null_count()).sum();
        let percent = if rows == 0 {
            0.0
        } else {
            missing as f64 / rows as f64 * 100.0
        };
        out.push_str(&format!(
            "{}: {}, missing: {} ({:.1}%)\n",
            field.name(),
            field.data_type(),
            missing,
            percent
        ));
    }

    out.push_str("\n=== Summary Statistics ===\n");
    let summaries = stats::summarize(table)?;
    out.push_str(&explore::render_summaries(&summaries));

    if table.numeric_column_names().len() >= 2 {
        out.push_str("\n=== Correlation Matrix ===\n");
        let matrix = stats::correlation_matrix(table)?;
        out.push_str(&render_correlation(&matrix));
    }

    Ok(out)
}

/// Renders the report and writes it to `path` as UTF-8, overwriting
/// any existing file.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn build_report(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = render_report(table)?;
    std::fs::write(path, text).map_err(|e| Error::io(e, path))?;
    println!("Report saved: {}", path.display());
    Ok(())
}

fn render_correlation(matrix: &CorrelationMatrix) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<20}", ""));
    for name in &matrix.columns {
        out.push_str(&format!(" {:<12}", name));
    }
    out.push('\n');

    for (i, name) in matrix.columns.iter().enumerate() {
        out.push_str(&format!("{:<20}", name));
        for j in 0..matrix.len() {
            let cell = match matrix.get(i, j) {
                Some(v) if !v.is_nan() => format!("{:.2}", v),
                _ => "NaN".to_string(),
            };
            out.push_str(&format!(" {:<12}", cell));
        }
        out.push('\n');
    }

    out
}
