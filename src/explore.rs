//! Dataset exploration output.
//!
//! Renders the shape, memory footprint, per-column info, summary
//! statistics, and missing-value table of a [`Table`] as plain text.

use serde::Serialize;

use crate::{
    error::Result,
    stats::{self, ColumnSummary},
    table::Table,
};

/// Which sections the explorer renders.
#[derive(Debug, Clone)]
pub struct ExploreOptions {
    /// Render the per-column info section.
    pub show_info: bool,
    /// Render the summary statistics section.
    pub show_stats: bool,
}

impl Default for ExploreOptions {
    fn default() -> Self {
        Self {
            show_info: true,
            show_stats: true,
        }
    }
}

impl ExploreOptions {
    /// Creates new explore options with both sections enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the per-column info section is rendered.
    #[must_use]
    pub fn with_info(mut self, show_info: bool) -> Self {
        self.show_info = show_info;
        self
    }

    /// Sets whether the summary statistics section is rendered.
    #[must_use]
    pub fn with_stats(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }
}

/// Missing-value count and percentage for one column.
#[derive(Debug, Clone, Serialize)]
pub struct MissingEntry {
    /// Column name.
    pub name: String,
    /// Number of missing values.
    pub missing: usize,
    /// Missing values as a percentage of all rows.
    pub percent: f64,
}

/// Missing-value table, restricted to columns with at least one
/// missing value, in schema order.
#[derive(Debug, Clone, Serialize)]
pub struct MissingReport {
    /// Total number of rows in the table.
    pub rows: usize,
    /// Columns with missing values.
    pub entries: Vec<MissingEntry>,
}

impl MissingReport {
    /// Returns true if no column has missing values.
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts missing values per column.
#[allow(clippy::cast_precision_loss)]
pub fn missing_report(table: &Table) -> MissingReport {
    let rows = table.len();
    let schema = table.schema();

    let entries = schema
        .fields()
        .iter()
        .enumerate()
        .filter_map(|(idx, field)| {
            let missing: usize = table.batches().iter().map(|b| b.column(idx).null_count()).sum();
            if missing == 0 {
                return None;
            }
            let percent = if rows == 0 {
                0.0
            } else {
                missing as f64 / rows as f64 * 100.0
            };
            Some(MissingEntry {
                name: field.name().clone(),
                missing,
                percent,
            })
        })
        .collect();

    MissingReport { rows, entries }
}

/// Renders the exploration text for a table.
///
/// # Errors
///
/// Returns an error if statistics extraction fails.
#[allow(clippy::cast_precision_loss)]
pub fn render(table: &Table, options: &ExploreOptions) -> Result<String> {
    let mut out = String::new();
    let schema = table.schema();

    out.push_str(&format!(
        "Shape: {} rows x {} columns\n",
        table.len(),
        schema.fields().len()
    ));
    out.push_str(&format!(
        "Memory usage: {:.2} MiB\n",
        table.memory_usage_bytes() as f64 / 1024.0 / 1024.0
    ));

    if options.show_info {
        out.push('\n');
        out.push_str("Column info:\n");
        out.push_str(&format!(
            "{:<4} {:<20} {:<12} {:<12}\n",
            "#", "COLUMN", "TYPE", "NON-MISSING"
        ));
        out.push_str(&format!("{}\n", "-".repeat(52)));
        for (idx, field) in schema.fields().iter().enumerate() {
            let missing: usize = table.batches().iter().map(|b| b.column(idx).null_count()).sum();
            out.push_str(&format!(
                "{:<4} {:<20} {:<12} {:<12}\n",
                idx,
                field.name(),
                field.data_type().to_string(),
                table.len() - missing
            ));
        }
    }

    if options.show_stats {
        let summaries = stats::summarize(table)?;
        out.push('\n');
        out.push_str("Summary statistics:\n");
        out.push_str(&render_summaries(&summaries));
    }

    out.push('\n');
    let missing = missing_report(table);
    if missing.is_clean() {
        out.push_str("No missing values\n");
    } else {
        out.push_str("Missing values:\n");
        out.push_str(&format!("{:<20} {:<10} {:<8}\n", "COLUMN", "MISSING", "PERCENT"));
        out.push_str(&format!("{}\n", "-".repeat(40)));
        for entry in &missing.entries {
            out.push_str(&format!(
                "{:<20} {:<10} {:<8}\n",
                entry.name,
                entry.missing,
                format!("{:.1}%", entry.percent)
            ));
        }
    }

    Ok(out)
}

/// Renders summary statistics as a fixed-width text table.
pub fn render_summaries(summaries: &[ColumnSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:<8} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10}\n",
        "COLUMN", "COUNT", "MEAN", "STD", "MIN", "25%", "50%", "75%", "MAX"
    ));
    out.push_str(&format!("{}\n", "-".repeat(100)));
    for s in summaries {
        out.push_str(&format!(
            "{:<20} {:<8} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10}\n",
            s.name,
            s.count,
            fmt_stat(s.mean),
            fmt_stat(s.std),
            fmt_stat(s.min),
            fmt_stat(s.q1),
            fmt_stat(s.median),
            fmt_stat(s.q3),
            fmt_stat(s.max)
        ));
    }
    out
}

fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "NaN".to_string(),
    }
}

/// Prints the exploration text for a table.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn explore(table: &Table, options: &ExploreOptions) -> Result<()> {
    print!("{}", render(table, options)?);
    Ok(())
}
