//! Summary statistics for numeric table columns.
//!
//! Provides per-column summaries, Pearson correlation matrices, and
//! per-group aggregations. Quartiles use linear interpolation on the
//! sorted values and the standard deviation uses the sample (n - 1)
//! denominator.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    error::{Error, Result},
    table::Table,
};

/// Summary statistics for a single numeric column.
///
/// Statistics are `None` when the column has no non-missing values
/// (and `std` additionally requires at least two).
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Number of non-missing values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation.
    pub std: Option<f64>,
    /// Minimum value.
    pub min: Option<f64>,
    /// First quartile (25th percentile).
    pub q1: Option<f64>,
    /// Median (50th percentile).
    pub median: Option<f64>,
    /// Third quartile (75th percentile).
    pub q3: Option<f64>,
    /// Maximum value.
    pub max: Option<f64>,
}

/// A square Pearson correlation matrix over numeric columns.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    /// Column names, in table order.
    pub columns: Vec<String>,
    /// Row-major correlation coefficients.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Returns the matrix dimension.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the matrix has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the coefficient at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }
}

/// Mean and standard deviation of the value columns for one group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupRow {
    /// The group label.
    pub label: String,
    /// Number of rows in the group.
    pub count: usize,
    /// Mean of each value column over the group, in column order.
    pub means: Vec<Option<f64>>,
    /// Sample standard deviation of each value column over the group.
    pub stds: Vec<Option<f64>>,
}

/// Per-group aggregation of one or more numeric columns.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedSummary {
    /// The column the rows were grouped by.
    pub group_column: String,
    /// The aggregated value columns, in the order given.
    pub value_columns: Vec<String>,
    /// One row per distinct group label, sorted lexicographically.
    pub groups: Vec<GroupRow>,
}

/// Computes summary statistics for every numeric column.
///
/// Columns appear in table order. Missing values are excluded from
/// every statistic.
///
/// # Errors
///
/// Returns an error if column extraction fails.
pub fn summarize(table: &Table) -> Result<Vec<ColumnSummary>> {
    let mut summaries = Vec::new();
    for name in table.numeric_column_names() {
        let values = table.numeric_column(&name)?;
        summaries.push(summarize_column(&name, &values));
    }
    Ok(summaries)
}

/// Computes summary statistics for one extracted column.
pub fn summarize_column(name: &str, values: &[Option<f64>]) -> ColumnSummary {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    present.sort_by(|a, b| a.total_cmp(b));

    let count = present.len();
    if count == 0 {
        return ColumnSummary {
            name: name.to_string(),
            count: 0,
            mean: None,
            std: None,
            min: None,
            q1: None,
            median: None,
            q3: None,
            max: None,
        };
    }

    let mean = mean(&present);
    ColumnSummary {
        name: name.to_string(),
        count,
        mean: Some(mean),
        std: sample_std(&present, mean),
        min: present.first().copied(),
        q1: Some(percentile(&present, 0.25)),
        median: Some(percentile(&present, 0.5)),
        q3: Some(percentile(&present, 0.75)),
        max: present.last().copied(),
    }
}

/// Computes the Pearson correlation matrix over the numeric columns.
///
/// Each pair uses its complete observations: rows where either value
/// is missing are skipped for that pair. The diagonal is exactly 1.0.
/// Pairs with fewer than two complete observations, or with a constant
/// column, yield NaN.
///
/// # Errors
///
/// Returns [`Error::InsufficientColumns`] if the table has no numeric
/// columns.
pub fn correlation_matrix(table: &Table) -> Result<CorrelationMatrix> {
    let names = table.numeric_column_names();
    if names.is_empty() {
        return Err(Error::insufficient_columns(1, 0));
    }

    let mut columns = Vec::with_capacity(names.len());
    for name in &names {
        columns.push(table.numeric_column(name)?);
    }

    let n = names.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: names,
        values,
    })
}

/// Computes mean and standard deviation of the value columns per
/// distinct group label.
///
/// Rows with a missing group label are dropped. Groups are sorted
/// lexicographically.
///
/// # Errors
///
/// Returns an error if the group column or any value column does not
/// exist, or a value column is not numeric.
pub fn grouped_summary(
    table: &Table,
    group_column: &str,
    value_columns: &[&str],
) -> Result<GroupedSummary> {
    let labels = table.string_column(group_column)?;

    let mut extracted = Vec::with_capacity(value_columns.len());
    for name in value_columns {
        extracted.push(table.numeric_column(name)?);
    }

    let mut membership: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (row, label) in labels.iter().enumerate() {
        if let Some(label) = label {
            membership.entry(label.clone()).or_default().push(row);
        }
    }

    let groups = membership
        .into_iter()
        .map(|(label, rows)| {
            let mut means = Vec::with_capacity(extracted.len());
            let mut stds = Vec::with_capacity(extracted.len());
            for column in &extracted {
                let present: Vec<f64> = rows
                    .iter()
                    .filter_map(|&row| column.get(row).copied().flatten())
                    .collect();
                if present.is_empty() {
                    means.push(None);
                    stds.push(None);
                } else {
                    let m = mean(&present);
                    means.push(Some(m));
                    stds.push(sample_std(&present, m));
                }
            }
            GroupRow {
                label,
                count: rows.len(),
                means,
                stds,
            }
        })
        .collect();

    Ok(GroupedSummary {
        group_column: group_column.to_string(),
        value_columns: value_columns.iter().map(|s| (*s).to_string()).collect(),
        groups,
    })
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[allow(clippy::cast_precision_loss)]
fn sample_std(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Linear-interpolation percentile over sorted values. `p` in [0, 1].
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let idx = p * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = idx - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some((*x, *y)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let xs: Vec<f64> = pairs.iter().map(|(x, _)| *x).collect();
    let ys: Vec<f64> = pairs.iter().map(|(_, y)| *y).collect();
    let mx = mean(&xs);
    let my = mean(&ys);

    let mut num = 0.0;
    let mut dx = 0.0;
    let mut dy = 0.0;
    for (x, y) in &pairs {
        num += (x - mx) * (y - my);
        dx += (x - mx).powi(2);
        dy += (y - my).powi(2);
    }

    let den = (dx * dy).sqrt();
    if den == 0.0 {
        f64::NAN
    } else {
        num / den
    }
}
