//! Synthetic employee data generation.
//!
//! Produces a deterministic, seeded table with correlated numeric
//! columns and two categorical columns, suitable for exercising the
//! exploration, statistics, and charting layers end to end.

use std::sync::Arc;

use arrow::{
    array::{Float64Array, RecordBatch, StringArray},
    datatypes::{DataType, Field, Schema},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Exp, Normal, Uniform};

use crate::{
    error::{Error, Result},
    table::Table,
};

/// Default number of generated rows.
pub const DEFAULT_ROWS: usize = 1000;

/// Default generator seed.
pub const DEFAULT_SEED: u64 = 42;

const DEPARTMENTS: [&str; 4] = ["Sales", "Engineering", "Planning", "HR"];
const GENDERS: [&str; 2] = ["Male", "Female"];

/// Generates a synthetic employee table.
///
/// Columns, in order: `age` (normal, mean 35), `income` (normal, mean
/// 5,000,000, raised with age and tenure), `tenure` (exponential, mean
/// 5), `satisfaction` (uniform 1..10, raised with income),
/// `department`, and `gender`. After the derivations, values are
/// clipped to their documented ranges. The output is reproducible for
/// a given seed.
///
/// # Errors
///
/// Returns an error if `rows` is zero.
pub fn generate(rows: usize, seed: u64) -> Result<Table> {
    if rows == 0 {
        return Err(Error::invalid_config("rows must be positive"));
    }

    let mut rng = StdRng::seed_from_u64(seed);

    let age_dist = Normal::new(35.0, 10.0).map_err(|e| Error::invalid_config(e.to_string()))?;
    let income_dist =
        Normal::new(5_000_000.0, 1_500_000.0).map_err(|e| Error::invalid_config(e.to_string()))?;
    let tenure_dist = Exp::new(1.0 / 5.0).map_err(|e| Error::invalid_config(e.to_string()))?;
    let satisfaction_dist = Uniform::new(1.0, 10.0);

    let age: Vec<f64> = (0..rows).map(|_| age_dist.sample(&mut rng)).collect();
    let mut income: Vec<f64> = (0..rows).map(|_| income_dist.sample(&mut rng)).collect();
    let tenure: Vec<f64> = (0..rows).map(|_| tenure_dist.sample(&mut rng)).collect();
    let mut satisfaction: Vec<f64> = (0..rows)
        .map(|_| satisfaction_dist.sample(&mut rng))
        .collect();
    let department: Vec<&str> = (0..rows)
        .map(|_| DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())])
        .collect();
    let gender: Vec<&str> = (0..rows)
        .map(|_| GENDERS[rng.gen_range(0..GENDERS.len())])
        .collect();

    // Income rises with age and tenure, then satisfaction with income.
    for i in 0..rows {
        income[i] += age[i] * 50_000.0 + tenure[i] * 100_000.0;
    }
    for i in 0..rows {
        satisfaction[i] += (income[i] - 5_000_000.0) / 1_000_000.0;
    }

    let age: Vec<f64> = age.into_iter().map(|v| v.clamp(20.0, 65.0)).collect();
    let income: Vec<f64> = income
        .into_iter()
        .map(|v| v.clamp(2_000_000.0, 15_000_000.0))
        .collect();
    let tenure: Vec<f64> = tenure.into_iter().map(|v| v.clamp(0.0, 30.0)).collect();
    let satisfaction: Vec<f64> = satisfaction
        .into_iter()
        .map(|v| v.clamp(1.0, 10.0))
        .collect();

    let schema = Arc::new(Schema::new(vec![
        Field::new("age", DataType::Float64, false),
        Field::new("income", DataType::Float64, false),
        Field::new("tenure", DataType::Float64, false),
        Field::new("satisfaction", DataType::Float64, false),
        Field::new("department", DataType::Utf8, false),
        Field::new("gender", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(Float64Array::from(age)),
            Arc::new(Float64Array::from(income)),
            Arc::new(Float64Array::from(tenure)),
            Arc::new(Float64Array::from(satisfaction)),
            Arc::new(StringArray::from(department)),
            Arc::new(StringArray::from(gender)),
        ],
    )
    .map_err(Error::Arrow)?;

    Table::from_batch(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(table: &Table, name: &str) -> Vec<f64> {
        table
            .numeric_column(name)
            .ok()
            .unwrap_or_else(|| panic!("Should extract column"))
            .into_iter()
            .flatten()
            .collect()
    }

    #[test]
    fn test_generate_shape() {
        let table = generate(100, DEFAULT_SEED)
            .ok()
            .unwrap_or_else(|| panic!("Should generate"));

        assert_eq!(table.len(), 100);
        assert_eq!(
            table.column_names(),
            vec![
                "age",
                "income",
                "tenure",
                "satisfaction",
                "department",
                "gender"
            ]
        );
    }

    #[test]
    fn test_generate_zero_rows_rejected() {
        let result = generate(0, DEFAULT_SEED);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_generate_reproducible() {
        let a = generate(200, 7).ok().unwrap_or_else(|| panic!("Should generate"));
        let b = generate(200, 7).ok().unwrap_or_else(|| panic!("Should generate"));

        assert_eq!(column(&a, "age"), column(&b, "age"));
        assert_eq!(column(&a, "income"), column(&b, "income"));
        assert_eq!(column(&a, "satisfaction"), column(&b, "satisfaction"));
    }

    #[test]
    fn test_generate_seeds_differ() {
        let a = generate(200, 1).ok().unwrap_or_else(|| panic!("Should generate"));
        let b = generate(200, 2).ok().unwrap_or_else(|| panic!("Should generate"));

        assert_ne!(column(&a, "age"), column(&b, "age"));
    }

    #[test]
    fn test_generate_clipped_ranges() {
        let table = generate(DEFAULT_ROWS, DEFAULT_SEED)
            .ok()
            .unwrap_or_else(|| panic!("Should generate"));

        for v in column(&table, "age") {
            assert!((20.0..=65.0).contains(&v));
        }
        for v in column(&table, "income") {
            assert!((2_000_000.0..=15_000_000.0).contains(&v));
        }
        for v in column(&table, "tenure") {
            assert!((0.0..=30.0).contains(&v));
        }
        for v in column(&table, "satisfaction") {
            assert!((1.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn test_generate_categorical_values() {
        let table = generate(300, DEFAULT_SEED)
            .ok()
            .unwrap_or_else(|| panic!("Should generate"));

        let departments = table
            .string_column("department")
            .ok()
            .unwrap_or_else(|| panic!("Should extract column"));
        for dept in departments.into_iter().flatten() {
            assert!(DEPARTMENTS.contains(&dept.as_str()));
        }

        let genders = table
            .string_column("gender")
            .ok()
            .unwrap_or_else(|| panic!("Should extract column"));
        for gender in genders.into_iter().flatten() {
            assert!(GENDERS.contains(&gender.as_str()));
        }
    }

    #[test]
    fn test_income_age_positively_correlated() {
        let table = generate(DEFAULT_ROWS, DEFAULT_SEED)
            .ok()
            .unwrap_or_else(|| panic!("Should generate"));
        let matrix = crate::stats::correlation_matrix(&table)
            .ok()
            .unwrap_or_else(|| panic!("Should compute"));

        let age_idx = matrix.columns.iter().position(|c| c == "age");
        let income_idx = matrix.columns.iter().position(|c| c == "income");
        let (i, j) = (
            age_idx.unwrap_or_else(|| panic!("age column expected")),
            income_idx.unwrap_or_else(|| panic!("income column expected")),
        );

        let r = matrix.get(i, j).unwrap_or(f64::NAN);
        assert!(r > 0.1, "expected positive age/income correlation, got {r}");
    }
}
