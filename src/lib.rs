//! explorar - Exploratory Data Analysis and Reporting in Pure Rust
//!
//! A small EDA toolkit: load tabular files, inspect shape and
//! missingness, compute descriptive statistics and correlations,
//! render charts, and write a text summary report.
//!
//! # Design Principles
//!
//! 1. **Pure functions** - Every stage consumes a read-only [`Table`]
//!    and returns its own output
//! 2. **Pure Rust** - No Python, no FFI
//! 3. **Zero-copy** - Arrow `RecordBatch` throughout
//! 4. **Ecosystem aligned** - Arrow 53
//!
//! # Quick Start
//!
//! ```no_run
//! use explorar::{loader, stats};
//!
//! // Load a CSV file
//! let table = loader::load("data/employees.csv").unwrap();
//!
//! // Summary statistics for the numeric columns
//! for summary in stats::summarize(&table).unwrap() {
//!     println!("{}: {} non-missing values", summary.name, summary.count);
//! }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_lossless,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::redundant_clone,
        clippy::needless_collect,
        clippy::too_many_lines,
        clippy::float_cmp,
        clippy::similar_names,
        clippy::unreadable_literal
    )
)]
// Allow some pedantic lints for cleaner code
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::map_unwrap_or)]

pub mod chart;
/// CLI module for command-line interface
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod explore;
pub mod loader;
pub mod report;
pub mod sample;
pub mod stats;
pub mod table;

// Re-exports for convenience
// Re-export arrow types commonly needed
pub use arrow::{
    array::RecordBatch,
    datatypes::{Schema, SchemaRef},
};
pub use chart::{Chart, ChartKind, ChartStyle, SaveOptions};
pub use error::{Error, Result};
pub use explore::{ExploreOptions, MissingEntry, MissingReport};
pub use loader::{FileFormat, LoadOptions};
pub use stats::{ColumnSummary, CorrelationMatrix, GroupRow, GroupedSummary};
pub use table::{CsvOptions, ExcelOptions, JsonOptions, Table};
