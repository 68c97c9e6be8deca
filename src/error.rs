//! Error types for explorar.

use std::path::PathBuf;

/// Result type alias for explorar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in explorar operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Arrow error during data processing.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Excel workbook error.
    #[error("Excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// Unsupported file format.
    #[error("Unsupported format: {path:?} (expected .csv, .xlsx, .xls, or .json)")]
    UnsupportedFormat {
        /// The path with the unrecognized extension.
        path: PathBuf,
    },

    /// Not enough numeric columns for the requested computation.
    #[error("Insufficient numeric columns: need {needed}, found {actual}")]
    InsufficientColumns {
        /// The minimum number of numeric columns required.
        needed: usize,
        /// The number of numeric columns actually present.
        actual: usize,
    },

    /// Empty table error.
    #[error("Table is empty")]
    EmptyTable,

    /// Schema mismatch between record batches.
    #[error("Schema mismatch: {message}")]
    SchemaMismatch {
        /// Description of the schema mismatch.
        message: String,
    },

    /// Column not found in schema.
    #[error("Column '{name}' not found in schema")]
    ColumnNotFound {
        /// The name of the missing column.
        name: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// Chart rendering error.
    #[error("Chart error: {message}")]
    Chart {
        /// Description of the rendering failure.
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create an I/O error without path context.
    pub fn io_no_path(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create an insufficient columns error.
    #[must_use]
    pub fn insufficient_columns(needed: usize, actual: usize) -> Self {
        Self::InsufficientColumns { needed, actual }
    }

    /// Create a schema mismatch error.
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            message: message.into(),
        }
    }

    /// Create a column not found error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a chart rendering error.
    pub fn chart(message: impl Into<String>) -> Self {
        Self::Chart {
            message: message.into(),
        }
    }
}
