//! File format detection and table loading.
//!
//! Dispatches on the file extension to the right [`Table`] reader or
//! writer. The format set is closed: CSV, Excel workbooks, and JSON.

use std::path::Path;

use crate::{
    error::{Error, Result},
    table::{CsvOptions, ExcelOptions, JsonOptions, Table},
};

/// The file formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated values (`.csv`).
    Csv,
    /// Excel workbook (`.xlsx`, `.xls`).
    Excel,
    /// JSON records (`.json`, `.jsonl`).
    Json,
}

impl FileFormat {
    /// Detects the format from a path's extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] naming the path when the
    /// extension is missing or not recognized.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xls" => Ok(Self::Excel),
            "json" | "jsonl" => Ok(Self::Json),
            _ => Err(Error::unsupported_format(path)),
        }
    }
}

/// Per-format options used by [`load_with_options`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Options applied when the path resolves to CSV.
    pub csv: CsvOptions,
    /// Options applied when the path resolves to JSON.
    pub json: JsonOptions,
    /// Options applied when the path resolves to an Excel workbook.
    pub excel: ExcelOptions,
}

impl LoadOptions {
    /// Creates new load options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CSV options.
    #[must_use]
    pub fn with_csv(mut self, csv: CsvOptions) -> Self {
        self.csv = csv;
        self
    }

    /// Sets the JSON options.
    #[must_use]
    pub fn with_json(mut self, json: JsonOptions) -> Self {
        self.json = json;
        self
    }

    /// Sets the Excel options.
    #[must_use]
    pub fn with_excel(mut self, excel: ExcelOptions) -> Self {
        self.excel = excel;
        self
    }
}

/// Loads a table from a path, dispatching on its extension.
///
/// # Errors
///
/// Returns an error if the extension is not recognized or the
/// underlying reader fails.
pub fn load(path: impl AsRef<Path>) -> Result<Table> {
    load_with_options(path, LoadOptions::default())
}

/// Loads a table from a path with per-format options.
///
/// The options for the formats the path does not resolve to are
/// ignored.
///
/// # Errors
///
/// Returns an error if the extension is not recognized or the
/// underlying reader fails.
pub fn load_with_options(path: impl AsRef<Path>, options: LoadOptions) -> Result<Table> {
    let path = path.as_ref();
    match FileFormat::from_path(path)? {
        FileFormat::Csv => Table::from_csv_with_options(path, options.csv),
        FileFormat::Excel => Table::from_excel_with_options(path, options.excel),
        FileFormat::Json => Table::from_json_with_options(path, options.json),
    }
}

/// Saves a table to a path, dispatching on its extension.
///
/// CSV and JSON are writable; the Excel arm is read-only.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for an Excel or unrecognized
/// path, or the underlying writer's error.
pub fn save(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match FileFormat::from_path(path)? {
        FileFormat::Csv => table.to_csv(path),
        FileFormat::Json => table.to_json(path),
        FileFormat::Excel => Err(Error::unsupported_format(path)),
    }
}
