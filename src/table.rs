//! In-memory tabular data for explorar.
//!
//! Provides the [`Table`] type, a columnar table backed by Arrow
//! RecordBatches, together with readers and writers for the supported
//! file formats.

use std::{path::Path, sync::Arc};

use arrow::{
    array::{Array, ArrayRef, BooleanArray, Float64Array, Int64Array, RecordBatch, StringArray},
    compute::cast,
    datatypes::{DataType, Field, Schema, SchemaRef},
};

use crate::error::{Error, Result};

/// An in-memory table backed by Arrow RecordBatches.
///
/// This is the primary data type for explorar. It stores data as a
/// collection of RecordBatches sharing one schema, and provides the
/// column access patterns the exploration and statistics layers build on.
///
/// # Example
///
/// ```no_run
/// use explorar::Table;
///
/// let table = Table::from_csv("data.csv").unwrap();
/// println!("Table has {} rows", table.len());
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    batches: Vec<RecordBatch>,
    schema: SchemaRef,
    row_count: usize,
}

impl Table {
    /// Creates a new Table from a vector of RecordBatches.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The batches vector is empty
    /// - The batches have inconsistent schemas
    pub fn new(batches: Vec<RecordBatch>) -> Result<Self> {
        if batches.is_empty() {
            return Err(Error::EmptyTable);
        }

        let schema = batches[0].schema();

        // Verify all batches have the same schema
        for (i, batch) in batches.iter().enumerate().skip(1) {
            if batch.schema() != schema {
                return Err(Error::schema_mismatch(format!(
                    "Batch {} has different schema than batch 0",
                    i
                )));
            }
        }

        let row_count = batches.iter().map(|b| b.num_rows()).sum();

        Ok(Self {
            batches,
            schema,
            row_count,
        })
    }

    /// Creates a Table from a single RecordBatch.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch list would be empty.
    pub fn from_batch(batch: RecordBatch) -> Result<Self> {
        Self::new(vec![batch])
    }

    /// Loads a table from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The file is not valid CSV
    /// - The file is empty
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_csv_with_options(path, CsvOptions::default())
    }

    /// Loads a table from a CSV file with options.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the file is empty.
    pub fn from_csv_with_options(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self> {
        use std::io::{BufReader, Seek, SeekFrom};

        use arrow_csv::{reader::Format, ReaderBuilder};

        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
        let mut buf_reader = BufReader::new(file);

        // Get schema (infer or use provided)
        let schema = if let Some(schema) = options.schema {
            Arc::new(schema)
        } else {
            // Infer schema from file
            let mut format = Format::default().with_header(options.has_header);
            if let Some(delim) = options.delimiter {
                format = format.with_delimiter(delim);
            }
            let (inferred, _) = format
                .infer_schema(&mut buf_reader, Some(1000))
                .map_err(Error::Arrow)?;

            // Reset file position
            buf_reader
                .seek(SeekFrom::Start(0))
                .map_err(|e| Error::io(e, path))?;

            Arc::new(inferred)
        };

        let mut builder = ReaderBuilder::new(schema)
            .with_batch_size(options.batch_size)
            .with_header(options.has_header);

        if let Some(delim) = options.delimiter {
            builder = builder.with_delimiter(delim);
        }

        let reader = builder.build(buf_reader).map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        if batches.is_empty() {
            return Err(Error::EmptyTable);
        }

        Self::new(batches)
    }

    /// Saves the table to a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    pub fn to_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        use arrow_csv::WriterBuilder;

        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| Error::io(e, path))?;

        let mut writer = WriterBuilder::new().with_header(true).build(file);

        for batch in &self.batches {
            writer.write(batch).map_err(Error::Arrow)?;
        }

        Ok(())
    }

    /// Loads a table from a JSON file.
    ///
    /// Accepts newline-delimited records (`.jsonl`) as well as `.json`
    /// files with one object per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_with_options(path, JsonOptions::default())
    }

    /// Loads a table from a JSON file with options.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the file is empty.
    pub fn from_json_with_options(path: impl AsRef<Path>, options: JsonOptions) -> Result<Self> {
        use std::io::BufReader;

        use arrow_json::ReaderBuilder;

        let path = path.as_ref();

        // Get schema (infer or use provided)
        let schema = if let Some(schema) = options.schema {
            Arc::new(schema)
        } else {
            // Infer schema from file
            let infer_file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
            let infer_reader = BufReader::new(infer_file);
            let (inferred, _) = arrow_json::reader::infer_json_schema(infer_reader, Some(1000))
                .map_err(Error::Arrow)?;
            Arc::new(inferred)
        };

        // Open file for reading
        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
        let buf_reader = BufReader::new(file);

        let builder = ReaderBuilder::new(schema).with_batch_size(options.batch_size);
        let reader = builder.build(buf_reader).map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        if batches.is_empty() {
            return Err(Error::EmptyTable);
        }

        Self::new(batches)
    }

    /// Saves the table as newline-delimited JSON.
    ///
    /// Each row is written as a single JSON object on its own line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    pub fn to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        use std::io::BufWriter;

        use arrow_json::LineDelimitedWriter;

        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| Error::io(e, path))?;
        let buf_writer = BufWriter::new(file);

        let mut writer = LineDelimitedWriter::new(buf_writer);

        for batch in &self.batches {
            writer.write(batch).map_err(Error::Arrow)?;
        }

        writer.finish().map_err(Error::Arrow)?;

        Ok(())
    }

    /// Loads a table from an Excel workbook (`.xlsx` or `.xls`).
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be opened or the
    /// worksheet has no data rows.
    pub fn from_excel(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_excel_with_options(path, ExcelOptions::default())
    }

    /// Loads a table from an Excel workbook with options.
    ///
    /// Reads the first worksheet unless a sheet name is given. Column
    /// types are inferred from the cells: integer columns map to Int64,
    /// mixed or fractional numbers to Float64, booleans to Boolean, and
    /// everything else to Utf8. Empty cells become nulls.
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be opened, the requested
    /// sheet is missing, or no data rows remain below the header.
    pub fn from_excel_with_options(path: impl AsRef<Path>, options: ExcelOptions) -> Result<Self> {
        use calamine::{open_workbook_auto, Data, Reader};

        let path = path.as_ref();
        let mut workbook = open_workbook_auto(path)?;

        let sheet = match options.sheet {
            Some(name) => name,
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or(Error::EmptyTable)?,
        };

        let range = workbook.worksheet_range(&sheet)?;

        let mut rows = range.rows();
        let header: Vec<String> = if options.has_header {
            match rows.next() {
                Some(cells) => cells
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| match cell {
                        Data::Empty => format!("col_{i}"),
                        other => other.to_string(),
                    })
                    .collect(),
                None => return Err(Error::EmptyTable),
            }
        } else {
            (0..range.width()).map(|i| format!("col_{i}")).collect()
        };

        let body: Vec<&[Data]> = rows.collect();
        if body.is_empty() {
            return Err(Error::EmptyTable);
        }

        let mut fields = Vec::with_capacity(header.len());
        let mut columns: Vec<ArrayRef> = Vec::with_capacity(header.len());
        for (idx, name) in header.iter().enumerate() {
            let cells: Vec<&Data> = body
                .iter()
                .map(|row| row.get(idx).unwrap_or(&Data::Empty))
                .collect();
            let (data_type, array) = excel_column(&cells);
            fields.push(Field::new(name, data_type, true));
            columns.push(array);
        }

        let schema = Arc::new(Schema::new(fields));
        let batch = RecordBatch::try_new(schema, columns).map_err(Error::Arrow)?;

        Self::from_batch(batch)
    }

    /// Returns the total number of rows.
    pub fn len(&self) -> usize {
        self.row_count
    }

    /// Returns true if the table contains no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Returns the schema of the table.
    pub fn schema(&self) -> SchemaRef {
        Arc::clone(&self.schema)
    }

    /// Returns the number of batches.
    pub fn num_batches(&self) -> usize {
        self.batches.len()
    }

    /// Returns the underlying batches.
    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    /// Returns an iterator over the RecordBatches.
    pub fn iter(&self) -> impl Iterator<Item = &RecordBatch> {
        self.batches.iter()
    }

    /// Returns the column names in schema order.
    pub fn column_names(&self) -> Vec<String> {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Returns the names of the numeric columns, in schema order.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.schema
            .fields()
            .iter()
            .filter(|f| f.data_type().is_numeric())
            .map(|f| f.name().clone())
            .collect()
    }

    /// Returns the heap size of the table's array buffers, in bytes.
    ///
    /// Includes string value buffers and null bitmaps.
    pub fn memory_usage_bytes(&self) -> usize {
        self.batches
            .iter()
            .flat_map(|batch| batch.columns().iter())
            .map(|array| array.get_array_memory_size())
            .sum()
    }

    /// Extracts a numeric column as `f64` values, nulls preserved.
    ///
    /// Integer and float columns of any width are promoted to `f64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist or is not numeric.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let (idx, field) = self
            .schema
            .column_with_name(name)
            .ok_or_else(|| Error::column_not_found(name))?;

        if !field.data_type().is_numeric() {
            return Err(Error::schema_mismatch(format!(
                "Column '{}' has type {}, expected a numeric type",
                name,
                field.data_type()
            )));
        }

        let mut values = Vec::with_capacity(self.row_count);
        for batch in &self.batches {
            let promoted = cast(batch.column(idx), &DataType::Float64).map_err(Error::Arrow)?;
            let array = promoted
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| {
                    Error::schema_mismatch(format!("Column '{}' did not cast to Float64", name))
                })?;
            for i in 0..array.len() {
                values.push(if array.is_null(i) {
                    None
                } else {
                    Some(array.value(i))
                });
            }
        }

        Ok(values)
    }

    /// Extracts a column as strings, nulls preserved.
    ///
    /// Non-string columns are rendered through Arrow's cast kernel.
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist.
    pub fn string_column(&self, name: &str) -> Result<Vec<Option<String>>> {
        let (idx, _) = self
            .schema
            .column_with_name(name)
            .ok_or_else(|| Error::column_not_found(name))?;

        let mut values = Vec::with_capacity(self.row_count);
        for batch in &self.batches {
            let rendered = cast(batch.column(idx), &DataType::Utf8).map_err(Error::Arrow)?;
            let array = rendered
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| {
                    Error::schema_mismatch(format!("Column '{}' did not cast to Utf8", name))
                })?;
            for i in 0..array.len() {
                values.push(if array.is_null(i) {
                    None
                } else {
                    Some(array.value(i).to_string())
                });
            }
        }

        Ok(values)
    }
}

/// Infers an Arrow column from one worksheet column of cells.
#[allow(clippy::cast_precision_loss)]
fn excel_column(cells: &[&calamine::Data]) -> (DataType, ArrayRef) {
    use calamine::Data;

    let mut saw_int = false;
    let mut saw_float = false;
    let mut saw_bool = false;
    let mut saw_other = false;

    for cell in cells {
        match cell {
            Data::Int(_) => saw_int = true,
            Data::Float(_) => saw_float = true,
            Data::Bool(_) => saw_bool = true,
            Data::Empty => {}
            _ => saw_other = true,
        }
    }

    if saw_other || (saw_bool && (saw_int || saw_float)) {
        let values: Vec<Option<String>> = cells
            .iter()
            .map(|cell| match cell {
                Data::Empty => None,
                Data::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect();
        (DataType::Utf8, Arc::new(StringArray::from(values)))
    } else if saw_bool {
        let values: Vec<Option<bool>> = cells
            .iter()
            .map(|cell| match cell {
                Data::Bool(b) => Some(*b),
                _ => None,
            })
            .collect();
        (DataType::Boolean, Arc::new(BooleanArray::from(values)))
    } else if saw_float {
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|cell| match cell {
                Data::Float(f) => Some(*f),
                Data::Int(i) => Some(*i as f64),
                _ => None,
            })
            .collect();
        (DataType::Float64, Arc::new(Float64Array::from(values)))
    } else if saw_int {
        let values: Vec<Option<i64>> = cells
            .iter()
            .map(|cell| match cell {
                Data::Int(i) => Some(*i),
                _ => None,
            })
            .collect();
        (DataType::Int64, Arc::new(Int64Array::from(values)))
    } else {
        // Entirely empty column
        let values: Vec<Option<String>> = cells.iter().map(|_| None).collect();
        (DataType::Utf8, Arc::new(StringArray::from(values)))
    }
}

/// Options for CSV parsing.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Whether the CSV file has a header row.
    pub has_header: bool,
    /// Delimiter character (default is comma).
    pub delimiter: Option<u8>,
    /// Batch size for reading.
    pub batch_size: usize,
    /// Optional schema (inferred if not provided).
    pub schema: Option<Schema>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: None, // Use default comma
            batch_size: 8192,
            schema: None,
        }
    }
}

impl CsvOptions {
    /// Creates new CSV options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the file has a header row.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets the delimiter character.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Sets the batch size for reading.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the schema for parsing.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Options for JSON parsing.
#[derive(Debug, Clone)]
pub struct JsonOptions {
    /// Batch size for reading.
    pub batch_size: usize,
    /// Optional schema (inferred if not provided).
    pub schema: Option<Schema>,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            batch_size: 8192,
            schema: None,
        }
    }
}

impl JsonOptions {
    /// Creates new JSON options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the batch size for reading.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the schema for parsing.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Options for Excel workbook reading.
#[derive(Debug, Clone)]
pub struct ExcelOptions {
    /// Worksheet to read (first sheet if not set).
    pub sheet: Option<String>,
    /// Whether the first row is a header row.
    pub has_header: bool,
}

impl Default for ExcelOptions {
    fn default() -> Self {
        Self {
            sheet: None,
            has_header: true,
        }
    }
}

impl ExcelOptions {
    /// Creates new Excel options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the worksheet to read by name.
    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Sets whether the first row is a header row.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

#[cfg(test)]
#[allow(clippy::uninlined_format_args)]
mod tests {
    use arrow::array::Int32Array;

    use super::*;

    fn create_test_batch(count: usize) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int32, false),
            Field::new("score", DataType::Float64, true),
            Field::new("name", DataType::Utf8, false),
        ]));

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let ids: Vec<i32> = (0..count as i32).collect();
        #[allow(clippy::cast_precision_loss)]
        let scores: Vec<Option<f64>> = ids.iter().map(|i| Some(f64::from(*i) * 1.5)).collect();
        let names: Vec<String> = ids.iter().map(|i| format!("item_{}", i)).collect();

        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int32Array::from(ids)),
                Arc::new(Float64Array::from(scores)),
                Arc::new(StringArray::from(names)),
            ],
        )
        .ok()
        .unwrap_or_else(|| panic!("Failed to create test batch"))
    }

    #[test]
    fn test_new_table() {
        let batch = create_test_batch(10);
        let table = Table::new(vec![batch]).ok();
        assert!(table.is_some());
        let table = table.unwrap_or_else(|| panic!("Table should be Some"));
        assert_eq!(table.len(), 10);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_empty_table_error() {
        let result = Table::new(vec![]);
        assert!(matches!(result, Err(Error::EmptyTable)));
    }

    #[test]
    fn test_from_batch() {
        let batch = create_test_batch(5);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));
        assert_eq!(table.len(), 5);
        assert_eq!(table.num_batches(), 1);
    }

    #[test]
    fn test_schema_mismatch_error() {
        let schema1 = Arc::new(Schema::new(vec![Field::new("id", DataType::Int32, false)]));
        let schema2 = Arc::new(Schema::new(vec![Field::new("name", DataType::Utf8, false)]));

        let batch1 = RecordBatch::try_new(schema1, vec![Arc::new(Int32Array::from(vec![1, 2, 3]))])
            .ok()
            .unwrap_or_else(|| panic!("Should create batch"));

        let batch2 = RecordBatch::try_new(
            schema2,
            vec![Arc::new(StringArray::from(vec!["a", "b", "c"]))],
        )
        .ok()
        .unwrap_or_else(|| panic!("Should create batch"));

        let result = Table::new(vec![batch1, batch2]);
        assert!(matches!(result, Err(Error::SchemaMismatch { .. })));
    }

    #[test]
    fn test_column_names() {
        let batch = create_test_batch(5);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        assert_eq!(table.column_names(), vec!["id", "score", "name"]);
    }

    #[test]
    fn test_numeric_column_names() {
        let batch = create_test_batch(5);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        assert_eq!(table.numeric_column_names(), vec!["id", "score"]);
    }

    #[test]
    fn test_numeric_column_promotes_integers() {
        let batch = create_test_batch(4);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        let ids = table
            .numeric_column("id")
            .ok()
            .unwrap_or_else(|| panic!("Should extract column"));
        assert_eq!(ids, vec![Some(0.0), Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_numeric_column_rejects_strings() {
        let batch = create_test_batch(4);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        let result = table.numeric_column("name");
        assert!(matches!(result, Err(Error::SchemaMismatch { .. })));
    }

    #[test]
    fn test_numeric_column_not_found() {
        let batch = create_test_batch(4);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        let result = table.numeric_column("salary");
        assert!(matches!(result, Err(Error::ColumnNotFound { .. })));
    }

    #[test]
    fn test_string_column() {
        let batch = create_test_batch(3);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        let names = table
            .string_column("name")
            .ok()
            .unwrap_or_else(|| panic!("Should extract column"));
        assert_eq!(
            names,
            vec![
                Some("item_0".to_string()),
                Some("item_1".to_string()),
                Some("item_2".to_string())
            ]
        );
    }

    #[test]
    fn test_numeric_column_preserves_nulls() {
        let schema = Arc::new(Schema::new(vec![Field::new(
            "v",
            DataType::Float64,
            true,
        )]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(Float64Array::from(vec![
                Some(1.0),
                None,
                Some(3.0),
            ]))],
        )
        .ok()
        .unwrap_or_else(|| panic!("Should create batch"));
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        let values = table
            .numeric_column("v")
            .ok()
            .unwrap_or_else(|| panic!("Should extract column"));
        assert_eq!(values, vec![Some(1.0), None, Some(3.0)]);
    }

    #[test]
    fn test_memory_usage_nonzero() {
        let batch = create_test_batch(100);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        assert!(table.memory_usage_bytes() > 0);
    }

    #[test]
    fn test_csv_roundtrip() {
        let batch = create_test_batch(10);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_dir.path().join("test.csv");

        table
            .to_csv(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write csv"));

        let loaded = Table::from_csv(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should load csv"));

        assert_eq!(loaded.len(), table.len());
        assert_eq!(loaded.column_names(), table.column_names());
    }

    #[test]
    fn test_json_roundtrip() {
        let batch = create_test_batch(10);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_dir.path().join("test.jsonl");

        table
            .to_json(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write json"));

        let loaded = Table::from_json(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should load json"));

        assert_eq!(loaded.len(), table.len());
    }

    #[test]
    fn test_from_csv_error() {
        let result = Table::from_csv("/nonexistent/path/to/file.csv");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_error() {
        let result = Table::from_json("/nonexistent/path/to/file.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_excel_error() {
        let result = Table::from_excel("/nonexistent/path/to/file.xlsx");
        assert!(result.is_err());
    }

    #[test]
    fn test_csv_options() {
        let options = CsvOptions::new()
            .with_header(true)
            .with_delimiter(b';')
            .with_batch_size(1024);

        assert!(options.has_header);
        assert_eq!(options.delimiter, Some(b';'));
        assert_eq!(options.batch_size, 1024);
    }

    #[test]
    fn test_csv_options_default() {
        let options = CsvOptions::default();
        assert!(options.has_header);
        assert!(options.delimiter.is_none());
        assert_eq!(options.batch_size, 8192);
        assert!(options.schema.is_none());
    }

    #[test]
    fn test_json_options() {
        let options = JsonOptions::new().with_batch_size(1024);
        assert_eq!(options.batch_size, 1024);
        assert!(options.schema.is_none());
    }

    #[test]
    fn test_excel_options() {
        let options = ExcelOptions::new().with_sheet("Data").with_header(false);
        assert_eq!(options.sheet.as_deref(), Some("Data"));
        assert!(!options.has_header);
    }

    #[test]
    fn test_clone_and_debug() {
        let batch = create_test_batch(5);
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        let cloned = table.clone();
        assert_eq!(cloned.len(), table.len());
        assert!(format!("{:?}", table).contains("Table"));
    }

    #[test]
    fn test_iter_batches() {
        let batch1 = create_test_batch(5);
        let batch2 = create_test_batch(5);
        let table = Table::new(vec![batch1, batch2])
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        assert_eq!(table.num_batches(), 2);
        let total: usize = table.iter().map(RecordBatch::num_rows).sum();
        assert_eq!(total, 10);
    }
}
