//! CSV and JSON conversions for mockframe datasets.
//!
//! # Modules
//!
//! - [`csv_writer`] - values, tables and arrays → CSV
//! - [`json`] - values, tables, arrays and schemas → JSON
//!
//! # Example
//!
//! ```ignore
//! use mock_output::{write_data, OutputFormat};
//!
//! let data = mock_generator::generate_features(&config)?;
//! write_data(&data, OutputFormat::Csv, std::io::stdout())?;
//! ```

pub mod csv_writer;
mod error;
pub mod json;

pub use csv_writer::{write_array_csv, write_table_csv, CsvValue};
pub use error::OutputError;
pub use json::{array_to_json, schema_to_json, table_to_json_records, JsonValue};

use mock_core::MockData;
use std::io::Write;

/// Serialization format for a written dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Write a dataset in the given format.
///
/// Tables are written with a header (CSV) or as row objects (JSON); raw
/// arrays without a header or as nested arrays. A table with an inferred
/// schema is written to JSON as `{"schema": {...}, "data": [...]}`.
pub fn write_data<W: Write>(
    data: &MockData,
    format: OutputFormat,
    mut writer: W,
) -> Result<(), OutputError> {
    match (format, data) {
        (OutputFormat::Csv, MockData::Table(table)) => write_table_csv(table, writer),
        (OutputFormat::Csv, MockData::Array(array)) => write_array_csv(array, writer),
        (OutputFormat::Json, data) => {
            let value = match data {
                MockData::Table(table) => match table.schema() {
                    Some(schema) => serde_json::json!({
                        "schema": schema_to_json(schema),
                        "data": table_to_json_records(table),
                    }),
                    None => table_to_json_records(table),
                },
                MockData::Array(array) => array_to_json(array),
            };
            serde_json::to_writer_pretty(&mut writer, &value)?;
            writeln!(writer)?;
            writer.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_core::{Column, ColumnKind, InferenceConfig, MockTable, MockValue};

    fn data() -> MockData {
        MockData::Table(
            MockTable::new(
                1,
                vec![Column::from_values(ColumnKind::Booleans, vec![MockValue::Bool(true)])],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_write_data_csv() {
        let mut out = Vec::new();
        write_data(&data(), OutputFormat::Csv, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "booleans\ntrue\n");
    }

    #[test]
    fn test_write_data_json() {
        let mut out = Vec::new();
        write_data(&data(), OutputFormat::Json, &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, serde_json::json!([{"booleans": true}]));
    }

    #[test]
    fn test_write_data_json_with_schema() {
        let MockData::Table(mut table) = data() else {
            unreachable!()
        };
        table.init_schema(&InferenceConfig::default());

        let mut out = Vec::new();
        write_data(&MockData::Table(table), OutputFormat::Json, &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "schema": {"booleans": "Boolean"},
                "data": [{"booleans": true}]
            })
        );
    }
}
