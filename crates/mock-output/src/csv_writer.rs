//! Forward conversion: mock values and datasets → CSV.

use crate::error::OutputError;
use mock_core::{MockTable, MockValue, RawArray, RawValue};
use std::io::Write;

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<MockValue> for CsvValue {
    fn from(value: MockValue) -> Self {
        match value {
            // Null - empty string
            MockValue::Null => CsvValue(String::new()),
            MockValue::Bool(b) => CsvValue(b.to_string()),
            MockValue::Int64(i) => CsvValue(i.to_string()),
            MockValue::Float64(f) => CsvValue(f.to_string()),
            MockValue::Text(s) => CsvValue(s),
            MockValue::Date(d) => CsvValue(d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl From<&RawValue> for CsvValue {
    fn from(value: &RawValue) -> Self {
        match value {
            RawValue::Missing => CsvValue(String::new()),
            RawValue::Bool(b) => CsvValue(b.to_string()),
            RawValue::Int(i) => CsvValue(i.to_string()),
            RawValue::Float(f) => CsvValue(f.to_string()),
            RawValue::Text(s) => CsvValue(s.clone()),
            RawValue::Date(d) => CsvValue(d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Write a structured table as CSV with a header row.
pub fn write_table_csv<W: Write>(table: &MockTable, writer: W) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(table.column_names())?;
    for index in 0..table.num_rows() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|c| {
                c.data
                    .get(index)
                    .map(|v| CsvValue::from(v).into_inner())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a raw array as CSV, without a header.
pub fn write_array_csv<W: Write>(array: &RawArray, writer: W) -> Result<(), OutputError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for row in array.rows() {
        let record: Vec<String> = row.iter().map(|v| CsvValue::from(v).into_inner()).collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mock_core::{Column, ColumnKind};

    fn table() -> MockTable {
        MockTable::new(
            2,
            vec![
                Column::from_values(ColumnKind::Ints, vec![MockValue::Int64(-1), MockValue::Int64(0)]),
                Column::from_values(
                    ColumnKind::Texts,
                    vec![
                        MockValue::Text("plain".to_string()),
                        MockValue::Text("with, comma".to_string()),
                    ],
                ),
                Column::from_values(
                    ColumnKind::FloatsNullable,
                    vec![MockValue::Float64(2.5), MockValue::Null],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(CsvValue::from(MockValue::Null).as_str(), "");
        assert_eq!(CsvValue::from(MockValue::Bool(true)).as_str(), "true");
        assert_eq!(CsvValue::from(MockValue::Float64(-3.0)).as_str(), "-3");
        assert_eq!(
            CsvValue::from(MockValue::Date(NaiveDate::from_ymd_opt(2001, 1, 9).unwrap())).as_str(),
            "2001-01-09"
        );
        assert_eq!(CsvValue::from(&RawValue::Missing).as_str(), "");
    }

    #[test]
    fn test_write_table_csv() {
        let mut out = Vec::new();
        write_table_csv(&table(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "ints,texts,floats_nullable\n-1,plain,2.5\n0,\"with, comma\",\n"
        );
    }

    #[test]
    fn test_write_array_csv_has_no_header() {
        let mut out = Vec::new();
        write_array_csv(&table().to_raw_array(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "-1,plain,2.5\n0,\"with, comma\",\n");
    }
}
