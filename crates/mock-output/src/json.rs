//! Forward conversion: mock values and datasets → JSON.

use mock_core::{MockTable, MockValue, RawArray, RawValue, TableSchema};
use serde_json::{json, Map, Value};

/// Wrapper for JSON values.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonValue(pub Value);

impl JsonValue {
    /// Get the inner JSON value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Get a reference to the inner JSON value.
    pub fn as_inner(&self) -> &Value {
        &self.0
    }
}

impl From<MockValue> for JsonValue {
    fn from(value: MockValue) -> Self {
        match value {
            MockValue::Null => JsonValue(Value::Null),
            MockValue::Bool(b) => JsonValue(json!(b)),
            MockValue::Int64(i) => JsonValue(json!(i)),
            // Non-finite floats have no JSON form and become null
            MockValue::Float64(f) => JsonValue(json!(f)),
            MockValue::Text(s) => JsonValue(json!(s)),
            MockValue::Date(d) => JsonValue(json!(d.format("%Y-%m-%d").to_string())),
        }
    }
}

impl From<&RawValue> for JsonValue {
    fn from(value: &RawValue) -> Self {
        match value {
            RawValue::Missing => JsonValue(Value::Null),
            RawValue::Bool(b) => JsonValue(json!(b)),
            RawValue::Int(i) => JsonValue(json!(i)),
            RawValue::Float(f) => JsonValue(json!(f)),
            RawValue::Text(s) => JsonValue(json!(s)),
            RawValue::Date(d) => JsonValue(json!(d.format("%Y-%m-%d").to_string())),
        }
    }
}

/// Convert a table to an array of row objects.
///
/// Object keys keep the table's column order.
pub fn table_to_json_records(table: &MockTable) -> Value {
    let rows = (0..table.num_rows())
        .map(|index| {
            let mut object = Map::new();
            for column in table.columns() {
                let value = column.data.get(index).unwrap_or(MockValue::Null);
                object.insert(column.name().to_string(), JsonValue::from(value).into_inner());
            }
            Value::Object(object)
        })
        .collect();
    Value::Array(rows)
}

/// Convert a raw array to an array of row arrays.
pub fn array_to_json(array: &RawArray) -> Value {
    Value::Array(
        array
            .rows()
            .map(|row| Value::Array(row.iter().map(|v| JsonValue::from(v).into_inner()).collect()))
            .collect(),
    )
}

/// Convert a semantic schema to a `{column: type}` object.
pub fn schema_to_json(schema: &TableSchema) -> Value {
    let object: Map<String, Value> = schema
        .iter()
        .map(|(name, semantic)| (name.to_string(), json!(semantic.to_string())))
        .collect();
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_core::{Column, ColumnKind, InferenceConfig};

    fn table() -> MockTable {
        MockTable::new(
            2,
            vec![
                Column::from_values(
                    ColumnKind::Floats,
                    vec![MockValue::Float64(-1.0), MockValue::Float64(0.0)],
                ),
                Column::from_values(
                    ColumnKind::IntsNullable,
                    vec![MockValue::Null, MockValue::Int64(3)],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_table_to_json_records() {
        let value = table_to_json_records(&table());
        assert_eq!(
            value,
            json!([
                {"floats": -1.0, "ints_nullable": null},
                {"floats": 0.0, "ints_nullable": 3}
            ])
        );
    }

    #[test]
    fn test_array_to_json() {
        let value = array_to_json(&table().to_raw_array());
        assert_eq!(value, json!([[-1.0, null], [0.0, 3]]));
    }

    #[test]
    fn test_nan_becomes_null() {
        let value = JsonValue::from(MockValue::Float64(f64::NAN));
        assert_eq!(value.into_inner(), Value::Null);
    }

    #[test]
    fn test_schema_to_json() {
        let mut table = table();
        table.init_schema(&InferenceConfig::default());
        let value = schema_to_json(table.schema().unwrap());
        assert_eq!(
            value,
            json!({"floats": "Double", "ints_nullable": "IntegerNullable"})
        );
    }
}
