//! Value representations for generated mock data.
//!
//! Generators produce loose [`MockValue`] cells. The assembler then packs each
//! column into typed [`ColumnData`] storage (structured mode) or flattens the
//! cells into [`RawValue`]s (raw mode).

use crate::types::ColumnKind;
use chrono::NaiveDate;
use serde::Serialize;

/// Generated cell value before it is packed into a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MockValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// String value
    Text(String),

    /// Calendar date
    Date(NaiveDate),
}

impl MockValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            Self::Int64(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// Typed storage for a structured table column.
///
/// Nullable integer and float storage keeps nulls as `None`, so a null is
/// never confused with `0` or `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Bool(Vec<bool>),
    Text(Vec<String>),
    Date(Vec<NaiveDate>),
    NullableInt64(Vec<Option<i64>>),
    NullableFloat64(Vec<Option<f64>>),
    /// Mixed values, including nulls, kept as-is
    Object(Vec<MockValue>),
}

impl ColumnData {
    /// Pack generated values into storage for the given column kind.
    ///
    /// `ints_nullable` and `floats_nullable` are coerced to nullable numeric
    /// storage and `booleans_nullable` always stays `Object`, whether or not
    /// any null was drawn. Every other column gets the narrowest homogeneous storage that
    /// holds all its values, falling back to `Object`. Empty columns take the
    /// storage their kind would have when populated.
    pub fn for_kind(kind: ColumnKind, values: Vec<MockValue>) -> Self {
        match kind {
            ColumnKind::IntsNullable => {
                ColumnData::NullableInt64(values.iter().map(MockValue::as_i64).collect())
            }
            ColumnKind::FloatsNullable => {
                ColumnData::NullableFloat64(values.iter().map(MockValue::as_f64).collect())
            }
            ColumnKind::BooleansNullable => ColumnData::Object(values),
            _ if values.is_empty() => Self::empty_for(kind),
            _ => Self::from_values(values),
        }
    }

    /// Pack values into the narrowest homogeneous storage.
    pub fn from_values(values: Vec<MockValue>) -> Self {
        if values.iter().all(|v| matches!(v, MockValue::Int64(_))) {
            ColumnData::Int64(values.iter().filter_map(MockValue::as_i64).collect())
        } else if values.iter().all(|v| matches!(v, MockValue::Float64(_))) {
            ColumnData::Float64(values.iter().filter_map(MockValue::as_f64).collect())
        } else if values.iter().all(|v| matches!(v, MockValue::Bool(_))) {
            ColumnData::Bool(values.iter().filter_map(MockValue::as_bool).collect())
        } else if values.iter().all(|v| matches!(v, MockValue::Date(_))) {
            ColumnData::Date(values.iter().filter_map(MockValue::as_date).collect())
        } else if values.iter().all(|v| matches!(v, MockValue::Text(_))) {
            ColumnData::Text(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        MockValue::Text(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            )
        } else {
            ColumnData::Object(values)
        }
    }

    fn empty_for(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Ints | ColumnKind::RandInts => ColumnData::Int64(Vec::new()),
            ColumnKind::Floats | ColumnKind::RandFloats => ColumnData::Float64(Vec::new()),
            ColumnKind::Booleans => ColumnData::Bool(Vec::new()),
            ColumnKind::Categoricals | ColumnKind::Texts => ColumnData::Text(Vec::new()),
            ColumnKind::Dates => ColumnData::Date(Vec::new()),
            ColumnKind::IntsNullable => ColumnData::NullableInt64(Vec::new()),
            ColumnKind::FloatsNullable => ColumnData::NullableFloat64(Vec::new()),
            ColumnKind::BooleansNullable => ColumnData::Object(Vec::new()),
        }
    }

    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int64(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Date(v) => v.len(),
            ColumnData::NullableInt64(v) => v.len(),
            ColumnData::NullableFloat64(v) => v.len(),
            ColumnData::Object(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the storage carries a null marker.
    pub fn is_nullable(&self) -> bool {
        matches!(
            self,
            ColumnData::NullableInt64(_) | ColumnData::NullableFloat64(_) | ColumnData::Object(_)
        )
    }

    /// Physical dtype name, using the pandas naming convention.
    pub fn dtype_name(&self) -> &'static str {
        match self {
            ColumnData::Int64(_) => "int64",
            ColumnData::Float64(_) => "float64",
            ColumnData::Bool(_) => "bool",
            ColumnData::Text(_) => "object",
            ColumnData::Date(_) => "datetime64[ns]",
            ColumnData::NullableInt64(_) => "Int64",
            ColumnData::NullableFloat64(_) => "Float64",
            ColumnData::Object(_) => "object",
        }
    }

    /// Get the value at a row as a loose cell.
    pub fn get(&self, row: usize) -> Option<MockValue> {
        match self {
            ColumnData::Int64(v) => v.get(row).map(|i| MockValue::Int64(*i)),
            ColumnData::Float64(v) => v.get(row).map(|f| MockValue::Float64(*f)),
            ColumnData::Bool(v) => v.get(row).map(|b| MockValue::Bool(*b)),
            ColumnData::Text(v) => v.get(row).map(|s| MockValue::Text(s.clone())),
            ColumnData::Date(v) => v.get(row).map(|d| MockValue::Date(*d)),
            ColumnData::NullableInt64(v) => v
                .get(row)
                .map(|i| i.map(MockValue::Int64).unwrap_or(MockValue::Null)),
            ColumnData::NullableFloat64(v) => v
                .get(row)
                .map(|f| f.map(MockValue::Float64).unwrap_or(MockValue::Null)),
            ColumnData::Object(v) => v.get(row).cloned(),
        }
    }

    /// Iterate over the column as loose cells.
    pub fn iter(&self) -> impl Iterator<Item = MockValue> + '_ {
        (0..self.len()).filter_map(move |row| self.get(row))
    }
}

/// Cell of a raw (unlabeled) array.
///
/// Raw arrays carry no nullable typing: every null degrades to `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl RawValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, RawValue::Missing)
    }
}

impl From<MockValue> for RawValue {
    fn from(value: MockValue) -> Self {
        match value {
            MockValue::Null => RawValue::Missing,
            MockValue::Bool(b) => RawValue::Bool(b),
            MockValue::Int64(i) => RawValue::Int(i),
            MockValue::Float64(f) => RawValue::Float(f),
            MockValue::Text(s) => RawValue::Text(s),
            MockValue::Date(d) => RawValue::Date(d),
        }
    }
}
