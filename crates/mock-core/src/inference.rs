//! Semantic type inference for structured tables.
//!
//! Inference looks at a column's physical storage and, for text columns, at
//! the values themselves:
//!
//! | storage                         | semantic type                    |
//! |---------------------------------|----------------------------------|
//! | `Int64`                         | `Integer`                        |
//! | `NullableInt64`                 | `IntegerNullable`                |
//! | `Float64`, `NullableFloat64`    | `Double`                         |
//! | `Bool`                          | `Boolean`                        |
//! | `Object` of bools and nulls     | `BooleanNullable`                |
//! | `Date`                          | `Datetime`                       |
//! | `Text`                          | `Categorical`, `NaturalLanguage` or `Unknown` |
//!
//! Inference never fails; anything unrecognized is `Unknown`.

use crate::table::MockTable;
use crate::types::SemanticType;
use crate::values::{ColumnData, MockValue};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Thresholds for text column inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Max ratio of distinct values to rows for a text column to be categorical
    pub categorical_threshold: f64,

    /// Min mean string length for a text column to be natural language
    pub natural_language_threshold: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            categorical_threshold: 0.2,
            natural_language_threshold: 10.0,
        }
    }
}

/// Column name to semantic type mapping, in table column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSchema {
    columns: Vec<(String, SemanticType)>,
}

impl TableSchema {
    /// Semantic type of a column.
    pub fn get(&self, name: &str) -> Option<SemanticType> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| *t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SemanticType)> + '_ {
        self.columns.iter().map(|(n, t)| (n.as_str(), *t))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Infer the semantic type of every column of a table.
pub fn infer_semantic_types(table: &MockTable, config: &InferenceConfig) -> TableSchema {
    let columns = table
        .columns()
        .iter()
        .map(|c| (c.name().to_string(), infer_column(&c.data, config)))
        .collect();
    TableSchema { columns }
}

/// Infer the semantic type of a single column.
pub fn infer_column(data: &ColumnData, config: &InferenceConfig) -> SemanticType {
    match data {
        ColumnData::Int64(_) => SemanticType::Integer,
        ColumnData::NullableInt64(_) => SemanticType::IntegerNullable,
        ColumnData::Float64(_) | ColumnData::NullableFloat64(_) => SemanticType::Double,
        ColumnData::Bool(_) => SemanticType::Boolean,
        ColumnData::Date(_) => SemanticType::Datetime,
        ColumnData::Text(values) => infer_text(values, config),
        ColumnData::Object(values) => {
            let all_bool_or_null = values
                .iter()
                .all(|v| matches!(v, MockValue::Bool(_) | MockValue::Null));
            if !values.is_empty() && all_bool_or_null {
                SemanticType::BooleanNullable
            } else {
                SemanticType::Unknown
            }
        }
    }
}

fn infer_text(values: &[String], config: &InferenceConfig) -> SemanticType {
    if values.is_empty() {
        return SemanticType::Unknown;
    }

    let distinct: HashSet<&str> = values.iter().map(String::as_str).collect();
    let unique_ratio = distinct.len() as f64 / values.len() as f64;
    if unique_ratio <= config.categorical_threshold {
        return SemanticType::Categorical;
    }

    let mean_length =
        values.iter().map(|s| s.chars().count()).sum::<usize>() as f64 / values.len() as f64;
    if mean_length >= config.natural_language_threshold {
        return SemanticType::NaturalLanguage;
    }

    SemanticType::Unknown
}
