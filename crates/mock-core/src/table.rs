//! Output tables for generated mock data.
//!
//! - [`MockTable`] - labeled columnar table (structured mode)
//! - [`RawArray`] - unlabeled row-major grid (raw mode)
//! - [`MockData`] - either of the two

use crate::error::MockError;
use crate::inference::{infer_semantic_types, InferenceConfig, TableSchema};
use crate::types::ColumnKind;
use crate::values::{ColumnData, MockValue, RawValue};

/// A named column of a structured table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Catalog kind of this column
    pub kind: ColumnKind,

    /// Column values
    pub data: ColumnData,
}

impl Column {
    /// Create a column from generated values for the given kind.
    pub fn from_values(kind: ColumnKind, values: Vec<MockValue>) -> Self {
        Self {
            kind,
            data: ColumnData::for_kind(kind, values),
        }
    }

    /// Column label.
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Labeled columnar table with an optional semantic schema.
#[derive(Debug, Clone, PartialEq)]
pub struct MockTable {
    columns: Vec<Column>,
    num_rows: usize,
    schema: Option<TableSchema>,
}

impl MockTable {
    /// Create a table from columns that all hold `num_rows` values.
    ///
    /// Fails with [`MockError::ColumnLength`] on the first column of a
    /// different length.
    pub fn new(num_rows: usize, columns: Vec<Column>) -> Result<Self, MockError> {
        if let Some(column) = columns.iter().find(|c| c.len() != num_rows) {
            return Err(MockError::ColumnLength {
                column: column.name().to_string(),
                len: column.len(),
                expected: num_rows,
            });
        }
        Ok(Self {
            columns,
            num_rows,
            schema: None,
        })
    }

    /// Infer and attach semantic types for every column.
    pub fn init_schema(&mut self, config: &InferenceConfig) {
        self.schema = Some(infer_semantic_types(self, config));
    }

    /// Attached semantic schema, if one was initialized.
    pub fn schema(&self) -> Option<&TableSchema> {
        self.schema.as_ref()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column labels in table order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Get a column by label.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Get a column by kind.
    pub fn column_by_kind(&self, kind: ColumnKind) -> Option<&Column> {
        self.columns.iter().find(|c| c.kind == kind)
    }

    /// Get a row as loose cells in column order.
    pub fn row(&self, index: usize) -> Option<Vec<MockValue>> {
        if index >= self.num_rows {
            return None;
        }
        self.columns.iter().map(|c| c.data.get(index)).collect()
    }

    /// Flatten into an unlabeled row-major array.
    ///
    /// Labels and nullable typing are dropped; nulls become
    /// [`RawValue::Missing`].
    pub fn to_raw_array(&self) -> RawArray {
        let mut cells = Vec::with_capacity(self.num_rows * self.columns.len());
        for row in 0..self.num_rows {
            for column in &self.columns {
                let value = column.data.get(row).unwrap_or(MockValue::Null);
                cells.push(RawValue::from(value));
            }
        }
        RawArray {
            rows: self.num_rows,
            cols: self.columns.len(),
            cells,
        }
    }
}

/// Unlabeled row-major 2D grid of values.
#[derive(Debug, Clone, PartialEq)]
pub struct RawArray {
    rows: usize,
    cols: usize,
    cells: Vec<RawValue>,
}

impl RawArray {
    /// `(rows, cols)` of the array.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&RawValue> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    pub fn row(&self, row: usize) -> Option<&[RawValue]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[RawValue]> + '_ {
        (0..self.rows).filter_map(move |r| self.row(r))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[RawValue] {
        &self.cells
    }
}

/// Generated dataset in the requested representation.
#[derive(Debug, Clone, PartialEq)]
pub enum MockData {
    Table(MockTable),
    Array(RawArray),
}

impl MockData {
    pub fn num_rows(&self) -> usize {
        match self {
            MockData::Table(t) => t.num_rows(),
            MockData::Array(a) => a.shape().0,
        }
    }

    pub fn as_table(&self) -> Option<&MockTable> {
        match self {
            MockData::Table(t) => Some(t),
            MockData::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&RawArray> {
        match self {
            MockData::Array(a) => Some(a),
            MockData::Table(_) => None,
        }
    }

    pub fn into_table(self) -> Option<MockTable> {
        match self {
            MockData::Table(t) => Some(t),
            MockData::Array(_) => None,
        }
    }
}
