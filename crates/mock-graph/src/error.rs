//! Error types for graph parameter validation and rendering.

use thiserror::Error;

/// Errors that can occur while validating or rendering a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A column name was given but no dataset
    #[error("'{0}' refers to a column, but no dataset was provided")]
    MissingDataset(String),

    /// Column not found in the dataset
    #[error("Column '{0}' not found in dataset")]
    UnknownColumn(String),

    /// Axes of different lengths
    #[error("Axis length mismatch: x has {x} values, y has {y}")]
    LengthMismatch { x: usize, y: usize },

    /// Non-positive or non-finite plot size
    #[error("Invalid plot size: ({0}, {1})")]
    InvalidPlotSize(f64, f64),
}
