//! Graph parameters forwarded to a plotting backend.

use crate::error::GraphError;
use mock_core::MockTable;
use serde::Serialize;
use std::fmt;

/// Default figure size in inches (A4 landscape).
pub const DEFAULT_PLOT_SIZE: (f64, f64) = (11.7, 8.27);

/// Kind of plot to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    Line,
    Scatter,
}

impl PlotKind {
    /// Display name of the plot kind.
    pub fn name(&self) -> &'static str {
        match self {
            PlotKind::Line => "Line",
            PlotKind::Scatter => "Scatterplot",
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data for one axis: a dataset column name or inline values.
#[derive(Debug, Clone, PartialEq)]
pub enum Axis {
    Column(String),
    Values(Vec<f64>),
}

impl Axis {
    fn len(&self, dataset: Option<&MockTable>) -> Option<usize> {
        match self {
            Axis::Column(_) => dataset.map(MockTable::num_rows),
            Axis::Values(values) => Some(values.len()),
        }
    }
}

impl From<&str> for Axis {
    fn from(name: &str) -> Self {
        Axis::Column(name.to_string())
    }
}

impl From<String> for Axis {
    fn from(name: String) -> Self {
        Axis::Column(name)
    }
}

impl From<Vec<f64>> for Axis {
    fn from(values: Vec<f64>) -> Self {
        Axis::Values(values)
    }
}

/// Options recognized by every plot kind.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphParameters {
    pub x: Option<Axis>,
    pub y: Option<Axis>,
    pub dataset: Option<MockTable>,
    /// Grouping column that produces different colors
    pub hue: Option<String>,
    /// Grouping column that produces different markers
    pub style: Option<String>,
    /// Figure size in inches
    pub plot_size: (f64, f64),
}

impl Default for GraphParameters {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            dataset: None,
            hue: None,
            style: None,
            plot_size: DEFAULT_PLOT_SIZE,
        }
    }
}

impl GraphParameters {
    /// Check that column references resolve and sizes agree.
    pub fn validate(&self) -> Result<(), GraphError> {
        let (width, height) = self.plot_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GraphError::InvalidPlotSize(width, height));
        }

        let columns = [&self.x, &self.y]
            .into_iter()
            .flatten()
            .filter_map(|axis| match axis {
                Axis::Column(name) => Some(name.as_str()),
                Axis::Values(_) => None,
            })
            .chain(self.hue.as_deref())
            .chain(self.style.as_deref());
        for name in columns {
            self.check_column(name)?;
        }

        if let (Some(x), Some(y)) = (&self.x, &self.y) {
            let dataset = self.dataset.as_ref();
            if let (Some(x_len), Some(y_len)) = (x.len(dataset), y.len(dataset)) {
                if x_len != y_len {
                    return Err(GraphError::LengthMismatch { x: x_len, y: y_len });
                }
            }
        }

        Ok(())
    }

    fn check_column(&self, name: &str) -> Result<(), GraphError> {
        let dataset = self
            .dataset
            .as_ref()
            .ok_or_else(|| GraphError::MissingDataset(name.to_string()))?;
        if dataset.column(name).is_none() {
            return Err(GraphError::UnknownColumn(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_core::{Column, ColumnKind, MockValue};

    fn dataset() -> MockTable {
        MockTable::new(
            2,
            vec![
                Column::from_values(ColumnKind::Ints, vec![MockValue::Int64(-1), MockValue::Int64(0)]),
                Column::from_values(
                    ColumnKind::Floats,
                    vec![MockValue::Float64(-1.0), MockValue::Float64(0.0)],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_default_plot_size() {
        assert_eq!(GraphParameters::default().plot_size, (11.7, 8.27));
        assert!(GraphParameters::default().validate().is_ok());
    }

    #[test]
    fn test_column_axes_resolve() {
        let params = GraphParameters {
            x: Some("ints".into()),
            y: Some("floats".into()),
            dataset: Some(dataset()),
            hue: Some("ints".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_column_without_dataset() {
        let params = GraphParameters {
            x: Some("ints".into()),
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(GraphError::MissingDataset(c)) if c == "ints"));
    }

    #[test]
    fn test_unknown_style_column() {
        let params = GraphParameters {
            dataset: Some(dataset()),
            style: Some("dates".to_string()),
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(GraphError::UnknownColumn(c)) if c == "dates"));
    }

    #[test]
    fn test_length_mismatch() {
        let params = GraphParameters {
            x: Some("ints".into()),
            y: Some(vec![1.0, 2.0, 3.0].into()),
            dataset: Some(dataset()),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GraphError::LengthMismatch { x: 2, y: 3 })
        ));
    }

    #[test]
    fn test_invalid_plot_size() {
        let params = GraphParameters {
            plot_size: (0.0, 4.0),
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(GraphError::InvalidPlotSize(..))));
    }
}
