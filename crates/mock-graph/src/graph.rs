//! Line and scatter graph descriptions.

use crate::backend::PlotBackend;
use crate::error::GraphError;
use crate::params::{Axis, GraphParameters, PlotKind};
use mock_core::MockTable;
use tracing::debug;

/// A graph whose parameters are forwarded to a plotting backend.
pub trait Graph {
    /// Kind of plot this graph renders as.
    fn kind(&self) -> PlotKind;

    /// Parameters forwarded to the backend.
    fn parameters(&self) -> &GraphParameters;

    /// Check that the parameters can be rendered.
    fn validate(&self) -> Result<(), GraphError> {
        self.parameters().validate()
    }

    /// Validate and render with the given backend.
    fn plot<B: PlotBackend>(&self, backend: &B) -> Result<B::Artifact, GraphError> {
        self.validate()?;
        debug!("Rendering {} plot", self.kind());
        backend.render(self.kind(), self.parameters())
    }
}

macro_rules! graph_builders {
    ($ty:ident) => {
        impl $ty {
            /// Set the dataset that column-name axes refer to.
            pub fn with_dataset(mut self, dataset: MockTable) -> Self {
                self.params.dataset = Some(dataset);
                self
            }

            /// Group by color.
            pub fn with_hue(mut self, hue: impl Into<String>) -> Self {
                self.params.hue = Some(hue.into());
                self
            }

            /// Group by marker.
            pub fn with_style(mut self, style: impl Into<String>) -> Self {
                self.params.style = Some(style.into());
                self
            }

            /// Set the figure size in inches.
            pub fn with_plot_size(mut self, width: f64, height: f64) -> Self {
                self.params.plot_size = (width, height);
                self
            }
        }
    };
}

/// Line plot of y against x.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    params: GraphParameters,
}

impl Line {
    pub fn new(x: impl Into<Axis>, y: impl Into<Axis>) -> Self {
        Self {
            params: GraphParameters {
                x: Some(x.into()),
                y: Some(y.into()),
                ..Default::default()
            },
        }
    }
}

graph_builders!(Line);

impl Graph for Line {
    fn kind(&self) -> PlotKind {
        PlotKind::Line
    }

    fn parameters(&self) -> &GraphParameters {
        &self.params
    }
}

/// Scatter plot. Without axes, the backend plots the whole dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scatter {
    params: GraphParameters,
}

impl Scatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_x(mut self, x: impl Into<Axis>) -> Self {
        self.params.x = Some(x.into());
        self
    }

    pub fn with_y(mut self, y: impl Into<Axis>) -> Self {
        self.params.y = Some(y.into());
        self
    }
}

graph_builders!(Scatter);

impl Graph for Scatter {
    fn kind(&self) -> PlotKind {
        PlotKind::Scatter
    }

    fn parameters(&self) -> &GraphParameters {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_core::{Column, ColumnKind, MockValue};
    use std::cell::RefCell;

    /// Backend that records what it was asked to render.
    #[derive(Default)]
    struct RecordingBackend {
        calls: RefCell<Vec<(PlotKind, GraphParameters)>>,
    }

    impl PlotBackend for RecordingBackend {
        type Artifact = usize;

        fn render(&self, kind: PlotKind, params: &GraphParameters) -> Result<usize, GraphError> {
            let mut calls = self.calls.borrow_mut();
            calls.push((kind, params.clone()));
            Ok(calls.len())
        }
    }

    fn dataset() -> MockTable {
        MockTable::new(
            1,
            vec![Column::from_values(ColumnKind::Ints, vec![MockValue::Int64(0)])],
        )
        .unwrap()
    }

    #[test]
    fn test_line_forwards_parameters() {
        let backend = RecordingBackend::default();
        let line = Line::new("ints", "ints")
            .with_dataset(dataset())
            .with_hue("ints")
            .with_plot_size(4.0, 3.0);

        assert_eq!(line.plot(&backend).unwrap(), 1);

        let calls = backend.calls.borrow();
        let (kind, params) = &calls[0];
        assert_eq!(*kind, PlotKind::Line);
        assert_eq!(params.x, Some(Axis::Column("ints".to_string())));
        assert_eq!(params.hue.as_deref(), Some("ints"));
        assert_eq!(params.plot_size, (4.0, 3.0));
    }

    #[test]
    fn test_invalid_graph_is_not_rendered() {
        let backend = RecordingBackend::default();
        let line = Line::new("ints", "floats").with_dataset(dataset());

        assert!(matches!(line.plot(&backend), Err(GraphError::UnknownColumn(_))));
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn test_scatter_without_axes() {
        let backend = RecordingBackend::default();
        let scatter = Scatter::new().with_dataset(dataset()).with_style("ints");

        assert!(scatter.plot(&backend).is_ok());
        assert_eq!(backend.calls.borrow()[0].0, PlotKind::Scatter);
        assert_eq!(scatter.kind().name(), "Scatterplot");
    }

    #[test]
    fn test_scatter_inline_values() {
        let scatter = Scatter::new()
            .with_x(vec![1.0, 2.0])
            .with_y(vec![3.0, 4.0]);
        assert!(scatter.validate().is_ok());
    }
}
