//! Plotting backends.
//!
//! A [`PlotBackend`] receives validated parameters and produces an artifact
//! that the caller owns. [`SpecBackend`] renders to a JSON plot description
//! instead of an image.

use crate::error::GraphError;
use crate::params::{Axis, GraphParameters, PlotKind};
use mock_core::MockTable;
use mock_output::{table_to_json_records, JsonValue};
use serde_json::{json, Value};

/// Something that can turn graph parameters into a rendered artifact.
pub trait PlotBackend {
    type Artifact;

    fn render(&self, kind: PlotKind, params: &GraphParameters) -> Result<Self::Artifact, GraphError>;
}

/// Backend that describes the plot as JSON.
///
/// Column-name axes are resolved to their values so the description is
/// self-contained. Without axes, the full dataset is embedded as records.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecBackend;

impl PlotBackend for SpecBackend {
    type Artifact = Value;

    fn render(&self, kind: PlotKind, params: &GraphParameters) -> Result<Value, GraphError> {
        let dataset = params.dataset.as_ref();
        let x = resolve_axis(params.x.as_ref(), dataset)?;
        let y = resolve_axis(params.y.as_ref(), dataset)?;

        let mut spec = json!({
            "kind": kind,
            "name": kind.name(),
            "plot_size": [params.plot_size.0, params.plot_size.1],
            "x": axis_label(params.x.as_ref()),
            "y": axis_label(params.y.as_ref()),
            "hue": params.hue,
            "style": params.style,
            "series": {
                "x": x,
                "y": y,
                "hue": resolve_axis(params.hue.clone().map(Axis::Column).as_ref(), dataset)?,
                "style": resolve_axis(params.style.clone().map(Axis::Column).as_ref(), dataset)?,
            },
        });

        if params.x.is_none() && params.y.is_none() {
            if let Some(table) = dataset {
                spec["data"] = table_to_json_records(table);
            }
        }

        Ok(spec)
    }
}

fn axis_label(axis: Option<&Axis>) -> Value {
    match axis {
        Some(Axis::Column(name)) => json!(name),
        _ => Value::Null,
    }
}

fn resolve_axis(axis: Option<&Axis>, dataset: Option<&MockTable>) -> Result<Value, GraphError> {
    match axis {
        None => Ok(Value::Null),
        Some(Axis::Values(values)) => Ok(json!(values)),
        Some(Axis::Column(name)) => {
            let table = dataset.ok_or_else(|| GraphError::MissingDataset(name.clone()))?;
            let column = table
                .column(name)
                .ok_or_else(|| GraphError::UnknownColumn(name.clone()))?;
            Ok(Value::Array(
                column
                    .data
                    .iter()
                    .map(|v| JsonValue::from(v).into_inner())
                    .collect(),
            ))
        }
    }
}
