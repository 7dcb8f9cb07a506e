//! Plot parameter marshaling for mockframe.
//!
//! [`Line`] and [`Scatter`] collect the options every plot kind understands
//! (`x`, `y`, `dataset`, `hue`, `style`, `plot_size`), validate them against
//! the dataset, and hand them to a [`PlotBackend`]. Rendering is the backend's
//! business; [`SpecBackend`] produces a JSON description of the plot.
//!
//! # Example
//!
//! ```ignore
//! use mock_graph::{Graph, Line, SpecBackend};
//!
//! let table = features.create_data()?.into_table().unwrap();
//! let spec = Line::new("ints", "rand_floats")
//!     .with_dataset(table)
//!     .with_hue("categoricals")
//!     .plot(&SpecBackend)?;
//! ```

pub mod backend;
mod error;
pub mod graph;
pub mod params;

pub use backend::{PlotBackend, SpecBackend};
pub use error::GraphError;
pub use graph::{Graph, Line, Scatter};
pub use params::{Axis, GraphParameters, PlotKind, DEFAULT_PLOT_SIZE};
