//! Core types for mockframe.
//!
//! This crate provides the foundational types used across the mockframe
//! crates:
//!
//! - [`ColumnKind`] - The closed catalog of mock columns
//! - [`MockValue`] - Raw generated values before they are packed into columns
//! - [`MockTable`] / [`RawArray`] - Structured and raw output representations
//! - [`TableSchema`] - Semantic types inferred for a structured table
//! - [`MockError`] - Errors shared by the generator and the CLI
//!
//! # Architecture
//!
//! ```text
//! mock-core (this crate)
//!    │
//!    ├─── mock-generator  (catalog generation, selection, assembly)
//!    ├─── mock-output     (CSV / JSON conversion)
//!    └─── mock-graph      (plot parameter marshaling)
//! ```

pub mod error;
pub mod inference;
pub mod table;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use error::MockError;
pub use inference::{infer_column, infer_semantic_types, InferenceConfig, TableSchema};
pub use table::{Column, MockData, MockTable, RawArray};
pub use types::{ColumnKind, Library, SemanticType};
pub use values::{ColumnData, MockValue, RawValue};
