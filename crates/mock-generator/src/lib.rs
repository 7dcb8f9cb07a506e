//! Mock features dataset generator for mockframe.
//!
//! This crate provides [`Features`], which produces synthetic tabular data
//! from a fixed catalog of eleven column kinds. Randomness comes from an
//! explicit, optionally seeded RNG so that datasets can be reproduced.
//!
//! # Architecture
//!
//! ```text
//! FeaturesConfig (flags, all_dtypes, num_rows, library, seed)
//!        │
//!        ▼
//!  Selection::normalize ──► Catalog::generate(num_rows, rng)
//!                                   │
//!                                   ▼
//!                            assemble (filter, catalog order)
//!                                   │
//!                                   ▼
//!                            handle_library
//!                              ├─ pandas ─► MockTable + TableSchema
//!                              └─ numpy  ─► RawArray
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_generator::{generate_features, FeatureFlags, FeaturesConfig};
//! use mock_core::ColumnKind;
//!
//! let config = FeaturesConfig::default()
//!     .with_num_rows(5)
//!     .with_flags(FeatureFlags::only(&[ColumnKind::Ints]))
//!     .with_seed(42);
//!
//! let data = generate_features(&config).unwrap();
//! let table = data.as_table().unwrap();
//! assert_eq!(table.column_names(), vec!["ints"]);
//! ```
//!
//! # Columns
//!
//! - `ints` - `-(n/2)` upwards, one per row
//! - `rand_ints` - uniform integers in `-5..5`
//! - `floats` - `ints` as floats
//! - `rand_floats` - uniform floats in `[-5.0, 5.0)`
//! - `booleans` - uniform booleans
//! - `categoricals` - uniform labels from `First`, `Second`, `Third`, `Fourth`
//! - `dates` - daily from 2001-01-01
//! - `texts` - `Sample text for row {index}.`
//! - `ints_nullable`, `floats_nullable`, `booleans_nullable` - as above with
//!   null as one more equally likely value

pub mod catalog;
pub mod config;
pub mod features;
pub mod generators;
pub mod selection;

// Re-exports for convenience
pub use catalog::Catalog;
pub use config::FeaturesConfig;
pub use features::{generate_features, Features};
pub use selection::{FeatureFlags, Selection};
