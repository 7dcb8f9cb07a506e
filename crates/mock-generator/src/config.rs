//! Configuration for a features dataset.
//!
//! # YAML Format
//!
//! ```yaml
//! num_rows: 250
//! library: pandas        # or numpy, np, pd, array, ...
//! columns:               # omitted columns are off
//!   ints: true
//!   dates: true
//!   booleans_nullable: true
//! all_dtypes: false
//! seed: 42
//! inference:
//!   categorical_threshold: 0.2
//!   natural_language_threshold: 10
//! ```
//!
//! Every key is optional. Without `columns`, the default flags apply.

use crate::selection::FeatureFlags;
use mock_core::{InferenceConfig, Library, MockError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of rows in a generated dataset.
pub const DEFAULT_NUM_ROWS: i64 = 100;

/// Parameters of a features dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturesConfig {
    /// Number of rows to generate
    pub num_rows: i64,

    /// Output representation
    pub library: Library,

    /// Per-column flags
    #[serde(rename = "columns")]
    pub flags: FeatureFlags,

    /// Select every column regardless of `flags`
    pub all_dtypes: bool,

    /// RNG seed; OS entropy when unset
    pub seed: Option<u64>,

    /// Semantic type inference thresholds
    pub inference: InferenceConfig,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            num_rows: DEFAULT_NUM_ROWS,
            library: Library::default(),
            flags: FeatureFlags::default(),
            all_dtypes: false,
            seed: None,
            inference: InferenceConfig::default(),
        }
    }
}

impl FeaturesConfig {
    /// Load a config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MockError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, MockError> {
        let config: FeaturesConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn with_num_rows(mut self, num_rows: i64) -> Self {
        self.num_rows = num_rows;
        self
    }

    pub fn with_library(mut self, library: Library) -> Self {
        self.library = library;
        self
    }

    pub fn with_flags(mut self, flags: FeatureFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_all_dtypes(mut self, all_dtypes: bool) -> Self {
        self.all_dtypes = all_dtypes;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validated row count.
    pub fn row_count(&self) -> Result<usize, MockError> {
        usize::try_from(self.num_rows).map_err(|_| MockError::InvalidRowCount(self.num_rows))
    }

    /// Check the config for invalid values.
    pub fn validate(&self) -> Result<(), MockError> {
        self.row_count()?;

        let threshold = self.inference.categorical_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(MockError::Config(format!(
                "categorical_threshold must be within [0, 1], got {threshold}"
            )));
        }
        if self.inference.natural_language_threshold < 0.0 {
            return Err(MockError::Config(format!(
                "natural_language_threshold must be >= 0, got {}",
                self.inference.natural_language_threshold
            )));
        }
        Ok(())
    }
}
