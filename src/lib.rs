//! mockframe
//!
//! Mock tabular datasets and plot parameter marshaling.
//!
//! # Features
//!
//! - Eleven column kinds: sequential and random integers and floats, booleans,
//!   categoricals, dates, text, and nullable integers, floats and booleans
//! - Structured (labeled, nullable-typed, semantically annotated) or raw
//!   (unlabeled grid) output
//! - Seedable generation for reproducible datasets
//! - CSV and JSON output
//! - Line and scatter plot descriptions over generated datasets
//!
//! # Crates
//!
//! - `mock_core` - value model, tables, semantic type inference
//! - `mock_generator` - catalog, selection policy, `Features`
//! - `mock_output` - CSV / JSON conversion
//! - `mock_graph` - `Line`, `Scatter`, `PlotBackend`
//!
//! # CLI Usage
//!
//! ```bash
//! # 100 rows of the default columns as CSV
//! mockframe features
//!
//! # Every column, seeded, as JSON
//! mockframe features --all-dtypes --seed 42 --format json
//!
//! # Raw array of two columns from a config file
//! mockframe features --config features.yaml --library numpy --columns ints,dates
//!
//! # Line plot description
//! mockframe graph line --x ints --y rand_floats --hue categoricals --columns ints,rand_floats,categoricals
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

pub use mock_core;
pub use mock_generator;
pub use mock_graph;
pub use mock_output;

use mock_core::{ColumnKind, Library, MockError};
use mock_generator::{FeatureFlags, FeaturesConfig};
use mock_output::OutputFormat;

/// Options selecting the generated dataset.
///
/// Values given here override those from `--config`.
#[derive(Args, Clone, Debug, Default)]
pub struct FeaturesOpts {
    /// YAML config file for the dataset
    #[arg(long, value_name = "PATH", env = "MOCKFRAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of rows to generate [default: 100]
    #[arg(long, allow_negative_numbers = true)]
    pub num_rows: Option<i64>,

    /// Output representation: pandas (labeled table) or numpy (raw array)
    #[arg(long, env = "MOCKFRAME_LIBRARY")]
    pub library: Option<String>,

    /// Columns to include (comma-separated, e.g. ints,dates,texts)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Include every column
    #[arg(long)]
    pub all_dtypes: bool,

    /// Random seed for reproducible generation
    #[arg(long, env = "MOCKFRAME_SEED")]
    pub seed: Option<u64>,
}

impl FeaturesOpts {
    /// Build the dataset config: the config file (or defaults), then CLI overrides.
    pub fn to_config(&self) -> Result<FeaturesConfig, MockError> {
        let mut config = match &self.config {
            Some(path) => FeaturesConfig::from_file(path)?,
            None => FeaturesConfig::default(),
        };

        if let Some(num_rows) = self.num_rows {
            config.num_rows = num_rows;
        }
        if let Some(library) = &self.library {
            config.library = library.parse::<Library>()?;
        }
        if !self.columns.is_empty() {
            let kinds = self
                .columns
                .iter()
                .map(|name| name.trim().parse::<ColumnKind>())
                .collect::<Result<Vec<_>, _>>()?;
            config.flags = FeatureFlags::only(&kinds);
        }
        if self.all_dtypes {
            config.all_dtypes = true;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Serialization format on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    #[default]
    Csv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Where and how to write the output.
#[derive(Args, Clone, Debug, Default)]
pub struct OutputOpts {
    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Output file (default: stdout)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}
