//! Error types shared by the mockframe crates.

/// Error type for mock data operations.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    /// Row count was negative
    #[error("Invalid row count: {0} (must be >= 0)")]
    InvalidRowCount(i64),

    /// Output library mode not recognized
    #[error("Unsupported library mode: '{0}' (expected one of: pandas, numpy)")]
    UnsupportedLibrary(String),

    /// Column name is not part of the catalog
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// Column does not hold one value per table row
    #[error("Column '{column}' has {len} rows, expected {expected}")]
    ColumnLength {
        column: String,
        len: usize,
        expected: usize,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error reading a config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}
