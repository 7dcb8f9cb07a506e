//! Column kinds, output library modes and semantic types.
//!
//! `ColumnKind` is the closed catalog of mock columns. Its declaration order
//! is the canonical column order of every generated table.

use crate::error::MockError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eleven generatable mock columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Monotonically increasing integers centered on zero
    Ints,
    /// Uniform random integers in `-5..5`
    RandInts,
    /// Float cast of `Ints`
    Floats,
    /// Uniform random floats in `[-5.0, 5.0)`
    RandFloats,
    /// Uniform random booleans
    Booleans,
    /// Uniform random labels from a fixed set of four
    Categoricals,
    /// Consecutive calendar days from the epoch date
    Dates,
    /// Distinct text per row
    Texts,
    /// Random integers in `-5..5` mixed with nulls
    IntsNullable,
    /// Random whole floats in `-5.0..5.0` mixed with nulls
    FloatsNullable,
    /// Random booleans mixed with nulls
    BooleansNullable,
}

impl ColumnKind {
    /// All column kinds in canonical catalog order.
    pub const ALL: [ColumnKind; 11] = [
        ColumnKind::Ints,
        ColumnKind::RandInts,
        ColumnKind::Floats,
        ColumnKind::RandFloats,
        ColumnKind::Booleans,
        ColumnKind::Categoricals,
        ColumnKind::Dates,
        ColumnKind::Texts,
        ColumnKind::IntsNullable,
        ColumnKind::FloatsNullable,
        ColumnKind::BooleansNullable,
    ];

    /// Catalog key of this column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Ints => "ints",
            ColumnKind::RandInts => "rand_ints",
            ColumnKind::Floats => "floats",
            ColumnKind::RandFloats => "rand_floats",
            ColumnKind::Booleans => "booleans",
            ColumnKind::Categoricals => "categoricals",
            ColumnKind::Dates => "dates",
            ColumnKind::Texts => "texts",
            ColumnKind::IntsNullable => "ints_nullable",
            ColumnKind::FloatsNullable => "floats_nullable",
            ColumnKind::BooleansNullable => "booleans_nullable",
        }
    }

    /// Position of this column in the canonical order.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// Whether this column may contain nulls.
    pub fn is_nullable(&self) -> bool {
        matches!(
            self,
            ColumnKind::IntsNullable | ColumnKind::FloatsNullable | ColumnKind::BooleansNullable
        )
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKind {
    type Err = MockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MockError::UnknownColumn(s.to_string()))
    }
}

/// Output representation of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Library {
    /// Labeled columnar table with nullable typing (pandas-like)
    #[default]
    Pandas,
    /// Unlabeled 2D grid of values (numpy-like)
    Numpy,
}

impl Library {
    /// Canonical name of this library mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Library::Pandas => "pandas",
            Library::Numpy => "numpy",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Library {
    type Err = MockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pd" | "pandas" | "df" | "dataframe" | "series" => Ok(Library::Pandas),
            "np" | "numpy" | "array" | "ndarray" => Ok(Library::Numpy),
            _ => Err(MockError::UnsupportedLibrary(s.to_string())),
        }
    }
}

impl TryFrom<String> for Library {
    type Error = MockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Library> for String {
    fn from(library: Library) -> Self {
        library.as_str().to_string()
    }
}

/// Logical type attached to a structured table column by inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemanticType {
    Integer,
    IntegerNullable,
    Double,
    Boolean,
    BooleanNullable,
    Categorical,
    Datetime,
    NaturalLanguage,
    Unknown,
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticType::Integer => "Integer",
            SemanticType::IntegerNullable => "IntegerNullable",
            SemanticType::Double => "Double",
            SemanticType::Boolean => "Boolean",
            SemanticType::BooleanNullable => "BooleanNullable",
            SemanticType::Categorical => "Categorical",
            SemanticType::Datetime => "Datetime",
            SemanticType::NaturalLanguage => "NaturalLanguage",
            SemanticType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}
