//! Column flags and the selection policy.
//!
//! [`FeatureFlags`] holds one switch per catalog column. [`Selection::normalize`]
//! turns flags plus the `all_dtypes` override into the set of columns to
//! materialize:
//!
//! 1. `all_dtypes` selects every column.
//! 2. Otherwise the columns whose flag is set are selected.
//! 3. If no flag is set, every column is selected.

use mock_core::{ColumnKind, MockError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// One boolean per catalog column.
///
/// The default selects `ints`, `rand_ints`, `floats` and `rand_floats`.
///
/// When deserialized from a mapping, absent columns are `false` and unknown
/// names are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, bool>")]
pub struct FeatureFlags {
    pub ints: bool,
    pub rand_ints: bool,
    pub floats: bool,
    pub rand_floats: bool,
    pub booleans: bool,
    pub categoricals: bool,
    pub dates: bool,
    pub texts: bool,
    pub ints_nullable: bool,
    pub floats_nullable: bool,
    pub booleans_nullable: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            ints: true,
            rand_ints: true,
            floats: true,
            rand_floats: true,
            ..Self::none()
        }
    }
}

impl FeatureFlags {
    /// Flags with every column off.
    pub fn none() -> Self {
        Self {
            ints: false,
            rand_ints: false,
            floats: false,
            rand_floats: false,
            booleans: false,
            categoricals: false,
            dates: false,
            texts: false,
            ints_nullable: false,
            floats_nullable: false,
            booleans_nullable: false,
        }
    }

    /// Flags with only the given columns on.
    pub fn only(kinds: &[ColumnKind]) -> Self {
        let mut flags = Self::none();
        for kind in kinds {
            flags.set(*kind, true);
        }
        flags
    }

    /// Build flags from a column name to bool mapping.
    ///
    /// Columns missing from the mapping are off.
    pub fn from_map(map: &HashMap<String, bool>) -> Result<Self, MockError> {
        let mut flags = Self::none();
        for (name, enabled) in map {
            let kind: ColumnKind = name.parse()?;
            flags.set(kind, *enabled);
        }
        Ok(flags)
    }

    pub fn get(&self, kind: ColumnKind) -> bool {
        match kind {
            ColumnKind::Ints => self.ints,
            ColumnKind::RandInts => self.rand_ints,
            ColumnKind::Floats => self.floats,
            ColumnKind::RandFloats => self.rand_floats,
            ColumnKind::Booleans => self.booleans,
            ColumnKind::Categoricals => self.categoricals,
            ColumnKind::Dates => self.dates,
            ColumnKind::Texts => self.texts,
            ColumnKind::IntsNullable => self.ints_nullable,
            ColumnKind::FloatsNullable => self.floats_nullable,
            ColumnKind::BooleansNullable => self.booleans_nullable,
        }
    }

    pub fn set(&mut self, kind: ColumnKind, enabled: bool) {
        let flag = match kind {
            ColumnKind::Ints => &mut self.ints,
            ColumnKind::RandInts => &mut self.rand_ints,
            ColumnKind::Floats => &mut self.floats,
            ColumnKind::RandFloats => &mut self.rand_floats,
            ColumnKind::Booleans => &mut self.booleans,
            ColumnKind::Categoricals => &mut self.categoricals,
            ColumnKind::Dates => &mut self.dates,
            ColumnKind::Texts => &mut self.texts,
            ColumnKind::IntsNullable => &mut self.ints_nullable,
            ColumnKind::FloatsNullable => &mut self.floats_nullable,
            ColumnKind::BooleansNullable => &mut self.booleans_nullable,
        };
        *flag = enabled;
    }

    /// Columns whose flag is on, in catalog order.
    pub fn enabled(&self) -> impl Iterator<Item = ColumnKind> + '_ {
        ColumnKind::ALL.into_iter().filter(|kind| self.get(*kind))
    }
}

impl TryFrom<HashMap<String, bool>> for FeatureFlags {
    type Error = MockError;

    fn try_from(map: HashMap<String, bool>) -> Result<Self, Self::Error> {
        Self::from_map(&map)
    }
}

/// Non-empty set of columns to materialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    kinds: BTreeSet<ColumnKind>,
}

impl Selection {
    /// Apply the selection policy to flags and the `all_dtypes` override.
    pub fn normalize(flags: &FeatureFlags, all_dtypes: bool) -> Self {
        if all_dtypes {
            debug!("all_dtypes set, selecting every column");
            return Self::full();
        }

        let selection = Self::from_kinds(flags.enabled());
        if selection.kinds.is_empty() {
            warn!("No column flags set, falling back to every column");
            return Self::full();
        }

        debug!("Selected columns: {:?}", selection.names());
        selection
    }

    /// Every catalog column.
    pub fn full() -> Self {
        Self::from_kinds(ColumnKind::ALL)
    }

    pub(crate) fn from_kinds(kinds: impl IntoIterator<Item = ColumnKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn contains(&self, kind: ColumnKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Selected columns in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = ColumnKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Selected column names in catalog order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Whether every catalog column is selected.
    pub fn is_full(&self) -> bool {
        self.kinds.len() == ColumnKind::ALL.len()
    }
}
