//! The fixed catalog of mock columns and its generator.
//!
//! Every call builds the full catalog for the requested row count; selection
//! happens afterwards. Because columns are generated in canonical order from
//! the same RNG, a seeded run yields the same values for a column no matter
//! which other columns are selected.

use crate::generators::choice::{bool_choices, float_choices, int_choices, text_choices};
use crate::generators::{generate_column, GenerationRule};
use crate::selection::Selection;
use chrono::NaiveDate;
use mock_core::{Column, ColumnKind, MockValue};
use rand::Rng;
use tracing::debug;

/// Labels sampled by the `categoricals` column.
pub const CATEGORIES: [&str; 4] = ["First", "Second", "Third", "Fourth"];

/// Template for the `texts` column.
pub const TEXT_PATTERN: &str = "Sample text for row {index}.";

/// Lower bound (inclusive) of random integer and float columns.
pub const RANDOM_MIN: i64 = -5;

/// Upper bound (exclusive) of random integer and float columns.
pub const RANDOM_MAX: i64 = 5;

/// First day of the `dates` column.
pub fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2001, 1, 1).unwrap_or_default()
}

/// Start of the `ints` / `floats` sequence for a row count.
///
/// The sequence `start..start + num_rows` is centered on zero:
/// 5 rows give `-2..=2`, 4 rows give `-2..=1`.
pub fn sequence_start(num_rows: usize) -> i64 {
    -((num_rows / 2) as i64)
}

/// Generation rule of a column kind for a given row count.
pub fn rule_for(kind: ColumnKind, num_rows: usize) -> GenerationRule {
    match kind {
        ColumnKind::Ints => GenerationRule::Sequential {
            start: sequence_start(num_rows),
            float: false,
        },
        ColumnKind::RandInts => GenerationRule::IntRange {
            min: RANDOM_MIN,
            max: RANDOM_MAX,
        },
        ColumnKind::Floats => GenerationRule::Sequential {
            start: sequence_start(num_rows),
            float: true,
        },
        ColumnKind::RandFloats => GenerationRule::FloatRange {
            min: RANDOM_MIN as f64,
            max: RANDOM_MAX as f64,
        },
        ColumnKind::Booleans => GenerationRule::OneOf {
            values: bool_choices(false),
        },
        ColumnKind::Categoricals => GenerationRule::OneOf {
            values: text_choices(&CATEGORIES),
        },
        ColumnKind::Dates => GenerationRule::DateSequence {
            start: epoch_date(),
        },
        ColumnKind::Texts => GenerationRule::Pattern {
            pattern: TEXT_PATTERN.to_string(),
        },
        ColumnKind::IntsNullable => GenerationRule::OneOf {
            values: int_choices(RANDOM_MIN, RANDOM_MAX, true),
        },
        ColumnKind::FloatsNullable => GenerationRule::OneOf {
            values: float_choices(RANDOM_MIN, RANDOM_MAX, true),
        },
        ColumnKind::BooleansNullable => GenerationRule::OneOf {
            values: bool_choices(true),
        },
    }
}

/// Generated values for every catalog column at one row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    num_rows: usize,
    entries: Vec<(ColumnKind, Vec<MockValue>)>,
}

impl Catalog {
    /// Generate the full catalog, column by column in canonical order.
    pub fn generate<R: Rng + ?Sized>(num_rows: usize, rng: &mut R) -> Self {
        let entries = ColumnKind::ALL
            .iter()
            .map(|kind| {
                let rule = rule_for(*kind, num_rows);
                (*kind, generate_column(&rule, rng, num_rows))
            })
            .collect();

        debug!("Generated catalog of {} columns x {} rows", ColumnKind::ALL.len(), num_rows);

        Self { num_rows, entries }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Values of a catalog column.
    pub fn get(&self, kind: ColumnKind) -> Option<&[MockValue]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, v)| v.as_slice())
    }

    /// Column kinds in catalog order.
    pub fn kinds(&self) -> impl Iterator<Item = ColumnKind> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Keep only the selected columns, in catalog order.
    pub fn into_columns(self, selection: &Selection) -> Vec<Column> {
        self.entries
            .into_iter()
            .filter(|(kind, _)| selection.contains(*kind))
            .map(|(kind, values)| Column::from_values(kind, values))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sequence_start() {
        assert_eq!(sequence_start(0), 0);
        assert_eq!(sequence_start(1), 0);
        assert_eq!(sequence_start(4), -2);
        assert_eq!(sequence_start(5), -2);
        assert_eq!(sequence_start(100), -50);
    }

    #[test]
    fn test_catalog_has_every_kind_in_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = Catalog::generate(8, &mut rng);

        assert_eq!(catalog.kinds().collect::<Vec<_>>(), ColumnKind::ALL.to_vec());
        for kind in ColumnKind::ALL {
            assert_eq!(catalog.get(kind).map(|v| v.len()), Some(8), "{kind}");
        }
    }

    #[test]
    fn test_deterministic_columns() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = Catalog::generate(4, &mut rng);

        let ints: Vec<_> = catalog
            .get(ColumnKind::Ints)
            .unwrap()
            .iter()
            .filter_map(MockValue::as_i64)
            .collect();
        assert_eq!(ints, vec![-2, -1, 0, 1]);

        let floats: Vec<_> = catalog
            .get(ColumnKind::Floats)
            .unwrap()
            .iter()
            .filter_map(MockValue::as_f64)
            .collect();
        assert_eq!(floats, vec![-2.0, -1.0, 0.0, 1.0]);

        let texts = catalog.get(ColumnKind::Texts).unwrap();
        assert_eq!(texts[3], MockValue::Text("Sample text for row 3.".to_string()));

        let dates = catalog.get(ColumnKind::Dates).unwrap();
        assert_eq!(dates[0], MockValue::Date(epoch_date()));
        assert_eq!(
            dates[3],
            MockValue::Date(NaiveDate::from_ymd_opt(2001, 1, 4).unwrap())
        );
    }

    #[test]
    fn test_random_columns_stay_in_support() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = Catalog::generate(500, &mut rng);

        for value in catalog.get(ColumnKind::RandInts).unwrap() {
            let v = value.as_i64().unwrap();
            assert!((-5..5).contains(&v));
        }
        for value in catalog.get(ColumnKind::RandFloats).unwrap() {
            let v = value.as_f64().unwrap();
            assert!((-5.0..5.0).contains(&v));
        }
        for value in catalog.get(ColumnKind::Categoricals).unwrap() {
            assert!(CATEGORIES.contains(&value.as_str().unwrap()));
        }
        for value in catalog.get(ColumnKind::FloatsNullable).unwrap() {
            match value {
                MockValue::Null => {}
                MockValue::Float64(f) => {
                    assert_eq!(f.fract(), 0.0);
                    assert!((-5.0..5.0).contains(f));
                }
                other => panic!("unexpected value {other:?}"),
            }
        }
        let nulls = catalog
            .get(ColumnKind::IntsNullable)
            .unwrap()
            .iter()
            .filter(|v| v.is_null())
            .count();
        assert!(nulls > 0 && nulls < 500);
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = Catalog::generate(20, &mut StdRng::seed_from_u64(9));
        let b = Catalog::generate(20, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_columns_keeps_catalog_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog = Catalog::generate(3, &mut rng);
        let selection = Selection::from_kinds([ColumnKind::Texts, ColumnKind::Ints]);

        let names: Vec<_> = catalog
            .into_columns(&selection)
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["ints", "texts"]);
    }
}
