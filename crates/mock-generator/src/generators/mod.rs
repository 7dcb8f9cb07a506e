//! Individual value generators for the catalog's generation rules.
//!
//! This module provides the generation logic for each [`GenerationRule`].
//! Every generator takes the RNG explicitly and the row index, so a column
//! is a pure function of the rule, the RNG state and the row count.

pub mod choice;
pub mod dates;
pub mod numeric;
pub mod pattern;

use chrono::NaiveDate;
use mock_core::MockValue;
use rand::Rng;

/// Rule used to produce the values of one catalog column.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRule {
    /// `start + index`, optionally cast to float
    Sequential { start: i64, float: bool },

    /// Uniform integer in `min..max` (exclusive upper bound)
    IntRange { min: i64, max: i64 },

    /// Uniform float in `min..max` (exclusive upper bound)
    FloatRange { min: f64, max: f64 },

    /// Uniform pick from a fixed set of values, which may include `Null`
    OneOf { values: Vec<MockValue> },

    /// Consecutive days from `start`
    DateSequence { start: NaiveDate },

    /// Text template with an `{index}` placeholder, see [`pattern`]
    Pattern { pattern: String },
}

/// Generate the value for row `index` according to `rule`.
pub fn generate_value<R: Rng + ?Sized>(rule: &GenerationRule, rng: &mut R, index: u64) -> MockValue {
    match rule {
        GenerationRule::Sequential { start, float } => {
            numeric::generate_sequential(*start, index, *float)
        }

        GenerationRule::IntRange { min, max } => numeric::generate_int_range(rng, *min, *max),

        GenerationRule::FloatRange { min, max } => numeric::generate_float_range(rng, *min, *max),

        GenerationRule::OneOf { values } => choice::generate_one_of(rng, values),

        GenerationRule::DateSequence { start } => dates::generate_date_sequence(*start, index),

        GenerationRule::Pattern { pattern } => pattern::generate_pattern(pattern, index),
    }
}

/// Generate a full column of `num_rows` values.
pub fn generate_column<R: Rng + ?Sized>(
    rule: &GenerationRule,
    rng: &mut R,
    num_rows: usize,
) -> Vec<MockValue> {
    (0..num_rows as u64)
        .map(|index| generate_value(rule, rng, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_column_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let rule = GenerationRule::IntRange { min: 0, max: 3 };
        assert_eq!(generate_column(&rule, &mut rng, 17).len(), 17);
        assert!(generate_column(&rule, &mut rng, 0).is_empty());
    }

    #[test]
    fn test_sequential_column() {
        let mut rng = StdRng::seed_from_u64(42);
        let rule = GenerationRule::Sequential {
            start: -2,
            float: false,
        };
        let values = generate_column(&rule, &mut rng, 4);
        assert_eq!(
            values,
            vec![
                MockValue::Int64(-2),
                MockValue::Int64(-1),
                MockValue::Int64(0),
                MockValue::Int64(1)
            ]
        );
    }
}
