//! Uniform selection from a fixed set of values.

use mock_core::MockValue;
use rand::Rng;

/// Pick one of `values` uniformly. An empty set yields `Null`.
pub fn generate_one_of<R: Rng + ?Sized>(rng: &mut R, values: &[MockValue]) -> MockValue {
    if values.is_empty() {
        return MockValue::Null;
    }
    let idx = rng.random_range(0..values.len());
    values[idx].clone()
}

/// Integers `min..max` as values, with a trailing `Null` when `nullable`.
pub fn int_choices(min: i64, max: i64, nullable: bool) -> Vec<MockValue> {
    let mut values: Vec<MockValue> = (min..max).map(MockValue::Int64).collect();
    if nullable {
        values.push(MockValue::Null);
    }
    values
}

/// Whole floats `min..max` as values, with a trailing `Null` when `nullable`.
pub fn float_choices(min: i64, max: i64, nullable: bool) -> Vec<MockValue> {
    let mut values: Vec<MockValue> = (min..max).map(|i| MockValue::Float64(i as f64)).collect();
    if nullable {
        values.push(MockValue::Null);
    }
    values
}

/// `true` and `false`, with a trailing `Null` when `nullable`.
pub fn bool_choices(nullable: bool) -> Vec<MockValue> {
    let mut values = vec![MockValue::Bool(true), MockValue::Bool(false)];
    if nullable {
        values.push(MockValue::Null);
    }
    values
}

/// Text labels as values.
pub fn text_choices(labels: &[&str]) -> Vec<MockValue> {
    labels
        .iter()
        .map(|label| MockValue::Text(label.to_string()))
        .collect()
}
