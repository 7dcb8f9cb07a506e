//! Numeric value generators.

use mock_core::MockValue;
use rand::Rng;

/// Generate `start + index`, as a float when `float` is set.
pub fn generate_sequential(start: i64, index: u64, float: bool) -> MockValue {
    let value = start + index as i64;
    if float {
        MockValue::Float64(value as f64)
    } else {
        MockValue::Int64(value)
    }
}

/// Generate a random integer in `min..max`.
///
/// Returns `min` when the range is empty.
pub fn generate_int_range<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> MockValue {
    if min >= max {
        return MockValue::Int64(min);
    }
    MockValue::Int64(rng.random_range(min..max))
}

/// Generate a random float in `min..max`.
///
/// Returns `min` when the range is empty.
pub fn generate_float_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> MockValue {
    if min >= max {
        return MockValue::Float64(min);
    }
    MockValue::Float64(rng.random_range(min..max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_sequential() {
        assert_eq!(generate_sequential(-3, 0, false), MockValue::Int64(-3));
        assert_eq!(generate_sequential(-3, 5, false), MockValue::Int64(2));
        assert_eq!(generate_sequential(-3, 5, true), MockValue::Float64(2.0));
    }

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 10];

        for _ in 0..1000 {
            if let MockValue::Int64(v) = generate_int_range(&mut rng, -5, 5) {
                assert!((-5..5).contains(&v));
                seen[(v + 5) as usize] = true;
            } else {
                panic!("Expected Int64 value");
            }
        }

        // 1000 uniform draws over 10 values cover the whole range
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_generate_float_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            if let MockValue::Float64(v) = generate_float_range(&mut rng, -5.0, 5.0) {
                assert!((-5.0..5.0).contains(&v));
            } else {
                panic!("Expected Float64 value");
            }
        }
    }

    #[test]
    fn test_empty_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_int_range(&mut rng, 3, 3), MockValue::Int64(3));
        assert_eq!(generate_float_range(&mut rng, 1.5, 0.0), MockValue::Float64(1.5));
    }
}
