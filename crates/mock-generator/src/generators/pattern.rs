//! Templated text generator.
//!
//! `{index}` in the pattern is replaced with the row index.

use mock_core::MockValue;

/// Fill the `{index}` placeholders of a pattern.
pub fn generate_pattern(pattern: &str, index: u64) -> MockValue {
    MockValue::Text(pattern.replace("{index}", &index.to_string()))
}
