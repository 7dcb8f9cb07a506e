//! Date value generators.

use chrono::{Days, NaiveDate};
use mock_core::MockValue;

/// Generate the date `index` days after `start`.
///
/// Dates past the end of the calendar yield `Null`.
pub fn generate_date_sequence(start: NaiveDate, index: u64) -> MockValue {
    start
        .checked_add_days(Days::new(index))
        .map(MockValue::Date)
        .unwrap_or(MockValue::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_step() {
        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let start = day(2001, 1, 1);
        assert_eq!(generate_date_sequence(start, 0), MockValue::Date(start));
        assert_eq!(
            generate_date_sequence(start, 31),
            MockValue::Date(day(2001, 2, 1))
        );
        assert_eq!(
            generate_date_sequence(start, 365),
            MockValue::Date(day(2002, 1, 1))
        );
    }

    #[test]
    fn test_overflow_is_null() {
        assert_eq!(
            generate_date_sequence(NaiveDate::MAX, 1),
            MockValue::Null
        );
    }
}
