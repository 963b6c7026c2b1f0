//! Test-date bracketing: the days either side of a test date.

use crate::config::DateBracketRule;
use chrono::Weekday;
use oos_types::TestDate;

/// The day before and the day after a test date, in `DDMonYY` form.
///
/// Both fields are empty when the test date could not be parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateBracket {
    pub before: String,
    pub after: String,
}

/// Computes the bracketing dates for `test_date` under `rule`.
pub fn bracket(test_date: TestDate, rule: DateBracketRule) -> Option<(TestDate, TestDate)> {
    let (back, forward) = match (rule, test_date.weekday()) {
        (DateBracketRule::BusinessDays, Weekday::Mon) => (3, 1),
        (DateBracketRule::BusinessDays, Weekday::Fri) => (1, 3),
        _ => (1, 1),
    };
    Some((test_date.minus_days(back)?, test_date.plus_days(forward)?))
}

/// Parses a `DDMonYY` test date and brackets it.
///
/// An unparseable date yields empty strings rather than an error.
pub fn bracket_test_date(test_date: &str, rule: DateBracketRule) -> DateBracket {
    let parsed = match TestDate::parse(test_date) {
        Ok(date) => date,
        Err(e) => {
            if !test_date.trim().is_empty() {
                tracing::warn!("cannot bracket test date: {}", e);
            }
            return DateBracket::default();
        }
    };

    match bracket(parsed, rule) {
        Some((before, after)) => DateBracket {
            before: before.to_string(),
            after: after.to_string(),
        },
        None => DateBracket::default(),
    }
}
