//! Validated primitive types shared across the OOS wizard crates.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Format used for every date the wizard reads or writes (for example `15Jun25`).
pub const TEST_DATE_FORMAT: &str = "%d%b%y";

/// Errors that can occur when creating validated types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,

    /// The input was not a `DDMonYY` date
    #[error("Invalid date '{0}' (expected DDMonYY, e.g. 15Jun25)")]
    InvalidDate(String),
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// Returns `Err(TextError::Empty)` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A laboratory test date written in the `DDMonYY` form used on worksheets.
///
/// Month names are matched case-insensitively on input and always written back in title case,
/// so `15jun25` parses and displays as `15Jun25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TestDate(NaiveDate);

impl TestDate {
    /// Parses a `DDMonYY` date.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        NaiveDate::parse_from_str(trimmed, TEST_DATE_FORMAT)
            .map(Self)
            .map_err(|_| TextError::InvalidDate(trimmed.to_owned()))
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the date `days` calendar days earlier, or `None` on calendar underflow.
    pub fn minus_days(&self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }

    /// Returns the date `days` calendar days later, or `None` on calendar overflow.
    pub fn plus_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }
}

impl std::fmt::Display for TestDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TEST_DATE_FORMAT))
    }
}

impl std::str::FromStr for TestDate {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
