//! The flat field-name to value mapping behind every wizard session.

use serde::Serialize;
use std::collections::BTreeMap;

/// The two shapes a form field can take on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

/// A single form value.
///
/// Choice fields (such as the platform) are stored as their text label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Text(_) => FieldKind::Text,
        }
    }

    /// Converts this value to `kind`, or `None` if the text is not an integer.
    pub fn coerce(&self, kind: FieldKind) -> Option<FieldValue> {
        match (self, kind) {
            (FieldValue::Text(_), FieldKind::Text)
            | (FieldValue::Integer(_), FieldKind::Integer) => Some(self.clone()),
            (FieldValue::Integer(n), FieldKind::Text) => Some(FieldValue::Text(n.to_string())),
            (FieldValue::Text(s), FieldKind::Integer) => {
                s.trim().parse::<i64>().ok().map(FieldValue::Integer)
            }
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Working state of one wizard session, keyed by field name.
///
/// Insertion order is irrelevant; iteration is in key order so saved files diff cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    fields: BTreeMap<String, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the text of `key`, or `""` when the field is absent.
    ///
    /// Integer fields are not rendered here; use [`FormState::integer`] or the
    /// [`FieldValue`] `Display` impl.
    pub fn text(&self, key: &str) -> &str {
        match self.fields.get(key) {
            Some(FieldValue::Text(s)) => s.as_str(),
            _ => "",
        }
    }

    /// Returns the integer value of `key`.
    ///
    /// Text values are parsed after trimming. Absent or unparseable fields read as `0`.
    pub fn integer(&self, key: &str) -> i64 {
        match self.fields.get(key) {
            Some(FieldValue::Integer(n)) => *n,
            Some(FieldValue::Text(s)) => s.trim().parse().unwrap_or(0),
            None => 0,
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, FieldValue::Text(value.into()));
    }

    pub fn set_integer(&mut self, key: impl Into<String>, value: i64) {
        self.set(key, FieldValue::Integer(value));
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_of_missing_field_is_empty() {
        let state = FormState::new();
        assert_eq!(state.text("sample_id"), "");
        assert_eq!(state.integer("prior_failure_count"), 0);
    }

    #[test]
    fn integer_reads_numeric_text() {
        let mut state = FormState::new();
        state.set_text("prior_failure_count", " 3 ");
        assert_eq!(state.integer("prior_failure_count"), 3);
        state.set_text("prior_failure_count", "three");
        assert_eq!(state.integer("prior_failure_count"), 0);
    }

    #[test]
    fn coerce_between_kinds() {
        assert_eq!(
            FieldValue::Integer(2).coerce(FieldKind::Text),
            Some(FieldValue::Text("2".into()))
        );
        assert_eq!(
            FieldValue::Text("7".into()).coerce(FieldKind::Integer),
            Some(FieldValue::Integer(7))
        );
        assert_eq!(FieldValue::Text("x".into()).coerce(FieldKind::Integer), None);
    }

    #[test]
    fn serialises_as_flat_object() {
        let mut state = FormState::new();
        state.set_text("oos_id", "OOS-250000");
        state.set_integer("prior_failure_count", 2);
        let json = serde_json::to_string(&state).expect("serialise");
        assert_eq!(json, r#"{"oos_id":"OOS-250000","prior_failure_count":2}"#);
    }
}
