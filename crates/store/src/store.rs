//! File-backed form state persistence
//!
//! [`FormStore`] reads and writes a single JSON object at a configured path. The store is
//! built with a default [`FormState`]; the default's key set is the declared schema.
//!
//! # Load semantics
//!
//! - File absent → defaults
//! - File unreadable or not a JSON object → defaults (logged at `warn`)
//! - Key not declared in the defaults → ignored
//! - Declared key whose value cannot be coerced to the default's kind → default kept
//!
//! # Save semantics
//!
//! The whole state is written to a sibling temporary file which then replaces the state file,
//! so a crash mid-write never leaves a truncated state file behind.

use crate::{FieldValue, FormState, StoreError, StoreResult};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Service for persisting a wizard session's [`FormState`].
#[derive(Debug, Clone)]
pub struct FormStore {
    /// Location of the persisted state file
    path: PathBuf,

    /// State returned when nothing usable is persisted
    defaults: FormState,
}

impl FormStore {
    pub fn new(path: impl Into<PathBuf>, defaults: FormState) -> Self {
        Self {
            path: path.into(),
            defaults,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn defaults(&self) -> &FormState {
        &self.defaults
    }

    /// Loads the persisted state, overlaid on the defaults.
    ///
    /// Never fails; see the module docs for the fallback rules.
    pub fn load(&self) -> FormState {
        let mut state = self.defaults.clone();

        if !self.path.exists() {
            tracing::debug!("no saved form state at {}", self.path.display());
            return state;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("failed to read {}: {}", self.path.display(), e);
                return state;
            }
        };

        let object = match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(object)) => object,
            Ok(_) => {
                tracing::warn!("{} is not a JSON object; using defaults", self.path.display());
                return state;
            }
            Err(e) => {
                tracing::warn!("failed to parse {}: {}", self.path.display(), e);
                return state;
            }
        };

        for (key, raw) in object {
            let Some(default) = self.defaults.get(&key) else {
                tracing::debug!("ignoring unknown saved field '{}'", key);
                continue;
            };

            let Some(value) = json_to_field(&raw) else {
                tracing::warn!("ignoring saved field '{}' with unsupported value {}", key, raw);
                continue;
            };

            match value.coerce(default.kind()) {
                Some(value) => state.set(key, value),
                None => tracing::warn!("saved field '{}' has the wrong type; keeping default", key),
            }
        }

        state
    }

    /// Overwrites the persisted state with `state`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be created, or the file cannot be written.
    pub fn save(&self, state: &FormState) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(state)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::info!("saved form state to {}", self.path.display());
        Ok(())
    }

    /// Deletes the persisted state so the next load returns the defaults.
    pub fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn json_to_field(value: &Value) -> Option<FieldValue> {
    match value {
        Value::String(s) => Some(FieldValue::Text(s.clone())),
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => FieldValue::Text(n.to_string()),
        }),
        Value::Bool(b) => Some(FieldValue::Text(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn defaults() -> FormState {
        let mut state = FormState::new();
        state.set_text("oos_id", "OOS-250000");
        state.set_text("client_name", "Pharmacy Name");
        state.set_text("sample_id", "");
        state.set_integer("prior_failure_count", 0);
        state
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let store = FormStore::new(temp.path().join("history.json"), defaults());
        assert_eq!(store.load(), defaults());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = FormStore::new(temp.path().join("history.json"), defaults());

        let mut state = defaults();
        state.set_text("sample_id", "E12345");
        state.set_integer("prior_failure_count", 2);
        store.save(&state).unwrap();

        assert_eq!(store.load(), state);
        assert!(!temp.path().join("history.json.tmp").exists());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("state").join("history.json");
        let store = FormStore::new(&path, defaults());
        store.save(&defaults()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn load_ignores_unknown_keys_and_keeps_missing_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.json");
        fs::write(&path, r#"{"sample_id": "E999", "scan_id_legacy": "E001"}"#).unwrap();

        let store = FormStore::new(&path, defaults());
        let state = store.load();

        assert_eq!(state.text("sample_id"), "E999");
        assert_eq!(state.text("oos_id"), "OOS-250000");
        assert!(!state.contains_key("scan_id_legacy"));
    }

    #[test]
    fn load_coerces_values_to_declared_kind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.json");
        fs::write(&path, r#"{"prior_failure_count": "4", "sample_id": 1234}"#).unwrap();

        let state = FormStore::new(&path, defaults()).load();
        assert_eq!(state.get("prior_failure_count"), Some(&FieldValue::Integer(4)));
        assert_eq!(state.text("sample_id"), "1234");
    }

    #[test]
    fn load_keeps_default_for_uncoercible_value() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.json");
        fs::write(&path, r#"{"prior_failure_count": "several", "oos_id": null}"#).unwrap();

        let state = FormStore::new(&path, defaults()).load();
        assert_eq!(state.integer("prior_failure_count"), 0);
        assert_eq!(state.text("oos_id"), "OOS-250000");
    }

    #[test]
    fn load_of_corrupt_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.json");

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(FormStore::new(&path, defaults()).load(), defaults());

        fs::write(&path, "[1, 2, 3]").unwrap();
        assert_eq!(FormStore::new(&path, defaults()).load(), defaults());
    }

    #[test]
    fn save_into_unwritable_location_reports_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"file, not a directory").unwrap();

        let store = FormStore::new(blocker.join("history.json"), defaults());
        assert!(store.save(&defaults()).is_err());
    }

    #[test]
    fn clear_removes_saved_state() {
        let temp = TempDir::new().unwrap();
        let store = FormStore::new(temp.path().join("history.json"), defaults());

        store.clear().unwrap();

        let mut state = defaults();
        state.set_text("sample_id", "E1");
        store.save(&state).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), defaults());
    }

    proptest! {
        #[test]
        fn round_trip_for_declared_keys(
            oos_id in ".*",
            sample_id in "[A-Za-z0-9 ,&()-]{0,24}",
            count in any::<i64>(),
        ) {
            let temp = TempDir::new().unwrap();
            let store = FormStore::new(temp.path().join("history.json"), defaults());

            let mut state = defaults();
            state.set_text("oos_id", oos_id);
            state.set_text("sample_id", sample_id);
            state.set_integer("prior_failure_count", count);
            store.save(&state).unwrap();

            prop_assert_eq!(store.load(), state);
        }
    }
}
