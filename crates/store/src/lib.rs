//! OOS Wizard Form State Store
//!
//! This crate owns the wizard's working session: a flat mapping of field name to value that is
//! persisted to a single JSON file between sessions.
//!
//! ## Design Principles
//!
//! - The set of declared field keys is the key set of the *defaults* the store is built with
//! - Loading never fails: a missing or unreadable file yields the defaults
//! - Unknown keys in the file are ignored, missing keys keep their default
//! - Saving overwrites the whole file; a failed save is reported, never fatal
//! - One session per state file; concurrent writers are not coordinated
//!
//! ## Example Usage
//!
//! ```no_run
//! use oos_store::{FormState, FormStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut defaults = FormState::new();
//! defaults.set_text("oos_id", "OOS-250000");
//!
//! let store = FormStore::new("oos_wizard_history.json", defaults);
//! let mut state = store.load();
//! state.set_text("oos_id", "OOS-250117");
//! store.save(&state)?;
//! # Ok(())
//! # }
//! ```

mod form_state;
mod store;

pub use form_state::{FieldKind, FieldValue, FormState};
pub use store::FormStore;

/// Errors that can occur while persisting form state
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Parent directory of the state file could not be created
    #[error("failed to create state directory {path}: {source}")]
    DirectoryCreation {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State could not be serialised
    #[error("failed to serialise form state: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results that can fail with a [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;
