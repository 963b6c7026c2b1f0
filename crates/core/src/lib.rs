//! # OOS Core
//!
//! Core logic for the OOS/sterility investigation wizard.
//!
//! This crate turns a wizard session into report text:
//! - Facility lookup (equipment id to suite, room and zone) and the personnel directory
//! - Grammar helpers and test-date bracketing
//! - The narrative assembler (equipment, EM, sample history, cross-contamination)
//! - Flattening a session into the placeholder map consumed by a template renderer
//! - [`ReportService`]: session persistence, preview and document generation
//!
//! **No UI concerns**: prompting and command handling belong in the `oos-wizard` and
//! `oos-cli` binaries.

pub mod components;
pub mod config;
pub mod constants;
pub mod context;
pub mod dates;
pub mod error;
pub mod facility;
pub mod form;
pub mod grammar;
pub mod narrative;
pub mod personnel;
pub mod report;
pub mod validation;

pub use config::{CoreConfig, CountStyle, DateBracketRule};
pub use context::{build_render_context, output_file_name};
pub use error::{OosError, OosResult};
pub use form::InvestigationForm;
pub use report::{GenerateOutcome, ReportService};

pub use oos_types::{NonEmptyText, TestDate, TextError};
