//! Typed groups of an investigation form.
//!
//! The wizard works on a flat [`oos_store::FormState`]; these groups are the structured view of
//! that state the narratives are built from. They are flattened back to placeholder names only
//! at the template boundary.

pub mod equipment;
pub mod general;
pub mod history;
pub mod observations;
pub mod staff;
