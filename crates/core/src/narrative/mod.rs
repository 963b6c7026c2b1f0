//! Narrative assembler.
//!
//! Builds the reviewer-facing paragraphs of an investigation report from a typed
//! [`InvestigationForm`]. Every paragraph is fixed boilerplate with values substituted in;
//! reviewers compare reports side by side, so wording changes are contract changes.
//!
//! Multi-paragraph outputs separate paragraphs with a blank line ([`PARAGRAPH_SEPARATOR`]).

mod contamination;
mod em;
mod equipment;
mod history;

pub use contamination::{cross_contamination_summary, NO_OTHER_POSITIVES};
pub use em::{em_narrative, EmNarrative, ALL_NEGATIVE_EM, ALL_POSITIVE_EM};
pub use equipment::equipment_summary;
pub use history::{sample_history_paragraph, NO_PRIOR_FAILURES};

use crate::config::CountStyle;
use crate::form::InvestigationForm;

/// Separator between paragraphs of one narrative field.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// All derived narrative fields of a report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Narratives {
    pub equipment_summary: String,
    pub narrative_summary: String,
    pub em_details: String,
    pub sample_history_paragraph: String,
    pub cross_contamination_summary: String,
}

impl Narratives {
    pub fn assemble(form: &InvestigationForm, count_style: CountStyle) -> Self {
        let em = em_narrative(&form.observations);
        Self {
            equipment_summary: equipment_summary(
                &form.equipment,
                &form.personnel,
                &form.general.test_date,
            ),
            narrative_summary: em.summary,
            em_details: em.details,
            sample_history_paragraph: sample_history_paragraph(&form.history, count_style),
            cross_contamination_summary: cross_contamination_summary(
                &form.general.sample_id,
                &form.cross_contamination,
                &form.general.test_date,
            ),
        }
    }
}

/// `on 15Jun25`, or `on the test date` when no date was entered.
pub(crate) fn on_date(test_date: &str) -> String {
    match test_date.trim() {
        "" => "on the test date".to_string(),
        date => format!("on {date}"),
    }
}

/// A person's name, or a neutral stand-in when the name is blank.
pub(crate) fn person(name: &str) -> &str {
    match name.trim() {
        "" => "the assigned analyst",
        name => name,
    }
}
