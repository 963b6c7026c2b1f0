//! Environmental monitoring narrative.

use super::PARAGRAPH_SEPARATOR;
use crate::components::observations::{EmObservations, ObservationEntry};
use crate::grammar::{
    join_with_conjunction, pluralize_growth, pluralize_reference, ORGANISM_LABELS,
    SAMPLE_ID_LABELS,
};

/// Summary used when every EM category is negative.
pub const ALL_NEGATIVE_EM: &str = "No microbial growth was observed in any of the environmental \
monitoring samples, including personnel sampling, surface sampling, settling plates, and the \
weekly active air and cleanroom surface sampling.";

/// Summary used when no EM category is negative.
pub const ALL_POSITIVE_EM: &str =
    "Microbial growth was observed in every environmental monitoring category.";

/// The two EM report fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmNarrative {
    /// `narrative_summary`: which categories showed no growth.
    pub summary: String,
    /// `em_details`: one paragraph per category with growth; empty when all negative.
    pub details: String,
}

/// Builds the EM summary and detail paragraphs.
pub fn em_narrative(observations: &EmObservations) -> EmNarrative {
    if observations.all_negative() {
        return EmNarrative {
            summary: ALL_NEGATIVE_EM.to_string(),
            details: String::new(),
        };
    }

    let (negative_weekly, negative_during): (Vec<_>, Vec<_>) = observations
        .negatives()
        .map(|entry| entry.category)
        .partition(|category| category.is_weekly());

    let mut sentences = Vec::new();
    if !negative_during.is_empty() {
        let labels: Vec<_> = negative_during.iter().map(|c| c.label()).collect();
        sentences.push(format!(
            "No microbial growth was observed in {} during sample processing.",
            join_with_conjunction(&labels, "and")
        ));
    }
    if !negative_weekly.is_empty() {
        let labels: Vec<_> = negative_weekly.iter().map(|c| c.label()).collect();
        let week = negative_weekly[0].time_context(&observations.date_of_weekly);
        sentences.push(format!(
            "No microbial growth was observed in {} {}.",
            join_with_conjunction(&labels, "and"),
            week
        ));
    }

    let summary = if sentences.is_empty() {
        ALL_POSITIVE_EM.to_string()
    } else {
        sentences.join(" ")
    };

    let details = observations
        .positives()
        .map(|entry| growth_paragraph(entry, &observations.date_of_weekly))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR);

    EmNarrative { summary, details }
}

fn growth_paragraph(entry: &ObservationEntry, date_of_weekly: &str) -> String {
    let terms = pluralize_growth(&entry.observation);
    let observation = entry.observation.trim().trim_end_matches('.');
    let reference = entry.reference.trim().trim_end_matches('.');
    let organism = entry.organism.trim().trim_end_matches('.');

    format!(
        "However, microbial {growth} observed in {category} {time}. Specifically, {observation}. \
         The {plate} submitted for microbial identification under {id_label} {reference}. \
         The {org_verb} {organism}.",
        growth = terms.growth,
        category = entry.category.label(),
        time = entry.category.time_context(date_of_weekly),
        plate = terms.plate,
        id_label = pluralize_reference(&entry.reference, SAMPLE_ID_LABELS),
        org_verb = pluralize_reference(&entry.organism, ORGANISM_LABELS),
    )
}
