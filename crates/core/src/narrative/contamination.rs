//! Same-day cross-contamination paragraph.

use super::on_date;
use crate::components::history::CrossContamination;
use crate::grammar::{join_with_conjunction, to_cardinal_word, to_ordinal};

pub const NO_OTHER_POSITIVES: &str = "All other samples processed on the same day tested negative.";

const GLOVE_DISINFECTION: &str = "Between samples, the analyst's gloves were disinfected with \
sterile 70% isopropyl alcohol (IPA) and all materials were removed from the BSC before the next \
sample was introduced.";

const NO_CONCURRENT_PROCESSING: &str = "Samples were processed one at a time, and no two samples \
were open in the BSC concurrently.";

struct Processed<'a> {
    sample_id: &'a str,
    order: Option<u32>,
    current: bool,
}

impl Processed<'_> {
    fn clause(&self) -> String {
        let subject = if self.current {
            format!("The current sample, {},", self.sample_id)
        } else {
            format!("Sample {}", self.sample_id)
        };
        match self.order {
            Some(order) => format!(
                "{subject} was the {} sample processed.",
                to_ordinal(i64::from(order))
            ),
            None => format!("{subject} was also processed that day."),
        }
    }
}

/// Builds the cross-contamination paragraph for the current sample.
///
/// Samples are listed in processing order; samples without a rank follow the ranked ones
/// in the order they were entered.
pub fn cross_contamination_summary(
    sample_id: &str,
    cross_contamination: &CrossContamination,
    test_date: &str,
) -> String {
    if cross_contamination.others.is_empty() {
        return NO_OTHER_POSITIVES.to_string();
    }

    let current_id = match sample_id.trim() {
        "" => "the current sample",
        id => id,
    };

    let mut samples = vec![Processed {
        sample_id: current_id,
        order: cross_contamination.sample_order,
        current: true,
    }];
    samples.extend(cross_contamination.others.iter().map(|other| Processed {
        sample_id: other.sample_id.as_str(),
        order: other.processing_order,
        current: false,
    }));
    samples.sort_by_key(|s| (s.order.is_none(), s.order));

    let total = i64::try_from(samples.len()).unwrap_or(i64::MAX);
    let ids: Vec<_> = samples.iter().map(|s| s.sample_id).collect();

    let mut sentences = vec![format!(
        "A total of {} samples processed {} tested positive: {}.",
        to_cardinal_word(total),
        on_date(test_date),
        join_with_conjunction(&ids, "and")
    )];
    sentences.extend(samples.iter().map(Processed::clause));
    sentences.push(GLOVE_DISINFECTION.to_string());
    sentences.push(NO_CONCURRENT_PROCESSING.to_string());

    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::history::PositiveSampleEvent;
    use oos_types::NonEmptyText;

    fn other(id: &str, order: Option<u32>) -> PositiveSampleEvent {
        PositiveSampleEvent {
            sample_id: NonEmptyText::new(id).unwrap(),
            processing_order: order,
        }
    }

    #[test]
    fn no_other_positives_uses_fixed_sentence() {
        let cc = CrossContamination {
            sample_order: Some(2),
            others: Vec::new(),
        };
        assert_eq!(cross_contamination_summary("E12345", &cc, "15Jun25"), NO_OTHER_POSITIVES);
    }

    #[test]
    fn lists_samples_in_processing_order() {
        let cc = CrossContamination {
            sample_order: Some(2),
            others: vec![other("E300", Some(3)), other("E100", Some(1))],
        };
        let text = cross_contamination_summary("E200", &cc, "15Jun25");

        assert!(text.starts_with(
            "A total of three samples processed on 15Jun25 tested positive: E100, E200, and E300."
        ));
        assert!(text.contains("Sample E100 was the 1st sample processed."));
        assert!(text.contains("The current sample, E200, was the 2nd sample processed."));
        assert!(text.contains("Sample E300 was the 3rd sample processed."));
        assert!(text.contains("70% isopropyl alcohol"));
        assert!(text.ends_with(NO_CONCURRENT_PROCESSING));

        let first = text.find("E100 was").unwrap();
        let second = text.find("E200, was").unwrap();
        assert!(first < second);
    }

    #[test]
    fn unranked_samples_follow_ranked_ones() {
        let cc = CrossContamination {
            sample_order: None,
            others: vec![other("E500", None), other("E400", Some(4))],
        };
        let text = cross_contamination_summary("E200", &cc, "");
        assert!(text.contains("processed on the test date tested positive: E400, E200, and E500."));
        assert!(text.contains("The current sample, E200, was also processed that day."));
    }

    #[test]
    fn two_samples_join_without_comma() {
        let cc = CrossContamination {
            sample_order: Some(1),
            others: vec![other("E900", Some(2))],
        };
        let text = cross_contamination_summary("E800", &cc, "15Jun25");
        assert!(text.contains("A total of two samples"));
        assert!(text.contains("tested positive: E800 and E900."));
    }
}
