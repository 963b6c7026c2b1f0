use crate::components::history::SampleHistory;
use crate::config::CountStyle;
use crate::grammar::to_cardinal_word;

pub const NO_PRIOR_FAILURES: &str =
    "A review of the sample history identified no prior sterility failures for this product.";

/// Sample-history paragraph. Counts of zero or below read as no prior failures.
pub fn sample_history_paragraph(history: &SampleHistory, count_style: CountStyle) -> String {
    let references = match history.references.trim() {
        "" => String::new(),
        refs => format!(" ({refs})"),
    };

    match history.prior_failures {
        n if n <= 0 => NO_PRIOR_FAILURES.to_string(),
        1 => format!(
            "A review of the sample history identified 1 incident{references} of a prior \
             sterility failure for this product."
        ),
        n => {
            let count = match count_style {
                CountStyle::Words => to_cardinal_word(n),
                CountStyle::Digits => n.to_string(),
            };
            format!(
                "A review of the sample history identified {count} incidents{references} of \
                 prior sterility failures for this product."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(prior_failures: i64, references: &str) -> SampleHistory {
        SampleHistory {
            prior_failures,
            references: references.into(),
        }
    }

    #[test]
    fn zero_and_negative_counts_use_fixed_phrase() {
        assert_eq!(
            sample_history_paragraph(&history(0, ""), CountStyle::Words),
            NO_PRIOR_FAILURES
        );
        assert_eq!(
            sample_history_paragraph(&history(-1, "OOS-1"), CountStyle::Words),
            NO_PRIOR_FAILURES
        );
    }

    #[test]
    fn single_incident_names_reference() {
        let text = sample_history_paragraph(&history(1, "OOS-240101"), CountStyle::Words);
        assert!(text.contains("identified 1 incident (OOS-240101) of a prior"));
    }

    #[test]
    fn many_incidents_follow_count_style() {
        let h = history(3, "OOS-1, OOS-2, OOS-3");
        assert!(sample_history_paragraph(&h, CountStyle::Words)
            .contains("identified three incidents (OOS-1, OOS-2, OOS-3) of"));
        assert!(sample_history_paragraph(&h, CountStyle::Digits)
            .contains("identified 3 incidents (OOS-1, OOS-2, OOS-3) of"));
    }

    #[test]
    fn blank_references_drop_parentheses() {
        let text = sample_history_paragraph(&history(2, "  "), CountStyle::Words);
        assert!(text.contains("identified two incidents of prior"));
    }
}
