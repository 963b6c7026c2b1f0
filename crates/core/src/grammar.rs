//! English text helpers used when assembling narrative paragraphs.
//!
//! The pluralisation helpers are substring heuristics carried over from the worksheets that
//! reviewers are used to. They are not parsers and deliberately keep their quirks; see the
//! tests for the exact behaviour.

/// Singular/plural wording chosen from an observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthTerms {
    /// `growth was` or `growths were`.
    pub growth: &'static str,
    /// `plate was` or `plates were`.
    pub plate: &'static str,
}

const SINGULAR_GROWTH: GrowthTerms = GrowthTerms {
    growth: "growth was",
    plate: "plate was",
};

const PLURAL_GROWTH: GrowthTerms = GrowthTerms {
    growth: "growths were",
    plate: "plates were",
};

/// A singular/plural pair of labels for a reference field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceLabels {
    pub singular: &'static str,
    pub plural: &'static str,
}

/// Labels for the sample-id reference of a plate.
pub const SAMPLE_ID_LABELS: ReferenceLabels = ReferenceLabels {
    singular: "sample ID",
    plural: "sample IDs",
};

/// Labels introducing the organism identification.
pub const ORGANISM_LABELS: ReferenceLabels = ReferenceLabels {
    singular: "organism identified was",
    plural: "organisms identified included",
};

/// Joins items as an English list: `a`, `a and b`, `a, b, and c`.
pub fn join_with_conjunction<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {} {}", first.as_ref(), conjunction, second.as_ref()),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}, {} {}", head, conjunction, last.as_ref())
        }
    }
}

/// Formats `n` with its English ordinal suffix: `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`.
pub fn to_ordinal(n: i64) -> String {
    let magnitude = n.unsigned_abs();
    let suffix = if (11..=13).contains(&(magnitude % 100)) {
        "th"
    } else {
        match magnitude % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}

/// Spells out 1 to 10; any other value is returned as decimal digits.
pub fn to_cardinal_word(n: i64) -> String {
    const WORDS: [&str; 10] = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    match n {
        1..=10 => WORDS[(n - 1) as usize].to_string(),
        _ => n.to_string(),
    }
}

/// Chooses singular or plural growth wording for an observation.
///
/// Singular when the text contains `1` and `CFU` (any case) but neither `11` nor `21`;
/// plural otherwise. `10 CFU` therefore reads as singular, which is the long-standing
/// behaviour of the worksheets.
pub fn pluralize_growth(observation_text: &str) -> GrowthTerms {
    let upper = observation_text.to_uppercase();
    let singular = observation_text.contains('1')
        && upper.contains("CFU")
        && !observation_text.contains("11")
        && !observation_text.contains("21");

    if singular {
        SINGULAR_GROWTH
    } else {
        PLURAL_GROWTH
    }
}

/// True when a reference field lists more than one item (`,` or `and`, any case).
pub fn is_plural_reference(text: &str) -> bool {
    text.contains(',') || text.to_uppercase().contains("AND")
}

/// Picks the singular or plural label for a reference field.
pub fn pluralize_reference(text: &str, labels: ReferenceLabels) -> &'static str {
    if is_plural_reference(text) {
        labels.plural
    } else {
        labels.singular
    }
}
