//! Sample history and same-day positive samples.

use oos_types::NonEmptyText;

/// Prior failures recorded for the product.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleHistory {
    pub prior_failures: i64,
    /// Investigation reference(s) of the prior failures, as entered.
    pub references: String,
}

/// Another sample that tested positive on the same day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositiveSampleEvent {
    pub sample_id: NonEmptyText,
    /// 1-based position in the day's processing sequence, if known.
    pub processing_order: Option<u32>,
}

/// Processing order of the current sample and of the day's other positives.
///
/// Ranks are expected to be unique across the current sample and `others`; they are taken
/// as entered and not validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrossContamination {
    pub sample_order: Option<u32>,
    pub others: Vec<PositiveSampleEvent>,
}

impl CrossContamination {
    /// Builds the other-positive list from parallel comma-separated id and rank lists.
    ///
    /// At most `count` pairs are read. Pairs with a blank id are skipped; a missing or
    /// non-numeric rank is recorded as unknown.
    pub fn from_lists(sample_order: &str, count: i64, ids: &str, orders: &str) -> Self {
        let count = usize::try_from(count).unwrap_or(0);
        let mut orders = orders.split(',').map(parse_rank);

        let others = ids
            .split(',')
            .take(count)
            .filter_map(|id| {
                let processing_order = orders.next().flatten();
                NonEmptyText::new(id).ok().map(|sample_id| PositiveSampleEvent {
                    sample_id,
                    processing_order,
                })
            })
            .collect();

        Self {
            sample_order: parse_rank(sample_order),
            others,
        }
    }
}

fn parse_rank(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|rank| *rank > 0)
}
