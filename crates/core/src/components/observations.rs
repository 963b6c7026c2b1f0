//! Environmental monitoring (EM) observations.

/// The five EM categories recorded for every test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmCategory {
    Personnel,
    Surface,
    Settling,
    WeeklyAir,
    WeeklyRoom,
}

impl EmCategory {
    pub const ALL: [EmCategory; 5] = [
        EmCategory::Personnel,
        EmCategory::Surface,
        EmCategory::Settling,
        EmCategory::WeeklyAir,
        EmCategory::WeeklyRoom,
    ];

    /// Wording used for the category inside narrative sentences.
    pub fn label(self) -> &'static str {
        match self {
            EmCategory::Personnel => "personnel sampling (gloved fingertips and sleeves)",
            EmCategory::Surface => "surface sampling of the BSC work area",
            EmCategory::Settling => "settling plates",
            EmCategory::WeeklyAir => "weekly active air sampling",
            EmCategory::WeeklyRoom => "weekly cleanroom surface sampling",
        }
    }

    /// Weekly categories are sampled for the week of testing, the rest during processing.
    pub fn is_weekly(self) -> bool {
        matches!(self, EmCategory::WeeklyAir | EmCategory::WeeklyRoom)
    }

    /// Short key shared by the category's form fields, e.g. `pers` in `obs_pers_dur`.
    pub fn field_stem(self) -> &'static str {
        match self {
            EmCategory::Personnel => "pers",
            EmCategory::Surface => "surf",
            EmCategory::Settling => "sett",
            EmCategory::WeeklyAir => "air",
            EmCategory::WeeklyRoom => "room",
        }
    }

    fn field_suffix(self) -> &'static str {
        if self.is_weekly() {
            "wk_of"
        } else {
            "dur"
        }
    }

    /// Field holding the observation text, e.g. `obs_pers_dur`.
    pub fn observation_key(self) -> String {
        format!("obs_{}_{}", self.field_stem(), self.field_suffix())
    }

    /// Field holding the plate sample id(s), e.g. `etx_air_wk_of`.
    pub fn reference_key(self) -> String {
        format!("etx_{}_{}", self.field_stem(), self.field_suffix())
    }

    /// Field holding the organism identification(s), e.g. `id_sett_dur`.
    pub fn organism_key(self) -> String {
        format!("id_{}_{}", self.field_stem(), self.field_suffix())
    }

    /// Time phrase that follows the category label in a detail paragraph.
    pub fn time_context(self, date_of_weekly: &str) -> String {
        if !self.is_weekly() {
            return "during sample processing".to_string();
        }
        match date_of_weekly.trim() {
            "" => "for the week of testing".to_string(),
            date => format!("for the week of {date}"),
        }
    }
}

/// One EM category's result.
///
/// An entry with blank observation text is negative (no growth).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservationEntry {
    pub category: EmCategory,
    pub observation: String,
    /// Plate sample id(s) submitted for identification.
    pub reference: String,
    /// Organism identification(s).
    pub organism: String,
}

impl ObservationEntry {
    pub fn negative(category: EmCategory) -> Self {
        Self {
            category,
            observation: String::new(),
            reference: String::new(),
            organism: String::new(),
        }
    }

    pub fn is_positive(&self) -> bool {
        !self.observation.trim().is_empty()
    }
}

/// The EM table: one entry per category, in [`EmCategory::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmObservations {
    pub entries: Vec<ObservationEntry>,
    pub weekly_initial: String,
    pub date_of_weekly: String,
}

impl Default for EmObservations {
    fn default() -> Self {
        Self {
            entries: EmCategory::ALL
                .into_iter()
                .map(ObservationEntry::negative)
                .collect(),
            weekly_initial: String::new(),
            date_of_weekly: String::new(),
        }
    }
}

impl EmObservations {
    pub fn entry(&self, category: EmCategory) -> Option<&ObservationEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn entry_mut(&mut self, category: EmCategory) -> Option<&mut ObservationEntry> {
        self.entries.iter_mut().find(|e| e.category == category)
    }

    pub fn positives(&self) -> impl Iterator<Item = &ObservationEntry> {
        self.entries.iter().filter(|e| e.is_positive())
    }

    pub fn negatives(&self) -> impl Iterator<Item = &ObservationEntry> {
        self.entries.iter().filter(|e| !e.is_positive())
    }

    pub fn all_negative(&self) -> bool {
        self.positives().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_follow_placeholder_names() {
        assert_eq!(EmCategory::Personnel.observation_key(), "obs_pers_dur");
        assert_eq!(EmCategory::Settling.reference_key(), "etx_sett_dur");
        assert_eq!(EmCategory::WeeklyAir.organism_key(), "id_air_wk_of");
        assert_eq!(EmCategory::WeeklyRoom.observation_key(), "obs_room_wk_of");
    }

    #[test]
    fn whitespace_observation_is_negative() {
        let mut entry = ObservationEntry::negative(EmCategory::Surface);
        entry.observation = "   ".into();
        assert!(!entry.is_positive());
        entry.observation = "1 CFU".into();
        assert!(entry.is_positive());
    }

    #[test]
    fn default_table_is_all_negative() {
        let table = EmObservations::default();
        assert_eq!(table.entries.len(), 5);
        assert!(table.all_negative());
    }

    #[test]
    fn weekly_time_context_uses_week_date() {
        assert_eq!(
            EmCategory::WeeklyAir.time_context("09Jun25"),
            "for the week of 09Jun25"
        );
        assert_eq!(
            EmCategory::Personnel.time_context("09Jun25"),
            "during sample processing"
        );
    }
}
