//! Form schema and the typed view of a wizard session.
//!
//! [`FIELDS`] declares every key a session may hold. [`default_state`] builds the state a fresh
//! session starts from (its key set is what the store accepts on load), and
//! [`InvestigationForm::from_state`] turns a flat state into the typed groups narratives use.

use crate::components::equipment::EquipmentInfo;
use crate::components::general::{Controls, GeneralInfo, Platform, PlatformDetails, Subculture};
use crate::components::history::{CrossContamination, SampleHistory};
use crate::components::observations::{EmCategory, EmObservations, ObservationEntry};
use crate::components::staff::{Personnel, StaffMember};
use crate::constants::{DEFAULT_CLIENT_NAME, DEFAULT_OOS_ID, DEFAULT_ORGANISM_MORPHOLOGY};
use crate::{OosError, OosResult};
use chrono::NaiveDate;
use oos_store::{FieldKind, FormState};
use oos_types::TEST_DATE_FORMAT;

/// Wizard section a field is shown under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    General,
    Personnel,
    Equipment,
    Controls,
    EnvironmentalMonitoring,
    History,
    CrossContamination,
    PlatformSpecific,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::General => "General Information",
            Section::Personnel => "Personnel",
            Section::Equipment => "Equipment",
            Section::Controls => "Controls & Findings",
            Section::EnvironmentalMonitoring => "Environmental Monitoring",
            Section::History => "Sample History",
            Section::CrossContamination => "Same-Day Positives",
            Section::PlatformSpecific => "Platform-Specific",
        }
    }
}

/// Declaration of one form field.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: FieldKind,
    /// Platform the field is limited to, if any.
    pub platform: Option<Platform>,
}

impl FieldSpec {
    const fn text(key: &'static str, label: &'static str, section: Section) -> Self {
        Self {
            key,
            label,
            section,
            kind: FieldKind::Text,
            platform: None,
        }
    }

    const fn integer(key: &'static str, label: &'static str, section: Section) -> Self {
        Self {
            key,
            label,
            section,
            kind: FieldKind::Integer,
            platform: None,
        }
    }

    const fn only(self, platform: Platform) -> Self {
        Self {
            platform: Some(platform),
            ..self
        }
    }

    pub fn applies_to(&self, platform: Platform) -> bool {
        self.platform.map_or(true, |p| p == platform)
    }
}

pub const PLATFORM: &str = "platform";
pub const OOS_ID: &str = "oos_id";
pub const CLIENT_NAME: &str = "client_name";
pub const SAMPLE_ID: &str = "sample_id";
pub const SAMPLE_NAME: &str = "sample_name";
pub const LOT_NUMBER: &str = "lot_number";
pub const TEST_DATE: &str = "test_date";
pub const DOSAGE_FORM: &str = "dosage_form";
pub const MONTHLY_CLEANING_DATE: &str = "monthly_cleaning_date";
pub const PREPPER_NAME: &str = "prepper_name";
pub const PREPPER_INITIAL: &str = "prepper_initial";
pub const ANALYST_NAME: &str = "analyst_name";
pub const ANALYST_INITIAL: &str = "analyst_initial";
pub const CHANGEOVER_NAME: &str = "changeover_name";
pub const CHANGEOVER_INITIAL: &str = "changeover_initial";
pub const READER_NAME: &str = "reader_name";
pub const READER_INITIAL: &str = "reader_initial";
pub const BSC_ID: &str = "bsc_id";
pub const CHGBSC_ID: &str = "chgbsc_id";
pub const SCAN_ID: &str = "scan_id";
pub const CONTROL_POSITIVE: &str = "control_positive";
pub const CONTROL_LOT: &str = "control_lot";
pub const CONTROL_DATA: &str = "control_data";
pub const ORGANISM_MORPHOLOGY: &str = "organism_morphology";
pub const WEEKLY_INITIAL: &str = "weekly_initial";
pub const DATE_OF_WEEKLY: &str = "date_of_weekly";
pub const PRIOR_FAILURE_COUNT: &str = "prior_failure_count";
pub const PRIOR_FAILURE_REFS: &str = "prior_failure_refs";
pub const SAMPLE_ORDER: &str = "sample_order";
pub const OTHER_POSITIVE_COUNT: &str = "other_positive_count";
pub const OTHER_POSITIVE_IDS: &str = "other_positive_ids";
pub const OTHER_POSITIVE_ORDERS: &str = "other_positive_orders";
pub const LUMINOMETER_ID: &str = "luminometer_id";
pub const REAGENT_KIT_LOT: &str = "reagent_kit_lot";
pub const FTM_LOT: &str = "ftm_lot";
pub const TSB_LOT: &str = "tsb_lot";
pub const SUBCULTURE: &str = "subculture";

use Section as S;

/// Every field a session may hold, in wizard order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::text(PLATFORM, "Platform (ScanRDI / Celsis / USP 71)", S::General),
    FieldSpec::text(OOS_ID, "OOS Number", S::General),
    FieldSpec::text(CLIENT_NAME, "Client Name", S::General),
    FieldSpec::text(SAMPLE_ID, "Sample ID", S::General),
    FieldSpec::text(SAMPLE_NAME, "Sample Name", S::General),
    FieldSpec::text(LOT_NUMBER, "Lot Number", S::General),
    FieldSpec::text(TEST_DATE, "Test Date (DDMonYY)", S::General),
    FieldSpec::text(DOSAGE_FORM, "Dosage Form", S::General),
    FieldSpec::text(MONTHLY_CLEANING_DATE, "Monthly Cleaning Date", S::General),
    FieldSpec::text(PREPPER_INITIAL, "Prepper Initials", S::Personnel),
    FieldSpec::text(PREPPER_NAME, "Prepper Name", S::Personnel),
    FieldSpec::text(ANALYST_INITIAL, "Processor Initials", S::Personnel),
    FieldSpec::text(ANALYST_NAME, "Processor Name", S::Personnel),
    FieldSpec::text(CHANGEOVER_INITIAL, "Changeover Initials", S::Personnel),
    FieldSpec::text(CHANGEOVER_NAME, "Changeover Name", S::Personnel),
    FieldSpec::text(READER_INITIAL, "Reader Initials", S::Personnel),
    FieldSpec::text(READER_NAME, "Reader Name", S::Personnel),
    FieldSpec::text(BSC_ID, "Processing BSC ID", S::Equipment),
    FieldSpec::text(CHGBSC_ID, "Changeover BSC ID", S::Equipment),
    FieldSpec::text(SCAN_ID, "ScanRDI ID (E00...)", S::Equipment).only(Platform::ScanRdi),
    FieldSpec::text(CONTROL_POSITIVE, "Positive Control Organism", S::Controls),
    FieldSpec::text(CONTROL_LOT, "Positive Control Lot", S::Controls),
    FieldSpec::text(CONTROL_DATA, "Positive Control Result", S::Controls),
    FieldSpec::text(ORGANISM_MORPHOLOGY, "Organism Morphology", S::Controls),
    FieldSpec::text("obs_pers_dur", "Personnel EM Observation", S::EnvironmentalMonitoring),
    FieldSpec::text("etx_pers_dur", "Personnel EM Sample ID(s)", S::EnvironmentalMonitoring),
    FieldSpec::text("id_pers_dur", "Personnel EM Organism(s)", S::EnvironmentalMonitoring),
    FieldSpec::text("obs_surf_dur", "Surface EM Observation", S::EnvironmentalMonitoring),
    FieldSpec::text("etx_surf_dur", "Surface EM Sample ID(s)", S::EnvironmentalMonitoring),
    FieldSpec::text("id_surf_dur", "Surface EM Organism(s)", S::EnvironmentalMonitoring),
    FieldSpec::text("obs_sett_dur", "Settling Plate Observation", S::EnvironmentalMonitoring),
    FieldSpec::text("etx_sett_dur", "Settling Plate Sample ID(s)", S::EnvironmentalMonitoring),
    FieldSpec::text("id_sett_dur", "Settling Plate Organism(s)", S::EnvironmentalMonitoring),
    FieldSpec::text("obs_air_wk_of", "Weekly Air Observation", S::EnvironmentalMonitoring),
    FieldSpec::text("etx_air_wk_of", "Weekly Air Sample ID(s)", S::EnvironmentalMonitoring),
    FieldSpec::text("id_air_wk_of", "Weekly Air Organism(s)", S::EnvironmentalMonitoring),
    FieldSpec::text("obs_room_wk_of", "Weekly Room Observation", S::EnvironmentalMonitoring),
    FieldSpec::text("etx_room_wk_of", "Weekly Room Sample ID(s)", S::EnvironmentalMonitoring),
    FieldSpec::text("id_room_wk_of", "Weekly Room Organism(s)", S::EnvironmentalMonitoring),
    FieldSpec::text(WEEKLY_INITIAL, "Weekly EM Initials", S::EnvironmentalMonitoring),
    FieldSpec::text(DATE_OF_WEEKLY, "Week Of (DDMonYY)", S::EnvironmentalMonitoring),
    FieldSpec::integer(PRIOR_FAILURE_COUNT, "Prior Failures (count)", S::History),
    FieldSpec::text(PRIOR_FAILURE_REFS, "Prior Failure References", S::History),
    FieldSpec::text(SAMPLE_ORDER, "This Sample's Processing Order", S::CrossContamination),
    FieldSpec::integer(OTHER_POSITIVE_COUNT, "Other Positives (count)", S::CrossContamination),
    FieldSpec::text(
        OTHER_POSITIVE_IDS,
        "Other Positive Sample IDs (comma-separated)",
        S::CrossContamination,
    ),
    FieldSpec::text(
        OTHER_POSITIVE_ORDERS,
        "Other Positive Processing Orders (comma-separated)",
        S::CrossContamination,
    ),
    FieldSpec::text(LUMINOMETER_ID, "Luminometer ID", S::PlatformSpecific).only(Platform::Celsis),
    FieldSpec::text(REAGENT_KIT_LOT, "Reagent Kit Lot", S::PlatformSpecific).only(Platform::Celsis),
    FieldSpec::text(FTM_LOT, "FTM Lot #", S::PlatformSpecific).only(Platform::Usp71),
    FieldSpec::text(TSB_LOT, "TSB Lot #", S::PlatformSpecific).only(Platform::Usp71),
    FieldSpec::text(SUBCULTURE, "Subculture? (No / Yes)", S::PlatformSpecific)
        .only(Platform::Usp71),
];

/// Looks up a declared field.
pub fn field(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.key == key)
}

/// Sets a declared field from user input.
///
/// Integer fields accept a blank value (read as zero) or a decimal number; text fields take
/// the value as entered.
///
/// # Errors
///
/// Returns [`OosError::UnknownField`] for an undeclared key and [`OosError::InvalidInput`] for
/// a non-numeric value in an integer field.
pub fn set_field(state: &mut FormState, key: &str, value: &str) -> OosResult<()> {
    let spec = field(key).ok_or_else(|| OosError::UnknownField(key.to_string()))?;
    match spec.kind {
        FieldKind::Text => state.set_text(spec.key, value),
        FieldKind::Integer => {
            let number = match value.trim() {
                "" => 0,
                n => n.parse::<i64>().map_err(|_| {
                    OosError::InvalidInput(format!("{} expects a whole number, got '{}'", key, n))
                })?,
            };
            state.set_integer(spec.key, number);
        }
    }
    Ok(())
}

/// The state a fresh session starts from; `today` supplies the default test date.
pub fn default_state(today: NaiveDate) -> FormState {
    let mut state = FormState::new();
    for spec in FIELDS {
        match spec.kind {
            FieldKind::Text => state.set_text(spec.key, ""),
            FieldKind::Integer => state.set_integer(spec.key, 0),
        }
    }

    state.set_text(PLATFORM, Platform::default().label());
    state.set_text(OOS_ID, DEFAULT_OOS_ID);
    state.set_text(CLIENT_NAME, DEFAULT_CLIENT_NAME);
    state.set_text(TEST_DATE, today.format(TEST_DATE_FORMAT).to_string());
    state.set_text(ORGANISM_MORPHOLOGY, DEFAULT_ORGANISM_MORPHOLOGY);
    state.set_text(SUBCULTURE, Subculture::No.label());
    state
}

/// Structured view of a wizard session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvestigationForm {
    pub general: GeneralInfo,
    pub personnel: Personnel,
    pub equipment: EquipmentInfo,
    pub controls: Controls,
    pub observations: EmObservations,
    pub history: SampleHistory,
    pub cross_contamination: CrossContamination,
    pub platform_details: PlatformDetails,
}

impl InvestigationForm {
    /// Reads the typed groups out of a flat state.
    ///
    /// Never fails: text fields are trimmed, an unrecognised platform reads as the default,
    /// and non-numeric counts read as zero.
    pub fn from_state(state: &FormState) -> Self {
        let text = |key: &str| state.text(key).trim().to_string();

        let platform = match Platform::parse(state.text(PLATFORM)) {
            Some(platform) => platform,
            None => {
                tracing::warn!(
                    "unrecognised platform '{}'; using {}",
                    state.text(PLATFORM),
                    Platform::default()
                );
                Platform::default()
            }
        };

        let general = GeneralInfo {
            platform,
            oos_id: text(OOS_ID),
            client_name: text(CLIENT_NAME),
            sample_id: text(SAMPLE_ID),
            sample_name: text(SAMPLE_NAME),
            lot_number: text(LOT_NUMBER),
            test_date: text(TEST_DATE),
            dosage_form: text(DOSAGE_FORM),
            monthly_cleaning_date: text(MONTHLY_CLEANING_DATE),
        };

        let staff = |name: &str, initials: &str| {
            StaffMember::resolve(state.text(name), state.text(initials))
        };
        let personnel = Personnel {
            prepper: staff(PREPPER_NAME, PREPPER_INITIAL),
            analyst: staff(ANALYST_NAME, ANALYST_INITIAL),
            changeover: staff(CHANGEOVER_NAME, CHANGEOVER_INITIAL),
            reader: staff(READER_NAME, READER_INITIAL),
        };

        let equipment = EquipmentInfo::resolve(state.text(BSC_ID), state.text(CHGBSC_ID));

        let controls = Controls {
            control_positive: text(CONTROL_POSITIVE),
            control_lot: text(CONTROL_LOT),
            control_data: text(CONTROL_DATA),
            organism_morphology: text(ORGANISM_MORPHOLOGY),
        };

        let observations = EmObservations {
            entries: EmCategory::ALL
                .into_iter()
                .map(|category| ObservationEntry {
                    category,
                    observation: text(category.observation_key().as_str()),
                    reference: text(category.reference_key().as_str()),
                    organism: text(category.organism_key().as_str()),
                })
                .collect(),
            weekly_initial: text(WEEKLY_INITIAL),
            date_of_weekly: text(DATE_OF_WEEKLY),
        };

        let history = SampleHistory {
            prior_failures: state.integer(PRIOR_FAILURE_COUNT),
            references: text(PRIOR_FAILURE_REFS),
        };

        let cross_contamination = CrossContamination::from_lists(
            state.text(SAMPLE_ORDER),
            state.integer(OTHER_POSITIVE_COUNT),
            state.text(OTHER_POSITIVE_IDS),
            state.text(OTHER_POSITIVE_ORDERS),
        );

        let platform_details = PlatformDetails {
            scan_id: text(SCAN_ID),
            luminometer_id: text(LUMINOMETER_ID),
            reagent_kit_lot: text(REAGENT_KIT_LOT),
            ftm_lot: text(FTM_LOT),
            tsb_lot: text(TSB_LOT),
            subculture: Subculture::parse(state.text(SUBCULTURE)),
        };

        Self {
            general,
            personnel,
            equipment,
            controls,
            observations,
            history,
            cross_contamination,
            platform_details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
    }

    #[test]
    fn field_keys_are_unique() {
        let mut keys: Vec<_> = FIELDS.iter().map(|f| f.key).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn em_fields_are_declared_for_every_category() {
        for category in EmCategory::ALL {
            assert!(field(&category.observation_key()).is_some());
            assert!(field(&category.reference_key()).is_some());
            assert!(field(&category.organism_key()).is_some());
        }
    }

    #[test]
    fn default_state_declares_every_field() {
        let state = default_state(today());
        assert_eq!(state.len(), FIELDS.len());
        assert_eq!(state.text(OOS_ID), "OOS-250000");
        assert_eq!(state.text(CLIENT_NAME), "Pharmacy Name");
        assert_eq!(state.text(TEST_DATE), "15Jun25");
        assert_eq!(state.text(PLATFORM), "ScanRDI");
        assert_eq!(state.text(ORGANISM_MORPHOLOGY), "rod");
        assert_eq!(state.integer(PRIOR_FAILURE_COUNT), 0);
    }

    #[test]
    fn platform_specific_fields_are_filtered() {
        let scan = field(SCAN_ID).unwrap();
        assert!(scan.applies_to(Platform::ScanRdi));
        assert!(!scan.applies_to(Platform::Celsis));
        assert!(field(OOS_ID).unwrap().applies_to(Platform::Usp71));
    }

    #[test]
    fn from_state_builds_typed_groups() {
        let mut state = default_state(today());
        state.set_text(PLATFORM, "usp 71");
        state.set_text(SAMPLE_ID, " E12345 ");
        state.set_text(ANALYST_INITIAL, "dl");
        state.set_text(BSC_ID, "1310");
        state.set_text(CHGBSC_ID, "1313");
        state.set_text("obs_sett_dur", "1 CFU");
        state.set_integer(PRIOR_FAILURE_COUNT, 2);
        state.set_text(SAMPLE_ORDER, "2");
        state.set_integer(OTHER_POSITIVE_COUNT, 1);
        state.set_text(OTHER_POSITIVE_IDS, "E12001");
        state.set_text(OTHER_POSITIVE_ORDERS, "1");
        state.set_text(SUBCULTURE, "Yes");

        let form = InvestigationForm::from_state(&state);
        assert_eq!(form.general.platform, Platform::Usp71);
        assert_eq!(form.general.sample_id, "E12345");
        assert_eq!(form.personnel.analyst.name, "Daniel Lee");
        assert_eq!(form.equipment.processing.suite, "117");
        assert_eq!(form.equipment.changeover.suite, "115");
        assert!(form
            .observations
            .entry(EmCategory::Settling)
            .unwrap()
            .is_positive());
        assert_eq!(form.history.prior_failures, 2);
        assert_eq!(form.cross_contamination.sample_order, Some(2));
        assert_eq!(form.cross_contamination.others.len(), 1);
        assert_eq!(form.platform_details.subculture, Subculture::Yes);
    }

    #[test]
    fn set_field_checks_key_and_kind() {
        let mut state = default_state(today());
        set_field(&mut state, SAMPLE_ID, "E777").unwrap();
        assert_eq!(state.text(SAMPLE_ID), "E777");

        set_field(&mut state, PRIOR_FAILURE_COUNT, " 3 ").unwrap();
        assert_eq!(state.integer(PRIOR_FAILURE_COUNT), 3);
        set_field(&mut state, PRIOR_FAILURE_COUNT, "").unwrap();
        assert_eq!(state.integer(PRIOR_FAILURE_COUNT), 0);

        assert!(matches!(
            set_field(&mut state, PRIOR_FAILURE_COUNT, "three"),
            Err(OosError::InvalidInput(_))
        ));
        assert!(matches!(
            set_field(&mut state, "favourite_colour", "blue"),
            Err(OosError::UnknownField(key)) if key == "favourite_colour"
        ));
    }

    #[test]
    fn unknown_platform_reads_as_default() {
        let mut state = default_state(today());
        state.set_text(PLATFORM, "BacT/ALERT");
        let form = InvestigationForm::from_state(&state);
        assert_eq!(form.general.platform, Platform::ScanRdi);
    }
}
