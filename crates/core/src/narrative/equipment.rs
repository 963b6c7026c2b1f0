//! Equipment summary: where processing and changeover took place.

use super::{on_date, person, PARAGRAPH_SEPARATOR};
use crate::components::equipment::{EquipmentInfo, EquipmentScenario};
use crate::components::staff::Personnel;
use crate::facility::EquipmentRecord;

const SUITE_LAYOUT: &str = "The suite consists of an ISO 8 anteroom, a middle ISO 7 buffer room \
(zone A) and an innermost ISO 7 room (zone B), held under a positive-pressure cascade so that air \
flows from the innermost room, through the buffer room, to the anteroom.";

const SINGLE_BSC_CONTROLS: &str = "The BSC was cleaned and disinfected before use and held \
current certification on the test date.";

const TWO_BSC_CONTROLS: &str = "Each BSC was cleaned and disinfected independently before use, \
and both held current certification on the test date.";

/// Builds the equipment summary for whichever layout the test used.
///
/// - One cabinet: a single combined paragraph.
/// - Two cabinets in one suite: a suite paragraph, then a two-cabinet paragraph.
/// - Two cabinets in two suites: one paragraph per suite, then a two-cabinet paragraph.
pub fn equipment_summary(
    equipment: &EquipmentInfo,
    personnel: &Personnel,
    test_date: &str,
) -> String {
    let analyst = person(&personnel.analyst.name);
    let changeover = match personnel.changeover.name.trim() {
        "" => analyst,
        name => name,
    };
    let processing = &equipment.processing;
    let swap = &equipment.changeover;

    let paragraphs = match equipment.scenario() {
        EquipmentScenario::SameEquipment => {
            let performers = if changeover == analyst {
                format!("were both performed by {analyst}")
            } else {
                format!("were performed by {analyst} and {changeover}, respectively,")
            };
            let bsc = match processing.tag().as_str() {
                "" => "an unidentified ISO 5 biosafety cabinet (BSC)".to_string(),
                tag => format!("the ISO 5 biosafety cabinet (BSC) {tag}"),
            };
            vec![format!(
                "Sample processing and the changeover {performers} {date} in cleanroom suite \
                 {suite} (room {room}), using {bsc} located in the {zone} (zone {suffix}). \
                 {SUITE_LAYOUT} {SINGLE_BSC_CONTROLS}",
                date = on_date(test_date),
                suite = processing.suite,
                room = processing.room_id,
                zone = processing.zone_description(),
                suffix = processing.suffix(),
            )]
        }
        EquipmentScenario::SameSuite => vec![
            format!(
                "Sample processing and the changeover were performed {date} in cleanroom suite \
                 {suite} (room {room}). {SUITE_LAYOUT}",
                date = on_date(test_date),
                suite = processing.suite,
                room = processing.room_id,
            ),
            format!(
                "Two different ISO 5 biosafety cabinets (BSCs) within this suite were used. {} \
                 {TWO_BSC_CONTROLS}",
                two_cabinet_sentence(processing, analyst, swap, changeover, false),
            ),
        ],
        EquipmentScenario::DifferentSuites => vec![
            format!(
                "Sample processing was performed {date} in cleanroom suite {suite} (room {room}). \
                 {SUITE_LAYOUT}",
                date = on_date(test_date),
                suite = processing.suite,
                room = processing.room_id,
            ),
            format!(
                "The changeover was performed in cleanroom suite {suite} (room {room}), which \
                 shares the same layout and pressure cascade.",
                suite = swap.suite,
                room = swap.room_id,
            ),
            format!(
                "{} {TWO_BSC_CONTROLS}",
                two_cabinet_sentence(processing, analyst, swap, changeover, true),
            ),
        ],
    };

    paragraphs.join(PARAGRAPH_SEPARATOR)
}

fn two_cabinet_sentence(
    processing: &EquipmentRecord,
    analyst: &str,
    swap: &EquipmentRecord,
    changeover: &str,
    name_suites: bool,
) -> String {
    let location = |record: &EquipmentRecord| {
        let mut text = format!(
            "located in the {} (zone {})",
            record.zone_description(),
            record.suffix()
        );
        if name_suites {
            text.push_str(&format!(" of suite {}", record.suite));
        }
        text
    };

    format!(
        "Sample processing was performed by {analyst} in {}, {}, and the changeover step was \
         performed by {changeover} in {}, {}.",
        cabinet(processing),
        location(processing),
        cabinet(swap),
        location(swap),
    )
}

fn cabinet(record: &EquipmentRecord) -> String {
    match record.tag().as_str() {
        "" => "an unidentified BSC".to_string(),
        tag => format!("BSC {tag}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::staff::StaffMember;

    fn personnel(analyst: &str, changeover: &str) -> Personnel {
        Personnel {
            analyst: StaffMember {
                name: analyst.into(),
                initials: String::new(),
            },
            changeover: StaffMember {
                name: changeover.into(),
                initials: String::new(),
            },
            ..Personnel::default()
        }
    }

    fn paragraphs(text: &str) -> usize {
        text.split(PARAGRAPH_SEPARATOR).count()
    }

    #[test]
    fn same_equipment_is_one_combined_paragraph() {
        let equipment = EquipmentInfo::resolve("1310", "1310");
        let text = equipment_summary(&equipment, &personnel("Daniel Lee", "Daniel Lee"), "15Jun25");

        assert_eq!(paragraphs(&text), 1);
        assert_eq!(text.matches("117").count(), 1);
        assert_eq!(text.matches("E001310").count(), 1);
        assert!(!text.contains("changeover step"));
        assert!(text.contains("were both performed by Daniel Lee on 15Jun25"));
        assert!(text.contains("innermost ISO 7 room (zone B)"));
    }

    #[test]
    fn same_equipment_names_both_people_when_they_differ() {
        let equipment = EquipmentInfo::resolve("1311", "1311");
        let text = equipment_summary(&equipment, &personnel("Daniel Lee", "Grace Park"), "15Jun25");
        assert!(text.contains("performed by Daniel Lee and Grace Park, respectively,"));
        assert!(text.contains("middle ISO 7 buffer room (zone A)"));
    }

    #[test]
    fn same_suite_is_two_paragraphs() {
        let equipment = EquipmentInfo::resolve("1310", "1312");
        let text = equipment_summary(&equipment, &personnel("Daniel Lee", "Grace Park"), "15Jun25");

        assert_eq!(paragraphs(&text), 2);
        let second = text.split(PARAGRAPH_SEPARATOR).nth(1).unwrap();
        assert!(second.starts_with("Two different ISO 5 biosafety cabinets"));
        assert!(second.contains("performed by Daniel Lee in BSC E001310"));
        assert!(second.contains("changeover step was performed by Grace Park in BSC E001312"));
        assert!(!second.contains("of suite"));
    }

    #[test]
    fn different_suites_is_three_paragraphs() {
        let equipment = EquipmentInfo::resolve("1310", "1313");
        let text = equipment_summary(&equipment, &personnel("Daniel Lee", "Grace Park"), "15Jun25");

        assert_eq!(paragraphs(&text), 3);
        let parts: Vec<_> = text.split(PARAGRAPH_SEPARATOR).collect();
        assert!(parts[0].contains("cleanroom suite 117 (room 1739)"));
        assert!(parts[1].contains("cleanroom suite 115 (room 1737)"));
        assert!(parts[2].contains("(zone B) of suite 117"));
        assert!(parts[2].contains("(zone A) of suite 115"));
    }

    #[test]
    fn blank_names_and_date_use_neutral_wording() {
        let equipment = EquipmentInfo::resolve("1310", "");
        let text = equipment_summary(&equipment, &Personnel::default(), "");
        assert!(text.contains("were both performed by the assigned analyst on the test date"));
    }

    #[test]
    fn blank_cabinet_ids_are_not_tagged() {
        let equipment = EquipmentInfo::resolve("", "");
        let text = equipment_summary(&equipment, &personnel("Daniel Lee", "Daniel Lee"), "15Jun25");

        assert_eq!(paragraphs(&text), 1);
        assert!(!text.contains("E00"));
        assert!(text.contains("using an unidentified ISO 5 biosafety cabinet (BSC) located in"));
    }

    #[test]
    fn tagged_changeover_id_names_the_same_cabinet() {
        let equipment = EquipmentInfo::resolve("1310", "E001310");
        let text = equipment_summary(&equipment, &personnel("Daniel Lee", "Grace Park"), "15Jun25");

        assert_eq!(paragraphs(&text), 1);
        assert_eq!(text.matches("E001310").count(), 1);
        assert!(!text.contains("Unknown"));
    }
}
