//! Constants used throughout the OOS core crate.
//!
//! Facility and personnel reference data lives here alongside file and default-value
//! constants, so that every fixed table the narratives depend on is in one place.

/// Default filename for the persisted wizard state.
pub const DEFAULT_STATE_FILENAME: &str = "oos_wizard_history.json";

/// Directory searched for platform templates when no template directory is configured.
pub const TEMPLATE_DIR_NAME: &str = "templates";

/// Extensions tried, in order, when locating a platform template.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["docx", "xml", "md", "txt"];

/// Extension used for generated document names.
pub const OUTPUT_EXTENSION: &str = "docx";

/// Default OOS investigation number shown in a fresh session.
pub const DEFAULT_OOS_ID: &str = "OOS-250000";

/// Default client name shown in a fresh session.
pub const DEFAULT_CLIENT_NAME: &str = "Pharmacy Name";

/// Default organism morphology.
pub const DEFAULT_ORGANISM_MORPHOLOGY: &str = "rod";

/// Sentinel used when an equipment id falls outside every known suite.
pub const UNKNOWN: &str = "Unknown";

/// Prefix of the asset tag printed on biosafety cabinets.
pub const EQUIPMENT_TAG_PREFIX: &str = "E00";

/// Biosafety cabinets grouped by the cleanroom suite that houses them.
pub const SUITE_EQUIPMENT: &[(&str, [&str; 2])] = &[
    ("117", ["1310", "1312"]),
    ("116", ["1309", "1311"]),
    ("115", ["1314", "1313"]),
    ("114", ["1316", "1798"]),
];

/// Room identifier of each cleanroom suite.
pub const SUITE_ROOMS: &[(&str, &str)] = &[
    ("117", "1739"),
    ("116", "1738"),
    ("115", "1737"),
    ("114", "1736"),
];

/// Description of the zone holding an even-numbered (suffix `B`) cabinet.
pub const INNERMOST_ZONE: &str = "innermost ISO 7 room";

/// Description of the zone holding an odd-numbered (suffix `A`) cabinet.
pub const MIDDLE_ZONE: &str = "middle ISO 7 buffer room";

/// Microbiology staff initials and full names.
pub const PERSONNEL: &[(&str, &str)] = &[
    ("AB", "Alicia Barnes"),
    ("AK", "Arjun Kapoor"),
    ("BT", "Benjamin Tran"),
    ("CM", "Carmen Morales"),
    ("DL", "Daniel Lee"),
    ("DW", "Dana Whitfield"),
    ("EH", "Elena Hughes"),
    ("GP", "Grace Park"),
    ("HN", "Hannah Nguyen"),
    ("JR", "Jordan Reyes"),
    ("KO", "Kwame Osei"),
    ("LS", "Laura Stein"),
    ("MF", "Marcus Fields"),
    ("MJ", "Mei Jiang"),
    ("NP", "Nadia Petrova"),
    ("OA", "Oluwaseun Adeyemi"),
    ("PC", "Priya Chandra"),
    ("RG", "Rafael Gomez"),
    ("SK", "Sofia Kowalski"),
    ("TW", "Thomas Walsh"),
];
