//! Personnel directory: staff initials to full names.

use crate::constants::PERSONNEL;

/// One entry of the read-only staff directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonnelRecord {
    pub initials: &'static str,
    pub full_name: &'static str,
}

/// Returns every staff member in the directory.
pub fn directory() -> impl Iterator<Item = PersonnelRecord> {
    PERSONNEL
        .iter()
        .map(|&(initials, full_name)| PersonnelRecord {
            initials,
            full_name,
        })
}

/// Looks up a full name by initials, ignoring case and surrounding whitespace.
///
/// Returns an empty string when the initials are not in the directory.
pub fn lookup_name(initials: &str) -> String {
    let initials = initials.trim();
    directory()
        .find(|record| record.initials.eq_ignore_ascii_case(initials))
        .map(|record| record.full_name.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(lookup_name("DL"), "Daniel Lee");
        assert_eq!(lookup_name(" dl "), "Daniel Lee");
        assert_eq!(lookup_name("Gp"), "Grace Park");
    }

    #[test]
    fn unknown_initials_return_empty() {
        assert_eq!(lookup_name("ZZ"), "");
        assert_eq!(lookup_name(""), "");
    }

    #[test]
    fn directory_initials_are_unique() {
        let mut initials: Vec<_> = directory().map(|r| r.initials.to_ascii_uppercase()).collect();
        let total = initials.len();
        initials.sort();
        initials.dedup();
        assert_eq!(initials.len(), total);
        assert_eq!(total, 20);
    }
}
