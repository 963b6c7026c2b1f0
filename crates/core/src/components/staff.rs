//! Analysts involved in the test.

use crate::personnel::lookup_name;

/// A staff member as entered on the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaffMember {
    pub name: String,
    pub initials: String,
}

impl StaffMember {
    /// Builds a staff member, filling a blank name from the personnel directory.
    pub fn resolve(name: &str, initials: &str) -> Self {
        let initials = initials.trim().to_string();
        let name = match name.trim() {
            "" => lookup_name(&initials),
            entered => entered.to_string(),
        };
        Self { name, initials }
    }
}

/// Everyone who handled the sample.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Personnel {
    pub prepper: StaffMember,
    /// Performed sample processing.
    pub analyst: StaffMember,
    /// Performed the changeover.
    pub changeover: StaffMember,
    pub reader: StaffMember,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_filled_from_initials() {
        let member = StaffMember::resolve("  ", " gp ");
        assert_eq!(member.name, "Grace Park");
        assert_eq!(member.initials, "gp");
    }

    #[test]
    fn entered_name_wins_over_directory() {
        let member = StaffMember::resolve("G. Park", "GP");
        assert_eq!(member.name, "G. Park");
    }

    #[test]
    fn unknown_initials_leave_name_blank() {
        assert_eq!(StaffMember::resolve("", "QQ").name, "");
    }
}
