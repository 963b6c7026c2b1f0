//! Facility lookup: where a biosafety cabinet lives.
//!
//! An equipment id resolves to a cleanroom suite, the suite's room id, and the zone within the
//! suite. The zone depends only on the parity of the id; the suite depends only on which fixed
//! group the id belongs to. Nothing here fails: unknown or malformed ids resolve to sentinels.

use crate::constants::{
    EQUIPMENT_TAG_PREFIX, INNERMOST_ZONE, MIDDLE_ZONE, SUITE_EQUIPMENT, SUITE_ROOMS, UNKNOWN,
};

/// Zone of a cleanroom suite that houses a cabinet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Middle ISO 7 buffer room (odd ids).
    A,
    /// Innermost ISO 7 room (even ids, and any id that is not a number).
    B,
}

impl Zone {
    pub fn suffix(self) -> &'static str {
        match self {
            Zone::A => "A",
            Zone::B => "B",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Zone::A => MIDDLE_ZONE,
            Zone::B => INNERMOST_ZONE,
        }
    }
}

/// Location of a piece of equipment, derived from its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentRecord {
    /// The id as entered, trimmed.
    pub equipment_id: String,
    pub room_id: String,
    pub suite: String,
    pub zone: Zone,
}

impl EquipmentRecord {
    pub fn suffix(&self) -> &'static str {
        self.zone.suffix()
    }

    pub fn zone_description(&self) -> &'static str {
        self.zone.description()
    }

    /// Cabinet number with any `E`/`E00` tag prefix removed, e.g. `1310` for `E001310`.
    pub fn number(&self) -> &str {
        cabinet_number(&self.equipment_id)
    }

    /// Asset tag as printed on the cabinet, e.g. `E001310` for `1310` or `e1310`.
    ///
    /// Empty when no cabinet was entered.
    pub fn tag(&self) -> String {
        match self.number() {
            "" => String::new(),
            number => format!("{EQUIPMENT_TAG_PREFIX}{number}"),
        }
    }
}

/// Resolves an equipment id to its suite, room and zone.
pub fn resolve(equipment_id: &str) -> EquipmentRecord {
    let equipment_id = equipment_id.trim();
    let number = cabinet_number(equipment_id);
    let suite = suite_for(number);
    let room_id = room_for(suite);

    let zone = match number.parse::<i64>() {
        Ok(n) if n.rem_euclid(2) == 1 => Zone::A,
        Ok(_) => Zone::B,
        Err(_) => {
            if !number.is_empty() {
                tracing::warn!("equipment id '{}' is not numeric; assuming zone B", equipment_id);
            }
            Zone::B
        }
    };

    tracing::debug!(
        "resolved equipment {} to suite {} room {} zone {}",
        equipment_id,
        suite,
        room_id,
        zone.suffix()
    );

    EquipmentRecord {
        equipment_id: equipment_id.to_string(),
        room_id: room_id.to_string(),
        suite: suite.to_string(),
        zone,
    }
}

/// Strips a leading `E00` or `E` (either case) from a cabinet id.
fn cabinet_number(equipment_id: &str) -> &str {
    match equipment_id.strip_prefix(['E', 'e']) {
        Some(rest) => rest.strip_prefix("00").unwrap_or(rest),
        None => equipment_id,
    }
}

fn suite_for(number: &str) -> &'static str {
    SUITE_EQUIPMENT
        .iter()
        .find(|(_, ids)| ids.contains(&number))
        .map(|(suite, _)| *suite)
        .unwrap_or(UNKNOWN)
}

fn room_for(suite: &str) -> &'static str {
    SUITE_ROOMS
        .iter()
        .find(|(s, _)| *s == suite)
        .map(|(_, room)| *room)
        .unwrap_or(UNKNOWN)
}
