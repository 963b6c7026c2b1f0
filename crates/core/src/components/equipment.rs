//! Biosafety cabinets used for processing and changeover.

use crate::facility::{resolve, EquipmentRecord};

/// Which of the three equipment layouts a test used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquipmentScenario {
    /// One cabinet for both processing and changeover.
    SameEquipment,
    /// Two cabinets in one suite.
    SameSuite,
    /// Two cabinets in different suites.
    DifferentSuites,
}

/// Resolved locations of the processing and changeover cabinets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentInfo {
    pub processing: EquipmentRecord,
    pub changeover: EquipmentRecord,
}

impl EquipmentInfo {
    /// Resolves both cabinets. A blank changeover id means the processing cabinet was reused.
    pub fn resolve(processing_id: &str, changeover_id: &str) -> Self {
        let changeover_id = match changeover_id.trim() {
            "" => processing_id,
            id => id,
        };
        Self {
            processing: resolve(processing_id),
            changeover: resolve(changeover_id),
        }
    }

    pub fn scenario(&self) -> EquipmentScenario {
        if self.processing.number() == self.changeover.number() {
            EquipmentScenario::SameEquipment
        } else if self.processing.suite == self.changeover.suite {
            EquipmentScenario::SameSuite
        } else {
            EquipmentScenario::DifferentSuites
        }
    }
}
