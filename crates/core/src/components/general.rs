//! General investigation details and the test platform.

/// Sterility test platform; selects the document template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Rapid sterility testing.
    #[default]
    ScanRdi,
    /// ATP bioluminescence.
    Celsis,
    /// Traditional compendial sterility.
    Usp71,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::ScanRdi, Platform::Celsis, Platform::Usp71];

    /// Label shown to users and used in output file names.
    pub fn label(self) -> &'static str {
        match self {
            Platform::ScanRdi => "ScanRDI",
            Platform::Celsis => "Celsis",
            Platform::Usp71 => "USP 71",
        }
    }

    /// Template file stem, without extension.
    pub fn template_stem(self) -> &'static str {
        match self {
            Platform::ScanRdi => "ScanRDI OOS template",
            Platform::Celsis => "Celsis OOS template",
            Platform::Usp71 => "USP71 OOS template",
        }
    }

    /// Parses a platform label, ignoring case, spaces, `-` and `_`.
    pub fn parse(value: &str) -> Option<Platform> {
        let normalised: String = value
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalised.as_str() {
            "scanrdi" => Some(Platform::ScanRdi),
            "celsis" => Some(Platform::Celsis),
            "usp71" => Some(Platform::Usp71),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a USP 71 subculture was performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Subculture {
    #[default]
    No,
    Yes,
}

impl Subculture {
    pub fn label(self) -> &'static str {
        match self {
            Subculture::No => "No",
            Subculture::Yes => "Yes",
        }
    }

    /// `yes`/`y`/`true` (any case) is `Yes`; anything else is `No`.
    pub fn parse(value: &str) -> Subculture {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Subculture::Yes,
            _ => Subculture::No,
        }
    }
}

/// Identification of the investigation and the sample under test.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneralInfo {
    pub platform: Platform,
    pub oos_id: String,
    pub client_name: String,
    pub sample_id: String,
    pub sample_name: String,
    pub lot_number: String,
    /// `DDMonYY`
    pub test_date: String,
    pub dosage_form: String,
    pub monthly_cleaning_date: String,
}

/// Positive control and organism details.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub control_positive: String,
    pub control_lot: String,
    pub control_data: String,
    pub organism_morphology: String,
}

/// Fields that only apply to one platform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformDetails {
    /// ScanRDI instrument id.
    pub scan_id: String,
    /// Celsis luminometer id.
    pub luminometer_id: String,
    /// Celsis reagent kit lot.
    pub reagent_kit_lot: String,
    /// USP 71 fluid thioglycollate medium lot.
    pub ftm_lot: String,
    /// USP 71 tryptic soy broth lot.
    pub tsb_lot: String,
    pub subculture: Subculture,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_labels_loosely() {
        assert_eq!(Platform::parse("ScanRDI"), Some(Platform::ScanRdi));
        assert_eq!(Platform::parse("scan-rdi"), Some(Platform::ScanRdi));
        assert_eq!(Platform::parse("USP 71"), Some(Platform::Usp71));
        assert_eq!(Platform::parse("usp71"), Some(Platform::Usp71));
        assert_eq!(Platform::parse("CELSIS"), Some(Platform::Celsis));
        assert_eq!(Platform::parse("BacT"), None);
    }

    #[test]
    fn platform_labels_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(Platform::parse(platform.label()), Some(platform));
        }
    }

    #[test]
    fn template_stems_match_platform() {
        assert_eq!(Platform::ScanRdi.template_stem(), "ScanRDI OOS template");
        assert_eq!(Platform::Usp71.template_stem(), "USP71 OOS template");
    }

    #[test]
    fn subculture_defaults_to_no() {
        assert_eq!(Subculture::parse("Yes"), Subculture::Yes);
        assert_eq!(Subculture::parse(" y "), Subculture::Yes);
        assert_eq!(Subculture::parse("maybe"), Subculture::No);
        assert_eq!(Subculture::parse(""), Subculture::No);
    }
}
