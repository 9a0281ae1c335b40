//! Study characteristic fields predicted by the annotator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A categorical attribute of a clinical trial's design, as reported in
/// trial registries. The variants mirror the clinicaltrials.gov fields the
/// classifiers were trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyCharacteristic {
    Allocation,
    EndpointClassification,
    InterventionModel,
    Masking,
    PrimaryPurpose,
    Gender,
    HealthyVolunteers,
    Phase,
}

impl StudyCharacteristic {
    /// Every characteristic, in report order.
    ///
    /// Output ordering is fixed by this array; it is never discovered at
    /// runtime, so reports are deterministic across runs.
    pub const ALL: [StudyCharacteristic; 8] = [
        StudyCharacteristic::Allocation,
        StudyCharacteristic::EndpointClassification,
        StudyCharacteristic::InterventionModel,
        StudyCharacteristic::Masking,
        StudyCharacteristic::PrimaryPurpose,
        StudyCharacteristic::Gender,
        StudyCharacteristic::HealthyVolunteers,
        StudyCharacteristic::Phase,
    ];

    /// Registry field name as it appears in rendered reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            StudyCharacteristic::Allocation => "Allocation",
            StudyCharacteristic::EndpointClassification => "Endpoint Classification",
            StudyCharacteristic::InterventionModel => "Intervention Model",
            StudyCharacteristic::Masking => "Masking",
            StudyCharacteristic::PrimaryPurpose => "Primary Purpose",
            StudyCharacteristic::Gender => "Gender",
            StudyCharacteristic::HealthyVolunteers => "Healthy Volunteers",
            StudyCharacteristic::Phase => "Phase",
        }
    }

    /// Filesystem-safe key: lowercase, internal whitespace collapsed to a
    /// single underscore. Model files on disk are named by this key.
    pub fn storage_key(&self) -> String {
        self.display_name()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl fmt::Display for StudyCharacteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
