use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::wound::{Complication, ExudateAmount, WoundStage, WoundType};

/// Patient assessment data consumed by the care-plan generator.
///
/// Wound type, location, and age are required for generation; everything
/// else refines the plan when present. Required fields are still `Option`
/// here because the input arrives from an external form or JSON document
/// and "missing" must be reportable as insufficient data rather than a
/// parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentInput {
    pub wound_type: Option<WoundType>,
    pub wound_location: Option<String>,
    pub patient_age: Option<u32>,
    pub wound_stage: Option<WoundStage>,
    pub wound_size: Option<String>,
    pub exudate_amount: Option<ExudateAmount>,
    pub complications: Vec<Complication>,
}

impl AssessmentInput {
    /// Parse an assessment from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn has_complication(&self, complication: Complication) -> bool {
        self.complications.contains(&complication)
    }

    /// Whether the minimum required fields are present and non-empty.
    ///
    /// An age of zero counts as missing, as does a blank location.
    pub fn has_required_fields(&self) -> bool {
        self.wound_type.is_some()
            && self
                .wound_location
                .as_deref()
                .is_some_and(|loc| !loc.trim().is_empty())
            && self.patient_age.is_some_and(|age| age > 0)
    }
}
