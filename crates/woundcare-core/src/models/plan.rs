use serde::{Deserialize, Serialize};

/// A generated wound care plan.
///
/// Every field is assembled fresh per generation call. `warnings` is
/// `None` when no warning condition triggered; the absence of the field
/// is distinct from empty warning text and callers render it differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    pub summary: String,
    pub primary_recommendations: String,
    pub additional_recommendations: String,
    pub follow_up: String,
    pub warnings: Option<String>,
    pub disclaimer: String,
}
