use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Category of wound.
///
/// The lowercase code form doubles as the knowledge-table key and the
/// token the chatbot scans for in user queries, so iteration order of
/// [`WoundType::ALL`] matters: it is the advice-table definition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WoundType {
    Pressure,
    Diabetic,
    Venous,
    Arterial,
    Surgical,
    Traumatic,
    Burn,
}

impl WoundType {
    /// All wound types in advice-table order.
    pub const ALL: [WoundType; 7] = [
        WoundType::Pressure,
        WoundType::Diabetic,
        WoundType::Venous,
        WoundType::Arterial,
        WoundType::Surgical,
        WoundType::Traumatic,
        WoundType::Burn,
    ];

    /// Lowercase code form, e.g. `"pressure"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            WoundType::Pressure => "pressure",
            WoundType::Diabetic => "diabetic",
            WoundType::Venous => "venous",
            WoundType::Arterial => "arterial",
            WoundType::Surgical => "surgical",
            WoundType::Traumatic => "traumatic",
            WoundType::Burn => "burn",
        }
    }

    /// Human-readable name for care-plan summaries.
    ///
    /// The translation table covers the six ulcer/wound types; burn has
    /// no entry and falls back to its code form.
    pub fn display_name(&self) -> &'static str {
        match self {
            WoundType::Pressure => "Pressure Ulcer",
            WoundType::Diabetic => "Diabetic Ulcer",
            WoundType::Venous => "Venous Ulcer",
            WoundType::Arterial => "Arterial Ulcer",
            WoundType::Surgical => "Surgical Wound",
            WoundType::Traumatic => "Traumatic Wound",
            WoundType::Burn => "burn",
        }
    }
}

impl fmt::Display for WoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WoundType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WoundType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownWoundType(s.to_string()))
    }
}

/// Pressure-ulcer severity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WoundStage {
    Stage1,
    Stage2,
    Stage3,
    Stage4,
    Unstageable,
    DeepTissue,
}

impl WoundStage {
    pub const ALL: [WoundStage; 6] = [
        WoundStage::Stage1,
        WoundStage::Stage2,
        WoundStage::Stage3,
        WoundStage::Stage4,
        WoundStage::Unstageable,
        WoundStage::DeepTissue,
    ];

    /// Advice-table key form, e.g. `"stage2"` or `"deepTissue"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            WoundStage::Stage1 => "stage1",
            WoundStage::Stage2 => "stage2",
            WoundStage::Stage3 => "stage3",
            WoundStage::Stage4 => "stage4",
            WoundStage::Unstageable => "unstageable",
            WoundStage::DeepTissue => "deepTissue",
        }
    }

    /// Human-readable name for care-plan summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            WoundStage::Stage1 => "Stage I",
            WoundStage::Stage2 => "Stage II",
            WoundStage::Stage3 => "Stage III",
            WoundStage::Stage4 => "Stage IV",
            WoundStage::Unstageable => "Unstageable",
            WoundStage::DeepTissue => "Deep Tissue Injury",
        }
    }
}

impl fmt::Display for WoundStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WoundStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WoundStage::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| CoreError::UnknownWoundStage(s.to_string()))
    }
}

/// Amount of wound drainage fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExudateAmount {
    None,
    Minimal,
    Moderate,
    Heavy,
}

impl ExudateAmount {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExudateAmount::None => "none",
            ExudateAmount::Minimal => "minimal",
            ExudateAmount::Moderate => "moderate",
            ExudateAmount::Heavy => "heavy",
        }
    }
}

impl fmt::Display for ExudateAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExudateAmount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ExudateAmount::None),
            "minimal" => Ok(ExudateAmount::Minimal),
            "moderate" => Ok(ExudateAmount::Moderate),
            "heavy" => Ok(ExudateAmount::Heavy),
            other => Err(CoreError::UnknownExudateAmount(other.to_string())),
        }
    }
}

/// Patient condition complicating wound healing.
///
/// [`Complication::ALL`] fixes the order in which complication-driven
/// recommendation bullets and warnings are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Complication {
    Infection,
    Diabetes,
    Malnutrition,
    VascularDisease,
    Immunocompromised,
}

impl Complication {
    pub const ALL: [Complication; 5] = [
        Complication::Infection,
        Complication::Diabetes,
        Complication::Malnutrition,
        Complication::VascularDisease,
        Complication::Immunocompromised,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complication::Infection => "infection",
            Complication::Diabetes => "diabetes",
            Complication::Malnutrition => "malnutrition",
            Complication::VascularDisease => "vascularDisease",
            Complication::Immunocompromised => "immunocompromised",
        }
    }

    /// Human-readable name for care-plan summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            Complication::Infection => "Infection",
            Complication::Diabetes => "Diabetes",
            Complication::Malnutrition => "Malnutrition",
            Complication::VascularDisease => "Vascular Disease",
            Complication::Immunocompromised => "Immunocompromised",
        }
    }
}

impl fmt::Display for Complication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complication {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complication::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownComplication(s.to_string()))
    }
}
