//! Risk assessment scale reference data.

use serde::Serialize;

/// A clinical risk or classification scale.
///
/// The scales are heterogeneous: Braden and PUSH carry parameters plus a
/// scoring summary, Wagner carries graded descriptions, WIfI carries
/// parameters plus an application note. Unused fields stay empty.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskScale {
    pub name: &'static str,
    pub purpose: &'static str,
    pub parameters: &'static [&'static str],
    pub grades: &'static [&'static str],
    pub scoring: Option<&'static str>,
    pub application: Option<&'static str>,
}

/// All risk scales, in definition order.
pub fn risk_scales() -> &'static [RiskScale] {
    &SCALES
}

static SCALES: [RiskScale; 4] = [
    RiskScale {
        name: "braden scale",
        purpose: "Pressure ulcer risk assessment",
        parameters: &[
            "Sensory perception",
            "Moisture",
            "Activity",
            "Mobility",
            "Nutrition",
            "Friction and shear",
        ],
        grades: &[],
        scoring: Some(
            "6-23 points: \u{2264}9 (Severe risk), 10-12 (High risk), 13-14 (Moderate \
             risk), 15-18 (Mild risk), \u{2265}19 (No risk)",
        ),
        application: None,
    },
    RiskScale {
        name: "wagner scale",
        purpose: "Diabetic foot ulcer classification",
        parameters: &[],
        grades: &[
            "Grade 0: Intact skin with bony deformity",
            "Grade 1: Superficial ulcer",
            "Grade 2: Deep ulcer to tendon or joint capsule",
            "Grade 3: Deep ulcer with abscess or osteomyelitis",
            "Grade 4: Partial foot gangrene",
            "Grade 5: Whole foot gangrene",
        ],
        scoring: None,
        application: None,
    },
    RiskScale {
        name: "push tool",
        purpose: "Pressure ulcer healing assessment",
        parameters: &["Surface area", "Exudate amount", "Tissue type"],
        grades: &[],
        scoring: Some("0-17 points: Decreasing scores indicate wound healing"),
        application: None,
    },
    RiskScale {
        name: "WIfI classification",
        purpose: "Threatened lower extremity assessment",
        parameters: &["Wound (0-3)", "Ischemia (0-3)", "foot Infection (0-3)"],
        grades: &[],
        scoring: None,
        application: Some("Guides need for revascularization and amputation risk"),
    },
];
