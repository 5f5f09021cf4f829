//! Care-plan assembly.
//!
//! Each text block is computed independently from the validated
//! assessment: primary recommendations from the advice table (with two
//! fallback tiers below it), additional recommendations from the
//! complication and exudate bullet groups, fixed-plus-per-type follow-up
//! lines, and conditionally accumulated warnings.

use tracing::debug;

use woundcare_core::models::assessment::AssessmentInput;
use woundcare_core::models::plan::CarePlan;
use woundcare_core::models::wound::{Complication, ExudateAmount, WoundStage, WoundType};
use woundcare_knowledge::{advice, responses};

use crate::error::PlanError;

/// Generate a care plan from a patient assessment.
///
/// Pure function of the input and the static knowledge tables. Fails
/// only when a required field is missing ([`PlanError::InsufficientData`]).
pub fn generate_care_plan(input: &AssessmentInput) -> Result<CarePlan, PlanError> {
    if !input.has_required_fields() {
        return Err(PlanError::InsufficientData);
    }

    // Present after validation; anything else is an assembly fault.
    let wound_type = input.wound_type.ok_or(PlanError::Generation)?;

    let plan = CarePlan {
        summary: patient_summary(input),
        primary_recommendations: primary_recommendations(wound_type, input.wound_stage),
        additional_recommendations: additional_recommendations(input),
        follow_up: follow_up(wound_type),
        warnings: warnings(wound_type, input),
        disclaimer: responses::DISCLAIMER.to_string(),
    };

    debug!(wound_type = %wound_type, "generated care plan");

    Ok(plan)
}

/// Ordered, newline-joined `Label: value` lines for the fields that were
/// provided; absent fields are omitted entirely.
fn patient_summary(input: &AssessmentInput) -> String {
    let mut summary = Vec::new();

    if let Some(age) = input.patient_age {
        summary.push(format!("Patient Age: {age}"));
    }
    if let Some(wound_type) = input.wound_type {
        summary.push(format!("Wound Type: {}", wound_type.display_name()));
    }
    if let Some(stage) = input.wound_stage {
        summary.push(format!("Stage: {}", stage.display_name()));
    }
    if let Some(location) = &input.wound_location {
        summary.push(format!("Location: {location}"));
    }
    if let Some(size) = &input.wound_size {
        summary.push(format!("Size: {size}"));
    }
    if let Some(exudate) = input.exudate_amount {
        summary.push(format!("Exudate: {exudate}"));
    }
    if !input.complications.is_empty() {
        let list = input
            .complications
            .iter()
            .map(|c| c.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        summary.push(format!("Complications: {list}"));
    }

    summary.join("\n")
}

/// Three tiers: stage-specific or general advice from the advice table,
/// then the short per-type fallback, then one generic sentence.
fn primary_recommendations(wound_type: WoundType, stage: Option<WoundStage>) -> String {
    if wound_type == WoundType::Pressure
        && let Some(stage) = stage
        && let Some(text) = advice::pressure_stage_advice(stage)
    {
        return text.to_string();
    }

    if let Some(text) = advice::general_advice(wound_type) {
        return text.to_string();
    }

    responses::fallback_recommendations(wound_type)
        .unwrap_or(responses::GENERIC_RECOMMENDATION)
        .to_string()
}

/// Bullet lines triggered independently by each complication present (in
/// fixed enumeration order, each group whole), then the exudate bullets
/// last. Newline-joined.
fn additional_recommendations(input: &AssessmentInput) -> String {
    let mut recommendations: Vec<&str> = Vec::new();

    for complication in Complication::ALL {
        if input.has_complication(complication) {
            recommendations.extend_from_slice(complication_bullets(complication));
        }
    }

    if let Some(exudate) = input.exudate_amount {
        recommendations.extend_from_slice(exudate_bullets(exudate));
    }

    recommendations.join("\n")
}

fn complication_bullets(complication: Complication) -> &'static [&'static str] {
    match complication {
        Complication::Infection => &[
            "\u{2022} Consider antimicrobial dressings and monitor for systemic infection signs.",
            "\u{2022} Obtain wound culture if purulent drainage is present.",
            "\u{2022} Consult with provider regarding antibiotic therapy.",
        ],
        Complication::Diabetes => &[
            "\u{2022} Ensure optimal glycemic control is maintained.",
            "\u{2022} Monitor blood glucose levels regularly.",
            "\u{2022} Evaluate for arterial insufficiency.",
            "\u{2022} Consider offloading devices for foot wounds.",
        ],
        Complication::Malnutrition => &[
            "\u{2022} Initiate nutrition consultation.",
            "\u{2022} Consider protein supplements.",
            "\u{2022} Monitor albumin and prealbumin levels if possible.",
            "\u{2022} Ensure adequate hydration.",
        ],
        Complication::VascularDisease => &[
            "\u{2022} Consider vascular assessment.",
            "\u{2022} Elevate extremities as appropriate.",
            "\u{2022} Monitor for peripheral circulation changes.",
            "\u{2022} Avoid excessive pressure on affected areas.",
        ],
        Complication::Immunocompromised => &[
            "\u{2022} Monitor closely for signs of infection.",
            "\u{2022} Consider more frequent dressing changes.",
            "\u{2022} Maintain strict aseptic technique during care.",
            "\u{2022} Consider consultation with infectious disease specialist if infection \
             develops.",
        ],
    }
}

fn exudate_bullets(exudate: ExudateAmount) -> &'static [&'static str] {
    match exudate {
        ExudateAmount::Heavy => &[
            "\u{2022} Use highly absorbent dressings (alginates, foams, or super absorbent \
             polymers).",
            "\u{2022} Consider more frequent dressing changes.",
            "\u{2022} Protect periwound skin with barrier products.",
        ],
        ExudateAmount::Moderate => &[
            "\u{2022} Use moderately absorbent dressings (foams, hydrofibers, or alginates).",
            "\u{2022} Change dressing when strike-through is observed.",
        ],
        ExudateAmount::Minimal => &[
            "\u{2022} Use minimally absorbent dressings (thin foams, hydrocolloids).",
            "\u{2022} Avoid dressing that might dry the wound bed.",
        ],
        ExudateAmount::None => &[
            "\u{2022} Use moisture-donating dressings (hydrogels).",
            "\u{2022} Avoid drying out the wound bed.",
        ],
    }
}

/// Three base lines always, plus type-specific lines for pressure,
/// diabetic, venous, and arterial wounds.
fn follow_up(wound_type: WoundType) -> String {
    let mut lines: Vec<&str> = vec![
        "Reassess wound at each dressing change.",
        "Document changes in wound appearance, size, and drainage.",
        "Contact healthcare provider if signs of infection develop, wound deteriorates, or \
         fails to show improvement within 2 weeks.",
    ];

    match wound_type {
        WoundType::Pressure => {
            lines.push("Continue pressure redistribution measures and repositioning schedule.");
            lines.push("Reassess risk factors for new pressure injuries regularly.");
        }
        WoundType::Diabetic => {
            lines.push("Monitor blood glucose levels closely.");
            lines.push("Continue offloading pressure from wound.");
            lines.push("Schedule regular podiatry follow-up visits.");
        }
        WoundType::Venous => {
            lines.push("Maintain compression therapy as directed.");
            lines.push("Elevate legs above heart level when sitting or lying down.");
            lines.push("Monitor for signs of skin breakdown under compression devices.");
        }
        WoundType::Arterial => {
            lines.push("Monitor for changes in pain level or skin color.");
            lines.push("Avoid pressure on the affected extremity.");
            lines.push("Follow up with vascular specialist as scheduled.");
        }
        _ => {}
    }

    lines.join("\n")
}

/// Conditionally accumulated warnings, in fixed order. `None` when no
/// condition triggered, distinct from empty warning text.
fn warnings(wound_type: WoundType, input: &AssessmentInput) -> Option<String> {
    let mut warnings: Vec<&str> = Vec::new();

    if input.patient_age.is_some_and(|age| age > 75) {
        warnings.push(
            "Advanced age may slow healing process. Monitor wound closely for signs of \
             progress.",
        );
    }

    if wound_type == WoundType::Pressure
        && matches!(
            input.wound_stage,
            Some(WoundStage::Stage3 | WoundStage::Stage4)
        )
    {
        warnings.push(
            "Deep pressure injuries require aggressive treatment and close monitoring. \
             Consider specialty consultation.",
        );
    }

    if wound_type == WoundType::Arterial {
        warnings.push(
            "Arterial wounds indicate compromised circulation. Urgent vascular assessment \
             is recommended.",
        );
    }

    if wound_type == WoundType::Diabetic {
        warnings.push(
            "Diabetic wounds require diligent monitoring for infection and strict glycemic \
             control.",
        );
    }

    if input.has_complication(Complication::Infection)
        && input.has_complication(Complication::Diabetes)
    {
        warnings.push(
            "Infected diabetic wounds have increased risk of complications including sepsis \
             and amputation. Consider urgent consultation.",
        );
    }

    if input.has_complication(Complication::VascularDisease)
        && matches!(wound_type, WoundType::Diabetic | WoundType::Pressure)
    {
        warnings.push(
            "Vascular disease can significantly impair healing. Consider vascular \
             assessment prior to extensive debridement.",
        );
    }

    if warnings.is_empty() {
        None
    } else {
        Some(warnings.join("\n"))
    }
}
