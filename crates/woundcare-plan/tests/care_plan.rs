use woundcare_core::models::assessment::AssessmentInput;
use woundcare_core::models::wound::{Complication, ExudateAmount, WoundStage, WoundType};
use woundcare_knowledge::{advice, responses};
use woundcare_plan::{generate_care_plan, PlanError};

fn minimal_input(wound_type: WoundType) -> AssessmentInput {
    AssessmentInput {
        wound_type: Some(wound_type),
        wound_location: Some("left heel".to_string()),
        patient_age: Some(40),
        ..Default::default()
    }
}

#[test]
fn missing_required_fields_is_insufficient_data() {
    let empty = AssessmentInput::default();
    assert_eq!(generate_care_plan(&empty), Err(PlanError::InsufficientData));

    let mut input = minimal_input(WoundType::Surgical);
    input.wound_type = None;
    assert_eq!(generate_care_plan(&input), Err(PlanError::InsufficientData));

    let mut input = minimal_input(WoundType::Surgical);
    input.wound_location = None;
    assert_eq!(generate_care_plan(&input), Err(PlanError::InsufficientData));

    let mut input = minimal_input(WoundType::Surgical);
    input.patient_age = None;
    assert_eq!(generate_care_plan(&input), Err(PlanError::InsufficientData));
}

#[test]
fn zero_age_counts_as_missing() {
    let mut input = minimal_input(WoundType::Traumatic);
    input.patient_age = Some(0);
    assert_eq!(generate_care_plan(&input), Err(PlanError::InsufficientData));
}

#[test]
fn insufficient_data_regardless_of_other_fields() {
    let input = AssessmentInput {
        wound_stage: Some(WoundStage::Stage4),
        exudate_amount: Some(ExudateAmount::Heavy),
        complications: vec![Complication::Infection, Complication::Diabetes],
        ..Default::default()
    };
    assert_eq!(generate_care_plan(&input), Err(PlanError::InsufficientData));
}

#[test]
fn pressure_stage_advice_is_the_primary_recommendation() {
    let mut input = minimal_input(WoundType::Pressure);
    input.wound_stage = Some(WoundStage::Stage2);

    let plan = generate_care_plan(&input).unwrap();
    assert_eq!(
        plan.primary_recommendations,
        advice::pressure_stage_advice(WoundStage::Stage2).unwrap()
    );
}

#[test]
fn arterial_without_stage_uses_general_advice() {
    let plan = generate_care_plan(&minimal_input(WoundType::Arterial)).unwrap();
    assert_eq!(
        plan.primary_recommendations,
        advice::general_advice(WoundType::Arterial).unwrap()
    );
}

#[test]
fn burn_drops_to_the_generic_recommendation() {
    // Burn has neither a general advice entry nor a per-type fallback.
    let plan = generate_care_plan(&minimal_input(WoundType::Burn)).unwrap();
    assert_eq!(plan.primary_recommendations, responses::GENERIC_RECOMMENDATION);
}

#[test]
fn warnings_are_absent_when_nothing_triggers() {
    let plan = generate_care_plan(&minimal_input(WoundType::Surgical)).unwrap();
    assert_eq!(plan.warnings, None);
}

#[test]
fn arterial_type_triggers_its_warning() {
    let plan = generate_care_plan(&minimal_input(WoundType::Arterial)).unwrap();
    let warnings = plan.warnings.unwrap();
    assert!(warnings.contains("Urgent vascular assessment is recommended."));
}

#[test]
fn warning_conditions_accumulate_in_order() {
    let input = AssessmentInput {
        wound_type: Some(WoundType::Diabetic),
        wound_location: Some("right foot".to_string()),
        patient_age: Some(80),
        complications: vec![Complication::Infection, Complication::Diabetes],
        ..Default::default()
    };

    let plan = generate_care_plan(&input).unwrap();
    let warnings = plan.warnings.unwrap();
    let lines: Vec<&str> = warnings.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Advanced age may slow healing"));
    assert!(lines[1].starts_with("Diabetic wounds require diligent monitoring"));
    assert!(lines[2].starts_with("Infected diabetic wounds"));
}

#[test]
fn vascular_disease_warning_requires_diabetic_or_pressure_type() {
    let mut input = minimal_input(WoundType::Venous);
    input.complications = vec![Complication::VascularDisease];
    let plan = generate_care_plan(&input).unwrap();
    assert_eq!(plan.warnings, None);

    let mut input = minimal_input(WoundType::Pressure);
    input.complications = vec![Complication::VascularDisease];
    let plan = generate_care_plan(&input).unwrap();
    assert!(
        plan.warnings
            .unwrap()
            .contains("Vascular disease can significantly impair healing.")
    );
}

#[test]
fn additional_recommendations_order_complications_then_exudate() {
    let input = AssessmentInput {
        wound_type: Some(WoundType::Diabetic),
        wound_location: Some("right foot".to_string()),
        patient_age: Some(60),
        exudate_amount: Some(ExudateAmount::Heavy),
        // Provided out of enumeration order on purpose.
        complications: vec![Complication::Diabetes, Complication::Infection],
        ..Default::default()
    };

    let plan = generate_care_plan(&input).unwrap();
    let lines: Vec<&str> = plan.additional_recommendations.lines().collect();

    // Infection bullets (3) come first despite input order, then the
    // diabetes bullets (4), then the heavy-exudate bullets (3).
    assert_eq!(lines.len(), 10);
    assert!(lines[0].contains("antimicrobial dressings"));
    assert!(lines[3].contains("glycemic control"));
    assert!(lines[7].contains("highly absorbent dressings"));
}

#[test]
fn exudate_bullets_are_mutually_exclusive() {
    let mut input = minimal_input(WoundType::Surgical);
    input.exudate_amount = Some(ExudateAmount::None);

    let plan = generate_care_plan(&input).unwrap();
    let lines: Vec<&str> = plan.additional_recommendations.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("moisture-donating dressings"));
}

#[test]
fn no_triggers_yield_empty_additional_recommendations() {
    let plan = generate_care_plan(&minimal_input(WoundType::Surgical)).unwrap();
    assert!(plan.additional_recommendations.is_empty());
}

#[test]
fn follow_up_has_three_base_lines_plus_type_lines() {
    let surgical = generate_care_plan(&minimal_input(WoundType::Surgical)).unwrap();
    assert_eq!(surgical.follow_up.lines().count(), 3);

    let venous = generate_care_plan(&minimal_input(WoundType::Venous)).unwrap();
    assert_eq!(venous.follow_up.lines().count(), 6);
    assert!(venous.follow_up.contains("Maintain compression therapy as directed."));

    let pressure = generate_care_plan(&minimal_input(WoundType::Pressure)).unwrap();
    assert_eq!(pressure.follow_up.lines().count(), 5);
}

#[test]
fn summary_lists_present_fields_in_order_with_display_names() {
    let input = AssessmentInput {
        wound_type: Some(WoundType::Pressure),
        wound_location: Some("sacrum".to_string()),
        patient_age: Some(82),
        wound_stage: Some(WoundStage::Stage3),
        wound_size: Some("4cm x 3cm".to_string()),
        exudate_amount: Some(ExudateAmount::Moderate),
        complications: vec![Complication::Malnutrition, Complication::VascularDisease],
    };

    let plan = generate_care_plan(&input).unwrap();
    let expected = "Patient Age: 82\n\
                    Wound Type: Pressure Ulcer\n\
                    Stage: Stage III\n\
                    Location: sacrum\n\
                    Size: 4cm x 3cm\n\
                    Exudate: moderate\n\
                    Complications: Malnutrition, Vascular Disease";
    assert_eq!(plan.summary, expected);
}

#[test]
fn summary_omits_absent_fields() {
    let plan = generate_care_plan(&minimal_input(WoundType::Traumatic)).unwrap();
    assert_eq!(
        plan.summary,
        "Patient Age: 40\nWound Type: Traumatic Wound\nLocation: left heel"
    );
}

#[test]
fn every_plan_carries_the_disclaimer() {
    let plan = generate_care_plan(&minimal_input(WoundType::Venous)).unwrap();
    assert_eq!(plan.disclaimer, responses::DISCLAIMER);
}

#[test]
fn care_plan_serializes_with_camel_case_fields() {
    let plan = generate_care_plan(&minimal_input(WoundType::Venous)).unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert!(json["primaryRecommendations"].is_string());
    assert!(json["followUp"].is_string());
    // Venous with no complications triggers no warnings; the field is
    // still present, as null.
    assert!(json["warnings"].is_null());
}

#[test]
fn error_messages_match_the_user_facing_text() {
    assert_eq!(
        PlanError::InsufficientData.to_string(),
        "Insufficient data. Please provide at least the wound type, location, and patient age."
    );
    assert_eq!(
        PlanError::Generation.to_string(),
        "An error occurred while generating the care plan. Please try again."
    );
}
