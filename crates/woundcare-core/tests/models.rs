use std::str::FromStr;

use woundcare_core::error::CoreError;
use woundcare_core::models::assessment::AssessmentInput;
use woundcare_core::models::wound::{Complication, ExudateAmount, WoundStage, WoundType};

#[test]
fn wound_type_wire_form_is_lowercase() {
    let json = serde_json::to_string(&WoundType::Pressure).unwrap();
    assert_eq!(json, "\"pressure\"");
}

#[test]
fn wound_stage_wire_form_is_camel_case() {
    let json = serde_json::to_string(&WoundStage::DeepTissue).unwrap();
    assert_eq!(json, "\"deepTissue\"");

    let parsed: WoundStage = serde_json::from_str("\"stage3\"").unwrap();
    assert_eq!(parsed, WoundStage::Stage3);
}

#[test]
fn complication_wire_form_is_camel_case() {
    let json = serde_json::to_string(&Complication::VascularDisease).unwrap();
    assert_eq!(json, "\"vascularDisease\"");
}

#[test]
fn display_names_translate_known_codes() {
    assert_eq!(WoundType::Pressure.display_name(), "Pressure Ulcer");
    assert_eq!(WoundStage::Stage2.display_name(), "Stage II");
    assert_eq!(Complication::VascularDisease.display_name(), "Vascular Disease");
}

#[test]
fn burn_has_no_display_translation() {
    // The display table never covered burns; the raw code passes through.
    assert_eq!(WoundType::Burn.display_name(), "burn");
}

#[test]
fn from_str_rejects_unknown_codes() {
    assert!(matches!(
        WoundType::from_str("lacerated"),
        Err(CoreError::UnknownWoundType(_))
    ));
    assert!(matches!(
        WoundStage::from_str("stage5"),
        Err(CoreError::UnknownWoundStage(_))
    ));
    assert!(matches!(
        ExudateAmount::from_str("soaking"),
        Err(CoreError::UnknownExudateAmount(_))
    ));
}

#[test]
fn assessment_parses_from_camel_case_json() {
    let input = AssessmentInput::from_json(
        r#"{
            "woundType": "pressure",
            "woundLocation": "sacrum",
            "patientAge": 82,
            "woundStage": "stage3",
            "exudateAmount": "moderate",
            "complications": ["diabetes", "vascularDisease"]
        }"#,
    )
    .unwrap();

    assert_eq!(input.wound_type, Some(WoundType::Pressure));
    assert_eq!(input.wound_stage, Some(WoundStage::Stage3));
    assert_eq!(input.exudate_amount, Some(ExudateAmount::Moderate));
    assert!(input.has_complication(Complication::VascularDisease));
    assert!(!input.has_complication(Complication::Infection));
    assert!(input.has_required_fields());
}

#[test]
fn assessment_defaults_optional_fields() {
    let input = AssessmentInput::from_json(r#"{"woundType": "venous"}"#).unwrap();
    assert_eq!(input.wound_type, Some(WoundType::Venous));
    assert!(input.wound_location.is_none());
    assert!(input.complications.is_empty());
    assert!(!input.has_required_fields());
}

#[test]
fn required_fields_reject_blank_location_and_zero_age() {
    let mut input = AssessmentInput {
        wound_type: Some(WoundType::Surgical),
        wound_location: Some("abdomen".to_string()),
        patient_age: Some(55),
        ..Default::default()
    };
    assert!(input.has_required_fields());

    input.wound_location = Some("   ".to_string());
    assert!(!input.has_required_fields());

    input.wound_location = Some("abdomen".to_string());
    input.patient_age = Some(0);
    assert!(!input.has_required_fields());
}
