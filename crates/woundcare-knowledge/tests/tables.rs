use woundcare_core::models::wound::{WoundStage, WoundType};
use woundcare_knowledge::categories::Category;
use woundcare_knowledge::{advice, faq, responses, risk, rubric, therapies};

#[test]
fn pressure_stages_lead_the_advice_table_in_order() {
    let stage_keys: Vec<&str> = advice::advice_entries()
        .iter()
        .take(6)
        .map(|e| e.stage_key)
        .collect();

    assert_eq!(
        stage_keys,
        ["stage1", "stage2", "stage3", "stage4", "unstageable", "deepTissue"]
    );
    assert!(
        advice::advice_entries()[..6]
            .iter()
            .all(|e| e.wound_type == WoundType::Pressure)
    );
}

#[test]
fn every_pressure_stage_has_advice() {
    for stage in WoundStage::ALL {
        assert!(
            advice::pressure_stage_advice(stage).is_some(),
            "missing advice for {stage}"
        );
    }
}

#[test]
fn general_advice_covers_all_types_except_pressure_and_burn() {
    for wound_type in WoundType::ALL {
        let general = advice::general_advice(wound_type);
        match wound_type {
            WoundType::Pressure | WoundType::Burn => {
                assert!(general.is_none(), "{wound_type} should have no general entry")
            }
            _ => assert!(general.is_some(), "{wound_type} should have a general entry"),
        }
    }
}

#[test]
fn burn_entries_are_keyed_by_depth() {
    assert!(advice::advice(WoundType::Burn, "superficial").is_some());
    assert!(advice::advice(WoundType::Burn, "partial").is_some());
    assert!(advice::advice(WoundType::Burn, "full").is_some());
}

#[test]
fn faq_table_order_is_stable() {
    let entries = faq::faq_entries();
    assert_eq!(entries.len(), 18);
    assert_eq!(entries[0].question, "how often should dressings be changed");
    assert_eq!(entries[1].question, "signs of infection");
    assert_eq!(entries[17].question, "wound dressing selection");
}

#[test]
fn faq_questions_are_unique_and_lowercase() {
    let entries = faq::faq_entries();
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.question, entry.question.to_lowercase());
        assert!(
            entries[i + 1..].iter().all(|e| e.question != entry.question),
            "duplicate question: {}",
            entry.question
        );
    }
}

#[test]
fn category_order_and_keywords() {
    assert_eq!(Category::ALL[0], Category::Dressing);
    assert_eq!(Category::ALL[6], Category::Cleaning);

    for category in Category::ALL {
        assert!(!category.keywords().is_empty());
        assert!(!category.response().is_empty());
    }

    assert!(Category::Stages.response().contains("Stage I:"));
}

#[test]
fn fixed_response_sets_have_three_entries() {
    assert_eq!(responses::GREETINGS.len(), 3);
    assert_eq!(responses::DEFAULTS.len(), 3);
}

#[test]
fn fallback_recommendations_skip_burn() {
    for wound_type in WoundType::ALL {
        let fallback = responses::fallback_recommendations(wound_type);
        if wound_type == WoundType::Burn {
            assert!(fallback.is_none());
        } else {
            assert!(fallback.is_some());
        }
    }
}

#[test]
fn reference_tables_have_expected_sections() {
    let sections: Vec<&str> = rubric::assessment_rubric().iter().map(|s| s.name).collect();
    assert_eq!(
        sections,
        [
            "wound bed appearance",
            "exudate amount",
            "exudate type",
            "periwound condition"
        ]
    );

    let scales: Vec<&str> = risk::risk_scales().iter().map(|s| s.name).collect();
    assert_eq!(
        scales,
        ["braden scale", "wagner scale", "push tool", "WIfI classification"]
    );

    assert_eq!(therapies::advanced_therapies().len(), 4);
    assert!(
        therapies::advanced_therapies()
            .iter()
            .any(|t| t.name == "growth factors")
    );
}

#[test]
fn reference_tables_serialize_to_json() {
    let rubric = serde_json::to_value(rubric::assessment_rubric()).unwrap();
    assert_eq!(rubric[0]["name"], "wound bed appearance");
    assert_eq!(rubric[0]["items"][0]["term"], "granulation");

    let scales = serde_json::to_value(risk::risk_scales()).unwrap();
    assert_eq!(scales[0]["name"], "braden scale");
    assert!(scales[1]["scoring"].is_null());

    let therapies = serde_json::to_value(therapies::advanced_therapies()).unwrap();
    assert_eq!(therapies[3]["name"], "growth factors");
}
