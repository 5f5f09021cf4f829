use woundcare_chat::normalize::normalize_query;
use woundcare_chat::picker::FixedPicker;
use woundcare_chat::resolver::resolve;

use woundcare_core::models::wound::{WoundStage, WoundType};
use woundcare_knowledge::categories::Category;
use woundcare_knowledge::{advice, faq, responses};

fn resolve_raw(raw: &str) -> String {
    let query = normalize_query(raw);
    resolve(&query, &mut FixedPicker(0))
}

#[test]
fn greeting_takes_priority() {
    let mut picker = FixedPicker(2);
    let response = resolve(&normalize_query("hello there"), &mut picker);
    assert_eq!(response, responses::GREETINGS[2]);
}

#[test]
fn greeting_matches_by_containment() {
    // "hi" anywhere in the query is enough; the original used plain
    // substring checks and this preserves that.
    let response = resolve_raw("this is my third question");
    assert!(responses::GREETINGS.contains(&response.as_str()));
}

#[test]
fn faq_exact_match_returns_verbatim_answer() {
    let expected = faq::faq_entries()
        .iter()
        .find(|e| e.question == "signs of infection")
        .unwrap()
        .answer;
    assert_eq!(resolve_raw("Signs of infection!"), expected);
}

#[test]
fn faq_all_words_present_match() {
    let expected = faq::faq_entries()
        .iter()
        .find(|e| e.question == "signs of infection")
        .unwrap()
        .answer;
    assert_eq!(
        resolve_raw("what are common signs of a wound infection"),
        expected
    );
}

#[test]
fn faq_key_as_substring_of_query_matches() {
    let expected = faq::faq_entries()
        .iter()
        .find(|e| e.question == "compression therapy")
        .unwrap()
        .answer;
    assert_eq!(
        resolve_raw("tell me about compression therapy options"),
        expected
    );
}

#[test]
fn pressure_stage_digit_extraction() {
    let stage2 = advice::pressure_stage_advice(WoundStage::Stage2).unwrap();
    assert_eq!(
        resolve_raw("stage 2 pressure ulcer"),
        format!("For pressure ulcers, stage2: {stage2}")
    );
}

#[test]
fn pressure_stage_roman_extraction() {
    let stage2 = advice::pressure_stage_advice(WoundStage::Stage2).unwrap();
    assert_eq!(
        resolve_raw("stage II pressure"),
        format!("For pressure ulcers, stage2: {stage2}")
    );
}

#[test]
fn pressure_stage_roman_iv() {
    let stage4 = advice::pressure_stage_advice(WoundStage::Stage4).unwrap();
    assert_eq!(
        resolve_raw("pressure ulcer stage iv"),
        format!("For pressure ulcers, stage4: {stage4}")
    );
}

#[test]
fn pressure_unstageable_literal_keyword() {
    let unstageable = advice::advice(WoundType::Pressure, "unstageable").unwrap();
    assert_eq!(
        resolve_raw("unstageable pressure ulcer"),
        format!("For pressure ulcers, unstageable: {unstageable}")
    );
}

#[test]
fn deep_tissue_literal_key_never_finds_advice() {
    // The literal scan resolves "deep tissue", but the advice table keys
    // the entry as deepTissue, so the lookup misses and the stage prompt
    // comes back. Preserved from the original.
    assert_eq!(
        resolve_raw("deep tissue pressure injury"),
        responses::STAGE_PROMPT
    );
}

#[test]
fn pressure_without_stage_prompts_for_one() {
    assert_eq!(resolve_raw("pressure ulcer treatment"), responses::STAGE_PROMPT);
}

#[test]
fn non_pressure_type_returns_general_advice() {
    let venous = advice::general_advice(WoundType::Venous).unwrap();
    assert_eq!(
        resolve_raw("how do i treat a venous ulcer"),
        format!("For venous wounds: {venous}")
    );
}

#[test]
fn burn_mention_falls_through_past_the_advice_table() {
    // Burn has depth entries but no general entry, so rule 5 produces
    // nothing and the query drops to the later rules.
    let response = resolve(&normalize_query("burn treatment"), &mut FixedPicker(1));
    assert_eq!(response, responses::DEFAULTS[1]);
}

#[test]
fn category_keyword_match() {
    assert_eq!(
        resolve_raw("how should i scrub and rinse it"),
        Category::Cleaning.response()
    );
}

#[test]
fn category_order_prefers_dressing_over_infection() {
    // "infected dressing" carries keywords for two categories; dressing
    // comes first in the category order.
    assert_eq!(resolve_raw("infected dressing"), Category::Dressing.response());
}

#[test]
fn unmatched_query_returns_default() {
    let mut picker = FixedPicker(0);
    let response = resolve(&normalize_query("xyzzy unrelated gibberish"), &mut picker);
    assert_eq!(response, responses::DEFAULTS[0]);
}
