//! Ordered response resolution.
//!
//! A normalized query runs down a fixed rule chain; the first rule that
//! produces a response wins. The order is part of the contract:
//!
//! 1. greeting containment
//! 2. FAQ exact match
//! 3. FAQ all-words-present match (table order)
//! 4. FAQ substring match (table order)
//! 5. wound-type mention, with stage extraction for pressure ulcers
//! 6. category keyword match
//! 7. random default response
//!
//! Absence of a match is a defined outcome (rule 7), never an error.

use std::sync::LazyLock;

use regex::Regex;

use woundcare_core::models::wound::WoundType;
use woundcare_knowledge::{advice, categories::Category, faq, responses};

use crate::picker::ResponsePicker;

const GREETING_PHRASES: [&str; 7] = [
    "hello",
    "hi",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Literal stage keywords scanned for in queries. "deep tissue" is
/// scanned with the space even though the advice table keys the entry as
/// `deepTissue`, so a literal hit on it never finds advice and drops to
/// the stage prompt instead.
const STAGE_KEYWORDS: [&str; 6] = [
    "stage1",
    "stage2",
    "stage3",
    "stage4",
    "unstageable",
    "deep tissue",
];

static STAGE_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"stage\s*([1-4])").expect("stage digit pattern is valid"));

// Deliberately permissive: the group can match malformed or empty roman
// tokens, which then map to no stage at all. Only i/ii/iii/iv resolve.
static STAGE_ROMAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"stage\s*(i{1,3}v?|iv|v?i{0,3})").expect("stage roman pattern is valid")
});

/// Resolve a normalized query to exactly one response string.
pub fn resolve(query: &str, picker: &mut dyn ResponsePicker) -> String {
    if is_greeting(query) {
        return responses::GREETINGS[picker.pick(responses::GREETINGS.len())].to_string();
    }

    if let Some(answer) = faq_response(query) {
        return answer.to_string();
    }

    if let Some(response) = wound_type_response(query) {
        return response;
    }

    if let Some(response) = category_response(query) {
        return response.to_string();
    }

    responses::DEFAULTS[picker.pick(responses::DEFAULTS.len())].to_string()
}

/// Plain substring containment over the greeting phrase set.
fn is_greeting(query: &str) -> bool {
    GREETING_PHRASES.iter().any(|g| query.contains(g))
}

/// Three FAQ passes, each over the whole table in order: exact phrase
/// equality, then all key words present anywhere in the query, then the
/// key phrase verbatim inside the query.
fn faq_response(query: &str) -> Option<&'static str> {
    let entries = faq::faq_entries();

    if let Some(entry) = entries.iter().find(|e| e.question == query) {
        return Some(entry.answer);
    }

    if let Some(entry) = entries
        .iter()
        .find(|e| e.question.split(' ').all(|word| query.contains(word)))
    {
        return Some(entry.answer);
    }

    entries
        .iter()
        .find(|e| query.contains(e.question))
        .map(|e| e.answer)
}

/// First wound-type key mentioned in the query, resolved against the
/// advice table. Types without a `general` entry (burn) fall through.
fn wound_type_response(query: &str) -> Option<String> {
    let wound_type = WoundType::ALL
        .into_iter()
        .find(|t| query.contains(t.as_str()))?;

    if wound_type == WoundType::Pressure {
        return Some(pressure_response(query));
    }

    advice::general_advice(wound_type)
        .map(|text| format!("For {} wounds: {}", wound_type.as_str(), text))
}

fn pressure_response(query: &str) -> String {
    if let Some(stage_key) = extract_stage_key(query)
        && let Some(text) = advice::advice(WoundType::Pressure, &stage_key)
    {
        return format!("For pressure ulcers, {stage_key}: {text}");
    }
    responses::STAGE_PROMPT.to_string()
}

/// Extract a pressure-ulcer stage key from free text.
///
/// Precedence: the digit pattern, then the roman-numeral pattern (only
/// when the digit pattern failed; only i/ii/iii/iv resolve), then the
/// literal keyword scan, which overrides both when it hits.
fn extract_stage_key(query: &str) -> Option<String> {
    let mut found: Option<String> = None;

    if let Some(caps) = STAGE_DIGIT_RE.captures(query) {
        found = Some(format!("stage{}", &caps[1]));
    }

    if found.is_none()
        && let Some(caps) = STAGE_ROMAN_RE.captures(query)
    {
        found = match &caps[1] {
            "i" => Some("stage1".to_string()),
            "ii" => Some("stage2".to_string()),
            "iii" => Some("stage3".to_string()),
            "iv" => Some("stage4".to_string()),
            _ => None,
        };
    }

    for keyword in STAGE_KEYWORDS {
        if query.contains(keyword) {
            found = Some(keyword.to_string());
            break;
        }
    }

    found
}

/// First category (in fixed order) with any keyword contained in the
/// query.
fn category_response(query: &str) -> Option<&'static str> {
    Category::ALL
        .into_iter()
        .find(|c| c.keywords().iter().any(|k| query.contains(k)))
        .map(|c| c.response())
}
