use woundcare_chat::normalize::normalize_query;

#[test]
fn lowercases_and_trims() {
    assert_eq!(normalize_query("  Hello World  "), "hello world");
}

#[test]
fn strips_the_punctuation_set() {
    assert_eq!(normalize_query("What is a (pressure) ulcer?!"), "what is a pressure ulcer?");
}

#[test]
fn removes_every_listed_punctuation_character() {
    assert_eq!(normalize_query(".,/#!$%^&*;:{}=-_`~()"), "");
}

#[test]
fn hyphen_removal_merges_tokens() {
    // "stage-2" becomes "stage2", which the literal stage keyword scan
    // can then match directly.
    assert_eq!(normalize_query("stage-2"), "stage2");
}

#[test]
fn collapses_whitespace_runs() {
    assert_eq!(normalize_query("how   often\t\tshould"), "how often should");
}

#[test]
fn preserves_a_lone_whitespace_character() {
    // Only runs of two or more collapse; a single embedded newline or
    // tab survives.
    assert_eq!(normalize_query("line one\nline two"), "line one\nline two");
    assert_eq!(normalize_query("a\tb"), "a\tb");
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(normalize_query(""), "");
    assert_eq!(normalize_query("   "), "");
}
