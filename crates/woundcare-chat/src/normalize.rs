//! Query preprocessing.

/// Punctuation stripped from queries before matching.
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

/// Normalize a raw user query for matching.
///
/// Lowercases, strips the fixed punctuation set, collapses every run of
/// two or more whitespace characters to a single space, and trims. A lone
/// whitespace character is kept as-is, so a single tab or newline
/// survives in the middle of a query. Always succeeds; empty input yields
/// an empty string.
pub fn normalize_query(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();

    let mut out = String::with_capacity(stripped.len());
    let mut chars = stripped.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    out.trim().to_string()
}
