// Pattern normalization and translation to the store's LIKE form.
//
// A pattern is a word template with '_' marking each unknown character.
// Patterns reach the store as bound parameters of a LIKE expression with an
// explicit ESCAPE clause, never as concatenated SQL.

/// Placeholder for a single unknown character in a pattern.
pub const WILDCARD: char = '_';

/// Escape character used in LIKE expressions built by this module.
const LIKE_ESCAPE: char = '\\';

/// Normalize a word or pattern for storage and lookup.
///
/// Entries are stored lowercase, and both words and patterns are matched
/// case-insensitively, so everything is lowercased (and trimmed) on the way
/// in.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Translate a normalized pattern into a LIKE expression.
///
/// '_' passes through as the single-character wildcard: it is the pattern
/// language's own placeholder, so every occurrence is a wildcard by
/// definition. '%' and the escape character itself are escaped so nothing
/// in the input can act as a multi-character wildcard.
pub fn to_like_expression(pattern: &str) -> String {
    let mut expr = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        if ch == '%' || ch == LIKE_ESCAPE {
            expr.push(LIKE_ESCAPE);
        }
        expr.push(ch);
    }
    expr
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod tests;
