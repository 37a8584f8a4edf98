//! Input tokenization.
//!
//! Splits a raw input line into an ordered token sequence, honoring
//! quoted spans.

/// Tokenizes a raw input line.
///
/// Splitting happens at every whitespace character outside quotes, so
/// consecutive separators produce empty tokens: `"a   b"` yields
/// `["a", "", "", "b"]`. Channels rely on this: after stripping the
/// resolved command path they drop exactly one leading token, which
/// preserves any further empty tokens the user typed.
///
/// `"` toggles quoting and is stripped from the token; whitespace inside
/// a quoted span is preserved. An unbalanced quote is treated as if it
/// were closed at the end of the line.
///
/// Empty input yields an empty sequence.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                tokens.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }

    tokens.push(current);
    tokens
}
