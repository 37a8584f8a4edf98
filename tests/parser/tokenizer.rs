//! Integration tests for the quote-aware tokenizer.

use herald_parser::tokenize;
use proptest::prelude::*;

// =============================================================================
// Separator Semantics
// =============================================================================

#[test]
fn empty_input_yields_no_tokens() {
    assert!(tokenize("").is_empty());
}

#[test]
fn single_word() {
    assert_eq!(tokenize("hello"), ["hello"]);
}

#[test]
fn words_split_on_single_spaces() {
    assert_eq!(tokenize("a b c"), ["a", "b", "c"]);
}

#[test]
fn consecutive_separators_produce_empty_tokens() {
    assert_eq!(tokenize("a  b"), ["a", "", "b"]);
    assert_eq!(tokenize("a   b"), ["a", "", "", "b"]);
}

#[test]
fn leading_and_trailing_separators_produce_empty_tokens() {
    assert_eq!(tokenize(" a"), ["", "a"]);
    assert_eq!(tokenize("a "), ["a", ""]);
    assert_eq!(tokenize(" "), ["", ""]);
}

#[test]
fn tabs_and_newlines_separate_too() {
    assert_eq!(tokenize("a\tb\nc"), ["a", "b", "c"]);
}

// =============================================================================
// Quoting
// =============================================================================

#[test]
fn quotes_span_whitespace() {
    assert_eq!(tokenize("a \"b c\" d"), ["a", "b c", "d"]);
}

#[test]
fn quotes_are_stripped() {
    assert_eq!(tokenize("\"solo\""), ["solo"]);
}

#[test]
fn embedded_quotes_join_fragments() {
    assert_eq!(tokenize("pre\"mid dle\"post"), ["premid dlepost"]);
}

#[test]
fn unbalanced_quote_closes_at_end() {
    assert_eq!(tokenize("say \"goodbye cruel world"), ["say", "goodbye cruel world"]);
}

#[test]
fn quoted_whitespace_only() {
    assert_eq!(tokenize("\"  \""), ["  "]);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Joining the tokens of a quote-free, space-separated line with a
    /// single space reproduces the line.
    #[test]
    fn quote_free_round_trip(line in "[a-z0-9 ]{0,40}") {
        prop_assume!(!line.is_empty());
        let tokens = tokenize(&line);
        prop_assert_eq!(tokens.join(" "), line);
    }

    /// Tokenization never panics and never invents non-empty tokens.
    #[test]
    fn never_panics(line in "\\PC{0,60}") {
        let tokens = tokenize(&line);
        if line.is_empty() {
            prop_assert!(tokens.is_empty());
        } else {
            prop_assert!(!tokens.is_empty());
        }
    }
}
