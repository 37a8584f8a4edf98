//! Completion suggestions.
//!
//! Given the parameters a partially-typed invocation has already
//! satisfied, proposes candidate strings for the slot the user is
//! currently filling, plus name/flag tokens for every slot still open.

use std::collections::{BTreeSet, HashSet};

use herald_command::ParameterSet;

/// Computes completion candidates for the next token of an invocation.
///
/// Parameters already addressed by `--name` or flag are satisfied;
/// `positional_count` more are implicitly filled in declaration order.
/// The first still-open parameter contributes its default value (if any)
/// and the current output of its suggestion source. When `include_flags`
/// is set, the `--id` and `-f` spellings of every still-open parameter
/// are offered as well.
#[must_use]
pub fn completion_suggestions(
    parameters: &ParameterSet,
    named_used: &BTreeSet<String>,
    flags_used: &BTreeSet<char>,
    positional_count: usize,
    include_flags: bool,
) -> BTreeSet<String> {
    let flags_used: HashSet<char> = flags_used.iter().copied().collect();

    let open: Vec<_> = parameters
        .iter()
        .filter(|p| !named_used.contains(p.id()))
        .filter(|p| p.flags().iter().all(|flag| !flags_used.contains(flag)))
        .skip(positional_count)
        .collect();

    let mut suggestions = BTreeSet::new();

    if let Some(current) = open.first() {
        if let Some(default) = current.default_value() {
            if let Some(value) = &default.value {
                suggestions.insert(value.clone());
            }
        }
        suggestions.extend(current.suggestions());
    }

    if include_flags {
        for parameter in &open {
            suggestions.extend(parameter.flag_aliases());
        }
    }

    suggestions
}
