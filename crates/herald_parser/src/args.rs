//! Named/flag argument splitting.
//!
//! Partitions the token sequence left after path resolution into
//! positional values, `--name` occurrences, and `-f` short flags,
//! resolved against the command's declared parameters. The output feeds
//! both the binder and the completion engine.

use std::collections::{BTreeMap, BTreeSet};

use herald_command::ParameterSet;
use herald_foundation::{Error, Result};

/// Boolean-kind parameters addressed by name or flag read as switches.
const SWITCH_KIND: &str = "boolean";

/// Tokens partitioned against a parameter set.
#[derive(Clone, Debug, Default)]
pub struct SplitArgs {
    /// Tokens not consumed by any named/flag occurrence, in order.
    pub positional: Vec<String>,
    /// Raw values per parameter id, accumulated across occurrences.
    pub named: BTreeMap<String, Vec<String>>,
    /// Parameter ids addressed with `--name`.
    pub named_used: BTreeSet<String>,
    /// Flag characters addressed with `-f`.
    pub flags_used: BTreeSet<char>,
}

impl SplitArgs {
    /// Wraps an already-positional token sequence (no named/flag tokens).
    #[must_use]
    pub fn positional(tokens: Vec<String>) -> Self {
        Self {
            positional: tokens,
            ..Self::default()
        }
    }
}

/// Splits tokens into positional/named/flag groups against the declared
/// parameters.
///
/// Rules:
/// - `--id` addresses a parameter by id; a `boolean`-kind parameter reads
///   as `true`, any other kind consumes the next token as its raw value.
/// - `-abc` is a flag cluster; each character addresses a parameter by
///   flag, booleans as switches, others consuming one following token
///   each, in cluster order.
/// - A `-`-prefixed token whose first character after the dash is not
///   alphabetic (`-5`, `-1.5`) is positional.
/// - Everything else is positional, empty tokens included.
///
/// # Errors
///
/// Fails with `InvalidParameter` for a `--name` or flag character that
/// matches no declared parameter, and `MissingArgument` for a non-boolean
/// occurrence with no following value token.
pub fn split_args(parameters: &ParameterSet, tokens: Vec<String>) -> Result<SplitArgs> {
    let mut split = SplitArgs::default();
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        if let Some(name) = token.strip_prefix("--") {
            let Some(parameter) = parameters.get(name) else {
                return Err(Error::invalid_parameter(token));
            };
            split.named_used.insert(name.to_string());

            let raw = if parameter.kind() == SWITCH_KIND {
                "true".to_string()
            } else {
                iter.next()
                    .ok_or_else(|| Error::missing_argument(name))?
            };
            split
                .named
                .entry(parameter.id().to_string())
                .or_default()
                .push(raw);
        } else if is_flag_cluster(&token) {
            for flag in token[1..].chars() {
                let Some(parameter) = parameters.by_flag(flag) else {
                    return Err(Error::invalid_parameter(token.clone()));
                };
                split.flags_used.insert(flag);

                let raw = if parameter.kind() == SWITCH_KIND {
                    "true".to_string()
                } else {
                    iter.next()
                        .ok_or_else(|| Error::missing_argument(parameter.id()))?
                };
                split
                    .named
                    .entry(parameter.id().to_string())
                    .or_default()
                    .push(raw);
            }
        } else {
            split.positional.push(token);
        }
    }

    Ok(split)
}

/// A flag cluster is `-` followed by at least one character, the first of
/// which is alphabetic. This keeps negative numbers positional.
fn is_flag_cluster(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-') && chars.next().is_some_and(char::is_alphabetic)
}
