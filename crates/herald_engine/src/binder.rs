//! The argument binder.
//!
//! Reconciles the split token groups with the command's declared
//! parameters and coerces every raw string through the type registry,
//! producing a [`BoundArgs`] that covers each parameter exactly once.

use std::collections::HashMap;

use herald_command::{BoundArgs, Cardinality, Parameter, ParameterSet, TypeRegistry};
use herald_foundation::{Error, Result, Value};
use herald_parser::SplitArgs;

/// Binds split tokens to the declared parameters.
///
/// Parameters claimed by `--name` or flag are satisfied from their raw
/// occurrences (a scalar claimed more than once keeps the last value).
/// The remaining parameters consume positional tokens strictly in
/// declaration order; a LIST or SET parameter greedily consumes every
/// further positional token. Unsatisfied parameters fall back to their
/// default, coerced like user input (the null-marker default binds
/// [`Value::Null`]). Surplus positional tokens are not an error; they
/// stay visible through [`BoundArgs::raw`].
///
/// `raw` is the unmodified token sequence that followed path resolution;
/// it is carried into the result untouched.
///
/// # Errors
///
/// Fails with `InvalidArgument` when a raw string does not coerce to the
/// parameter's kind, and `MissingArgument` when a required parameter is
/// neither claimed nor covered by positional tokens.
pub fn bind(
    parameters: &ParameterSet,
    split: &SplitArgs,
    types: &TypeRegistry,
    raw: Vec<String>,
) -> Result<BoundArgs> {
    let mut values = HashMap::new();
    let mut positional = split.positional.iter();

    for parameter in parameters {
        if let Some(occurrences) = split.named.get(parameter.id()) {
            values.insert(
                parameter.id().to_string(),
                coerce_claimed(parameter, occurrences, types)?,
            );
            continue;
        }

        let value = if parameter.cardinality().is_collection() {
            // A collection parameter drains the remaining positionals,
            // even when that leaves it empty.
            let rest: Vec<&String> = positional.by_ref().collect();
            if rest.is_empty() && parameter.is_optional() {
                coerce_default(parameter, types)?
            } else {
                collect(parameter, rest.into_iter().map(String::as_str), types)?
            }
        } else if let Some(token) = positional.next() {
            coerce(parameter, token, types)?
        } else if parameter.is_optional() {
            coerce_default(parameter, types)?
        } else {
            return Err(Error::missing_argument(parameter.id()));
        };

        values.insert(parameter.id().to_string(), value);
    }

    Ok(BoundArgs::new(values, raw))
}

/// Coerces the raw occurrences of a name/flag-claimed parameter.
fn coerce_claimed(
    parameter: &Parameter,
    occurrences: &[String],
    types: &TypeRegistry,
) -> Result<Value> {
    if parameter.cardinality().is_collection() {
        collect(parameter, occurrences.iter().map(String::as_str), types)
    } else {
        // Last occurrence wins for a repeated scalar.
        match occurrences.last() {
            Some(token) => coerce(parameter, token, types),
            None => Err(Error::missing_argument(parameter.id())),
        }
    }
}

/// Coerces one raw token through the parameter's kind.
fn coerce(parameter: &Parameter, token: &str, types: &TypeRegistry) -> Result<Value> {
    types
        .get(parameter.kind())?
        .parse(token)
        .map_err(|_| Error::invalid_argument(parameter.id(), token))
}

/// Coerces each raw token independently and gathers them into the
/// parameter's collection shape.
fn collect<'a>(
    parameter: &Parameter,
    tokens: impl Iterator<Item = &'a str>,
    types: &TypeRegistry,
) -> Result<Value> {
    let elements: Vec<Value> = tokens
        .map(|token| coerce(parameter, token, types))
        .collect::<Result<_>>()?;

    Ok(match parameter.cardinality() {
        Cardinality::Set => Value::Set(elements.into_iter().collect()),
        _ => Value::List(elements.into_iter().collect()),
    })
}

/// Binds an omitted optional parameter from its default.
fn coerce_default(parameter: &Parameter, types: &TypeRegistry) -> Result<Value> {
    let default = parameter
        .default_value()
        .ok_or_else(|| Error::missing_argument(parameter.id()))?;

    match &default.value {
        None => Ok(Value::Null),
        Some(token) => {
            let value = coerce(parameter, token, types)?;
            Ok(if parameter.cardinality().is_collection() {
                match parameter.cardinality() {
                    Cardinality::Set => Value::Set(std::iter::once(value).collect()),
                    _ => Value::List(std::iter::once(value).collect()),
                }
            } else {
                value
            })
        }
    }
}
