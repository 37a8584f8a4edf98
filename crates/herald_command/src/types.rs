//! The parameter type registry.
//!
//! Maps a value-kind name to a parser (raw string to [`Value`]) and an
//! optional suggestion source. Everything that coerces user input goes
//! through here, so hosts can register domain kinds ("player", "channel",
//! "duration") next to the built-ins.

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use herald_foundation::{Error, Result, Value};

use crate::parameter::SuggestionFn;

/// Coerces a raw token into a [`Value`].
pub type ParseFn = Arc<dyn Fn(&str) -> Result<Value> + Send + Sync>;

/// A registered value kind: name, parser, optional suggestion source.
#[derive(Clone)]
pub struct ParameterType {
    name: String,
    parser: ParseFn,
    values: Option<SuggestionFn>,
}

impl ParameterType {
    /// Creates a type with the given parser and no suggestion source.
    pub fn new(
        name: impl Into<String>,
        parser: impl Fn(&str) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            parser: Arc::new(parser),
            values: None,
        }
    }

    /// Attaches a suggestion source producing the kind's known values.
    #[must_use]
    pub fn with_values(mut self, values: impl Fn() -> BTreeSet<String> + Send + Sync + 'static) -> Self {
        self.values = Some(Arc::new(values));
        self
    }

    /// The kind name this type is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coerces one raw token.
    ///
    /// # Errors
    ///
    /// Returns the parser's error for malformed input.
    pub fn parse(&self, raw: &str) -> Result<Value> {
        (self.parser)(raw)
    }

    /// The suggestion source, if the kind enumerates its values.
    #[must_use]
    pub fn values(&self) -> Option<SuggestionFn> {
        self.values.clone()
    }
}

impl fmt::Debug for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterType")
            .field("name", &self.name)
            .field("has_values", &self.values.is_some())
            .finish_non_exhaustive()
    }
}

/// Registry of value kinds.
///
/// [`TypeRegistry::new`] seeds the built-ins (`text`, `integer`, `float`,
/// `boolean`); [`TypeRegistry::bare`] starts empty.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, ParameterType>,
}

impl TypeRegistry {
    /// Creates a registry seeded with the built-in kinds.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::bare();

        registry.register(ParameterType::new("text", |raw| Ok(Value::from(raw))));
        registry.register(ParameterType::new("integer", |raw| {
            raw.parse::<i64>()
                .map(Value::Int)
                .map_err(|_| Error::invalid_argument("integer", raw))
        }));
        registry.register(ParameterType::new("float", |raw| {
            raw.parse::<f64>()
                .map(Value::Float)
                .map_err(|_| Error::invalid_argument("float", raw))
        }));
        registry.register(
            ParameterType::new("boolean", |raw| {
                match raw.to_ascii_lowercase().as_str() {
                    "true" | "1" => Ok(Value::Bool(true)),
                    "false" | "0" => Ok(Value::Bool(false)),
                    _ => Err(Error::invalid_argument("boolean", raw)),
                }
            })
            .with_values(|| BTreeSet::from(["true".to_string(), "false".to_string()])),
        );

        registry
    }

    /// Creates an empty registry with no built-ins.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Registers a type under its name.
    ///
    /// Re-registering a kind overwrites the previous entry silently. This
    /// deliberately differs from command registration, which fails on a
    /// path collision; hosts routinely replace a built-in parser (say,
    /// `boolean` accepting "yes"/"no") and that should not be an error.
    pub fn register(&mut self, parameter_type: ParameterType) {
        self.types
            .insert(parameter_type.name().to_string(), parameter_type);
    }

    /// Registers a single-choice enumeration kind.
    ///
    /// The parser accepts any variant case-insensitively and yields the
    /// canonical variant as a string value; the suggestion source is the
    /// variant list.
    pub fn register_enum<I, S>(&mut self, name: impl Into<String>, variants: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let variants: Arc<Vec<String>> = Arc::new(variants.into_iter().map(Into::into).collect());

        let parse_variants = Arc::clone(&variants);
        let error_kind = name.clone();
        let suggest_variants = Arc::clone(&variants);

        self.register(
            ParameterType::new(name, move |raw| {
                parse_variants
                    .iter()
                    .find(|v| v.eq_ignore_ascii_case(raw))
                    .map(|v| Value::from(v.as_str()))
                    .ok_or_else(|| Error::invalid_argument(&error_kind, raw))
            })
            .with_values(move || suggest_variants.iter().cloned().collect()),
        );
    }

    /// Looks up a registered kind.
    ///
    /// # Errors
    ///
    /// Fails with `UnsupportedType` if the kind was never registered.
    pub fn get(&self, kind: &str) -> Result<&ParameterType> {
        self.types
            .get(kind)
            .ok_or_else(|| Error::unsupported_type(kind))
    }

    /// Returns true if the kind is registered.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.types.contains_key(kind)
    }
}
