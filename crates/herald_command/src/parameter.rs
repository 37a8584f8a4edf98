//! Parameter declarations.
//!
//! A [`Parameter`] describes one typed, named slot of a command: its
//! identity, value kind, cardinality, default, flags, and suggestion
//! source. A [`ParameterSet`] is the ordered collection of a command's
//! parameters; order determines positional assignment and usage rendering.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use herald_foundation::{Error, Result};

/// How many values a parameter binds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cardinality {
    /// Exactly one value.
    #[default]
    Scalar,
    /// An ordered collection of values.
    List,
    /// An unordered collection of values.
    Set,
}

impl Cardinality {
    /// Returns true for LIST and SET cardinality.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::List | Self::Set)
    }
}

/// The default of an optional parameter.
///
/// `value` is the raw string coerced when the parameter is omitted; a
/// `None` value is the null-marker. `representation` is what the usage
/// string displays, independent of `value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultValue {
    /// Raw default value, coerced like user input. `None` = null-marker.
    pub value: Option<String>,
    /// Display representation for the usage string, if any.
    pub representation: Option<String>,
}

impl DefaultValue {
    /// Creates a default with a raw value and its display representation.
    #[must_use]
    pub fn new(value: impl Into<String>, representation: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            representation: Some(representation.into()),
        }
    }

    /// Creates a default whose display matches its raw value.
    #[must_use]
    pub fn of(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            representation: Some(value.clone()),
            value: Some(value),
        }
    }

    /// Creates the null-marker default used for omitted nullable
    /// parameters. Nothing is displayed in the usage string.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            value: None,
            representation: None,
        }
    }

    /// Returns true if this is the null-marker default.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

/// Lazily produces candidate strings for completion.
pub type SuggestionFn = Arc<dyn Fn() -> BTreeSet<String> + Send + Sync>;

/// A typed, named parameter slot of a command.
///
/// Immutable once constructed; build one through [`ParamSpec`].
#[derive(Clone)]
pub struct Parameter {
    id: String,
    display_name: String,
    kind: String,
    cardinality: Cardinality,
    nullable: bool,
    default_value: Option<DefaultValue>,
    flags: BTreeSet<char>,
    suggestions: Option<SuggestionFn>,
    description: Option<String>,
}

impl Parameter {
    /// The unique (per command) kebab-case identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human-facing display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The type-registry kind this parameter coerces through.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Scalar, list, or set.
    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Whether the null-marker is an admissible value.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// The default, if this parameter is optional.
    #[must_use]
    pub const fn default_value(&self) -> Option<&DefaultValue> {
        self.default_value.as_ref()
    }

    /// A parameter is optional exactly when it has a default.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.default_value.is_some()
    }

    /// Single-character flag aliases, unique within the owning command.
    #[must_use]
    pub const fn flags(&self) -> &BTreeSet<char> {
        &self.flags
    }

    /// The optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Current completion candidates from the suggestion source.
    #[must_use]
    pub fn suggestions(&self) -> BTreeSet<String> {
        self.suggestions.as_ref().map_or_else(BTreeSet::new, |f| f())
    }

    /// All tokens that address this parameter by name or flag:
    /// `--id` plus `-f` for every flag.
    #[must_use]
    pub fn flag_aliases(&self) -> BTreeSet<String> {
        let mut aliases = BTreeSet::new();
        aliases.insert(format!("--{}", self.id));
        for flag in &self.flags {
            aliases.insert(format!("-{flag}"));
        }
        aliases
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("cardinality", &self.cardinality)
            .field("nullable", &self.nullable)
            .field("default_value", &self.default_value)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Parameter`].
///
/// The display name defaults to the id; a nullable parameter with no
/// explicit default receives the null-marker default.
#[derive(Clone)]
pub struct ParamSpec {
    id: String,
    display_name: Option<String>,
    kind: String,
    cardinality: Cardinality,
    nullable: bool,
    default_value: Option<DefaultValue>,
    flags: BTreeSet<char>,
    suggestions: Option<SuggestionFn>,
    description: Option<String>,
}

impl ParamSpec {
    /// Starts a spec for a parameter with the given id and value kind.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            kind: kind.into(),
            cardinality: Cardinality::Scalar,
            nullable: false,
            default_value: None,
            flags: BTreeSet::new(),
            suggestions: None,
            description: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets LIST cardinality.
    #[must_use]
    pub const fn list(mut self) -> Self {
        self.cardinality = Cardinality::List;
        self
    }

    /// Sets SET cardinality.
    #[must_use]
    pub const fn set(mut self) -> Self {
        self.cardinality = Cardinality::Set;
        self
    }

    /// Marks the parameter nullable.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Sets the default value (making the parameter optional).
    #[must_use]
    pub fn default(mut self, default: DefaultValue) -> Self {
        self.default_value = Some(default);
        self
    }

    /// Adds an explicit flag character. Explicit flags suppress
    /// auto-allocation for this parameter.
    #[must_use]
    pub fn flag(mut self, flag: char) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Sets the suggestion source.
    #[must_use]
    pub fn suggestions(mut self, f: impl Fn() -> BTreeSet<String> + Send + Sync + 'static) -> Self {
        self.suggestions = Some(Arc::new(f));
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the id this spec declares.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the explicit flags declared so far.
    #[must_use]
    pub(crate) const fn explicit_flags(&self) -> &BTreeSet<char> {
        &self.flags
    }

    /// Returns the kind this spec coerces through.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Finalizes the parameter with the given resolved flag set and an
    /// optional fallback suggestion source (typically the type's values).
    ///
    /// # Errors
    ///
    /// Fails with `InvalidDefault` if a non-nullable parameter carries a
    /// null default value.
    pub(crate) fn build(
        self,
        flags: BTreeSet<char>,
        fallback_suggestions: Option<SuggestionFn>,
    ) -> Result<Parameter> {
        let mut default_value = self.default_value;

        // A nullable parameter defaults to the null-marker when nothing
        // explicit was supplied.
        if default_value.is_none() && self.nullable {
            default_value = Some(DefaultValue::null());
        }

        if let Some(default) = &default_value {
            if default.is_null() && !self.nullable {
                return Err(Error::invalid_default(&self.id));
            }
        }

        Ok(Parameter {
            display_name: self.display_name.unwrap_or_else(|| self.id.clone()),
            id: self.id,
            kind: self.kind,
            cardinality: self.cardinality,
            nullable: self.nullable,
            default_value,
            flags,
            suggestions: self.suggestions.or(fallback_suggestions),
            description: self.description,
        })
    }
}

/// The ordered, unique-id, unique-flag parameter collection of a command.
#[derive(Clone, Default)]
pub struct ParameterSet {
    parameters: Vec<Arc<Parameter>>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    /// Creates a parameter set from parameters in declaration order.
    ///
    /// # Errors
    ///
    /// Fails with `DuplicateParameter` if two parameters share an id, or
    /// `DuplicateFlag` if two parameters share a flag character.
    pub fn new(parameters: Vec<Parameter>) -> Result<Self> {
        let mut ids = BTreeSet::new();
        let mut flags = BTreeSet::new();

        for parameter in &parameters {
            if !ids.insert(parameter.id().to_string()) {
                return Err(Error::duplicate_parameter(parameter.id()));
            }
            for flag in parameter.flags() {
                if !flags.insert(*flag) {
                    return Err(Error::duplicate_flag(*flag));
                }
            }
        }

        Ok(Self {
            parameters: parameters.into_iter().map(Arc::new).collect(),
        })
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns true if no parameters are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Looks up a parameter by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Parameter>> {
        self.parameters.iter().find(|p| p.id() == id)
    }

    /// Looks up a parameter by flag character.
    #[must_use]
    pub fn by_flag(&self, flag: char) -> Option<&Arc<Parameter>> {
        self.parameters.iter().find(|p| p.flags().contains(&flag))
    }

    /// Iterates parameters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Parameter>> {
        self.parameters.iter()
    }
}

impl fmt::Debug for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.parameters.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Arc<Parameter>;
    type IntoIter = std::slice::Iter<'a, Arc<Parameter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}
