//! Command descriptors and the descriptor builder.
//!
//! A [`CommandDescriptor`] is the fully-assembled, immutable definition of
//! a command: name, alias paths, parameters, sender requirement, handler,
//! and the precomputed usage string. Descriptors are built explicitly with
//! [`CommandBuilder`]; all construction-time invariants (duplicate ids,
//! duplicate flags, default-vs-nullability, one required capability,
//! registered value kinds) fail here, never at execution time.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use herald_foundation::{Error, Result, Value};

use crate::bound::BoundArgs;
use crate::parameter::{ParamSpec, Parameter, ParameterSet};
use crate::sender::{CapabilityId, CommandSender, SenderRequirement, SenderView};
use crate::types::TypeRegistry;

/// The opaque callable invoked when a command executes.
pub type Handler =
    Arc<dyn Fn(&dyn CommandSender, &SenderView, &BoundArgs) -> Result<Value> + Send + Sync>;

/// The immutable definition of a command.
pub struct CommandDescriptor {
    name: String,
    path: Vec<String>,
    alias_paths: Vec<Vec<String>>,
    summary: String,
    description: String,
    parameters: ParameterSet,
    sender: SenderRequirement,
    handler: Handler,
    usage: String,
}

impl CommandDescriptor {
    /// The command's full name (segments joined by spaces).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command's primary path.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Every path this command is reachable under, the primary path first.
    #[must_use]
    pub fn alias_paths(&self) -> &[Vec<String>] {
        &self.alias_paths
    }

    /// A short summary of what this command does.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// A detailed description of this command.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The command's parameters in declaration order.
    #[must_use]
    pub const fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// The command's declared sender requirement.
    #[must_use]
    pub const fn sender_requirement(&self) -> &SenderRequirement {
        &self.sender
    }

    /// The usage string: name followed by `<id>` for required parameters
    /// and `[id=representation]` (or `[id]`) for optional ones.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Invokes the handler with the sender, its capability view, and the
    /// bound arguments.
    ///
    /// # Errors
    ///
    /// Passes through the handler's command error unchanged.
    pub fn invoke(
        &self,
        sender: &dyn CommandSender,
        view: &SenderView,
        args: &BoundArgs,
    ) -> Result<Value> {
        (self.handler)(sender, view, args)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("alias_paths", &self.alias_paths)
            .field("parameters", &self.parameters)
            .field("sender", &self.sender)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

/// Builder assembling a [`CommandDescriptor`].
///
/// A multi-word name becomes a multi-segment path ("map zoom" lives under
/// the `map` branch). Aliases share the parent path; full alias paths may
/// be supplied too. Parameters are declared in order; flag characters are
/// auto-allocated per declaration order (first letter, case-flipped on
/// collision) unless a spec carries explicit flags.
pub struct CommandBuilder {
    name: String,
    aliases: Vec<String>,
    alias_paths: Vec<Vec<String>>,
    summary: String,
    description: String,
    params: Vec<ParamSpec>,
    senders: Vec<(CapabilityId, bool)>,
    handler: Option<Handler>,
}

impl CommandBuilder {
    /// Starts a builder for a command with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            alias_paths: Vec::new(),
            summary: String::new(),
            description: String::new(),
            params: Vec::new(),
            senders: Vec::new(),
            handler: None,
        }
    }

    /// Adds an alias: an alternative last path segment under the same
    /// parent as the primary name.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Adds a full alias path.
    #[must_use]
    pub fn alias_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alias_paths
            .push(path.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the one-line summary.
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the detailed description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declares the next parameter (declaration order matters).
    #[must_use]
    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    /// Requires the sender to satisfy capability `T`.
    #[must_use]
    pub fn require_sender<T: 'static>(mut self) -> Self {
        self.senders.push((CapabilityId::of::<T>(), false));
        self
    }

    /// Declares an optional capability slot for `T`.
    #[must_use]
    pub fn optional_sender<T: 'static>(mut self) -> Self {
        self.senders.push((CapabilityId::of::<T>(), true));
        self
    }

    /// Sets the handler.
    #[must_use]
    pub fn handler(
        mut self,
        handler: impl Fn(&dyn CommandSender, &SenderView, &BoundArgs) -> Result<Value>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Assembles the descriptor, performing all construction-time
    /// validation against the given type registry.
    ///
    /// # Errors
    ///
    /// Fails with `UnsupportedType` for an unregistered value kind,
    /// `DuplicateParameter`/`DuplicateFlag` for identity collisions,
    /// `InvalidDefault` for a null default on a non-nullable parameter,
    /// `MultipleRequiredSenders` when more than one capability is
    /// required, or an internal error when no handler was supplied.
    pub fn build(self, types: &TypeRegistry) -> Result<CommandDescriptor> {
        let path: Vec<String> = self.name.split_whitespace().map(str::to_string).collect();
        if path.is_empty() {
            return Err(Error::internal("command name must not be empty"));
        }

        let handler = self
            .handler
            .ok_or_else(|| Error::internal(format!("command {:?} has no handler", self.name)))?;

        let parameters = Self::assemble_parameters(self.params, types)?;
        let sender = Self::assemble_requirement(&self.senders)?;

        let mut alias_paths = vec![path.clone()];
        for alias in self.aliases {
            let mut alias_path = path[..path.len() - 1].to_vec();
            alias_path.push(alias);
            alias_paths.push(alias_path);
        }
        alias_paths.extend(self.alias_paths);

        let usage = render_usage(&self.name, &parameters);

        Ok(CommandDescriptor {
            name: self.name,
            path,
            alias_paths,
            summary: self.summary,
            description: self.description,
            parameters,
            sender,
            handler,
            usage,
        })
    }

    /// Resolves flags and finalizes parameters in declaration order.
    fn assemble_parameters(specs: Vec<ParamSpec>, types: &TypeRegistry) -> Result<ParameterSet> {
        let mut used_flags: BTreeSet<char> = BTreeSet::new();
        let mut parameters: Vec<Parameter> = Vec::with_capacity(specs.len());

        for spec in specs {
            // The kind must exist now so UnsupportedType never surfaces at
            // execution time; its enumerated values become the fallback
            // suggestion source.
            let parameter_type = types.get(spec.kind())?;
            let fallback = parameter_type.values();

            let flags = if spec.explicit_flags().is_empty() {
                allocate_flags(spec.id(), &used_flags)?
            } else {
                let explicit = spec.explicit_flags().clone();
                for flag in &explicit {
                    if used_flags.contains(flag) {
                        return Err(Error::duplicate_flag(*flag));
                    }
                }
                explicit
            };
            used_flags.extend(flags.iter().copied());

            parameters.push(spec.build(flags, fallback)?);
        }

        ParameterSet::new(parameters)
    }

    /// Computes the sender requirement from the declared slots.
    fn assemble_requirement(slots: &[(CapabilityId, bool)]) -> Result<SenderRequirement> {
        let mut required: Option<CapabilityId> = None;
        let mut optional: Vec<CapabilityId> = Vec::new();

        for (capability, is_optional) in slots {
            if *is_optional {
                optional.push(*capability);
            } else if let Some(first) = required {
                return Err(Error::multiple_required_senders(
                    first.name(),
                    capability.name(),
                ));
            } else {
                required = Some(*capability);
            }
        }

        Ok(match required {
            Some(capability) => SenderRequirement::Required {
                capability,
                optional,
            },
            None if optional.is_empty() => SenderRequirement::None,
            None => SenderRequirement::Optional(optional),
        })
    }
}

/// Allocates flag characters for a parameter id: the lowercased first
/// letter, or its uppercase when the lowercase is taken, or nothing when
/// both are. Greedy and order-dependent on purpose; declaration order
/// decides which parameter wins a letter.
fn allocate_flags(id: &str, unavailable: &BTreeSet<char>) -> Result<BTreeSet<char>> {
    let first = id
        .chars()
        .next()
        .ok_or_else(|| Error::internal("parameter id must not be empty"))?;

    let lower = first.to_ascii_lowercase();
    let upper = lower.to_ascii_uppercase();

    let mut flags = BTreeSet::new();
    if !unavailable.contains(&lower) {
        flags.insert(lower);
    } else if !unavailable.contains(&upper) {
        flags.insert(upper);
    }
    Ok(flags)
}

/// Renders the usage string for a name and parameter set.
fn render_usage(name: &str, parameters: &ParameterSet) -> String {
    let mut usage = String::from(name);

    for parameter in parameters {
        usage.push(' ');
        if parameter.is_optional() {
            usage.push('[');
            usage.push_str(parameter.id());
            if let Some(representation) = parameter
                .default_value()
                .and_then(|d| d.representation.as_deref())
            {
                usage.push('=');
                usage.push_str(representation);
            }
            usage.push(']');
        } else {
            usage.push('<');
            usage.push_str(parameter.id());
            usage.push('>');
        }
    }

    usage
}
