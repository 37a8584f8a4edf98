//! The dispatch pipeline.
//!
//! A [`Dispatcher`] owns the router, the type registry, and the sender
//! adapter table, and drives one invocation from raw input line to
//! handler result. Registration and resolution are serialized through a
//! single `RwLock`; the lock is released before the handler runs, so
//! handlers may inspect the command list (the help command does).

use std::sync::{Arc, PoisonError, RwLock, Weak};

use herald_command::{
    AdapterRegistry, BoundArgs, CommandBuilder, CommandDescriptor, CommandSender, SenderView,
    TypeRegistry, resolve_sender,
};
use herald_foundation::{Error, ErrorContext, Result, Value};
use herald_parser::{split_args, tokenize};
use herald_registry::Router;

use crate::binder::bind;

/// Drives command invocations end to end.
pub struct Dispatcher {
    router: Arc<RwLock<Router>>,
    types: Arc<TypeRegistry>,
    adapters: Arc<AdapterRegistry>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Creates a dispatcher with an empty router, the built-in value
    /// kinds, and no sender adapters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            router: Arc::new(RwLock::new(Router::new())),
            types: Arc::new(TypeRegistry::new()),
            adapters: Arc::new(AdapterRegistry::new()),
        }
    }

    /// Replaces the type registry.
    #[must_use]
    pub fn with_types(mut self, types: TypeRegistry) -> Self {
        self.types = Arc::new(types);
        self
    }

    /// Replaces the sender adapter table.
    #[must_use]
    pub fn with_adapters(mut self, adapters: AdapterRegistry) -> Self {
        self.adapters = Arc::new(adapters);
        self
    }

    /// The type registry commands are built against.
    #[must_use]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// A weak handle to the shared router, for commands that list or
    /// inspect registrations without keeping the router alive.
    #[must_use]
    pub fn router_handle(&self) -> Weak<RwLock<Router>> {
        Arc::downgrade(&self.router)
    }

    /// Builds the command against this dispatcher's type registry and
    /// registers it under all of its alias paths.
    ///
    /// # Errors
    ///
    /// Fails with the builder's construction errors or with
    /// `DuplicateCommand` on a path collision; a failed registration
    /// leaves the router unchanged.
    pub fn register(&self, builder: CommandBuilder) -> Result<Arc<CommandDescriptor>> {
        self.register_descriptor(builder.build(&self.types)?)
    }

    /// Registers an already-built descriptor.
    ///
    /// # Errors
    ///
    /// Fails with `DuplicateCommand` on a path collision.
    pub fn register_descriptor(
        &self,
        descriptor: CommandDescriptor,
    ) -> Result<Arc<CommandDescriptor>> {
        let mut router = self
            .router
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        router.registry_mut().register(descriptor)
    }

    /// A snapshot of every registered command, in registration order.
    #[must_use]
    pub fn commands(&self) -> Vec<Arc<CommandDescriptor>> {
        let router = self.router.read().unwrap_or_else(PoisonError::into_inner);
        router.commands().cloned().collect()
    }

    /// Dispatches one input line: resolves the command path, checks the
    /// sender, binds arguments, and invokes the handler.
    ///
    /// The router lock is held only for resolution; the handler runs
    /// unlocked.
    ///
    /// # Errors
    ///
    /// Fails with `NotACommand` for unresolvable input; otherwise with
    /// the first pipeline failure (`IncompatibleSender`,
    /// `InvalidParameter`, `InvalidArgument`, `MissingArgument`), carrying
    /// the command name and input line as context. Handler errors pass
    /// through unchanged.
    pub fn dispatch(&self, sender: &dyn CommandSender, input: &str) -> Result<Value> {
        let words: Vec<&str> = input.split(' ').collect();

        let resolved = {
            let router = self.router.read().unwrap_or_else(PoisonError::into_inner);
            router.resolve(&words)
        };
        let Some((depth, descriptor)) = resolved else {
            return Err(Error::not_a_command(input)
                .with_context(ErrorContext::new().with_input(input)));
        };

        // The matched path is a literal prefix of the input; everything
        // after it is the argument text. The token immediately following
        // the path is the separator's empty residue and is dropped.
        let prefix = words[..depth].join(" ");
        let remainder = input.get(prefix.len()..).unwrap_or("");
        let mut tokens = tokenize(remainder);
        if !tokens.is_empty() {
            tokens.remove(0);
        }

        self.execute(&descriptor, sender, tokens, input)
    }

    fn execute(
        &self,
        descriptor: &CommandDescriptor,
        sender: &dyn CommandSender,
        tokens: Vec<String>,
        input: &str,
    ) -> Result<Value> {
        let context = || {
            ErrorContext::new()
                .with_command(descriptor.name())
                .with_input(input)
        };

        let view: SenderView = resolve_sender(descriptor.sender_requirement(), sender, &self.adapters)
            .map_err(|e| e.with_context(context()))?;

        let split = split_args(descriptor.parameters(), tokens.clone())
            .map_err(|e| e.with_context(context()))?;
        let args: BoundArgs = bind(descriptor.parameters(), &split, &self.types, tokens)
            .map_err(|e| e.with_context(context()))?;

        descriptor.invoke(sender, &view, &args)
    }
}
