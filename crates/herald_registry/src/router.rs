//! Routing across an ordered set of registries.
//!
//! A router owns one or more registries and resolves input against all of
//! them, preferring the longest matched path. Ties on length go to the
//! registry added first.

use std::collections::BTreeSet;
use std::sync::Arc;

use herald_command::CommandDescriptor;

use crate::registry::CommandRegistry;

/// Resolves command paths across an ordered list of registries.
pub struct Router {
    registries: Vec<CommandRegistry>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Creates a router with a single empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registries: vec![CommandRegistry::new()],
        }
    }

    /// The primary registry.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registries[0]
    }

    /// The primary registry, mutably.
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registries[0]
    }

    /// Appends a registry; it is consulted after all earlier ones.
    pub fn add_registry(&mut self, registry: CommandRegistry) {
        self.registries.push(registry);
    }

    /// Resolves `segments` to the command with the longest matched path.
    ///
    /// Returns the number of segments consumed alongside the descriptor.
    /// When two registries match at equal depth, the earlier one wins.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Option<(usize, Arc<CommandDescriptor>)> {
        let mut best: Option<(usize, Arc<CommandDescriptor>)> = None;
        for registry in &self.registries {
            if let Some((depth, descriptor)) = registry.find(segments) {
                let replace = match &best {
                    Some((best_depth, _)) => depth > *best_depth,
                    None => true,
                };
                if replace {
                    best = Some((depth, descriptor));
                }
            }
        }
        best
    }

    /// The immediate child segment names under `path`, merged across all
    /// registries.
    #[must_use]
    pub fn branches(&self, path: &[String]) -> BTreeSet<String> {
        let mut merged = BTreeSet::new();
        for registry in &self.registries {
            merged.extend(registry.branches(path));
        }
        merged
    }

    /// All registered descriptors, in registry order then registration
    /// order within each registry.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<CommandDescriptor>> {
        self.registries.iter().flat_map(CommandRegistry::commands)
    }
}
