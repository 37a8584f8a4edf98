//! The command registry.
//!
//! Wraps the routing trie with all-or-nothing registration across a
//! descriptor's alias paths and keeps descriptors in registration order
//! for help-style listings.

use std::collections::BTreeSet;
use std::sync::Arc;

use herald_command::CommandDescriptor;
use herald_foundation::{Error, Result};

use crate::trie::CommandTrie;

/// A collection of registered commands addressable by path.
#[derive(Default)]
pub struct CommandRegistry {
    trie: CommandTrie,
    commands: Vec<Arc<CommandDescriptor>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under every one of its alias paths.
    ///
    /// Registration is all-or-nothing: every path is checked for
    /// collisions before any is inserted, so a failed registration leaves
    /// the registry unchanged.
    ///
    /// # Errors
    ///
    /// Fails with `DuplicateCommand` if a different command already
    /// terminates at any of the alias paths.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<Arc<CommandDescriptor>> {
        let descriptor = Arc::new(descriptor);

        for alias_path in descriptor.alias_paths() {
            if self.trie.get(alias_path).is_some() {
                return Err(Error::duplicate_command(alias_path.clone()));
            }
        }

        for alias_path in descriptor.alias_paths() {
            self.trie.insert(alias_path, Arc::clone(&descriptor))?;
        }

        self.commands.push(Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Exact lookup at `path`.
    #[must_use]
    pub fn get(&self, path: &[String]) -> Option<&Arc<CommandDescriptor>> {
        self.trie.get(path)
    }

    /// Returns true if a command terminates exactly at `path`.
    #[must_use]
    pub fn contains(&self, path: &[String]) -> bool {
        self.trie.contains(path)
    }

    /// Longest-prefix resolution over `segments`.
    #[must_use]
    pub fn find<S: AsRef<str>>(&self, segments: &[S]) -> Option<(usize, Arc<CommandDescriptor>)> {
        self.trie.find(segments)
    }

    /// The immediate child segment names under `path`.
    #[must_use]
    pub fn branches(&self, path: &[String]) -> BTreeSet<String> {
        self.trie.branches(path)
    }

    /// Registered descriptors in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &Arc<CommandDescriptor>> {
        self.commands.iter()
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
