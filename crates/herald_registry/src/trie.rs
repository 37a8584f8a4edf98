//! The routing trie.
//!
//! A trie over path segments. A node carries a command reference exactly
//! when some registered alias path terminates there; two different
//! commands may not terminate at the same path.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use herald_command::CommandDescriptor;
use herald_foundation::{Error, Result};

#[derive(Default)]
struct Node {
    children: HashMap<String, Node>,
    command: Option<Arc<CommandDescriptor>>,
}

/// Trie mapping path segments to command descriptors.
#[derive(Default)]
pub struct CommandTrie {
    root: Node,
}

impl CommandTrie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a descriptor at the given path.
    ///
    /// Re-inserting the *same* descriptor at an occupied path is a no-op
    /// (alias paths may overlap); a different descriptor at an occupied
    /// path is rejected. Last-write-wins is deliberately not permitted.
    ///
    /// # Errors
    ///
    /// Fails with `DuplicateCommand` when a different descriptor already
    /// terminates at the path.
    pub fn insert(&mut self, path: &[String], descriptor: Arc<CommandDescriptor>) -> Result<()> {
        let mut node = &mut self.root;
        for segment in path {
            node = node.children.entry(segment.clone()).or_default();
        }

        if let Some(existing) = &node.command {
            if Arc::ptr_eq(existing, &descriptor) {
                return Ok(());
            }
            return Err(Error::duplicate_command(path.to_vec()));
        }

        node.command = Some(descriptor);
        Ok(())
    }

    /// Exact lookup: the descriptor terminating at `path`, if any.
    #[must_use]
    pub fn get(&self, path: &[String]) -> Option<&Arc<CommandDescriptor>> {
        self.node(path).and_then(|node| node.command.as_ref())
    }

    /// Returns true if a command terminates exactly at `path`.
    #[must_use]
    pub fn contains(&self, path: &[String]) -> bool {
        self.get(path).is_some()
    }

    /// Longest-prefix resolution.
    ///
    /// Walks `segments` while segments remain and a child exists, and
    /// returns the deepest node reached that carries a command together
    /// with its depth. Any consumed-but-uncommitted deeper walk is
    /// discarded.
    #[must_use]
    pub fn find<S: AsRef<str>>(&self, segments: &[S]) -> Option<(usize, Arc<CommandDescriptor>)> {
        let mut node = &self.root;
        let mut best: Option<(usize, Arc<CommandDescriptor>)> = None;

        for (depth, segment) in segments.iter().enumerate() {
            match node.children.get(segment.as_ref()) {
                Some(child) => {
                    if let Some(command) = &child.command {
                        best = Some((depth + 1, Arc::clone(command)));
                    }
                    node = child;
                }
                None => break,
            }
        }

        best
    }

    /// The immediate child segment names under `path`, empty if the path
    /// does not exist.
    #[must_use]
    pub fn branches(&self, path: &[String]) -> BTreeSet<String> {
        self.node(path)
            .map(|node| node.children.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn node(&self, path: &[String]) -> Option<&Node> {
        let mut node = &self.root;
        for segment in path {
            node = node.children.get(segment)?;
        }
        Some(node)
    }
}
