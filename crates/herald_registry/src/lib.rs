//! Routing trie, command registry, and multi-registry router for Herald.
//!
//! Commands live at multi-segment paths ("map zoom"); alias paths make a
//! command reachable under several names without duplicating the
//! descriptor. This crate provides:
//!
//! - [`CommandTrie`] - segment trie with exact lookup, longest-prefix
//!   resolution, and child-branch enumeration
//! - [`CommandRegistry`] - all-or-nothing registration across alias
//!   paths, registration-order listing
//! - [`Router`] - resolution across several registries, longest match
//!   first, earlier registry winning ties

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod registry;
pub mod router;
pub mod trie;

pub use registry::CommandRegistry;
pub use router::Router;
pub use trie::CommandTrie;
