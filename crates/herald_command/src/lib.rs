//! Parameter model, type registry, sender capabilities, and command
//! descriptors for Herald.
//!
//! This crate defines everything a command *is*, independent of how input
//! is parsed or dispatched:
//!
//! - [`Parameter`] / [`ParameterSet`] - typed, ordered, possibly-defaulted
//!   parameter declarations
//! - [`TypeRegistry`] - value-kind name to parser/suggestion mapping
//! - [`CommandDescriptor`] / [`CommandBuilder`] - the fully-assembled,
//!   immutable definition of a command
//! - [`CommandSender`] and the capability model - who may invoke a command
//!   and how senders are adapted to capability views
//! - [`BoundArgs`] - the per-invocation map of coerced argument values
//!
//! Descriptors are built explicitly through [`CommandBuilder`]; Herald has
//! no reflection layer. A hosting binding layer (macro, codegen, or plain
//! builder calls) assembles descriptors and hands them to the registry.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bound;
pub mod descriptor;
pub mod parameter;
pub mod sender;
pub mod types;

pub use bound::BoundArgs;
pub use descriptor::{CommandBuilder, CommandDescriptor, Handler};
pub use parameter::{Cardinality, DefaultValue, ParamSpec, Parameter, ParameterSet, SuggestionFn};
pub use sender::{
    AdapterRegistry, CapabilityId, CommandSender, SenderRequirement, SenderView, resolve_sender,
};
pub use types::{ParameterType, TypeRegistry};
