//! Herald - Command-dispatch framework for interactive text surfaces
//!
//! This crate re-exports all layers of the Herald system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: herald_runtime    — Text channel, console REPL, help, CLI
//! Layer 3: herald_engine     — Argument binder, dispatcher, completion
//! Layer 2: herald_registry   — Routing trie, registry, router
//!          herald_parser     — Tokenizer, named/flag splitter
//! Layer 1: herald_command    — Parameters, types, descriptors, senders
//! Layer 0: herald_foundation — Core types (Value, Error)
//! ```

pub use herald_command as command;
pub use herald_engine as engine;
pub use herald_foundation as foundation;
pub use herald_parser as parser;
pub use herald_registry as registry;
pub use herald_runtime as runtime;
