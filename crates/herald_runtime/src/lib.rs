//! Text channel, console REPL, help command, and CLI for Herald.
//!
//! This crate provides:
//! - [`TextChannel`] - prefix-aware bridge from raw input lines to the
//!   dispatcher, rendering results and errors back to the sender
//! - [`help_command`] - a `help` command listing every registered usage
//! - [`Console`] - an interactive read-dispatch-print loop over a
//!   swappable [`LineEditor`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod channel;
pub mod console;
pub mod editor;
pub mod help;

pub use channel::TextChannel;
pub use console::{Console, ConsoleSender};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use help::help_command;
