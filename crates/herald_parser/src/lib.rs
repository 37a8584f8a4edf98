//! Quote-aware tokenizer and argument splitter for Herald.
//!
//! Two stages between raw input and the binder:
//!
//! ```text
//! "copy \"my file\" dest --force -n 3"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["copy", "my file", "dest", "--force", "-n", "3"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ARG SPLITTER    │  → positional: ["my file", "dest"]
//! │ (vs parameters) │    named: {force: [true], count: [3]}, flags: {n}
//! └─────────────────┘
//! ```
//!
//! The tokenizer's empty-token behavior between consecutive separators is
//! deliberate and load-bearing; see [`tokenizer::tokenize`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod tokenizer;

pub use args::{SplitArgs, split_args};
pub use tokenizer::tokenize;
