//! Argument binder, dispatch pipeline, and completion engine for Herald.
//!
//! One invocation flows through a fixed pipeline:
//!
//! ```text
//!   input line
//!       |
//!   RESOLVING      router lookup on space-split words
//!       |
//!   SENDER_CHECK   capability resolution against the declared requirement
//!       |
//!   BINDING        tokenize remainder, split named/flags, coerce to values
//!       |
//!   INVOKING       handler call with sender view and bound arguments
//!       |
//!   DONE           handler's value (or the first failure, terminally)
//! ```
//!
//! Every failure is terminal for its invocation and reported synchronously;
//! nothing here retries or logs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binder;
pub mod completion;
pub mod dispatcher;

pub use binder::bind;
pub use completion::completion_suggestions;
pub use dispatcher::Dispatcher;
