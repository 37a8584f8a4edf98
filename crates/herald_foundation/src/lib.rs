//! Core value and error types for Herald.
//!
//! This crate provides:
//! - [`Value`] - The coerced argument value type
//! - [`Error`] - Rich error types with context
//! - [`Result`] - The common result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use value::Value;

/// The common result type for Herald operations.
pub type Result<T> = std::result::Result<T, Error>;
