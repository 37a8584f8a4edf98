//! Error types for the Herald system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error is terminal for the invocation that produced it: the core
//! never retries and never logs, it reports to the caller.

use std::fmt;

use thiserror::Error;

/// The main error type for Herald operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a not-a-command error for unresolvable input.
    #[must_use]
    pub fn not_a_command(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotACommand {
            input: input.into(),
        })
    }

    /// Creates a duplicate-command error for a contested registration path.
    #[must_use]
    pub fn duplicate_command(path: Vec<String>) -> Self {
        Self::new(ErrorKind::DuplicateCommand { path })
    }

    /// Creates an unsupported-type error for an unregistered value kind.
    #[must_use]
    pub fn unsupported_type(kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedType { kind: kind.into() })
    }

    /// Creates an invalid-argument error for a value that failed coercion.
    #[must_use]
    pub fn invalid_argument(parameter: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            parameter: parameter.into(),
            value: value.into(),
        })
    }

    /// Creates a missing-argument error for an unsatisfied required parameter.
    #[must_use]
    pub fn missing_argument(parameter: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingArgument {
            parameter: parameter.into(),
        })
    }

    /// Creates an invalid-parameter error for an unrecognized named/flag token.
    #[must_use]
    pub fn invalid_parameter(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameter {
            token: token.into(),
        })
    }

    /// Creates an incompatible-sender error.
    #[must_use]
    pub fn incompatible_sender(capability: impl Into<String>) -> Self {
        Self::new(ErrorKind::IncompatibleSender {
            capability: capability.into(),
        })
    }

    /// Creates a multiple-required-senders error.
    #[must_use]
    pub fn multiple_required_senders(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::new(ErrorKind::MultipleRequiredSenders {
            first: first.into(),
            second: second.into(),
        })
    }

    /// Creates a duplicate-parameter error for a reused parameter id.
    #[must_use]
    pub fn duplicate_parameter(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateParameter { id: id.into() })
    }

    /// Creates a duplicate-flag error for a reused flag character.
    #[must_use]
    pub fn duplicate_flag(flag: char) -> Self {
        Self::new(ErrorKind::DuplicateFlag { flag })
    }

    /// Creates an invalid-default error for a null default on a
    /// non-nullable parameter.
    #[must_use]
    pub fn invalid_default(parameter: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDefault {
            parameter: parameter.into(),
        })
    }

    /// Creates a command error, raised by a handler to signal a domain
    /// failure with a user-facing message.
    #[must_use]
    pub fn command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Command {
            message: message.into(),
        })
    }

    /// Creates an internal error (infrastructure failure, not a command
    /// outcome).
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The input did not resolve to any registered command.
    #[error("not a command: {input}")]
    NotACommand {
        /// The input line that failed to resolve.
        input: String,
    },

    /// A different command already terminates at the registration path.
    #[error("a command is already registered at: {}", path.join(" "))]
    DuplicateCommand {
        /// The contested path.
        path: Vec<String>,
    },

    /// The value kind was never registered with the type registry.
    #[error("unsupported parameter type: {kind}")]
    UnsupportedType {
        /// The unregistered kind name.
        kind: String,
    },

    /// A raw value failed coercion for its parameter's type.
    #[error("invalid argument for {parameter}: {value:?}")]
    InvalidArgument {
        /// The parameter that rejected the value.
        parameter: String,
        /// The offending raw value.
        value: String,
    },

    /// A required parameter was not satisfied.
    #[error("missing argument: {parameter}")]
    MissingArgument {
        /// The unsatisfied parameter id.
        parameter: String,
    },

    /// A named or flag token matched no declared parameter.
    #[error("invalid parameter: {token}")]
    InvalidParameter {
        /// The unrecognized token.
        token: String,
    },

    /// The sender does not satisfy the command's required capability.
    #[error("incompatible sender: requires {capability}")]
    IncompatibleSender {
        /// The required capability's name.
        capability: String,
    },

    /// A descriptor declared more than one required sender capability.
    #[error("only one sender capability can be required: {first} and {second}")]
    MultipleRequiredSenders {
        /// The first required capability.
        first: String,
        /// The conflicting second required capability.
        second: String,
    },

    /// A parameter id was declared twice within one command.
    #[error("a parameter with the id {id:?} already exists")]
    DuplicateParameter {
        /// The reused id.
        id: String,
    },

    /// A flag character was claimed twice within one command.
    #[error("the flag '-{flag}' is already taken")]
    DuplicateFlag {
        /// The reused flag character.
        flag: char,
    },

    /// A non-nullable parameter carries a null default value.
    #[error("parameter {parameter:?} must be nullable to have a null default value")]
    InvalidDefault {
        /// The misconfigured parameter id.
        parameter: String,
    },

    /// A handler-raised command failure with a user-facing message.
    #[error("{message}")]
    Command {
        /// The message to present to the sender.
        message: String,
    },

    /// Internal error (infrastructure, not a command outcome).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// The command being resolved or executed, if known.
    pub command: Option<String>,
    /// The raw input line, if available.
    pub input: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command name.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Sets the raw input line.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(command) = &self.command {
            write!(f, "in command {command}")?;
        }
        if let Some(input) = &self.input {
            if self.command.is_some() {
                write!(f, " ")?;
            }
            write!(f, "for input {input:?}")?;
        }
        Ok(())
    }
}
