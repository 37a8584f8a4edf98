//! The text command channel.
//!
//! Bridges a raw text surface (chat, console) to the dispatcher. An
//! optional command prefix scopes the channel: input not starting with
//! the prefix is silently ignored, so the channel can sit on a stream
//! that also carries ordinary conversation.

use std::sync::Arc;

use herald_command::CommandSender;
use herald_engine::Dispatcher;
use herald_foundation::Value;

/// Turns input lines into dispatched commands and rendered responses.
pub struct TextChannel {
    dispatcher: Arc<Dispatcher>,
    prefix: Option<String>,
}

impl TextChannel {
    /// Creates a channel with no prefix: every line is treated as a
    /// command invocation.
    #[must_use]
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            prefix: None,
        }
    }

    /// Scopes the channel to lines starting with `prefix`; the prefix is
    /// stripped before resolution.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The dispatcher this channel feeds.
    #[must_use]
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Handles one input line.
    ///
    /// Returns the response text, if any, after delivering it through
    /// `sender.send_message`. A line outside the channel's prefix is
    /// ignored; a handler returning [`Value::Null`] produces no response;
    /// a failure is rendered as its message.
    pub fn receive(&self, sender: &dyn CommandSender, line: &str) -> Option<String> {
        let line = match &self.prefix {
            Some(prefix) => line.strip_prefix(prefix.as_str())?,
            None => line,
        };

        let response = match self.dispatcher.dispatch(sender, line) {
            Ok(Value::Null) => return None,
            Ok(value) => value.to_string(),
            Err(error) => error.to_string(),
        };

        sender.send_message(&response);
        Some(response)
    }
}
