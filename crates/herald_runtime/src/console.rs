//! The interactive console.
//!
//! A read-dispatch-print loop over a [`LineEditor`], feeding lines into a
//! [`TextChannel`] on behalf of a [`ConsoleSender`] that prints responses
//! to stdout.

use std::any::Any;

use herald_command::CommandSender;
use herald_foundation::Result;

use crate::channel::TextChannel;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// The sender behind the interactive console. Responses go to stdout.
pub struct ConsoleSender;

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        "#"
    }

    fn send_message(&self, message: &str) {
        println!("{message}");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The interactive console loop.
pub struct Console<E: LineEditor = RustylineEditor> {
    channel: TextChannel,
    editor: E,
    show_banner: bool,
    prompt: String,
}

impl Console<RustylineEditor> {
    /// Creates a console over the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(channel: TextChannel) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(channel, editor))
    }
}

impl<E: LineEditor> Console<E> {
    /// Creates a console with the given editor.
    pub fn with_editor(channel: TextChannel, editor: E) -> Self {
        Self {
            channel,
            editor,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Runs the console loop. Ctrl+C cancels the current line; Ctrl+D
    /// exits.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        let sender = ConsoleSender;
        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    self.channel.receive(&sender, &line);
                }
                ReadResult::Interrupted => {
                    println!();
                }
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    fn print_banner(&self) {
        println!(
            "Herald {} - type \"help\" for the command list, Ctrl+D to exit.",
            env!("CARGO_PKG_VERSION")
        );
    }
}
