//! The help command.
//!
//! Built against a weak router handle so the listing always reflects the
//! live registration state, including commands registered after help
//! itself.

use std::sync::{PoisonError, RwLock, Weak};

use herald_command::CommandBuilder;
use herald_foundation::{Error, Value};
use herald_registry::Router;

/// Builds the `help` command: one `Commands:` header, then one
/// `|  <usage>` line per registered command, in registration order.
#[must_use]
pub fn help_command(router: Weak<RwLock<Router>>) -> CommandBuilder {
    CommandBuilder::new("help")
        .summary("Lists every registered command")
        .handler(move |_, _, _| {
            let router = router
                .upgrade()
                .ok_or_else(|| Error::command("the command list is no longer available"))?;
            let router = router.read().unwrap_or_else(PoisonError::into_inner);

            let mut listing = String::from("Commands:");
            for command in router.commands() {
                listing.push_str("\n|  ");
                listing.push_str(command.usage());
            }
            Ok(Value::from(listing))
        })
}
