//! Integration tests for Layer 3: Engine
//!
//! Tests for the binder, the dispatch pipeline, sender resolution, and
//! completion suggestions.

mod dispatch;
mod senders;
