//! Integration tests for Layer 2: Parser
//!
//! Tests for the quote-aware tokenizer and the named/flag splitter.

mod tokenizer;
