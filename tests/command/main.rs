//! Integration tests for Layer 1: Command model
//!
//! Tests for parameters, the type registry, and descriptor building.

mod types;
