//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies are abstracted behind traits in `trustgate-types`.
//! This crate provides test-friendly implementations that return
//! deterministic values and can be controlled programmatically.
//!
//! Usage: swap the real implementation for a nullable in tests.

pub mod clock;

pub use clock::NullClock;
