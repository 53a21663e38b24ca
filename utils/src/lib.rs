//! Shared utilities for TrustGate.

pub mod logging;

pub use logging::{init_logging, LogFormat};
