//! Library half of the `trustgate` binary: configuration, scenario replay,
//! the built-in walkthrough and output rendering.

pub mod config;
pub mod demo;
pub mod render;
pub mod scenario;

pub use config::{CliConfig, ConfigError, OutputFormat};
pub use scenario::{AccountRun, Scenario, Step};
