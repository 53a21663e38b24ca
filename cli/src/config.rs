//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use trustgate_utils::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        source: toml::de::Error,
    },

    #[error("{0}")]
    Invalid(String),
}

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::Invalid(format!(
                "unknown output format '{s}', expected 'human' or 'json'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Json => "json",
        })
    }
}

/// Settings for the `trustgate` binary.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; flags and env
/// vars override individual fields afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Result format on stdout: "human" or "json".
    #[serde(default)]
    pub output: OutputFormat,

    /// Scenario replayed by `trustgate run` when no path is given.
    #[serde(default)]
    pub scenario: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            what: path.display().to_string(),
            source,
        })
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError::Parse {
            what: "config".to_string(),
            source,
        })
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
            scenario: None,
        }
    }
}
