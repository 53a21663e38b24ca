//! TrustGate CLI: walkthrough, scenario replay and input validation.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use trustgate_cli::{demo, render, CliConfig, OutputFormat, Scenario};
use trustgate_types::{Email, PhoneNumber, SystemClock};
use trustgate_utils::LogFormat;

#[derive(Parser)]
#[command(name = "trustgate", about = "Identity verification and access record demo")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long, env = "TRUSTGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "TRUSTGATE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "TRUSTGATE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Result format on stdout: "human" or "json".
    #[arg(long, env = "TRUSTGATE_OUTPUT")]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the built-in walkthrough.
    Demo,
    /// Replay a scenario file and print each account's status and audit log.
    Run {
        /// Scenario TOML file. Defaults to `scenario` from the config file.
        scenario: Option<PathBuf>,
    },
    /// Check email and phone values against the validators.
    Validate {
        #[arg(long)]
        email: Vec<String>,
        #[arg(long)]
        phone: Vec<String>,
    },
}

#[derive(Serialize)]
struct Validation {
    field: &'static str,
    value: String,
    valid: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    let config = CliConfig {
        log_level: cli.log_level.unwrap_or(file_config.log_level),
        log_format: cli.log_format.unwrap_or(file_config.log_format),
        output: cli.output.unwrap_or(file_config.output),
        scenario: file_config.scenario,
    };

    trustgate_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Demo => {
            demo::run(&mut out, &SystemClock)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { scenario } => {
            let path = scenario
                .or(config.scenario)
                .context("no scenario given on the command line or in the config file")?;
            let scenario = Scenario::from_toml_file(&path)?;
            tracing::info!(
                path = %path.display(),
                accounts = scenario.accounts.len(),
                "replaying scenario"
            );
            let runs = scenario.run();
            render::runs(&mut out, &runs, config.output)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { email, phone } => {
            let results: Vec<Validation> = email
                .into_iter()
                .map(|value| Validation {
                    field: "email",
                    valid: Email::is_valid(&value),
                    value,
                })
                .chain(phone.into_iter().map(|value| Validation {
                    field: "phone",
                    valid: PhoneNumber::is_valid(&value),
                    value,
                }))
                .collect();
            anyhow::ensure!(!results.is_empty(), "pass at least one --email or --phone");

            match config.output {
                OutputFormat::Json => render::json(&mut out, &results)?,
                OutputFormat::Human => {
                    for r in &results {
                        let verdict = if r.valid { "valid" } else { "INVALID" };
                        writeln!(out, "{:<5} {:<8} {}", r.field, verdict, r.value)?;
                    }
                }
            }
            Ok(if results.iter().all(|r| r.valid) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
