//! Scenario files: a list of accounts and the steps to replay against each.
//!
//! ```toml
//! [[accounts]]
//! username = "alice"
//! email = "alice@example.com"
//! phone = "+1-555-123-4567"
//! steps = [
//!   { action = "grant", permission = "TRANSFER" },
//!   { action = "request_verification" },
//!   { action = "verify" },
//!   { action = "grant", permission = "TRANSFER" },
//! ]
//! ```

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use trustgate_account::{Account, AccountReport, AuditEntry};
use trustgate_types::{Clock, Outcome, SystemClock};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub accounts: Vec<AccountScript>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountScript {
    pub username: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Grant { permission: String },
    Revoke { permission: String },
    Clear,
    RequestVerification,
    Verify,
    UpdateEmail { email: String },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grant { permission } => write!(f, "grant {permission}"),
            Self::Revoke { permission } => write!(f, "revoke {permission}"),
            Self::Clear => f.write_str("clear"),
            Self::RequestVerification => f.write_str("request_verification"),
            Self::Verify => f.write_str("verify"),
            Self::UpdateEmail { email } => write!(f, "update_email {email}"),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct StepResult {
    pub step: String,
    pub success: bool,
    pub message: String,
}

/// What happened to one scripted account.
#[derive(Clone, Debug, Serialize)]
pub struct AccountRun {
    pub username: String,
    /// Set when the account could not be created; no steps run in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_error: Option<String>,
    pub steps: Vec<StepResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AccountReport>,
    pub audit_log: Vec<AuditEntry>,
}

impl Scenario {
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

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError::Parse {
            what: "scenario".to_string(),
            source,
        })
    }

    pub fn run(&self) -> Vec<AccountRun> {
        self.run_with_clock(&SystemClock)
    }

    pub fn run_with_clock(&self, clock: &dyn Clock) -> Vec<AccountRun> {
        self.accounts
            .iter()
            .map(|script| script.run(clock))
            .collect()
    }
}

impl AccountScript {
    fn run(&self, clock: &dyn Clock) -> AccountRun {
        let mut account =
            match Account::with_clock(clock, &self.username, &self.email, &self.phone) {
                Ok(account) => account,
                Err(e) => {
                    tracing::warn!(username = %self.username, error = %e, "scripted account rejected");
                    return AccountRun {
                        username: self.username.clone(),
                        creation_error: Some(e.to_string()),
                        steps: Vec::new(),
                        report: None,
                        audit_log: Vec::new(),
                    };
                }
            };

        let steps = self
            .steps
            .iter()
            .map(|step| {
                let (success, message) = apply(&mut account, step);
                tracing::debug!(username = %self.username, %step, success, "step applied");
                StepResult {
                    step: step.to_string(),
                    success,
                    message,
                }
            })
            .collect();

        AccountRun {
            username: self.username.clone(),
            creation_error: None,
            steps,
            report: Some(account.full_report()),
            audit_log: account.audit_log(),
        }
    }
}

fn apply<C: Clock>(account: &mut Account<C>, step: &Step) -> (bool, String) {
    let outcome = |o: Outcome| (o.is_success(), o.message());
    match step {
        Step::Grant { permission } => outcome(account.grant_permission(permission)),
        Step::Revoke { permission } => outcome(account.revoke_permission(permission)),
        Step::Clear => {
            let count = account.clear_permissions();
            (true, format!("Cleared {count} permissions"))
        }
        Step::RequestVerification => outcome(account.request_verification()),
        Step::Verify => outcome(account.verify()),
        Step::UpdateEmail { email } => match account.update_email(email.as_str()) {
            Ok(()) => (true, "Email updated successfully".to_string()),
            Err(e) => (false, e.to_string()),
        },
    }
}
