//! Business-rule results.
//!
//! Denials are values, not errors: callers get an [`Outcome`] back and decide
//! what to do with it. Only malformed input is reported through `Result`.

use crate::permission::Permission;
use crate::state::{StatusTransition, VerificationStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why an operation was refused. The `Display` text is the human-readable reason.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Denial {
    #[error("cannot grant '{permission}': user must be VERIFIED (currently {status})")]
    RequiresVerification {
        permission: Permission,
        status: VerificationStatus,
    },

    #[error("invalid permission: {name}")]
    UnknownPermission { name: String },

    #[error("cannot {attempted} from {from} state")]
    InvalidTransition {
        from: VerificationStatus,
        attempted: StatusTransition,
    },
}

/// The result of a grant, revoke or status transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Approved { message: String },
    Denied { reason: Denial },
}

impl Outcome {
    pub fn approved(message: impl Into<String>) -> Self {
        Self::Approved {
            message: message.into(),
        }
    }

    pub fn denied(reason: Denial) -> Self {
        Self::Denied { reason }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }

    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Self::Approved { .. } => None,
            Self::Denied { reason } => Some(reason),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved { message } => f.write_str(message),
            Self::Denied { reason } => write!(f, "{reason}"),
        }
    }
}
