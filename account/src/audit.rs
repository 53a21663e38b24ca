//! Audit log entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use trustgate_types::{Timestamp, VerificationStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    UserCreated,
    GrantPermission,
    RevokePermission,
    ClearPermissions,
    RequestVerification,
    VerifyIdentity,
    UpdateEmail,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserCreated => "USER_CREATED",
            Self::GrantPermission => "GRANT_PERMISSION",
            Self::RevokePermission => "REVOKE_PERMISSION",
            Self::ClearPermissions => "CLEAR_PERMISSIONS",
            Self::RequestVerification => "REQUEST_VERIFICATION",
            Self::VerifyIdentity => "VERIFY_IDENTITY",
            Self::UpdateEmail => "UPDATE_EMAIL",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra context for permission actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditDetails {
    /// The permission name as requested, which may be outside the vocabulary.
    pub permission: String,
    /// Whether the identity was `VERIFIED` at the time. Only set for grants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// One action recorded against an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: Timestamp,
    pub action: AuditAction,
    pub description: String,
    pub success: bool,
    pub username: String,
    /// Verification status after the action.
    pub status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<AuditDetails>,
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {} (status={})",
            self.timestamp,
            if self.success { "ok  " } else { "FAIL" },
            self.action,
            self.description,
            self.status
        )
    }
}
