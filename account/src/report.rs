//! Read-only snapshots of an account.

use crate::audit::AuditEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use trustgate_types::{Permission, VerificationStatus};

/// Current identity fields, status and permissions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityStatus {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub verification_status: VerificationStatus,
    pub permissions: BTreeSet<Permission>,
}

/// Identity status plus a summary of the audit log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountReport {
    pub identity: IdentityStatus,
    pub audit_log_entries: usize,
    pub last_action: Option<AuditEntry>,
}
