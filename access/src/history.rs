//! Permission history entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use trustgate_types::{Permission, Timestamp};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionEvent {
    Initialized,
    Granted,
    /// Grant of a permission that was already held. No change.
    AlreadyGranted,
    GrantDenied,
    Revoked,
    /// Revoke of a permission that was not held. No change.
    RevokeAbsent,
    Cleared,
}

/// One attempt against the permission set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionChange {
    pub timestamp: Timestamp,
    pub event: PermissionEvent,
    pub description: String,
    /// The permission set after the attempt.
    pub permissions: BTreeSet<Permission>,
}
