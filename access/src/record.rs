use crate::history::{PermissionChange, PermissionEvent};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use trustgate_types::{Denial, Outcome, Permission, Timestamp, VerificationStatus};

/// The permissions held by one account.
///
/// The record does not know the identity it belongs to; callers pass the
/// current [`VerificationStatus`] into [`AccessRecord::grant`].
#[derive(Clone, Debug, Serialize)]
pub struct AccessRecord {
    permissions: BTreeSet<Permission>,
    history: Vec<PermissionChange>,
}

impl AccessRecord {
    pub fn new(now: Timestamp) -> Self {
        let mut record = Self {
            permissions: BTreeSet::new(),
            history: Vec::new(),
        };
        record.record(now, PermissionEvent::Initialized, "Account access created".into());
        record
    }

    /// Grant a permission.
    ///
    /// Unrestricted permissions are always granted. Restricted ones need
    /// `status` to be `VERIFIED`. Granting a held permission is a no-op that
    /// still succeeds.
    pub fn grant(
        &mut self,
        permission: Permission,
        status: VerificationStatus,
        now: Timestamp,
    ) -> Outcome {
        if permission.is_restricted() && !status.can_hold_restricted() {
            let reason = Denial::RequiresVerification { permission, status };
            self.record(now, PermissionEvent::GrantDenied, reason.to_string());
            tracing::warn!(%permission, %status, "restricted permission denied");
            return Outcome::denied(reason);
        }

        if !self.permissions.insert(permission) {
            let message = format!("Permission already granted: {permission}");
            self.record(now, PermissionEvent::AlreadyGranted, message.clone());
            return Outcome::approved(message);
        }

        let message = format!("Permission granted: {permission}");
        self.record(now, PermissionEvent::Granted, message.clone());
        tracing::debug!(%permission, "permission granted");
        Outcome::approved(message)
    }

    /// [`AccessRecord::grant`] by name. Unknown names are denied and logged.
    pub fn grant_by_name(
        &mut self,
        name: &str,
        status: VerificationStatus,
        now: Timestamp,
    ) -> Outcome {
        match name.parse::<Permission>() {
            Ok(permission) => self.grant(permission, status, now),
            Err(name) => {
                let reason = Denial::UnknownPermission { name };
                self.record(now, PermissionEvent::GrantDenied, reason.to_string());
                tracing::warn!(%reason, "grant of unknown permission");
                Outcome::denied(reason)
            }
        }
    }

    /// Remove a permission. Always succeeds; revoking an absent permission
    /// changes nothing but is still logged.
    pub fn revoke(&mut self, permission: Permission, now: Timestamp) -> Outcome {
        if self.permissions.remove(&permission) {
            let message = format!("Permission revoked: {permission}");
            self.record(now, PermissionEvent::Revoked, message.clone());
            tracing::debug!(%permission, "permission revoked");
            Outcome::approved(message)
        } else {
            self.revoke_absent(permission.as_str(), now)
        }
    }

    /// [`AccessRecord::revoke`] by name. An unknown name cannot be held, so it
    /// is treated like any other absent permission.
    pub fn revoke_by_name(&mut self, name: &str, now: Timestamp) -> Outcome {
        match name.parse::<Permission>() {
            Ok(permission) => self.revoke(permission, now),
            Err(name) => self.revoke_absent(&name, now),
        }
    }

    fn revoke_absent(&mut self, name: &str, now: Timestamp) -> Outcome {
        let message = format!("Permission not held: {name}");
        self.record(now, PermissionEvent::RevokeAbsent, message.clone());
        Outcome::approved(message)
    }

    /// Remove every permission and return how many were removed.
    pub fn clear_all(&mut self, now: Timestamp) -> usize {
        let count = self.permissions.len();
        self.permissions.clear();
        self.record(now, PermissionEvent::Cleared, format!("Cleared {count} permissions"));
        tracing::info!(count, "all permissions cleared");
        count
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Unknown names are never held.
    pub fn has_permission_named(&self, name: &str) -> bool {
        name.parse::<Permission>()
            .is_ok_and(|permission| self.has_permission(permission))
    }

    /// A copy of the granted permissions.
    pub fn permissions(&self) -> BTreeSet<Permission> {
        self.permissions.clone()
    }

    /// A copy of the permission history, oldest first.
    pub fn history(&self) -> Vec<PermissionChange> {
        self.history.clone()
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    fn record(&mut self, timestamp: Timestamp, event: PermissionEvent, description: String) {
        self.history.push(PermissionChange {
            timestamp,
            event,
            description,
            permissions: self.permissions.clone(),
        });
    }
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.permissions.iter().map(Permission::as_str).collect();
        write!(f, "AccessRecord(permissions=[{}])", names.join(", "))
    }
}
