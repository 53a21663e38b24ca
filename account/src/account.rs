use crate::audit::{AuditAction, AuditDetails, AuditEntry};
use crate::report::{AccountReport, IdentityStatus};
use std::collections::BTreeSet;
use std::fmt;
use trustgate_access::{AccessRecord, PermissionChange};
use trustgate_identity::Identity;
use trustgate_types::{
    Clock, Outcome, Permission, SystemClock, Timestamp, ValidationError, VerificationStatus,
};

/// An identity, its permissions and the audit trail of everything done to them.
///
/// Timestamps come from `C`. Production code uses [`Account::new`] with the
/// system clock; tests pass a `&NullClock` to [`Account::with_clock`].
#[derive(Debug)]
pub struct Account<C: Clock = SystemClock> {
    clock: C,
    identity: Identity,
    access: AccessRecord,
    audit_log: Vec<AuditEntry>,
}

impl Account<SystemClock> {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_clock(SystemClock, username, email, phone)
    }
}

impl<C: Clock> Account<C> {
    /// Validate the identity fields and create an account with no permissions.
    ///
    /// Nothing is logged when validation fails: there is no account to log to.
    pub fn with_clock(
        clock: C,
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let now = clock.now();
        let identity = Identity::new(username, email, phone, now)?;
        let access = AccessRecord::new(now);
        let mut account = Self {
            clock,
            identity,
            access,
            audit_log: Vec::new(),
        };
        let description = format!("Account created for {}", account.identity.username());
        account.log(now, AuditAction::UserCreated, description, true, None);
        tracing::info!(username = %account.identity.username(), "account created");
        Ok(account)
    }

    // ── Permissions ────────────────────────────────────────────────────────

    /// Grant a permission by name. Restricted permissions need `VERIFIED` status.
    pub fn grant_permission(&mut self, name: &str) -> Outcome {
        let now = self.clock.now();
        let status = self.identity.status();
        let outcome = self.access.grant_by_name(name, status, now);
        self.log(
            now,
            AuditAction::GrantPermission,
            format!("Attempted to grant '{name}': {outcome}"),
            outcome.is_success(),
            Some(AuditDetails {
                permission: name.to_string(),
                verified: Some(status.can_hold_restricted()),
            }),
        );
        outcome
    }

    /// Revoke a permission by name. Always succeeds.
    pub fn revoke_permission(&mut self, name: &str) -> Outcome {
        let now = self.clock.now();
        let outcome = self.access.revoke_by_name(name, now);
        self.log(
            now,
            AuditAction::RevokePermission,
            format!("Attempted to revoke '{name}': {outcome}"),
            outcome.is_success(),
            Some(AuditDetails {
                permission: name.to_string(),
                verified: None,
            }),
        );
        outcome
    }

    /// Remove every permission and return how many were removed.
    pub fn clear_permissions(&mut self) -> usize {
        let now = self.clock.now();
        let count = self.access.clear_all(now);
        self.log(
            now,
            AuditAction::ClearPermissions,
            format!("Cleared {count} permissions"),
            true,
            None,
        );
        count
    }

    pub fn has_permission(&self, name: &str) -> bool {
        self.access.has_permission_named(name)
    }

    /// A copy of the granted permissions.
    pub fn permissions(&self) -> BTreeSet<Permission> {
        self.access.permissions()
    }

    // ── Identity ───────────────────────────────────────────────────────────

    /// `UNVERIFIED -> PENDING`.
    pub fn request_verification(&mut self) -> Outcome {
        let now = self.clock.now();
        let outcome = self.identity.request_verification(now);
        self.log_transition(now, AuditAction::RequestVerification, "Verification request", &outcome);
        outcome
    }

    /// `PENDING -> VERIFIED`.
    pub fn verify(&mut self) -> Outcome {
        let now = self.clock.now();
        let outcome = self.identity.verify(now);
        self.log_transition(now, AuditAction::VerifyIdentity, "Identity verification", &outcome);
        outcome
    }

    /// Replace the email address. A rejected address is logged as a failed
    /// action before the error is returned.
    pub fn update_email(&mut self, new_email: impl Into<String>) -> Result<(), ValidationError> {
        let new_email = new_email.into();
        let now = self.clock.now();
        match self.identity.set_email(new_email.as_str(), now) {
            Ok(()) => {
                self.log(
                    now,
                    AuditAction::UpdateEmail,
                    format!("Email updated to {new_email}"),
                    true,
                    None,
                );
                Ok(())
            }
            Err(e) => {
                self.log(
                    now,
                    AuditAction::UpdateEmail,
                    format!("Failed to update email: {e}"),
                    false,
                    None,
                );
                tracing::warn!(username = %self.identity.username(), error = %e, "email update rejected");
                Err(e)
            }
        }
    }

    pub fn status(&self) -> VerificationStatus {
        self.identity.status()
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// A copy of the permission history, oldest first.
    pub fn permission_history(&self) -> Vec<PermissionChange> {
        self.access.history()
    }

    // ── Reporting ──────────────────────────────────────────────────────────

    /// A copy of the audit log, oldest first.
    pub fn audit_log(&self) -> Vec<AuditEntry> {
        self.audit_log.clone()
    }

    pub fn identity_status(&self) -> IdentityStatus {
        IdentityStatus {
            username: self.identity.username().to_string(),
            email: self.identity.email().to_string(),
            phone: self.identity.phone().to_string(),
            verification_status: self.identity.status(),
            permissions: self.access.permissions(),
        }
    }

    pub fn full_report(&self) -> AccountReport {
        AccountReport {
            identity: self.identity_status(),
            audit_log_entries: self.audit_log.len(),
            last_action: self.audit_log.last().cloned(),
        }
    }

    fn log_transition(
        &mut self,
        now: Timestamp,
        action: AuditAction,
        what: &str,
        outcome: &Outcome,
    ) {
        let verdict = if outcome.is_success() { "succeeded" } else { "failed" };
        self.log(now, action, format!("{what} {verdict}: {outcome}"), outcome.is_success(), None);
    }

    /// Audit entries carry the same `now` the component stamped its own
    /// history with.
    fn log(
        &mut self,
        now: Timestamp,
        action: AuditAction,
        description: String,
        success: bool,
        details: Option<AuditDetails>,
    ) {
        self.audit_log.push(AuditEntry {
            timestamp: now,
            action,
            description,
            success,
            username: self.identity.username().to_string(),
            status: self.identity.status(),
            details,
        });
    }
}

impl<C: Clock> fmt::Display for Account<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account(username={}, status={}, permissions={})",
            self.identity.username(),
            self.identity.status(),
            self.access.len()
        )
    }
}
