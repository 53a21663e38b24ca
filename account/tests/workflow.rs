//! End-to-end account workflows.

use proptest::prelude::*;
use std::collections::BTreeSet;

use trustgate_account::{Account, AuditAction};
use trustgate_nullables::NullClock;
use trustgate_types::{Denial, Permission, VerificationStatus};

fn new_account<'a>(clock: &'a NullClock, name: &str) -> Account<&'a NullClock> {
    Account::with_clock(
        clock,
        name,
        format!("{name}@example.com"),
        "+1-555-123-4567",
    )
    .expect("valid account")
}

#[test]
fn restricted_grant_unlocks_after_verification() {
    let mut account = Account::new("alice", "alice@example.com", "+1-555-123-4567").unwrap();
    assert_eq!(account.status(), VerificationStatus::Unverified);

    let denied = account.grant_permission("TRANSFER");
    assert!(!denied.is_success());
    assert!(matches!(
        denied.denial(),
        Some(Denial::RequiresVerification {
            permission: Permission::Transfer,
            ..
        })
    ));

    assert!(account.request_verification().is_success());
    assert!(account.verify().is_success());
    assert_eq!(account.status(), VerificationStatus::Verified);

    assert!(account.grant_permission("TRANSFER").is_success());
    assert_eq!(account.permissions(), BTreeSet::from([Permission::Transfer]));
}

#[test]
fn mixed_permissions_walkthrough() {
    let clock = NullClock::new(1_700_000_000);
    let mut account = new_account(&clock, "jane");

    assert!(!account.grant_permission("TRANSFER").is_success());
    assert!(account.grant_permission("VIEW_BALANCE").is_success());

    account.request_verification();
    account.verify();

    assert!(account.grant_permission("TRANSFER").is_success());
    assert!(account.grant_permission("WITHDRAW").is_success());
    assert!(account.has_permission("TRANSFER"));
    assert!(account.has_permission("WITHDRAW"));
    assert!(!account.has_permission("withdraw"));

    assert!(account.revoke_permission("TRANSFER").is_success());
    assert!(!account.has_permission("TRANSFER"));
    assert!(account.has_permission("WITHDRAW"));

    // Revoking again is still a success.
    assert!(account.revoke_permission("TRANSFER").is_success());

    let actions: Vec<_> = account.audit_log().iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            AuditAction::UserCreated,
            AuditAction::GrantPermission,
            AuditAction::GrantPermission,
            AuditAction::RequestVerification,
            AuditAction::VerifyIdentity,
            AuditAction::GrantPermission,
            AuditAction::GrantPermission,
            AuditAction::RevokePermission,
            AuditAction::RevokePermission,
        ]
    );
    let successes: Vec<_> = account.audit_log().iter().map(|e| e.success).collect();
    assert_eq!(
        successes,
        vec![true, false, true, true, true, true, true, true, true]
    );
}

#[test]
fn returned_collections_are_copies() {
    let clock = NullClock::new(0);
    let mut account = new_account(&clock, "grace");
    account.request_verification();
    account.verify();
    account.grant_permission("TRANSFER");
    account.grant_permission("WITHDRAW");

    let mut perms = account.permissions();
    let before = perms.len();
    perms.insert(Permission::Deposit);
    perms.remove(&Permission::Transfer);
    assert_eq!(account.permissions().len(), before);
    assert!(account.has_permission("TRANSFER"));
    assert!(!account.has_permission("DEPOSIT"));

    let mut log = account.audit_log();
    let log_len = log.len();
    log.clear();
    assert_eq!(account.audit_log().len(), log_len);

    let mut status = account.identity_status();
    status.permissions.clear();
    assert_eq!(account.identity_status().permissions.len(), before);
}

#[test]
fn unknown_permission_is_denied_and_audited() {
    let clock = NullClock::new(0);
    let mut account = new_account(&clock, "henry");
    let outcome = account.grant_permission("ADMIN_ACCESS");
    assert!(outcome.message().contains("invalid permission"));
    let entry = account.audit_log().pop().unwrap();
    assert!(!entry.success);
    assert_eq!(entry.details.unwrap().permission, "ADMIN_ACCESS");
    assert!(!account.has_permission("ADMIN_ACCESS"));
}

#[test]
fn non_canonical_names_are_unknown() {
    let clock = NullClock::new(0);
    let mut account = new_account(&clock, "judy");
    for name in ["deposit", "  Transfer "] {
        let outcome = account.grant_permission(name);
        assert_eq!(
            outcome.denial(),
            Some(&Denial::UnknownPermission { name: name.into() })
        );
        let entry = account.audit_log().pop().unwrap();
        assert!(!entry.success);
        assert_eq!(entry.details.unwrap().permission, name);
    }
    assert!(account.permissions().is_empty());
}

#[test]
fn has_permission_is_a_pure_read() {
    let clock = NullClock::new(0);
    let mut account = new_account(&clock, "kim");
    account.grant_permission("DEPOSIT");

    let audit_len = account.audit_log().len();
    let history_len = account.permission_history().len();
    let permissions = account.permissions();

    clock.advance(5);
    for name in ["DEPOSIT", "TRANSFER", "ADMIN_ACCESS", "deposit"] {
        account.has_permission(name);
    }

    assert_eq!(account.audit_log().len(), audit_len);
    assert_eq!(account.permission_history().len(), history_len);
    assert_eq!(account.permissions(), permissions);
}

#[test]
fn any_username_with_valid_contact_details_constructs() {
    let clock = NullClock::new(0);
    for name in ["", "   ", "O'Brien"] {
        let account = Account::with_clock(&clock, name, "user@example.com", "+1-555-123-4567")
            .expect("valid email and phone");
        assert_eq!(account.identity().username().as_str(), name);
        assert_eq!(account.status(), VerificationStatus::Unverified);
    }
}

#[test]
fn audit_log_serializes_to_json() {
    let clock = NullClock::new(0);
    let mut account = new_account(&clock, "ivy");
    account.grant_permission("DEPOSIT");
    let json = serde_json::to_value(account.audit_log()).unwrap();
    assert_eq!(json[0]["action"], "USER_CREATED");
    assert_eq!(json[1]["action"], "GRANT_PERMISSION");
    assert_eq!(json[1]["status"], "UNVERIFIED");
    assert_eq!(json[1]["details"]["permission"], "DEPOSIT");
    assert!(json[0].get("details").is_none());
}

fn arb_restricted() -> impl Strategy<Value = Permission> {
    prop_oneof![Just(Permission::Transfer), Just(Permission::Withdraw)]
}

proptest! {
    /// Restricted grants fail in UNVERIFIED and PENDING, and succeed once VERIFIED.
    #[test]
    fn restricted_grants_follow_status(
        permission in arb_restricted(),
        requested in any::<bool>(),
    ) {
        let clock = NullClock::new(0);
        let mut account = new_account(&clock, "prop");
        if requested {
            account.request_verification();
        }
        prop_assert!(!account.grant_permission(permission.as_str()).is_success());
        prop_assert!(!account.has_permission(permission.as_str()));

        if !requested {
            account.request_verification();
        }
        account.verify();
        prop_assert!(account.grant_permission(permission.as_str()).is_success());
        prop_assert!(account.has_permission(permission.as_str()));
    }

    /// Every operation appends exactly one audit entry.
    #[test]
    fn each_operation_appends_one_entry(ops in prop::collection::vec(0u8..6, 0..30)) {
        let clock = NullClock::new(0);
        let mut account = new_account(&clock, "prop");
        for (i, op) in ops.iter().enumerate() {
            clock.advance(1);
            match *op {
                0 => { account.grant_permission("TRANSFER"); }
                1 => { account.grant_permission("DEPOSIT"); }
                2 => { account.revoke_permission("DEPOSIT"); }
                3 => { account.request_verification(); }
                4 => { account.verify(); }
                _ => { let _ = account.update_email("bad"); }
            }
            prop_assert_eq!(account.audit_log().len(), i + 2);
        }
        let log = account.audit_log();
        prop_assert!(log.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        prop_assert!(log.windows(2).all(|w| w[0].status <= w[1].status));
    }
}
