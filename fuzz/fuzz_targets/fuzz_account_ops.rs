#![no_main]

use libfuzzer_sys::fuzz_target;
use trustgate_account::Account;
use trustgate_types::Permission;

fuzz_target!(|data: &[u8]| {
    // Arbitrary operation sequences: status never regresses, restricted
    // permissions are only ever held while VERIFIED, one audit entry per op.
    let Ok(mut account) = Account::new("fuzz", "fuzz@example.com", "+1-555-000-0000") else {
        return;
    };
    for (i, byte) in data.iter().enumerate() {
        let before = account.status();
        let permission = Permission::ALL[usize::from(byte >> 4) % Permission::ALL.len()];
        match byte % 6 {
            0 => {
                let _ = account.grant_permission(permission.as_str());
            }
            1 => {
                let _ = account.revoke_permission(permission.as_str());
            }
            2 => {
                let _ = account.request_verification();
            }
            3 => {
                let _ = account.verify();
            }
            4 => {
                let _ = account.clear_permissions();
            }
            _ => {
                let _ = account.update_email("not-an-email");
            }
        }
        assert!(account.status() >= before);
        assert!(account
            .permissions()
            .iter()
            .all(|p| !p.is_restricted() || account.status().can_hold_restricted()));
        assert_eq!(account.audit_log().len(), i + 2);
    }
});
