use proptest::prelude::*;

use trustgate_types::{
    Email, Permission, PhoneNumber, StatusTransition, Timestamp, VerificationStatus,
};

fn arb_status() -> impl Strategy<Value = VerificationStatus> {
    prop_oneof![
        Just(VerificationStatus::Unverified),
        Just(VerificationStatus::Pending),
        Just(VerificationStatus::Verified),
    ]
}

fn arb_transition() -> impl Strategy<Value = StatusTransition> {
    prop_oneof![
        Just(StatusTransition::RequestVerification),
        Just(StatusTransition::Verify),
    ]
}

proptest! {
    /// Any string built from the email grammar is accepted.
    #[test]
    fn well_formed_emails_accepted(
        local in "[a-zA-Z0-9._%+-]{1,20}",
        domain in "[a-zA-Z0-9-]{1,15}(\\.[a-zA-Z0-9-]{1,10}){0,2}",
        tld in "[a-zA-Z]{2,6}",
    ) {
        let raw = format!("{local}@{domain}.{tld}");
        prop_assert!(Email::parse(raw.clone()).is_ok(), "rejected {}", raw);
    }

    /// Strings without an `@` are never accepted as email.
    #[test]
    fn emails_without_at_rejected(raw in "[a-zA-Z0-9._%+-]{0,40}") {
        prop_assert!(Email::parse(raw).is_err());
    }

    /// Any string built from the phone grammar is accepted.
    #[test]
    fn well_formed_phones_accepted(
        cc in "[0-9]{1,3}",
        area in "[0-9]{2,3}",
        exchange in "[0-9]{3,4}",
        line in "[0-9]{4,5}",
    ) {
        let raw = format!("+{cc}-{area}-{exchange}-{line}");
        prop_assert!(PhoneNumber::parse(raw.clone()).is_ok(), "rejected {}", raw);
    }

    /// Digits-only strings (no `+`, no dashes) are never accepted as phone numbers.
    #[test]
    fn bare_digit_phones_rejected(raw in "[0-9]{0,20}") {
        prop_assert!(PhoneNumber::parse(raw).is_err());
    }

    /// A transition, when allowed, moves exactly one step forward.
    #[test]
    fn transitions_never_regress_or_skip(
        status in arb_status(),
        transition in arb_transition(),
    ) {
        let legal = matches!(
            (status, transition),
            (VerificationStatus::Unverified, StatusTransition::RequestVerification)
                | (VerificationStatus::Pending, StatusTransition::Verify)
        );
        match status.apply(transition) {
            Some(next) => {
                prop_assert!(legal);
                prop_assert!(next > status);
                prop_assert_eq!(next as u8, status as u8 + 1);
            }
            None => prop_assert!(!legal),
        }
    }

    /// Only the exact canonical name parses; any case change is rejected.
    #[test]
    fn permission_parse_is_exact(
        index in 0usize..Permission::ALL.len(),
        flips in prop::collection::vec(any::<bool>(), 20),
    ) {
        let permission = Permission::ALL[index];
        let mixed: String = permission
            .as_str()
            .chars()
            .zip(flips.iter().cycle())
            .map(|(c, &lower)| if lower { c.to_ascii_lowercase() } else { c })
            .collect();
        let expected = if mixed == permission.as_str() {
            Ok(permission)
        } else {
            Err(mixed.clone())
        };
        prop_assert_eq!(mixed.parse::<Permission>(), expected);
    }

    /// Timestamps order the same way as their seconds.
    #[test]
    fn timestamp_order_follows_seconds(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(Timestamp::new(a).cmp(&Timestamp::new(b)), a.cmp(&b));
    }
}
