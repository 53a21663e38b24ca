//! The fixed permission vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a permission can be granted before the identity is verified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionTier {
    /// Grantable in any verification state.
    Unrestricted,
    /// Grantable only once the identity is `VERIFIED`.
    Restricted,
}

/// A capability that can be granted to an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    ViewBalance,
    ViewTransactions,
    Deposit,
    UpdateProfile,
    Transfer,
    Withdraw,
}

impl Permission {
    /// Every permission, unrestricted first.
    pub const ALL: [Permission; 6] = [
        Self::ViewBalance,
        Self::ViewTransactions,
        Self::Deposit,
        Self::UpdateProfile,
        Self::Transfer,
        Self::Withdraw,
    ];

    pub fn tier(&self) -> PermissionTier {
        match self {
            Self::Transfer | Self::Withdraw => PermissionTier::Restricted,
            Self::ViewBalance | Self::ViewTransactions | Self::Deposit | Self::UpdateProfile => {
                PermissionTier::Unrestricted
            }
        }
    }

    pub fn is_restricted(&self) -> bool {
        self.tier() == PermissionTier::Restricted
    }

    /// Canonical upper-case name, e.g. `VIEW_BALANCE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewBalance => "VIEW_BALANCE",
            Self::ViewTransactions => "VIEW_TRANSACTIONS",
            Self::Deposit => "DEPOSIT",
            Self::UpdateProfile => "UPDATE_PROFILE",
            Self::Transfer => "TRANSFER",
            Self::Withdraw => "WITHDRAW",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts canonical names only. Any other spelling, including a different
/// case or surrounding whitespace, is not in the vocabulary.
///
/// The error is the unrecognised input, unchanged.
impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_partition() {
        let restricted: Vec<_> = Permission::ALL
            .into_iter()
            .filter(Permission::is_restricted)
            .collect();
        assert_eq!(restricted, vec![Permission::Transfer, Permission::Withdraw]);
    }

    #[test]
    fn only_canonical_spelling_parses() {
        assert_eq!("TRANSFER".parse::<Permission>(), Ok(Permission::Transfer));
        for near_miss in ["transfer", "Transfer", " TRANSFER", "TRANSFER ", " View_Balance "] {
            assert_eq!(
                near_miss.parse::<Permission>(),
                Err(near_miss.to_string()),
                "{near_miss:?} should not parse"
            );
        }
    }

    #[test]
    fn unknown_name_is_returned_as_error() {
        assert_eq!(
            "ADMIN_ACCESS".parse::<Permission>(),
            Err("ADMIN_ACCESS".to_string())
        );
    }

    #[test]
    fn display_matches_parse() {
        for p in Permission::ALL {
            assert_eq!(p.to_string().parse::<Permission>(), Ok(p));
        }
    }
}
