//! Verification status of an identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The verification state of an identity.
///
/// Status only ever moves forward one step at a time:
/// `Unverified -> Pending -> Verified`. There is no way back.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Identity exists but verification has not been requested.
    #[default]
    Unverified,
    /// Verification requested; awaiting completion.
    Pending,
    /// Identity has been verified.
    Verified,
}

/// A transition request against a [`VerificationStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTransition {
    /// `Unverified -> Pending`.
    RequestVerification,
    /// `Pending -> Verified`.
    Verify,
}

impl VerificationStatus {
    /// Whether restricted permissions may be granted in this state.
    pub fn can_hold_restricted(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// The state `transition` leads to, or `None` if it is not allowed from here.
    pub fn apply(self, transition: StatusTransition) -> Option<Self> {
        match (self, transition) {
            (Self::Unverified, StatusTransition::RequestVerification) => Some(Self::Pending),
            (Self::Pending, StatusTransition::Verify) => Some(Self::Verified),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unverified => "UNVERIFIED",
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
        }
    }
}

impl StatusTransition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestVerification => "request verification",
            Self::Verify => "verify",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StatusTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unverified() {
        assert_eq!(VerificationStatus::default(), VerificationStatus::Unverified);
    }

    #[test]
    fn only_forward_single_steps_are_allowed() {
        use crate::state::StatusTransition::*;
        use crate::state::VerificationStatus::*;
        assert_eq!(Unverified.apply(RequestVerification), Some(Pending));
        assert_eq!(Pending.apply(Verify), Some(Verified));
        assert_eq!(Unverified.apply(Verify), None);
        assert_eq!(Pending.apply(RequestVerification), None);
        assert_eq!(Verified.apply(RequestVerification), None);
        assert_eq!(Verified.apply(Verify), None);
    }

    #[test]
    fn only_verified_holds_restricted() {
        assert!(!VerificationStatus::Unverified.can_hold_restricted());
        assert!(!VerificationStatus::Pending.can_hold_restricted());
        assert!(VerificationStatus::Verified.can_hold_restricted());
    }

    #[test]
    fn serializes_in_upper_case() {
        let json = serde_json::to_string(&VerificationStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
    }
}
