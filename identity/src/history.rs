//! State history entries for an identity.

use serde::{Deserialize, Serialize};
use trustgate_types::{Timestamp, VerificationStatus};

/// What happened to the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityEvent {
    Initialized,
    EmailChanged,
    PhoneSet,
    VerificationRequested,
    VerificationRequestDenied,
    Verified,
    VerificationDenied,
}

/// One entry in an identity's append-only state history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub timestamp: Timestamp,
    pub event: IdentityEvent,
    pub description: String,
    /// Verification status after the event.
    pub status: VerificationStatus,
}
