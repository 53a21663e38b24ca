//! Fundamental types for TrustGate.
//!
//! This crate defines the vocabulary shared by every other crate in the workspace:
//! timestamps and clocks, the verification status state machine, the permission
//! vocabulary, validated contact fields, and the approved/denied outcome type.

pub mod clock;
pub mod contact;
pub mod error;
pub mod outcome;
pub mod permission;
pub mod state;
pub mod time;

pub use clock::{Clock, SystemClock};
pub use contact::{Email, PhoneNumber, Username};
pub use error::ValidationError;
pub use outcome::{Denial, Outcome};
pub use permission::{Permission, PermissionTier};
pub use state::{StatusTransition, VerificationStatus};
pub use time::Timestamp;
