//! Identity profile and verification workflow.
//!
//! An [`Identity`] holds a username, email address and phone number that have
//! all passed validation, plus a verification status that only advances:
//! `UNVERIFIED -> PENDING -> VERIFIED`.
//!
//! Illegal transitions are not errors. They come back as a denied
//! [`Outcome`](trustgate_types::Outcome) and are recorded in the identity's
//! state history like every other change.

pub mod history;
pub mod identity;

pub use history::{IdentityEvent, StateChange};
pub use identity::Identity;
