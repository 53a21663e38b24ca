//! Permission management.
//!
//! An [`AccessRecord`] holds the set of granted permissions and an append-only
//! history of every grant, revoke and clear attempt. Restricted permissions
//! (`TRANSFER`, `WITHDRAW`) are granted only when the caller reports the
//! identity as `VERIFIED`; everything else is granted in any state.

pub mod history;
pub mod record;

pub use history::{PermissionChange, PermissionEvent};
pub use record::AccessRecord;
