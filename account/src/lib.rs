//! The account record: one identity, one access record, one audit log.
//!
//! [`Account`] is the only way to mutate either component, so every attempt
//! (approved, denied or rejected as invalid input) lands in its audit log.
//!
//! ```
//! use trustgate_account::Account;
//! use trustgate_types::{Permission, VerificationStatus};
//!
//! let mut account = Account::new("alice", "alice@example.com", "+1-555-123-4567")?;
//! assert!(!account.grant_permission("TRANSFER").is_success());
//!
//! account.request_verification();
//! account.verify();
//! assert_eq!(account.status(), VerificationStatus::Verified);
//!
//! assert!(account.grant_permission("TRANSFER").is_success());
//! assert!(account.permissions().contains(&Permission::Transfer));
//! # Ok::<(), trustgate_types::ValidationError>(())
//! ```

pub mod account;
pub mod audit;
pub mod report;

pub use account::Account;
pub use audit::{AuditAction, AuditDetails, AuditEntry};
pub use report::{AccountReport, IdentityStatus};
