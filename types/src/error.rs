//! Validation errors raised at construction or field-update time.

use thiserror::Error;

/// Input that does not have the required shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    #[error("invalid phone format: {0}")]
    InvalidPhone(String),
}
