//! Identity fields: username, email address and phone number.
//!
//! `Email` and `PhoneNumber` can only be obtained through `parse`, so holding
//! one is proof the value passed validation. Any string is a username.

use crate::error::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// `local@domain.tld`, with a letters-only TLD of two or more characters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("invalid email pattern")
});

/// `+<cc>-<area>-<exchange>-<line>`, e.g. `+1-555-123-4567` or `+998-90-123-4567`.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[0-9]{1,3}-[0-9]{2,3}-[0-9]{3,4}-[0-9]{4,5}$")
        .expect("invalid phone pattern")
});

/// An account's username. Not validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A syntactically valid email address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let s = raw.into();
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidEmail(s))
        }
    }

    pub fn is_valid(candidate: &str) -> bool {
        EMAIL_PATTERN.is_match(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number in dash-separated international form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let s = raw.into();
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidPhone(s))
        }
    }

    pub fn is_valid(candidate: &str) -> bool {
        PHONE_PATTERN.is_match(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Username {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
