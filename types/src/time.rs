//! Timestamp type used for every history and audit entry.
//!
//! Timestamps are Unix epoch seconds (UTC) and render as RFC 3339.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Current wall-clock time. A clock set before 1970 reads as [`Timestamp::EPOCH`].
    pub fn now() -> Self {
        let secs = chrono::Utc::now().timestamp();
        Self(u64::try_from(secs).unwrap_or_default())
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// RFC 3339 rendering, e.g. `2024-01-01T00:00:00+00:00`.
    ///
    /// Values beyond chrono's supported range fall back to raw seconds.
    pub fn to_rfc3339(&self) -> String {
        i64::try_from(self.0)
            .ok()
            .and_then(|secs| chrono::DateTime::<chrono::Utc>::from_timestamp(secs, 0))
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| format!("{}s", self.0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}
