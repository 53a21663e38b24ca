//! Nullable clock: deterministic time for testing.

use std::cell::Cell;
use trustgate_types::{Clock, Timestamp};

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to. Share it with an account by
/// reference (`&NullClock` is itself a [`Clock`]) and keep advancing it from
/// the test.
#[derive(Debug)]
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: u64) {
        self.current.set(self.current.get().saturating_add(secs));
    }

    /// Set the time to a specific value.
    pub fn set(&self, secs: u64) {
        self.current.set(secs);
    }
}

impl Clock for NullClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }
}
