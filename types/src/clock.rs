//! Time source abstraction.
//!
//! Components never read the wall clock directly; they ask a [`Clock`]. Tests
//! swap in `trustgate_nullables::NullClock` for deterministic timestamps.

use crate::time::Timestamp;

/// Something that can tell the current time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The real wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
