//! Sources of the current moment.
//!
//! Anything that asks "what time is it now?" goes through a [`TimeSource`],
//! so schedules and reminders can be tested against a [`FixedClock`] instead
//! of the wall clock.

use chrono::Local;

use super::{DateTime, TimeSpan};
use crate::logging::targets;

/// Provides the current local date and time.
pub trait TimeSource {
    /// Read the current moment.
    fn now(&self) -> DateTime;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> DateTime {
        (**self).now()
    }
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime {
        let local = Local::now().naive_local();
        match DateTime::try_from(local) {
            Ok(now) => {
                crate::vesper_trace!(target: targets::CLOCK, %now, "read system clock");
                now
            }
            Err(err) => {
                crate::vesper_warn!(target: targets::CLOCK, %err, "system clock outside representable range");
                DateTime::EPOCH
            }
        }
    }
}

/// A clock that always reports the same moment until moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime,
}

impl FixedClock {
    /// Create a clock frozen at `now`.
    pub const fn new(now: DateTime) -> Self {
        Self { now }
    }

    /// Move the clock to `now`.
    pub fn set(&mut self, now: DateTime) {
        self.now = now;
    }

    /// Move the clock forward (or backward, for a negative span).
    pub fn advance(&mut self, span: TimeSpan) {
        self.now += span;
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime {
        self.now
    }
}

static_assertions::assert_impl_all!(SystemClock: Send, Sync);
static_assertions::assert_impl_all!(FixedClock: Send, Sync);
