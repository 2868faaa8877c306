//! Durations, times of day and calendar moments.
//!
//! Every time value is a [`Moment`]: a signed count of 100-nanosecond ticks
//! since 1601-01-01 00:00:00, the same reference instant the Windows clock
//! APIs use. The three public value types interpret a moment differently:
//!
//! - [`TimeSpan`]: elapsed duration, possibly negative
//! - [`ClockTime`]: time of day, always confined to the epoch day
//! - [`DateTime`]: calendar date plus time of day
//!
//! Adding or subtracting any two of them yields a [`TimeSpan`]. The in-place
//! operators `+=`/`-=` with a span shift the receiver and keep its type.
//!
//! ```
//! use vesper_core::time::{ClockTime, DateTime, TimeSpan};
//!
//! let mut alarm = DateTime::new(2024, 2, 29, 22, 30, 0, 0).unwrap();
//! alarm += TimeSpan::from_hours(2);
//! assert_eq!((alarm.month(), alarm.day(), alarm.hour()), (3, 1, 0));
//!
//! let bedtime = ClockTime::new(23, 0, 0, 0);
//! let wake = ClockTime::new(7, 15, 0, 0);
//! let diff: TimeSpan = bedtime - wake;
//! assert_eq!(diff.total_minutes(), 15 * 60 + 45);
//! ```

mod clock_time;
mod date_time;
mod source;
mod span;

use std::ops::{Add, Sub};

pub use clock_time::ClockTime;
pub use date_time::DateTime;
pub use source::{FixedClock, SystemClock, TimeSource};
pub use span::TimeSpan;

/// Ticks in one millisecond.
pub const TICKS_PER_MILLISECOND: i64 = 10_000;
/// Ticks in one second.
pub const TICKS_PER_SECOND: i64 = 1_000 * TICKS_PER_MILLISECOND;
/// Ticks in one minute.
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
/// Ticks in one hour.
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;
/// Ticks in one day.
pub const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;

/// An offset from the fixed reference instant, in 100 ns ticks.
///
/// A moment carries no interpretation of its own; the time types wrap it and
/// decide whether it means a duration, a time of day or a calendar instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Moment {
    ticks: i64,
}

impl Moment {
    /// The reference instant itself.
    pub const EPOCH: Self = Self { ticks: 0 };

    /// Create a moment from a raw tick count.
    #[inline]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    /// The raw tick count.
    #[inline]
    pub const fn ticks(self) -> i64 {
        self.ticks
    }

    /// Whole days since the epoch, rounded towards negative infinity.
    #[inline]
    pub(crate) const fn day_number(self) -> i64 {
        self.ticks.div_euclid(TICKS_PER_DAY)
    }

    /// Ticks elapsed since the start of this moment's day.
    #[inline]
    pub(crate) const fn time_of_day_ticks(self) -> i64 {
        self.ticks.rem_euclid(TICKS_PER_DAY)
    }
}

/// Implemented by every type built on a [`Moment`].
pub trait Temporal {
    /// The underlying moment.
    fn moment(&self) -> Moment;

    /// The underlying tick count.
    fn ticks(&self) -> i64 {
        self.moment().ticks()
    }
}

// =============================================================================
// Shared validators
// =============================================================================

/// `0..=23`.
#[inline]
pub const fn is_valid_hour(hour: u32) -> bool {
    hour <= 23
}

/// `0..=59`.
#[inline]
pub const fn is_valid_minute(minute: u32) -> bool {
    minute <= 59
}

/// `0..=59`.
#[inline]
pub const fn is_valid_second(second: u32) -> bool {
    second <= 59
}

/// `0..=999`.
#[inline]
pub const fn is_valid_millisecs(millisecond: u32) -> bool {
    millisecond <= 999
}

/// Tick offset of a time of day. Components are not range checked.
pub(crate) const fn compose_time_ticks(hour: u32, minute: u32, second: u32, millisecond: u32) -> i64 {
    hour as i64 * TICKS_PER_HOUR
        + minute as i64 * TICKS_PER_MINUTE
        + second as i64 * TICKS_PER_SECOND
        + millisecond as i64 * TICKS_PER_MILLISECOND
}

// =============================================================================
// Cross-type arithmetic
// =============================================================================

macro_rules! impl_span_arithmetic {
    ($($lhs:ty => [$($rhs:ty),+]);+ $(;)?) => {
        $($(
            impl Add<$rhs> for $lhs {
                type Output = TimeSpan;

                fn add(self, rhs: $rhs) -> TimeSpan {
                    TimeSpan::from_ticks(Temporal::ticks(&self) + Temporal::ticks(&rhs))
                }
            }

            impl Sub<$rhs> for $lhs {
                type Output = TimeSpan;

                fn sub(self, rhs: $rhs) -> TimeSpan {
                    TimeSpan::from_ticks(Temporal::ticks(&self) - Temporal::ticks(&rhs))
                }
            }
        )+)+
    };
}

impl_span_arithmetic! {
    TimeSpan => [TimeSpan, ClockTime, DateTime];
    ClockTime => [TimeSpan, ClockTime, DateTime];
    DateTime => [TimeSpan, ClockTime, DateTime];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_constants() {
        assert_eq!(TICKS_PER_SECOND, 10_000_000);
        assert_eq!(TICKS_PER_DAY, 864_000_000_000);
    }

    #[test]
    fn test_moment_day_split_is_euclidean() {
        let before_epoch = Moment::from_ticks(-TICKS_PER_HOUR);
        assert_eq!(before_epoch.day_number(), -1);
        assert_eq!(before_epoch.time_of_day_ticks(), 23 * TICKS_PER_HOUR);
    }

    #[test]
    fn test_validators() {
        assert!(is_valid_hour(0) && is_valid_hour(23) && !is_valid_hour(24));
        assert!(is_valid_minute(59) && !is_valid_minute(60));
        assert!(is_valid_second(59) && !is_valid_second(60));
        assert!(is_valid_millisecs(999) && !is_valid_millisecs(1000));
    }

    #[test]
    fn test_cross_type_arithmetic_yields_span() {
        let date = DateTime::new(2024, 1, 1, 12, 0, 0, 0).unwrap();
        let later = DateTime::new(2024, 1, 2, 13, 30, 0, 0).unwrap();
        let span: TimeSpan = later - date;
        assert_eq!(span.total_minutes(), 25 * 60 + 30);

        let clock = ClockTime::new(1, 0, 0, 0);
        let sum: TimeSpan = clock + TimeSpan::from_minutes(30);
        assert_eq!(sum.total_minutes(), 90);

        let raw: TimeSpan = date + clock;
        assert_eq!(raw.ticks(), date.ticks() + clock.ticks());

        let back: TimeSpan = TimeSpan::from_hours(1) - clock;
        assert_eq!(back, TimeSpan::ZERO);
    }
}
