//! Time of day.

use std::fmt;
use std::ops::{AddAssign, SubAssign};

use chrono::{NaiveTime, Timelike};

use super::{
    compose_time_ticks, is_valid_hour, is_valid_millisecs, is_valid_minute, is_valid_second,
    Moment, Temporal, TimeSource, TimeSpan, TICKS_PER_DAY, TICKS_PER_HOUR,
    TICKS_PER_MILLISECOND, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};
use crate::error::{TimeError, TimeResult};

/// A time of day between 00:00:00.000 and 23:59:59.999.
///
/// The underlying moment always lies within the epoch day: building a clock
/// time from a full moment keeps only its time-of-day remainder, and shifting
/// it with `+=`/`-=` wraps around midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime {
    moment: Moment,
}

/// The four components of a clock time plus any sub-millisecond remainder.
#[derive(Clone, Copy)]
struct Parts {
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
    sub_millis: i64,
}

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: Self = Self {
        moment: Moment::EPOCH,
    };

    /// Keep only the time-of-day portion of `moment`.
    #[inline]
    pub const fn from_moment(moment: Moment) -> Self {
        Self::from_ticks(moment.ticks())
    }

    const fn from_ticks(ticks: i64) -> Self {
        Self {
            moment: Moment::from_ticks(ticks.rem_euclid(TICKS_PER_DAY)),
        }
    }

    /// Build a time of day from its components.
    ///
    /// Components are not validated; values past their range carry into the
    /// next unit and the result wraps around midnight. Use
    /// [`try_new`](Self::try_new) to reject them instead.
    pub const fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self::from_ticks(compose_time_ticks(hour, minute, second, millisecond))
    }

    /// Build a time of day, rejecting out-of-range components.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidTime`] if any component is out of range.
    pub fn try_new(hour: u32, minute: u32, second: u32, millisecond: u32) -> TimeResult<Self> {
        if Self::is_valid_time(hour, minute, second, millisecond) {
            Ok(Self::new(hour, minute, second, millisecond))
        } else {
            Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
                millisecond,
            })
        }
    }

    /// Check whether the components form a valid time of day.
    pub const fn is_valid_time(hour: u32, minute: u32, second: u32, millisecond: u32) -> bool {
        is_valid_hour(hour)
            && is_valid_minute(minute)
            && is_valid_second(second)
            && is_valid_millisecs(millisecond)
    }

    /// Check whether this value's components are all in range.
    pub fn is_valid(&self) -> bool {
        Self::is_valid_time(self.hour(), self.minute(), self.second(), self.millisecond())
    }

    /// The current local time of day.
    pub fn now() -> Self {
        Self::now_with(&super::SystemClock)
    }

    /// The current time of day according to `source`.
    pub fn now_with(source: &dyn TimeSource) -> Self {
        source.now().clock_time()
    }

    /// The underlying moment.
    #[inline]
    pub const fn moment(&self) -> Moment {
        self.moment
    }

    /// Ticks since midnight.
    #[inline]
    pub const fn ticks(&self) -> i64 {
        self.moment.ticks()
    }

    // =========================================================================
    // Components
    // =========================================================================

    pub const fn hour(&self) -> u32 {
        (self.ticks() / TICKS_PER_HOUR) as u32
    }

    pub const fn minute(&self) -> u32 {
        (self.ticks() / TICKS_PER_MINUTE % 60) as u32
    }

    pub const fn second(&self) -> u32 {
        (self.ticks() / TICKS_PER_SECOND % 60) as u32
    }

    pub const fn millisecond(&self) -> u32 {
        (self.ticks() / TICKS_PER_MILLISECOND % 1_000) as u32
    }

    fn parts(&self) -> Parts {
        Parts {
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
            millisecond: self.millisecond(),
            sub_millis: self.ticks() % TICKS_PER_MILLISECOND,
        }
    }

    fn rebuild(&mut self, parts: Parts) {
        let ticks = compose_time_ticks(parts.hour, parts.minute, parts.second, parts.millisecond);
        *self = Self::from_ticks(ticks + parts.sub_millis);
    }

    // =========================================================================
    // Component setters
    // =========================================================================

    /// Replace the hour. Minutes, seconds and milliseconds are unchanged.
    pub fn set_hour(&mut self, hour: u32) {
        self.rebuild(Parts {
            hour,
            ..self.parts()
        });
    }

    /// Replace the minute. The other components are unchanged.
    pub fn set_minute(&mut self, minute: u32) {
        self.rebuild(Parts {
            minute,
            ..self.parts()
        });
    }

    /// Replace the second. The other components are unchanged.
    pub fn set_second(&mut self, second: u32) {
        self.rebuild(Parts {
            second,
            ..self.parts()
        });
    }

    /// Replace the millisecond. The other components are unchanged.
    pub fn set_millisecs(&mut self, millisecond: u32) {
        self.rebuild(Parts {
            millisecond,
            ..self.parts()
        });
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Signed difference `self - other` in whole hours, truncated.
    pub const fn compare_to_hours(&self, other: &ClockTime) -> i64 {
        (self.ticks() - other.ticks()) / TICKS_PER_HOUR
    }

    /// Signed difference `self - other` in whole minutes, truncated.
    pub const fn compare_to_minutes(&self, other: &ClockTime) -> i64 {
        (self.ticks() - other.ticks()) / TICKS_PER_MINUTE
    }

    /// Signed difference `self - other` in whole seconds, truncated.
    pub const fn compare_to_seconds(&self, other: &ClockTime) -> i64 {
        (self.ticks() - other.ticks()) / TICKS_PER_SECOND
    }

    /// Signed difference `self - other` in whole milliseconds, truncated.
    pub const fn compare_to_millisecs(&self, other: &ClockTime) -> i64 {
        (self.ticks() - other.ticks()) / TICKS_PER_MILLISECOND
    }

    // =========================================================================
    // Formatting and interop
    // =========================================================================

    /// `HH:MM:SS.fff`
    pub fn to_string_with_millis(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }

    /// Convert to a chrono time.
    pub fn to_naive_time(&self) -> NaiveTime {
        let seconds = (self.ticks() / TICKS_PER_SECOND) as u32;
        let nanos = (self.ticks() % TICKS_PER_SECOND * 100) as u32;
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos).unwrap_or_default()
    }
}

impl Temporal for ClockTime {
    fn moment(&self) -> Moment {
        self.moment
    }
}

impl From<NaiveTime> for ClockTime {
    /// Leap-second nanoseconds are clamped into the last tick of the second.
    fn from(time: NaiveTime) -> Self {
        let nanos = i64::from(time.nanosecond().min(999_999_999));
        let ticks = i64::from(time.num_seconds_from_midnight()) * TICKS_PER_SECOND + nanos / 100;
        Self::from_ticks(ticks)
    }
}

impl fmt::Display for ClockTime {
    /// `HH:MM:SS`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

impl AddAssign<TimeSpan> for ClockTime {
    /// Shift forward, wrapping past midnight.
    fn add_assign(&mut self, span: TimeSpan) {
        *self = Self::from_ticks(self.ticks() + span.ticks().rem_euclid(TICKS_PER_DAY));
    }
}

impl SubAssign<TimeSpan> for ClockTime {
    /// Shift backward, wrapping past midnight.
    fn sub_assign(&mut self, span: TimeSpan) {
        *self = Self::from_ticks(self.ticks() - span.ticks().rem_euclid(TICKS_PER_DAY));
    }
}

static_assertions::assert_impl_all!(ClockTime: Send, Sync, Copy);
