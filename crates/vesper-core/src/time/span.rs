//! Elapsed durations.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::{
    Moment, Temporal, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE,
    TICKS_PER_SECOND,
};

/// A signed duration.
///
/// Totals (`total_*`) truncate the whole span to one unit. Components
/// (`days`, `hours`, ...) are each taken modulo the next larger unit and
/// carry the sign of the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeSpan {
    moment: Moment,
}

impl TimeSpan {
    /// The empty span.
    pub const ZERO: Self = Self::from_ticks(0);

    /// Create a span from days, hours, minutes, seconds and milliseconds.
    ///
    /// Components may be negative or exceed their natural range; they are
    /// simply summed.
    pub const fn new(days: i64, hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        Self::from_ticks(
            days * TICKS_PER_DAY
                + hours * TICKS_PER_HOUR
                + minutes * TICKS_PER_MINUTE
                + seconds * TICKS_PER_SECOND
                + millis * TICKS_PER_MILLISECOND,
        )
    }

    /// Create a span from a raw tick count.
    #[inline]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self {
            moment: Moment::from_ticks(ticks),
        }
    }

    /// Interpret a moment as elapsed time since the epoch.
    #[inline]
    pub const fn from_moment(moment: Moment) -> Self {
        Self { moment }
    }

    /// A span of whole days.
    pub const fn from_days(days: i64) -> Self {
        Self::from_ticks(days * TICKS_PER_DAY)
    }

    /// A span of whole hours.
    pub const fn from_hours(hours: i64) -> Self {
        Self::from_ticks(hours * TICKS_PER_HOUR)
    }

    /// A span of whole minutes.
    pub const fn from_minutes(minutes: i64) -> Self {
        Self::from_ticks(minutes * TICKS_PER_MINUTE)
    }

    /// A span of whole seconds.
    pub const fn from_seconds(seconds: i64) -> Self {
        Self::from_ticks(seconds * TICKS_PER_SECOND)
    }

    /// A span of whole milliseconds.
    pub const fn from_milliseconds(millis: i64) -> Self {
        Self::from_ticks(millis * TICKS_PER_MILLISECOND)
    }

    /// The underlying moment.
    #[inline]
    pub const fn moment(&self) -> Moment {
        self.moment
    }

    /// The raw tick count.
    #[inline]
    pub const fn ticks(&self) -> i64 {
        self.moment.ticks()
    }

    /// Check if the span points backwards.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.ticks() < 0
    }

    /// The span with its sign removed.
    pub const fn abs(&self) -> Self {
        Self::from_ticks(self.ticks().abs())
    }

    // =========================================================================
    // Totals
    // =========================================================================

    pub const fn total_days(&self) -> i64 {
        self.ticks() / TICKS_PER_DAY
    }

    pub const fn total_hours(&self) -> i64 {
        self.ticks() / TICKS_PER_HOUR
    }

    pub const fn total_minutes(&self) -> i64 {
        self.ticks() / TICKS_PER_MINUTE
    }

    pub const fn total_seconds(&self) -> i64 {
        self.ticks() / TICKS_PER_SECOND
    }

    pub const fn total_milliseconds(&self) -> i64 {
        self.ticks() / TICKS_PER_MILLISECOND
    }

    // =========================================================================
    // Components
    // =========================================================================

    pub const fn days(&self) -> i64 {
        self.total_days()
    }

    pub const fn hours(&self) -> i64 {
        self.total_hours() % 24
    }

    pub const fn minutes(&self) -> i64 {
        self.total_minutes() % 60
    }

    pub const fn seconds(&self) -> i64 {
        self.total_seconds() % 60
    }

    pub const fn milliseconds(&self) -> i64 {
        self.total_milliseconds() % 1_000
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    fn shift(&mut self, ticks: i64) {
        self.moment = Moment::from_ticks(self.ticks() + ticks);
    }

    pub fn increase_days(&mut self, days: i64) {
        self.shift(days * TICKS_PER_DAY);
    }

    pub fn decrease_days(&mut self, days: i64) {
        self.shift(-days * TICKS_PER_DAY);
    }

    pub fn increase_hours(&mut self, hours: i64) {
        self.shift(hours * TICKS_PER_HOUR);
    }

    pub fn decrease_hours(&mut self, hours: i64) {
        self.shift(-hours * TICKS_PER_HOUR);
    }

    pub fn increase_minutes(&mut self, minutes: i64) {
        self.shift(minutes * TICKS_PER_MINUTE);
    }

    pub fn decrease_minutes(&mut self, minutes: i64) {
        self.shift(-minutes * TICKS_PER_MINUTE);
    }

    pub fn increase_seconds(&mut self, seconds: i64) {
        self.shift(seconds * TICKS_PER_SECOND);
    }

    pub fn decrease_seconds(&mut self, seconds: i64) {
        self.shift(-seconds * TICKS_PER_SECOND);
    }

    pub fn increase_milliseconds(&mut self, millis: i64) {
        self.shift(millis * TICKS_PER_MILLISECOND);
    }

    pub fn decrease_milliseconds(&mut self, millis: i64) {
        self.shift(-millis * TICKS_PER_MILLISECOND);
    }
}

impl Temporal for TimeSpan {
    fn moment(&self) -> Moment {
        self.moment
    }
}

impl From<std::time::Duration> for TimeSpan {
    /// Saturates at the largest representable span.
    fn from(duration: std::time::Duration) -> Self {
        let ticks = duration.as_nanos() / 100;
        Self::from_ticks(i64::try_from(ticks).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for TimeSpan {
    /// `[-][d.]hh:mm:ss.fff`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ticks = self.ticks().unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        let days = ticks / TICKS_PER_DAY as u64;
        let hours = ticks / TICKS_PER_HOUR as u64 % 24;
        let minutes = ticks / TICKS_PER_MINUTE as u64 % 60;
        let seconds = ticks / TICKS_PER_SECOND as u64 % 60;
        let millis = ticks / TICKS_PER_MILLISECOND as u64 % 1_000;
        f.write_str(sign)?;
        if days > 0 {
            write!(f, "{days}.")?;
        }
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
    }
}

// =============================================================================
// Operators with whole seconds
// =============================================================================

impl Add<i64> for TimeSpan {
    type Output = TimeSpan;

    /// Add whole seconds.
    fn add(self, seconds: i64) -> TimeSpan {
        Self::from_ticks(self.ticks() + seconds * TICKS_PER_SECOND)
    }
}

impl Sub<i64> for TimeSpan {
    type Output = TimeSpan;

    /// Subtract whole seconds.
    fn sub(self, seconds: i64) -> TimeSpan {
        Self::from_ticks(self.ticks() - seconds * TICKS_PER_SECOND)
    }
}

impl AddAssign<i64> for TimeSpan {
    fn add_assign(&mut self, seconds: i64) {
        self.increase_seconds(seconds);
    }
}

impl SubAssign<i64> for TimeSpan {
    fn sub_assign(&mut self, seconds: i64) {
        self.decrease_seconds(seconds);
    }
}

impl AddAssign<TimeSpan> for TimeSpan {
    fn add_assign(&mut self, rhs: TimeSpan) {
        self.shift(rhs.ticks());
    }
}

impl SubAssign<TimeSpan> for TimeSpan {
    fn sub_assign(&mut self, rhs: TimeSpan) {
        self.shift(-rhs.ticks());
    }
}

impl Neg for TimeSpan {
    type Output = TimeSpan;

    fn neg(self) -> TimeSpan {
        Self::from_ticks(-self.ticks())
    }
}

static_assertions::assert_impl_all!(TimeSpan: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_and_totals() {
        let span = TimeSpan::new(2, 3, 4, 5, 678);
        assert_eq!(span.days(), 2);
        assert_eq!(span.hours(), 3);
        assert_eq!(span.minutes(), 4);
        assert_eq!(span.seconds(), 5);
        assert_eq!(span.milliseconds(), 678);
        assert_eq!(span.total_hours(), 51);
        assert_eq!(span.total_minutes(), 51 * 60 + 4);
        assert_eq!(span.total_seconds(), (51 * 60 + 4) * 60 + 5);
    }

    #[test]
    fn test_negative_components_carry_sign() {
        let span = -TimeSpan::new(0, 1, 30, 0, 0);
        assert!(span.is_negative());
        assert_eq!(span.hours(), -1);
        assert_eq!(span.minutes(), -30);
        assert_eq!(span.total_minutes(), -90);
        assert_eq!(span.abs(), TimeSpan::from_minutes(90));
    }

    #[test]
    fn test_arithmetic_with_spans_and_seconds() {
        let mut span = TimeSpan::from_minutes(1);
        span += 30;
        assert_eq!(span.total_seconds(), 90);
        span -= TimeSpan::from_seconds(60);
        assert_eq!(span.total_seconds(), 30);
        assert_eq!((span + 15).total_seconds(), 45);
        assert_eq!((span - 45).total_seconds(), -15);
        assert_eq!(span + span, TimeSpan::from_minutes(1));
        span -= 10;
        assert_eq!(span.total_seconds(), 20);
    }

    #[test]
    fn test_ordering() {
        assert!(TimeSpan::from_hours(1) > TimeSpan::from_minutes(59));
        assert!(TimeSpan::from_seconds(-1) < TimeSpan::ZERO);
        assert_eq!(TimeSpan::from_days(1), TimeSpan::from_hours(24));
    }

    #[test]
    fn test_increase_and_decrease() {
        let mut span = TimeSpan::ZERO;
        span.increase_days(1);
        span.increase_hours(2);
        span.increase_minutes(3);
        span.increase_seconds(4);
        span.increase_milliseconds(5);
        assert_eq!(span, TimeSpan::new(1, 2, 3, 4, 5));
        span.decrease_days(1);
        span.decrease_hours(2);
        span.decrease_minutes(3);
        span.decrease_seconds(4);
        span.decrease_milliseconds(5);
        assert_eq!(span, TimeSpan::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeSpan::new(0, 1, 2, 3, 4).to_string(), "01:02:03.004");
        assert_eq!(TimeSpan::new(3, 0, 0, 0, 0).to_string(), "3.00:00:00.000");
        assert_eq!((-TimeSpan::from_seconds(5)).to_string(), "-00:00:05.000");
    }

    #[test]
    fn test_from_std_duration() {
        let span = TimeSpan::from(std::time::Duration::from_millis(1_500));
        assert_eq!(span.total_milliseconds(), 1_500);
    }
}
