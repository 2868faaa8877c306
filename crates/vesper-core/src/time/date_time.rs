//! Calendar date plus time of day.

use std::fmt;
use std::ops::{AddAssign, SubAssign};

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::{ClockTime, Moment, Temporal, TimeSource, TimeSpan, SystemClock};
use crate::error::{TimeError, TimeResult};
use crate::logging::targets;

/// `NaiveDate::num_days_from_ce` of 1601-01-01, the moment epoch.
const EPOCH_DAYS_FROM_CE: i64 = 584_389;

/// An absolute calendar instant with tick resolution.
///
/// Calendar fields follow the proleptic Gregorian calendar. Date setters keep
/// the time of day, time setters keep the date.
///
/// ```
/// use vesper_core::time::DateTime;
///
/// let mut date = DateTime::new(2024, 2, 29, 6, 30, 0, 0).unwrap();
/// assert!(date.is_leap_year());
/// assert_eq!(date.day_of_week(), 4); // Thursday
///
/// // 2025 has no February 29th.
/// assert!(date.set_year(2025).is_err());
/// assert_eq!(date.year(), 2024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateTime {
    moment: Moment,
}

impl DateTime {
    /// 1601-01-01 00:00:00.
    pub const EPOCH: Self = Self {
        moment: Moment::EPOCH,
    };

    /// Interpret a moment as an absolute instant.
    #[inline]
    pub const fn from_moment(moment: Moment) -> Self {
        Self { moment }
    }

    /// Build an instant from calendar and clock fields.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidDate`] if the year, month and day do not
    /// form a real date, [`TimeError::InvalidTime`] if a clock field is out of
    /// range, and [`TimeError::OutOfRange`] if the date cannot be represented.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> TimeResult<Self> {
        let date = calendar_date(year, month, day)?;
        let time = ClockTime::try_new(hour, minute, second, millisecond)?;
        from_parts(date, time.ticks())
    }

    /// The current local date and time.
    pub fn now() -> Self {
        SystemClock.now()
    }

    /// The current date and time according to `source`.
    pub fn now_with(source: &dyn TimeSource) -> Self {
        source.now()
    }

    /// The underlying moment.
    #[inline]
    pub const fn moment(&self) -> Moment {
        self.moment
    }

    /// Ticks since the epoch.
    #[inline]
    pub const fn ticks(&self) -> i64 {
        self.moment.ticks()
    }

    fn naive_date(&self) -> NaiveDate {
        i32::try_from(self.moment.day_number() + EPOCH_DAYS_FROM_CE)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .unwrap_or(NaiveDate::MIN)
    }

    // =========================================================================
    // Calendar fields
    // =========================================================================

    pub fn year(&self) -> i32 {
        self.naive_date().year()
    }

    /// Month, 1-12.
    pub fn month(&self) -> u32 {
        self.naive_date().month()
    }

    /// Day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.naive_date().day()
    }

    /// Day of the week, 0 = Sunday through 6 = Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.naive_date().weekday().num_days_from_sunday()
    }

    /// Day of the year, starting at 1.
    pub fn day_of_year(&self) -> u32 {
        self.naive_date().ordinal()
    }

    pub fn hour(&self) -> u32 {
        self.clock_time().hour()
    }

    pub fn minute(&self) -> u32 {
        self.clock_time().minute()
    }

    pub fn second(&self) -> u32 {
        self.clock_time().second()
    }

    pub fn millisecond(&self) -> u32 {
        self.clock_time().millisecond()
    }

    /// The time-of-day portion.
    pub fn clock_time(&self) -> ClockTime {
        ClockTime::from_moment(self.moment)
    }

    /// The same day at midnight.
    pub fn date(&self) -> DateTime {
        Self::from_moment(Moment::from_ticks(self.day_start()))
    }

    fn day_start(&self) -> i64 {
        self.ticks() - self.moment.time_of_day_ticks()
    }

    // =========================================================================
    // Date setters
    // =========================================================================

    /// Replace the year, keeping month, day and time of day.
    ///
    /// # Errors
    ///
    /// Fails with [`TimeError::InvalidDate`] if the result would not be a real
    /// date (February 29th in a common year). The value is left unchanged.
    pub fn set_year(&mut self, year: i32) -> TimeResult<()> {
        self.replace_date(year, self.month(), self.day())
    }

    /// Replace the month, keeping year, day and time of day.
    ///
    /// # Errors
    ///
    /// Fails with [`TimeError::InvalidDate`] if the day does not exist in the
    /// new month. The value is left unchanged.
    pub fn set_month(&mut self, month: u32) -> TimeResult<()> {
        self.replace_date(self.year(), month, self.day())
    }

    /// Replace the day of the month, keeping everything else.
    ///
    /// # Errors
    ///
    /// Fails with [`TimeError::InvalidDate`] if the month has no such day. The
    /// value is left unchanged.
    pub fn set_day(&mut self, day: u32) -> TimeResult<()> {
        self.replace_date(self.year(), self.month(), day)
    }

    fn replace_date(&mut self, year: i32, month: u32, day: u32) -> TimeResult<()> {
        let result = calendar_date(year, month, day)
            .and_then(|date| from_parts(date, self.moment.time_of_day_ticks()));
        match result {
            Ok(updated) => {
                *self = updated;
                Ok(())
            }
            Err(err) => {
                crate::vesper_debug!(target: targets::TIME, year, month, day, %err, "rejected calendar edit");
                Err(err)
            }
        }
    }

    // =========================================================================
    // Time setters
    // =========================================================================

    fn replace_time(&mut self, edit: impl FnOnce(&mut ClockTime)) {
        let mut time = self.clock_time();
        edit(&mut time);
        self.moment = Moment::from_ticks(self.day_start() + time.ticks());
    }

    /// Replace the hour. The date is unchanged.
    pub fn set_hour(&mut self, hour: u32) {
        self.replace_time(|time| time.set_hour(hour));
    }

    /// Replace the minute. The date is unchanged.
    pub fn set_minute(&mut self, minute: u32) {
        self.replace_time(|time| time.set_minute(minute));
    }

    /// Replace the second. The date is unchanged.
    pub fn set_second(&mut self, second: u32) {
        self.replace_time(|time| time.set_second(second));
    }

    /// Replace the millisecond. The date is unchanged.
    pub fn set_millisecs(&mut self, millisecond: u32) {
        self.replace_time(|time| time.set_millisecs(millisecond));
    }

    /// Replace the whole time of day. The date is unchanged.
    pub fn set_clock_time(&mut self, time: ClockTime) {
        self.replace_time(|current| *current = time);
    }

    // =========================================================================
    // Calendar rules
    // =========================================================================

    /// Check if this instant falls in a leap year.
    pub fn is_leap_year(&self) -> bool {
        Self::is_leap_year_of(self.year())
    }

    /// Gregorian leap-year rule.
    pub const fn is_leap_year_of(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Number of days in `month` of `year`, or `None` for a month outside 1-12.
    pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
            4 | 6 | 9 | 11 => Some(30),
            2 if Self::is_leap_year_of(year) => Some(29),
            2 => Some(28),
            _ => None,
        }
    }

    /// Check whether the fields form a real calendar date.
    pub const fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
        match Self::days_in_month(year, month) {
            Some(days) => day >= 1 && day <= days,
            None => false,
        }
    }

    // =========================================================================
    // Relative to now
    // =========================================================================

    /// Check if this instant falls on the current local day.
    pub fn is_today(&self) -> bool {
        self.is_today_with(&SystemClock)
    }

    /// Check if this instant is later than the current local time.
    pub fn is_in_the_future(&self) -> bool {
        self.is_in_the_future_with(&SystemClock)
    }

    /// Check if this instant is earlier than the current local time.
    pub fn is_in_the_past(&self) -> bool {
        self.is_in_the_past_with(&SystemClock)
    }

    pub fn is_today_with(&self, source: &dyn TimeSource) -> bool {
        source.now().date() == self.date()
    }

    pub fn is_in_the_future_with(&self, source: &dyn TimeSource) -> bool {
        *self > source.now()
    }

    pub fn is_in_the_past_with(&self, source: &dyn TimeSource) -> bool {
        *self < source.now()
    }

    // =========================================================================
    // Interop
    // =========================================================================

    /// Convert to a chrono date and time.
    pub fn to_naive_datetime(&self) -> NaiveDateTime {
        self.naive_date().and_time(self.clock_time().to_naive_time())
    }
}

fn calendar_date(year: i32, month: u32, day: u32) -> TimeResult<NaiveDate> {
    if !DateTime::is_valid_date(year, month, day) {
        return Err(TimeError::InvalidDate { year, month, day });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeError::OutOfRange { year, month, day })
}

fn from_parts(date: NaiveDate, time_of_day: i64) -> TimeResult<DateTime> {
    let days = i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE;
    days.checked_mul(super::TICKS_PER_DAY)
        .and_then(|ticks| ticks.checked_add(time_of_day))
        .map(|ticks| DateTime::from_moment(Moment::from_ticks(ticks)))
        .ok_or(TimeError::OutOfRange {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })
}

impl Temporal for DateTime {
    fn moment(&self) -> Moment {
        self.moment
    }
}

impl TryFrom<NaiveDateTime> for DateTime {
    type Error = TimeError;

    fn try_from(value: NaiveDateTime) -> TimeResult<Self> {
        from_parts(value.date(), ClockTime::from(value.time()).ticks())
    }
}

impl fmt::Display for DateTime {
    /// `YYYY-MM-DD HH:MM:SS`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.naive_date();
        write!(
            f,
            "{:04}-{:02}-{:02} {}",
            date.year(),
            date.month(),
            date.day(),
            self.clock_time()
        )
    }
}

impl AddAssign<TimeSpan> for DateTime {
    fn add_assign(&mut self, span: TimeSpan) {
        self.moment = Moment::from_ticks(self.ticks() + span.ticks());
    }
}

impl SubAssign<TimeSpan> for DateTime {
    fn sub_assign(&mut self, span: TimeSpan) {
        self.moment = Moment::from_ticks(self.ticks() - span.ticks());
    }
}

static_assertions::assert_impl_all!(DateTime: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{FixedClock, TICKS_PER_HOUR};

    fn date(y: i32, m: u32, d: u32) -> DateTime {
        DateTime::new(y, m, d, 0, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_epoch_matches_chrono() {
        let epoch = NaiveDate::from_ymd_opt(1601, 1, 1).unwrap();
        assert_eq!(i64::from(epoch.num_days_from_ce()), EPOCH_DAYS_FROM_CE);
        assert_eq!(DateTime::EPOCH.year(), 1601);
        assert_eq!(DateTime::EPOCH.day_of_week(), 1); // Monday
    }

    #[test]
    fn test_fields_round_trip() {
        let dt = DateTime::new(2031, 12, 31, 23, 59, 58, 999).unwrap();
        assert_eq!(
            (dt.year(), dt.month(), dt.day()),
            (2031, 12, 31)
        );
        assert_eq!(
            (dt.hour(), dt.minute(), dt.second(), dt.millisecond()),
            (23, 59, 58, 999)
        );
        assert_eq!(dt.day_of_year(), 365);
    }

    #[test]
    fn test_before_epoch() {
        let dt = DateTime::new(1600, 12, 31, 12, 0, 0, 0).unwrap();
        assert!(dt.ticks() < 0);
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (1600, 12, 31, 12));
    }

    #[test]
    fn test_invalid_fields_rejected() {
        assert_eq!(
            DateTime::new(2023, 2, 29, 0, 0, 0, 0),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(DateTime::new(2024, 13, 1, 0, 0, 0, 0).is_err());
        assert!(DateTime::new(2024, 4, 31, 0, 0, 0, 0).is_err());
        assert!(matches!(
            DateTime::new(2024, 1, 1, 24, 0, 0, 0),
            Err(TimeError::InvalidTime { .. })
        ));
        assert!(matches!(
            DateTime::new(200_000, 1, 1, 0, 0, 0, 0),
            Err(TimeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_leap_rules_match_chrono() {
        for year in 1590..2410 {
            for month in 1..=12 {
                for day in 28..=31 {
                    assert_eq!(
                        DateTime::is_valid_date(year, month, day),
                        NaiveDate::from_ymd_opt(year, month, day).is_some(),
                        "{year}-{month}-{day}"
                    );
                }
            }
        }
        assert!(DateTime::is_leap_year_of(2000));
        assert!(!DateTime::is_leap_year_of(1900));
        assert!(DateTime::is_leap_year_of(2024));
        assert_eq!(DateTime::days_in_month(2023, 2), Some(28));
        assert_eq!(DateTime::days_in_month(2023, 0), None);
    }

    #[test]
    fn test_day_of_week() {
        // 2024-03-10 was a Sunday.
        assert_eq!(date(2024, 3, 10).day_of_week(), 0);
        assert_eq!(date(2024, 3, 16).day_of_week(), 6);
    }

    #[test]
    fn test_date_setters_keep_time() {
        let mut dt = DateTime::new(2024, 1, 31, 9, 41, 7, 3).unwrap();
        let time = dt.clock_time();

        dt.set_year(2020).unwrap();
        dt.set_day(15).unwrap();
        dt.set_month(6).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2020, 6, 15));
        assert_eq!(dt.clock_time(), time);
    }

    #[test]
    fn test_rejected_date_edit_leaves_value() {
        let mut dt = DateTime::new(2024, 1, 31, 8, 0, 0, 0).unwrap();
        let before = dt;
        assert!(dt.set_month(2).is_err());
        assert!(dt.set_day(32).is_err());
        assert_eq!(dt, before);
    }

    #[test]
    fn test_time_setters_keep_date() {
        let mut dt = DateTime::new(1999, 12, 31, 23, 59, 59, 999).unwrap();
        dt.set_hour(0);
        dt.set_minute(1);
        dt.set_second(2);
        dt.set_millisecs(3);
        assert_eq!((dt.year(), dt.month(), dt.day()), (1999, 12, 31));
        assert_eq!(dt.clock_time(), ClockTime::new(0, 1, 2, 3));

        dt.set_clock_time(ClockTime::new(18, 30, 0, 0));
        assert_eq!((dt.year(), dt.month(), dt.day()), (1999, 12, 31));
        assert_eq!((dt.hour(), dt.minute()), (18, 30));
    }

    #[test]
    fn test_date_strips_time() {
        let dt = DateTime::new(2024, 5, 5, 17, 0, 0, 0).unwrap();
        assert_eq!(dt.date(), date(2024, 5, 5));
        assert_eq!(dt.date().clock_time(), ClockTime::MIDNIGHT);
    }

    #[test]
    fn test_relative_to_fixed_clock() {
        let clock = FixedClock::new(DateTime::new(2024, 6, 1, 12, 0, 0, 0).unwrap());

        let morning = DateTime::new(2024, 6, 1, 8, 0, 0, 0).unwrap();
        assert!(morning.is_today_with(&clock));
        assert!(morning.is_in_the_past_with(&clock));
        assert!(!morning.is_in_the_future_with(&clock));

        let tomorrow = morning + TimeSpan::from_days(1);
        let tomorrow = DateTime::from_moment(tomorrow.moment());
        assert!(!tomorrow.is_today_with(&clock));
        assert!(tomorrow.is_in_the_future_with(&clock));
    }

    #[test]
    fn test_shift_in_place() {
        let mut dt = date(2024, 12, 31);
        dt += TimeSpan::from_hours(25);
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2025, 1, 1, 1));
        dt -= TimeSpan::from_ticks(2 * TICKS_PER_HOUR);
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2024, 12, 31, 23));
    }

    #[test]
    fn test_display_and_chrono_interop() {
        let dt = DateTime::new(2024, 7, 4, 9, 5, 3, 120).unwrap();
        assert_eq!(dt.to_string(), "2024-07-04 09:05:03");

        let naive = dt.to_naive_datetime();
        assert_eq!(naive.to_string(), "2024-07-04 09:05:03.120");
        assert_eq!(DateTime::try_from(naive), Ok(dt));
    }
}
