//! This module implements `JewishDate` and its conversion to and from
//! the absolute day count.

use core::{cmp::Ordering, fmt};

use date_equations::hebrew;

use super::{JewishMonth, JewishYear, MAX_JEWISH_YEAR};
use crate::{
    absolute::{AbsoluteDate, MAX_ABSOLUTE_DAY, MIN_ABSOLUTE_DAY},
    options::Overflow,
    CalendarError, CalendarResult,
};

/// The longest month of the Jewish calendar.
const MAX_DAYS_IN_MONTH: u8 = 30;

/// A date in the fixed Jewish calendar.
///
/// The earliest supported date is 18 Teves 3761, which is January 1st
/// of year 1 in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JewishDate {
    year: i32,
    month: JewishMonth,
    day: u8,
}

impl JewishDate {
    /// Creates a new `JewishDate` without determining the validity.
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, month: JewishMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `JewishDate`, clamping a day beyond the end of the
    /// month to its last day.
    ///
    /// ```rust
    /// use luach_rs::{JewishDate, JewishMonth};
    ///
    /// // Iyar only has 29 days.
    /// let date = JewishDate::try_new(5784, JewishMonth::Iyar, 30).unwrap();
    /// assert_eq!(date.day(), 29);
    /// ```
    #[inline]
    pub fn try_new(year: i32, month: JewishMonth, day: u8) -> CalendarResult<Self> {
        Self::new_with_overflow(year, month, day, Overflow::Constrain)
    }

    /// Creates a new `JewishDate` with the provided overflow behavior.
    pub fn new_with_overflow(
        year: i32,
        month: JewishMonth,
        day: u8,
        overflow: Overflow,
    ) -> CalendarResult<Self> {
        let jewish_year = JewishYear::try_new(year)?;
        jewish_year.check_month(month)?;
        if !(1..=MAX_DAYS_IN_MONTH).contains(&day) {
            return Err(CalendarError::day().with_message("Jewish day must be within 1..=30."));
        }
        let last_day = hebrew::days_in_month(year, month.number());
        let day = match overflow {
            Overflow::Constrain => day.min(last_day),
            Overflow::Reject if day > last_day => {
                return Err(CalendarError::day().with_message("day does not exist in this month."))
            }
            Overflow::Reject => day,
        };
        let date = Self::new_unchecked(year, month, day);
        let absolute = date.rata_die();
        if absolute < MIN_ABSOLUTE_DAY {
            return Err(CalendarError::before_epoch());
        }
        if absolute > MAX_ABSOLUTE_DAY {
            return Err(CalendarError::year().with_message("date is after December 31st, 999,999."));
        }
        Ok(date)
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> JewishMonth {
        self.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the `JewishDate` of an `AbsoluteDate`.
    ///
    /// ```rust
    /// use luach_rs::{AbsoluteDate, JewishDate, JewishMonth};
    ///
    /// let date = JewishDate::from_absolute(AbsoluteDate::MIN);
    /// assert_eq!((date.year(), date.month(), date.day()), (3761, JewishMonth::Teves, 18));
    /// ```
    #[must_use]
    pub fn from_absolute(absolute: AbsoluteDate) -> Self {
        let year = JewishYear::containing(absolute);
        let new_year = hebrew::rata_die_of_new_year(year.year());
        // Zero based offset into the year.
        let mut remaining = absolute.as_i32() - new_year;
        let mut month = JewishMonth::Tishrei;
        for m in year.months() {
            month = m;
            let length = i32::from(hebrew::days_in_month(year.year(), m.number()));
            if remaining < length {
                break;
            }
            remaining -= length;
        }
        Self::new_unchecked(year.year(), month, (remaining + 1) as u8)
    }

    /// Returns the `AbsoluteDate` of this date.
    #[inline]
    #[must_use]
    pub fn to_absolute(&self) -> AbsoluteDate {
        AbsoluteDate::new_unchecked(self.rata_die())
    }

    #[inline]
    fn rata_die(&self) -> i32 {
        hebrew::rata_die_from_hebrew_date(self.year, self.month.number(), self.day)
    }

    /// Returns the `JewishYear` of this date.
    #[inline]
    #[must_use]
    pub const fn jewish_year(&self) -> JewishYear {
        JewishYear::new_unchecked(self.year)
    }

    #[inline]
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        hebrew::is_leap_year(self.year)
    }

    #[inline]
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        hebrew::days_in_month(self.year, self.month.number())
    }

    /// Returns the day of the year, 1 Tishrei being 1.
    #[inline]
    #[must_use]
    pub fn days_since_start_of_year(&self) -> u16 {
        self.jewish_year().days_before_month(self.month) + u16::from(self.day)
    }

    /// Returns the following day, carrying Elul into Tishrei of the next
    /// year. Bounds are checked against the absolute day by the caller.
    pub(crate) fn next_day(self) -> Self {
        if self.day < self.days_in_month() {
            return Self::new_unchecked(self.year, self.month, self.day + 1);
        }
        if self.month == JewishMonth::Elul {
            #[cfg(feature = "log")]
            log::trace!("Jewish year rolls over into {}", self.year + 1);
            return Self::new_unchecked(self.year + 1, JewishMonth::Tishrei, 1);
        }
        Self::new_unchecked(self.year, self.month.succ(self.is_leap_year()), 1)
    }

    /// Returns the preceding day, borrowing from the previous month and
    /// from Elul of the previous year.
    pub(crate) fn previous_day(self) -> Self {
        if self.day > 1 {
            return Self::new_unchecked(self.year, self.month, self.day - 1);
        }
        let (year, month) = if self.month == JewishMonth::Tishrei {
            #[cfg(feature = "log")]
            log::trace!("Jewish year rolls back into {}", self.year - 1);
            (self.year - 1, JewishMonth::Elul)
        } else {
            (self.year, self.month.pred(self.is_leap_year()))
        };
        Self::new_unchecked(year, month, hebrew::days_in_month(year, month.number()))
    }
}

impl PartialOrd for JewishDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JewishDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| {
                self.month
                    .ordinal_in_year(self.year)
                    .cmp(&other.month.ordinal_in_year(other.year))
            })
            .then_with(|| self.day.cmp(&other.day))
    }
}

impl fmt::Display for JewishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{:02}",
            self.year,
            self.month.month_code(self.is_leap_year()),
            self.day
        )
    }
}

// The last supported absolute day falls in the last supported year.
const _: () = assert!(hebrew::year_from_rata_die(MAX_ABSOLUTE_DAY) == MAX_JEWISH_YEAR);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    fn date(year: i32, month: JewishMonth, day: u8) -> JewishDate {
        JewishDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn reference_dates() {
        let teves = date(5771, JewishMonth::Teves, 25);
        assert_eq!(teves.to_absolute().as_i32(), 734_138);
        assert_eq!(JewishDate::from_absolute(teves.to_absolute()), teves);

        let nisan = date(5771, JewishMonth::Nisan, 1);
        assert_eq!(nisan.days_since_start_of_year(), 209);
        assert_eq!(
            crate::GregorianDate::from_absolute(nisan.to_absolute()).to_string(),
            "2011-04-05"
        );
    }

    #[test]
    fn round_trips_absolute_days() {
        for day in 734_000..774_000 {
            let absolute = AbsoluteDate::new_unchecked(day);
            let date = JewishDate::from_absolute(absolute);
            assert_eq!(date.to_absolute(), absolute, "{date}");
        }
        for day in (MIN_ABSOLUTE_DAY..MAX_ABSOLUTE_DAY).step_by(9_973) {
            let absolute = AbsoluteDate::new_unchecked(day);
            assert_eq!(JewishDate::from_absolute(absolute).to_absolute(), absolute);
        }
        let last = JewishDate::from_absolute(AbsoluteDate::MAX);
        assert_eq!(last.year(), MAX_JEWISH_YEAR);
        assert_eq!(last.to_absolute(), AbsoluteDate::MAX);
    }

    #[test]
    fn clamps_and_rejects() {
        assert_eq!(date(5784, JewishMonth::Iyar, 30).day(), 29);
        assert_eq!(date(5785, JewishMonth::Cheshvan, 30).day(), 30);
        assert_eq!(date(5784, JewishMonth::Cheshvan, 30).day(), 29);
        let kind = |y, m, d, o| JewishDate::new_with_overflow(y, m, d, o).unwrap_err().kind();
        assert_eq!(kind(5784, JewishMonth::Iyar, 30, Overflow::Reject), ErrorKind::OutOfRangeDay);
        assert_eq!(kind(5784, JewishMonth::Iyar, 0, Overflow::Constrain), ErrorKind::OutOfRangeDay);
        assert_eq!(kind(5784, JewishMonth::Iyar, 31, Overflow::Constrain), ErrorKind::OutOfRangeDay);
        assert_eq!(
            kind(5785, JewishMonth::AdarII, 1, Overflow::Constrain),
            ErrorKind::OutOfRangeMonth
        );
        assert_eq!(kind(0, JewishMonth::Nisan, 1, Overflow::Constrain), ErrorKind::OutOfRangeYear);
    }

    #[test]
    fn calendar_floor() {
        let floor = date(3761, JewishMonth::Teves, 18);
        assert_eq!(floor.to_absolute(), AbsoluteDate::MIN);
        let kind = |y, m, d| JewishDate::try_new(y, m, d).unwrap_err().kind();
        assert_eq!(kind(3761, JewishMonth::Teves, 17), ErrorKind::DateBeforeEpoch);
        assert_eq!(kind(3761, JewishMonth::Tishrei, 1), ErrorKind::DateBeforeEpoch);
        assert_eq!(kind(1, JewishMonth::Tishrei, 1), ErrorKind::DateBeforeEpoch);
        assert_eq!(
            kind(MAX_JEWISH_YEAR, JewishMonth::Elul, 29),
            ErrorKind::OutOfRangeYear
        );
    }

    #[test]
    fn stepping_matches_absolute() {
        // Crosses Adar II of 5784 and Rosh Hashana 5785.
        let mut date = date(5784, JewishMonth::Shevat, 1);
        for _ in 0..400 {
            let next = date.next_day();
            assert_eq!(next.to_absolute() - date.to_absolute(), 1, "{next}");
            assert_eq!(next.previous_day(), date);
            date = next;
        }
        assert_eq!(date.year(), 5785);
    }

    #[test]
    fn ordering_follows_the_year() {
        // Tishrei precedes Nisan within a year.
        assert!(date(5785, JewishMonth::Tishrei, 1) < date(5785, JewishMonth::Nisan, 1));
        assert!(date(5784, JewishMonth::Adar, 30) < date(5784, JewishMonth::AdarII, 1));
        assert!(date(5784, JewishMonth::Elul, 29) < date(5785, JewishMonth::Tishrei, 1));
    }

    #[test]
    fn display() {
        assert_eq!(date(5771, JewishMonth::Teves, 5).to_string(), "5771-M04-05");
        assert_eq!(date(5784, JewishMonth::Adar, 14).to_string(), "5784-M05L-14");
    }
}
