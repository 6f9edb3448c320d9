//! This module implements `GregorianDate`, the proleptic Gregorian
//! side of the absolute day conversion.

use core::fmt;

use date_equations::gregorian;

use crate::{
    absolute::{AbsoluteDate, MAX_ABSOLUTE_DAY},
    options::Overflow,
    CalendarError, CalendarResult,
};

pub(crate) const MIN_GREGORIAN_YEAR: i32 = 1;
pub(crate) const MAX_GREGORIAN_YEAR: i32 = 999_999;

/// A date in the proleptic Gregorian calendar.
///
/// Fields are ordered so that the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` without determining the validity.
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `GregorianDate`, clamping a day beyond the end of
    /// the month to its last day.
    ///
    /// ```rust
    /// use luach_rs::GregorianDate;
    ///
    /// let date = GregorianDate::try_new(2023, 2, 30).unwrap();
    /// assert_eq!((date.year(), date.month(), date.day()), (2023, 2, 28));
    /// ```
    #[inline]
    pub fn try_new(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        Self::new_with_overflow(year, month, day, Overflow::Constrain)
    }

    /// Creates a new `GregorianDate` with the provided overflow behavior.
    pub fn new_with_overflow(
        year: i32,
        month: u8,
        day: u8,
        overflow: Overflow,
    ) -> CalendarResult<Self> {
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(
                CalendarError::year().with_message("Gregorian year must be within 1..=999999.")
            );
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::month().with_message("Gregorian month must be within 1..=12."));
        }
        if !(1..=31).contains(&day) {
            return Err(CalendarError::day().with_message("Gregorian day must be within 1..=31."));
        }
        let last_day = gregorian::days_in_month(year, month);
        let day = match overflow {
            Overflow::Constrain => day.min(last_day),
            Overflow::Reject if day > last_day => {
                return Err(CalendarError::day().with_message("day does not exist in this month."))
            }
            Overflow::Reject => day,
        };
        Ok(Self::new_unchecked(year, month, day))
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the `GregorianDate` of an `AbsoluteDate`.
    #[inline]
    #[must_use]
    pub fn from_absolute(absolute: AbsoluteDate) -> Self {
        let (year, month, day) = gregorian::ymd_from_rata_die(absolute.as_i32());
        Self::new_unchecked(year, month, day)
    }

    /// Returns the `AbsoluteDate` of this date.
    #[inline]
    #[must_use]
    pub fn to_absolute(&self) -> AbsoluteDate {
        AbsoluteDate::new_unchecked(gregorian::rata_die_from_gregorian_date(
            self.year, self.month, self.day,
        ))
    }

    #[inline]
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        gregorian::is_leap_year(self.year)
    }

    #[inline]
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        gregorian::days_in_month(self.year, self.month)
    }

    #[inline]
    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        gregorian::days_in_year(self.year)
    }

    /// Returns the day of the year, January 1st being 1.
    #[inline]
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        gregorian::days_before_month(self.year, self.month) + u16::from(self.day)
    }

    /// Returns the following day, carrying into the next month and year.
    pub(crate) fn next_day(self) -> CalendarResult<Self> {
        if self.day < self.days_in_month() {
            return Ok(Self::new_unchecked(self.year, self.month, self.day + 1));
        }
        if self.month < 12 {
            return Ok(Self::new_unchecked(self.year, self.month + 1, 1));
        }
        if self.year == MAX_GREGORIAN_YEAR {
            return Err(CalendarError::year().with_message("date is after December 31st, 999,999."));
        }
        Ok(Self::new_unchecked(self.year + 1, 1, 1))
    }

    /// Returns the preceding day, borrowing from the previous month and year.
    pub(crate) fn previous_day(self) -> CalendarResult<Self> {
        if self.day > 1 {
            return Ok(Self::new_unchecked(self.year, self.month, self.day - 1));
        }
        if self.month > 1 {
            let month = self.month - 1;
            let day = gregorian::days_in_month(self.year, month);
            return Ok(Self::new_unchecked(self.year, month, day));
        }
        if self.year == MIN_GREGORIAN_YEAR {
            return Err(CalendarError::before_epoch());
        }
        Ok(Self::new_unchecked(self.year - 1, 12, 31))
    }
}

impl Default for GregorianDate {
    fn default() -> Self {
        Self::new_unchecked(MIN_GREGORIAN_YEAR, 1, 1)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// Keeps `MAX_ABSOLUTE_DAY` and the year bound describing the same day.
const _: () = assert!(
    gregorian::rata_die_from_gregorian_date(MAX_GREGORIAN_YEAR, 12, 31) == MAX_ABSOLUTE_DAY
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn reference_absolute_days() {
        let date = GregorianDate::try_new(2011, 1, 1).unwrap();
        assert_eq!(date.to_absolute().as_i32(), 734_138);
        assert_eq!(GregorianDate::from_absolute(date.to_absolute()), date);
        assert_eq!(GregorianDate::try_new(1, 1, 1).unwrap().to_absolute(), AbsoluteDate::MIN);
    }

    #[test]
    fn clamps_to_month_end() {
        let date = GregorianDate::try_new(2024, 2, 31).unwrap();
        assert_eq!(date.day(), 29);
        let date = GregorianDate::try_new(2023, 4, 31).unwrap();
        assert_eq!(date.day(), 30);
        let err = GregorianDate::new_with_overflow(2023, 4, 31, Overflow::Reject).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRangeDay);
    }

    #[test]
    fn rejects_components() {
        let kind = |y, m, d| GregorianDate::try_new(y, m, d).unwrap_err().kind();
        assert_eq!(kind(0, 1, 1), ErrorKind::OutOfRangeYear);
        assert_eq!(kind(1_000_000, 1, 1), ErrorKind::OutOfRangeYear);
        assert_eq!(kind(2024, 0, 1), ErrorKind::OutOfRangeMonth);
        assert_eq!(kind(2024, 13, 1), ErrorKind::OutOfRangeMonth);
        assert_eq!(kind(2024, 1, 0), ErrorKind::OutOfRangeDay);
        assert_eq!(kind(2024, 1, 32), ErrorKind::OutOfRangeDay);
    }

    #[test]
    fn stepping_matches_absolute() {
        let mut date = GregorianDate::try_new(1999, 12, 1).unwrap();
        for _ in 0..800 {
            let next = date.next_day().unwrap();
            assert_eq!(next.to_absolute() - date.to_absolute(), 1, "{next}");
            assert_eq!(next.previous_day().unwrap(), date);
            date = next;
        }
        assert_eq!(date.to_string(), "2002-02-08");
    }

    #[test]
    fn stepping_limits() {
        let first = GregorianDate::from_absolute(AbsoluteDate::MIN);
        assert_eq!(first.previous_day().unwrap_err().kind(), ErrorKind::DateBeforeEpoch);
        let last = GregorianDate::from_absolute(AbsoluteDate::MAX);
        assert_eq!(last.to_string(), "999999-12-31");
        assert_eq!(last.next_day().unwrap_err().kind(), ErrorKind::OutOfRangeYear);
    }

    #[test]
    fn day_of_year() {
        assert_eq!(GregorianDate::try_new(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(GregorianDate::try_new(2023, 3, 1).unwrap().day_of_year(), 60);
    }
}
