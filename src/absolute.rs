//! This module implements `AbsoluteDate` and `Weekday`.

use core::fmt;
use core::ops::{Add, Sub};

use crate::{CalendarError, CalendarResult};

/// The first supported absolute day: January 1st, 1 (18 Teves 3761).
pub(crate) const MIN_ABSOLUTE_DAY: i32 = 1;
/// The last supported absolute day: December 31st, 999,999.
pub(crate) const MAX_ABSOLUTE_DAY: i32 = 365_242_134;

/// A linear count of days where day 1 is January 1st, 1 in the
/// proleptic Gregorian calendar.
///
/// `AbsoluteDate` is the interchange key between the calendars and
/// defines their ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbsoluteDate(pub(crate) i32);

impl AbsoluteDate {
    /// The earliest supported day, January 1st, 1.
    pub const MIN: Self = Self(MIN_ABSOLUTE_DAY);
    /// The latest supported day, December 31st, 999,999.
    pub const MAX: Self = Self(MAX_ABSOLUTE_DAY);

    /// Creates a new `AbsoluteDate` if `day` is within the supported range.
    pub fn try_new(day: i32) -> CalendarResult<Self> {
        Self::check(day)?;
        Ok(Self(day))
    }

    #[inline]
    pub(crate) const fn new_unchecked(day: i32) -> Self {
        Self(day)
    }

    pub(crate) fn check(day: i32) -> CalendarResult<()> {
        if day < MIN_ABSOLUTE_DAY {
            return Err(CalendarError::before_epoch());
        }
        if day > MAX_ABSOLUTE_DAY {
            return Err(CalendarError::year()
                .with_message("date is after December 31st, 999,999."));
        }
        Ok(())
    }

    /// Returns the day count.
    #[inline]
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns the day of the week. Day 1 is a Monday.
    #[inline]
    #[must_use]
    pub fn day_of_week(&self) -> Weekday {
        Weekday::from_absolute(self.0)
    }

    /// Returns the following day, or `None` past the supported range.
    pub(crate) fn checked_next(self) -> Option<Self> {
        (self.0 < MAX_ABSOLUTE_DAY).then(|| Self(self.0 + 1))
    }

    /// Returns the preceding day, or `None` before the supported range.
    pub(crate) fn checked_previous(self) -> Option<Self> {
        (self.0 > MIN_ABSOLUTE_DAY).then(|| Self(self.0 - 1))
    }
}

impl From<AbsoluteDate> for i32 {
    fn from(value: AbsoluteDate) -> Self {
        value.0
    }
}

impl TryFrom<i32> for AbsoluteDate {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl Add<i32> for AbsoluteDate {
    type Output = CalendarResult<AbsoluteDate>;

    fn add(self, rhs: i32) -> Self::Output {
        let day = self.0.checked_add(rhs).ok_or(CalendarError::year())?;
        Self::try_new(day)
    }
}

impl Sub for AbsoluteDate {
    type Output = i32;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl fmt::Display for AbsoluteDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A day of the week, numbered from Sunday (1) to Saturday (7).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday for an absolute day.
    #[inline]
    #[must_use]
    pub fn from_absolute(day: i32) -> Self {
        Self::ALL[day.rem_euclid(7) as usize]
    }

    /// Creates a `Weekday` from its number, Sunday being 1.
    pub fn from_number(number: u8) -> CalendarResult<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)))
            .copied()
            .ok_or(CalendarError::day().with_message("weekday must be within 1..=7."))
    }

    /// Returns the number of this weekday, Sunday being 1.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the next day of the week, wrapping Saturday to Sunday.
    #[must_use]
    pub fn succ(self) -> Self {
        Self::ALL[usize::from(self.number()) % 7]
    }

    /// Returns the previous day of the week, wrapping Sunday to Saturday.
    #[must_use]
    pub fn pred(self) -> Self {
        Self::ALL[(usize::from(self.number()) + 5) % 7]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_day_is_a_monday() {
        assert_eq!(AbsoluteDate::MIN.day_of_week(), Weekday::Monday);
        // January 1st, 2011 was a Saturday.
        assert_eq!(AbsoluteDate(734_138).day_of_week(), Weekday::Saturday);
        assert_eq!(Weekday::from_absolute(734_139), Weekday::Sunday);
    }

    #[test]
    fn weekday_wraps() {
        assert_eq!(Weekday::Saturday.succ(), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.pred(), Weekday::Saturday);
        assert_eq!(Weekday::Wednesday.succ(), Weekday::Thursday);
        assert_eq!(Weekday::Wednesday.pred(), Weekday::Tuesday);
        for weekday in Weekday::ALL {
            assert_eq!(weekday.succ().pred(), weekday);
            assert_eq!(Weekday::from_number(weekday.number()), Ok(weekday));
        }
        assert!(Weekday::from_number(0).is_err());
        assert!(Weekday::from_number(8).is_err());
    }

    #[test]
    fn range_checks() {
        assert_eq!(
            AbsoluteDate::try_new(0).map_err(|e| e.kind()),
            Err(crate::ErrorKind::DateBeforeEpoch)
        );
        assert_eq!(
            (AbsoluteDate::MAX + 1).map_err(|e| e.kind()),
            Err(crate::ErrorKind::OutOfRangeYear)
        );
        assert_eq!(AbsoluteDate::MIN.checked_previous(), None);
        assert_eq!(AbsoluteDate::MAX.checked_next(), None);
        assert_eq!(AbsoluteDate(10) - AbsoluteDate(3), 7);
    }
}
