//! Implementation of the `JewishYear` length oracle.

use core::fmt;

use date_equations::hebrew;
use tinystr::TinyAsciiStr;

use super::{
    dechiyos::Postponement,
    molad::{self, Chalakim},
    JewishMonth, MAX_JEWISH_YEAR,
};
use crate::{AbsoluteDate, CalendarError, CalendarResult};

/// The classification of a year by the lengths of Cheshvan and Kislev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kviah {
    /// Cheshvan and Kislev both have 29 days.
    Deficient,
    /// Cheshvan has 29 days and Kislev 30.
    Regular,
    /// Cheshvan and Kislev both have 30 days.
    Complete,
}

impl fmt::Display for Kviah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deficient => "deficient",
            Self::Regular => "regular",
            Self::Complete => "complete",
        }
        .fmt(f)
    }
}

/// A year of the Jewish calendar, and everything derived from the day
/// its Rosh Hashana falls on.
///
/// ```rust
/// use luach_rs::{JewishMonth, JewishYear, Kviah};
///
/// let year = JewishYear::try_new(5784).unwrap();
/// assert!(year.is_leap());
/// assert_eq!(year.days_in_year(), 383);
/// assert_eq!(year.kviah(), Kviah::Deficient);
/// assert_eq!(year.days_in_month(JewishMonth::AdarII), Ok(29));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JewishYear(i32);

impl JewishYear {
    /// Creates a `JewishYear`, rejecting years outside `1..=1003748`.
    pub fn try_new(year: i32) -> CalendarResult<Self> {
        if !(1..=MAX_JEWISH_YEAR).contains(&year) {
            return Err(
                CalendarError::year().with_message("Jewish year must be within 1..=1003748.")
            );
        }
        Ok(Self(year))
    }

    #[inline]
    pub(crate) const fn new_unchecked(year: i32) -> Self {
        Self(year)
    }

    /// Returns the year containing `absolute`.
    #[must_use]
    pub fn containing(absolute: AbsoluteDate) -> Self {
        Self(hebrew::year_from_rata_die(absolute.as_i32()))
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.0
    }

    /// Returns whether this year has thirteen months.
    #[inline]
    #[must_use]
    pub const fn is_leap(&self) -> bool {
        hebrew::is_leap_year(self.0)
    }

    /// Returns the days from the start of the count to the day before
    /// Rosh Hashana.
    #[inline]
    #[must_use]
    pub const fn elapsed_days(&self) -> i32 {
        hebrew::elapsed_days(self.0)
    }

    /// Returns the length of this year: 353, 354, 355, 383, 384 or 385 days.
    #[inline]
    #[must_use]
    pub const fn days_in_year(&self) -> u16 {
        hebrew::days_in_year(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn months_in_year(&self) -> u8 {
        hebrew::months_in_year(self.0)
    }

    /// Returns Adar II in leap years, Adar otherwise.
    #[inline]
    #[must_use]
    pub const fn last_month(&self) -> JewishMonth {
        if self.is_leap() {
            JewishMonth::AdarII
        } else {
            JewishMonth::Adar
        }
    }

    /// Returns whether Cheshvan has 30 days this year.
    #[inline]
    #[must_use]
    pub const fn is_cheshvan_long(&self) -> bool {
        hebrew::is_cheshvan_long(self.0)
    }

    /// Returns whether Kislev has 29 days this year.
    #[inline]
    #[must_use]
    pub const fn is_kislev_short(&self) -> bool {
        hebrew::is_kislev_short(self.0)
    }

    #[must_use]
    pub const fn kviah(&self) -> Kviah {
        match (self.is_cheshvan_long(), self.is_kislev_short()) {
            (true, false) => Kviah::Complete,
            (false, true) => Kviah::Deficient,
            _ => Kviah::Regular,
        }
    }

    /// Returns whether `month` exists in this year.
    #[inline]
    #[must_use]
    pub const fn contains(&self, month: JewishMonth) -> bool {
        !matches!(month, JewishMonth::AdarII) || self.is_leap()
    }

    /// Returns the number of days in `month`, or an `OutOfRangeMonth`
    /// error for Adar II of a common year.
    pub fn days_in_month(&self, month: JewishMonth) -> CalendarResult<u8> {
        self.check_month(month)?;
        Ok(hebrew::days_in_month(self.0, month.number()))
    }

    /// Returns the days of this year before the first of `month`.
    #[inline]
    pub(crate) fn days_before_month(&self, month: JewishMonth) -> u16 {
        hebrew::days_before_month(self.0, month.number())
    }

    pub(crate) fn check_month(&self, month: JewishMonth) -> CalendarResult<()> {
        if !self.contains(month) {
            return Err(CalendarError::month().with_message("Adar II only exists in leap years."));
        }
        Ok(())
    }

    /// Returns the months of this year in calendar order, from Tishrei
    /// to Elul.
    pub fn months(&self) -> impl Iterator<Item = JewishMonth> {
        let leap = self.is_leap();
        let count = usize::from(self.months_in_year());
        core::iter::successors(Some(JewishMonth::Tishrei), move |m| Some(m.succ(leap))).take(count)
    }

    /// Returns the absolute day of 1 Tishrei of this year.
    ///
    /// Years before 3762 begin before the first supported absolute day and
    /// return a `DateBeforeEpoch` error.
    pub fn rosh_hashana(&self) -> CalendarResult<AbsoluteDate> {
        AbsoluteDate::try_new(hebrew::rata_die_of_new_year(self.0))
    }

    /// Returns which dechiyos moved Rosh Hashana of this year.
    #[inline]
    #[must_use]
    pub fn rosh_hashana_postponement(&self) -> Postponement {
        Postponement::for_year(self.0)
    }

    /// Returns the molad of `month` in this year.
    #[inline]
    #[must_use]
    pub fn molad(&self, month: JewishMonth) -> Chalakim {
        molad::chalakim_since_molad_tohu(self.0, month)
    }

    /// Returns the month code of `month` in this year.
    pub fn month_code(&self, month: JewishMonth) -> CalendarResult<TinyAsciiStr<4>> {
        self.check_month(month)?;
        Ok(month.month_code(self.is_leap()))
    }

    /// Resolves a month code in this year.
    pub fn month_from_code(&self, code: &TinyAsciiStr<4>) -> CalendarResult<JewishMonth> {
        JewishMonth::try_from_month_code(code, self.is_leap())
    }
}

impl TryFrom<i32> for JewishYear {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl fmt::Display for JewishYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, GregorianDate};
    use alloc::vec::Vec;
    use tinystr::tinystr;

    fn year(y: i32) -> JewishYear {
        JewishYear::try_new(y).unwrap()
    }

    #[test]
    fn year_lengths_are_valid() {
        for y in 1..6_000 {
            let days = year(y).days_in_year();
            assert!(
                matches!(days, 353 | 354 | 355 | 383 | 384 | 385),
                "{y} has {days} days"
            );
            assert_eq!(year(y).is_leap(), days > 355);
            let total: u16 = year(y)
                .months()
                .map(|m| u16::from(year(y).days_in_month(m).unwrap()))
                .sum();
            assert_eq!(total, days, "{y}");
        }
    }

    #[test]
    fn leap_years_per_cycle() {
        for start in [1, 2, 5_770, 5_784, 100_000] {
            let leap: Vec<i32> = (start..start + 19)
                .filter(|y| year(*y).is_leap())
                .map(|y| (y - 1).rem_euclid(19) + 1)
                .collect();
            assert_eq!(leap.len(), 7);
            for position in leap {
                assert!([3, 6, 8, 11, 14, 17, 19].contains(&position));
            }
        }
    }

    #[test]
    fn known_years() {
        assert_eq!(year(5771).days_in_year(), 385);
        assert_eq!(year(5771).kviah(), Kviah::Complete);
        assert_eq!(year(5784).days_in_year(), 383);
        assert_eq!(year(5785).days_in_year(), 355);
        assert_eq!(year(5786).days_in_year(), 354);
        assert_eq!(year(5786).kviah(), Kviah::Regular);
        assert_eq!(year(5771).elapsed_days(), 2_107_452);
    }

    #[test]
    fn rosh_hashana() {
        let expected = [(5784, (2023, 9, 16)), (5785, (2024, 10, 3))];
        for (y, (gy, gm, gd)) in expected {
            let absolute = year(y).rosh_hashana().unwrap();
            let gregorian = GregorianDate::from_absolute(absolute);
            assert_eq!((gregorian.year(), gregorian.month(), gregorian.day()), (gy, gm, gd));
            assert_eq!(JewishYear::containing(absolute), year(y));
            assert_eq!(JewishYear::containing((absolute + -1).unwrap()), year(y - 1));
        }
        assert_eq!(
            year(3761).rosh_hashana().map_err(|e| e.kind()),
            Err(ErrorKind::DateBeforeEpoch)
        );
    }

    #[test]
    fn months_in_calendar_order() {
        let common: Vec<_> = year(5785).months().collect();
        assert_eq!(common.len(), 12);
        assert_eq!(common[0], JewishMonth::Tishrei);
        assert_eq!(common[5], JewishMonth::Adar);
        assert_eq!(common[6], JewishMonth::Nisan);
        assert_eq!(common[11], JewishMonth::Elul);

        let leap: Vec<_> = year(5784).months().collect();
        assert_eq!(leap.len(), 13);
        assert_eq!(leap[6], JewishMonth::AdarII);
        assert_eq!(leap[12], JewishMonth::Elul);
    }

    #[test]
    fn adar_two_only_in_leap_years() {
        assert_eq!(
            year(5785).days_in_month(JewishMonth::AdarII).map_err(|e| e.kind()),
            Err(ErrorKind::OutOfRangeMonth)
        );
        assert_eq!(year(5784).days_in_month(JewishMonth::Adar), Ok(30));
        assert_eq!(year(5785).days_in_month(JewishMonth::Adar), Ok(29));
        assert_eq!(
            year(5784).month_code(JewishMonth::Adar),
            Ok(tinystr!(4, "M05L"))
        );
        assert_eq!(
            year(5784).month_from_code(&tinystr!(4, "M06")),
            Ok(JewishMonth::AdarII)
        );
    }

    #[test]
    fn postponement_matches_elapsed_days() {
        for y in 5_600..5_700 {
            assert_eq!(
                year(y).rosh_hashana_postponement().elapsed_days(),
                year(y).elapsed_days()
            );
        }
    }

    #[test]
    fn year_range() {
        assert!(JewishYear::try_new(0).is_err());
        assert!(JewishYear::try_new(MAX_JEWISH_YEAR + 1).is_err());
        assert!(JewishYear::try_new(MAX_JEWISH_YEAR).is_ok());
    }
}
