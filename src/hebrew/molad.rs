//! The molad, the mean lunar conjunction that anchors each month.
//!
//! The molad is counted in chalakim (parts) from the start of the day
//! before Molad Tohu, the conjunction of Tishrei of year 1. Every lunar
//! month adds 29 days, 12 hours and 793 parts, so the molad of any
//! month follows from the number of months elapsed in the 19 year cycle.
//!
//! ```rust
//! use luach_rs::{molad, JewishMonth};
//!
//! let tohu = molad::chalakim_since_molad_tohu(1, JewishMonth::Tishrei);
//! assert_eq!(tohu.as_i64(), 31_524);
//!
//! let time = tohu.time_of_day();
//! assert_eq!((time.hour(), time.minute(), time.part()), (5, 11, 6));
//! ```

use core::fmt;

use date_equations::hebrew;

use super::JewishMonth;
use crate::{CalendarError, CalendarResult};

pub use date_equations::hebrew::{
    CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE, CHALAKIM_PER_MONTH, MOLAD_TOHU,
};

/// An exact count of chalakim, 1/1080 of an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Chalakim(pub(crate) i64);

impl Chalakim {
    /// The chalakim of Molad Tohu: day 1, 5 hours and 204 parts.
    pub const MOLAD_TOHU: Self = Self(MOLAD_TOHU);
    /// A mean lunar month.
    pub const MONTH: Self = Self(CHALAKIM_PER_MONTH);

    #[inline]
    #[must_use]
    pub const fn new(chalakim: i64) -> Self {
        Self(chalakim)
    }

    #[inline]
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns the whole days, counted from the start of the molad count.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        hebrew::split_chalakim(self.0).0
    }

    /// Returns the chalakim into the day, `0..25920`.
    #[inline]
    #[must_use]
    pub const fn parts_of_day(&self) -> i64 {
        hebrew::split_chalakim(self.0).1
    }

    /// Adds two counts, returning an `OutOfRangeYear` error on overflow.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> CalendarResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(CalendarError::year().with_message("chalakim overflowed."))
    }

    /// Subtracts `rhs`, returning an `OutOfRangeYear` error on overflow.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> CalendarResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(CalendarError::year().with_message("chalakim overflowed."))
    }

    /// Returns the time of day, with hour 0 at the start of the molad day.
    #[inline]
    #[must_use]
    pub const fn time_of_day(&self) -> MoladTime {
        let (hour, minute, part) = hebrew::split_time_of_day(self.parts_of_day());
        MoladTime::new_unchecked(hour, minute, part)
    }
}

impl From<Chalakim> for i64 {
    fn from(value: Chalakim) -> Self {
        value.0
    }
}

/// The time of a molad, as hours, minutes and chalakim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MoladTime {
    hour: u8,
    minute: u8,
    part: u8,
}

impl MoladTime {
    #[inline]
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, part: u8) -> Self {
        Self { hour, minute, part }
    }

    /// Creates a validated `MoladTime`.
    ///
    /// `hour` must be within `0..=23`, `minute` within `0..=59`, and
    /// `part` within `0..=17`.
    pub fn try_new(hour: u8, minute: u8, part: u8) -> CalendarResult<Self> {
        if hour > 23 {
            return Err(CalendarError::hour().with_message("molad hours must be within 0..=23."));
        }
        if minute > 59 {
            return Err(CalendarError::minute().with_message("molad minutes must be within 0..=59."));
        }
        if part > 17 {
            return Err(CalendarError::part().with_message("molad chalakim must be within 0..=17."));
        }
        Ok(Self::new_unchecked(hour, minute, part))
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    #[must_use]
    pub const fn part(&self) -> u8 {
        self.part
    }

    /// Returns this time of day as chalakim.
    #[inline]
    #[must_use]
    pub const fn to_chalakim(&self) -> Chalakim {
        Chalakim(
            self.hour as i64 * CHALAKIM_PER_HOUR
                + self.minute as i64 * CHALAKIM_PER_MINUTE
                + self.part as i64,
        )
    }

    /// Moves the hour from the molad day, which starts at 18:00 of the
    /// previous civil day, onto the civil clock.
    #[inline]
    pub(crate) const fn to_civil_hour(self) -> Self {
        Self::new_unchecked((self.hour + 18) % 24, self.minute, self.part)
    }
}

impl fmt::Display for MoladTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} {}p", self.hour, self.minute, self.part)
    }
}

/// Returns the month number counted from Tishrei for a month counted
/// from Nisan. The count wraps at 13 in leap years and 12 otherwise.
#[inline]
#[must_use]
pub fn to_tishrei_relative(month: JewishMonth, year: i32) -> u8 {
    month.ordinal_in_year(year)
}

/// Returns the chalakim from the start of the molad count to the molad
/// of `month` in `year`.
#[inline]
#[must_use]
pub fn chalakim_since_molad_tohu(year: i32, month: JewishMonth) -> Chalakim {
    Chalakim(hebrew::chalakim_since_molad_tohu(year, month.number()))
}

/// Splits chalakim into whole days and the time of day.
#[inline]
#[must_use]
pub fn split_chalakim(chalakim: Chalakim) -> (i64, MoladTime) {
    (chalakim.days(), chalakim.time_of_day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn molad_tohu_constant() {
        assert_eq!(
            chalakim_since_molad_tohu(1, JewishMonth::Tishrei),
            Chalakim::MOLAD_TOHU
        );
        let (day, time) = split_chalakim(Chalakim::MOLAD_TOHU);
        assert_eq!(day, 1);
        assert_eq!(time.to_chalakim().as_i64(), 5 * 1080 + 204);
    }

    #[test]
    fn consecutive_months_are_one_lunation_apart() {
        let cheshvan = chalakim_since_molad_tohu(5785, JewishMonth::Cheshvan);
        let tishrei = chalakim_since_molad_tohu(5785, JewishMonth::Tishrei);
        assert_eq!(cheshvan.checked_sub(tishrei), Ok(Chalakim::MONTH));
        // Elul of a leap year is followed by Tishrei, 13 months after its Tishrei.
        let elul = chalakim_since_molad_tohu(5784, JewishMonth::Elul);
        assert_eq!(elul.checked_add(Chalakim::MONTH), Ok(tishrei));
        let leap_tishrei = chalakim_since_molad_tohu(5784, JewishMonth::Tishrei);
        assert_eq!(tishrei.as_i64() - leap_tishrei.as_i64(), 13 * CHALAKIM_PER_MONTH);
    }

    #[test]
    fn arithmetic_overflow() {
        let max = Chalakim::new(i64::MAX);
        let err = max.checked_add(Chalakim::MONTH).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRangeYear);
        let min = Chalakim::new(i64::MIN);
        assert!(min.checked_sub(Chalakim::MONTH).is_err());
        assert_eq!(
            max.checked_sub(Chalakim::MONTH),
            Ok(Chalakim::new(i64::MAX - CHALAKIM_PER_MONTH))
        );
    }

    #[test]
    fn tishrei_relative_months() {
        assert_eq!(to_tishrei_relative(JewishMonth::Tishrei, 5785), 1);
        assert_eq!(to_tishrei_relative(JewishMonth::Nisan, 5785), 7);
        assert_eq!(to_tishrei_relative(JewishMonth::Nisan, 5784), 8);
        assert_eq!(to_tishrei_relative(JewishMonth::AdarII, 5784), 7);
        assert_eq!(to_tishrei_relative(JewishMonth::Elul, 5784), 13);
    }

    #[test]
    fn time_of_day() {
        let molad = chalakim_since_molad_tohu(5785, JewishMonth::Tishrei);
        assert_eq!(molad.days(), 2_112_590);
        let time = molad.time_of_day();
        assert_eq!(time, MoladTime::try_new(9, 21, 13).unwrap());
        assert_eq!(time.to_string(), "09:21 13p");
        assert_eq!(time.to_civil_hour().hour(), 3);
    }

    #[test]
    fn validates_time() {
        assert_eq!(MoladTime::try_new(24, 0, 0).unwrap_err().kind(), ErrorKind::OutOfRangeHour);
        assert_eq!(MoladTime::try_new(0, 60, 0).unwrap_err().kind(), ErrorKind::OutOfRangeMinute);
        assert_eq!(MoladTime::try_new(0, 0, 18).unwrap_err().kind(), ErrorKind::OutOfRangePart);
        assert!(MoladTime::try_new(23, 59, 17).is_ok());
    }
}
