//! Native implementation of the `luach_rs` options.
//!
//! `luach_rs` has two options: the [`Unit`] a [`CalendarDate`] is moved
//! forward by, and how an out of range day of the month is treated
//! ([`Overflow`]).
//!
//! [`CalendarDate`]: crate::CalendarDate

use core::{fmt, str::FromStr};

use crate::CalendarError;

/// The calendar field advanced by `CalendarDate::forward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// A single day, carried through both calendars.
    Day,
    /// A Jewish month.
    Month,
    /// A Jewish year.
    Year,
}

impl Unit {
    /// Returns the plural name of this unit.
    #[inline]
    #[must_use]
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Day => "days",
            Self::Month => "months",
            Self::Year => "years",
        }
    }
}

impl FromStr for Unit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" | "days" => Ok(Self::Day),
            "month" | "months" => Ok(Self::Month),
            "year" | "years" => Ok(Self::Year),
            _ => Err(CalendarError::unsupported_unit()
                .with_message("only days, months and years can be moved forward.")),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
        .fmt(f)
    }
}

/// How a day of the month beyond the month's last day is handled.
///
/// A day that is below 1, or above the longest month of its calendar
/// (31 for Gregorian, 30 for Jewish months), is always rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Clamp the day to the last day of the month.
    #[default]
    Constrain,
    /// Reject the day with an `OutOfRangeDay` error.
    Reject,
}

/// A parsing error for `Overflow`
#[derive(Debug, Clone, Copy)]
pub struct ParseOverflowError;

impl fmt::Display for ParseOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid overflow value")
    }
}

impl FromStr for Overflow {
    type Err = ParseOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Self::Constrain),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseOverflowError),
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constrain => "constrain",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn unit_from_str() {
        assert_eq!("day".parse::<Unit>(), Ok(Unit::Day));
        assert_eq!("months".parse::<Unit>(), Ok(Unit::Month));
        assert_eq!("year".parse::<Unit>(), Ok(Unit::Year));
        assert_eq!(
            "week".parse::<Unit>().map_err(|e| e.kind()),
            Err(ErrorKind::UnsupportedUnit)
        );
    }

    #[test]
    fn overflow_from_str() {
        assert_eq!("constrain".parse::<Overflow>().ok(), Some(Overflow::Constrain));
        assert_eq!("reject".parse::<Overflow>().ok(), Some(Overflow::Reject));
        assert!("balance".parse::<Overflow>().is_err());
        assert_eq!(Overflow::default(), Overflow::Constrain);
    }
}
