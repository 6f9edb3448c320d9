//! Implementation of `JewishMonth` and its month codes.

use core::fmt;

use date_equations::hebrew;
use tinystr::{tinystr, TinyAsciiStr};

use crate::{CalendarError, CalendarResult};

/// A month of the Jewish calendar.
///
/// Months are numbered from Nisan, as in the Torah, while the year
/// itself begins with Tishrei. `Adar` is Adar I in a leap year, and
/// `AdarII` only exists in leap years.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JewishMonth {
    Nisan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Teves = 10,
    Shevat = 11,
    Adar = 12,
    AdarII = 13,
}

// MonthCode constants, counted from Tishrei.
const MONTH_ONE: TinyAsciiStr<4> = tinystr!(4, "M01");
const MONTH_TWO: TinyAsciiStr<4> = tinystr!(4, "M02");
const MONTH_THREE: TinyAsciiStr<4> = tinystr!(4, "M03");
const MONTH_FOUR: TinyAsciiStr<4> = tinystr!(4, "M04");
const MONTH_FIVE: TinyAsciiStr<4> = tinystr!(4, "M05");
const MONTH_FIVE_LEAP: TinyAsciiStr<4> = tinystr!(4, "M05L");
const MONTH_SIX: TinyAsciiStr<4> = tinystr!(4, "M06");
const MONTH_SEVEN: TinyAsciiStr<4> = tinystr!(4, "M07");
const MONTH_EIGHT: TinyAsciiStr<4> = tinystr!(4, "M08");
const MONTH_NINE: TinyAsciiStr<4> = tinystr!(4, "M09");
const MONTH_TEN: TinyAsciiStr<4> = tinystr!(4, "M10");
const MONTH_ELEVEN: TinyAsciiStr<4> = tinystr!(4, "M11");
const MONTH_TWELVE: TinyAsciiStr<4> = tinystr!(4, "M12");

impl JewishMonth {
    const ALL: [Self; 13] = [
        Self::Nisan,
        Self::Iyar,
        Self::Sivan,
        Self::Tammuz,
        Self::Av,
        Self::Elul,
        Self::Tishrei,
        Self::Cheshvan,
        Self::Kislev,
        Self::Teves,
        Self::Shevat,
        Self::Adar,
        Self::AdarII,
    ];

    /// Creates a `JewishMonth` from its number, Nisan being 1 and Adar II 13.
    pub fn from_number(month: u8) -> CalendarResult<Self> {
        month
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)))
            .copied()
            .ok_or(
                CalendarError::month()
                    .with_message("Jewish month must be within 1..=12, or 1..=13 in a leap year."),
            )
    }

    /// Returns the number of this month, Nisan being 1 and Adar II 13.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the position of this month in `year`, Tishrei being 1.
    #[inline]
    #[must_use]
    pub fn ordinal_in_year(self, year: i32) -> u8 {
        hebrew::month_of_year(year, self.number())
    }

    /// Returns whether this month is Adar or Adar II.
    #[inline]
    #[must_use]
    pub const fn is_adar(self) -> bool {
        matches!(self, Self::Adar | Self::AdarII)
    }

    /// Returns the month that follows in a year with the given leap status,
    /// wrapping Elul to Tishrei.
    pub(crate) fn succ(self, in_leap_year: bool) -> Self {
        match self {
            Self::Elul => Self::Tishrei,
            Self::Adar if in_leap_year => Self::AdarII,
            Self::Adar | Self::AdarII => Self::Nisan,
            other => Self::ALL[usize::from(other.number())],
        }
    }

    /// Returns the month that precedes in a year with the given leap status,
    /// wrapping Tishrei to Elul.
    pub(crate) fn pred(self, in_leap_year: bool) -> Self {
        match self {
            Self::Tishrei => Self::Elul,
            Self::Nisan if in_leap_year => Self::AdarII,
            Self::Nisan => Self::Adar,
            other => Self::ALL[usize::from(other.number()) - 2],
        }
    }

    /// Returns the month code of this month in a year with the given leap
    /// status.
    ///
    /// Codes are counted from Tishrei (`M01`) to Elul (`M12`); Adar I is
    /// the leap month `M05L`, and Adar II keeps the code of Adar (`M06`).
    #[must_use]
    pub fn month_code(self, in_leap_year: bool) -> TinyAsciiStr<4> {
        match self {
            Self::Tishrei => MONTH_ONE,
            Self::Cheshvan => MONTH_TWO,
            Self::Kislev => MONTH_THREE,
            Self::Teves => MONTH_FOUR,
            Self::Shevat => MONTH_FIVE,
            Self::Adar if in_leap_year => MONTH_FIVE_LEAP,
            Self::Adar | Self::AdarII => MONTH_SIX,
            Self::Nisan => MONTH_SEVEN,
            Self::Iyar => MONTH_EIGHT,
            Self::Sivan => MONTH_NINE,
            Self::Tammuz => MONTH_TEN,
            Self::Av => MONTH_ELEVEN,
            Self::Elul => MONTH_TWELVE,
        }
    }

    /// Resolves a month code in a year with the given leap status.
    pub fn try_from_month_code(code: &TinyAsciiStr<4>, in_leap_year: bool) -> CalendarResult<Self> {
        const COMMON_MONTH_CODES: [TinyAsciiStr<4>; 12] = [
            MONTH_ONE,
            MONTH_TWO,
            MONTH_THREE,
            MONTH_FOUR,
            MONTH_FIVE,
            MONTH_SIX,
            MONTH_SEVEN,
            MONTH_EIGHT,
            MONTH_NINE,
            MONTH_TEN,
            MONTH_ELEVEN,
            MONTH_TWELVE,
        ];
        const TISHREI_ORDER: [JewishMonth; 12] = [
            JewishMonth::Tishrei,
            JewishMonth::Cheshvan,
            JewishMonth::Kislev,
            JewishMonth::Teves,
            JewishMonth::Shevat,
            JewishMonth::Adar,
            JewishMonth::Nisan,
            JewishMonth::Iyar,
            JewishMonth::Sivan,
            JewishMonth::Tammuz,
            JewishMonth::Av,
            JewishMonth::Elul,
        ];

        if *code == MONTH_FIVE_LEAP {
            if in_leap_year {
                return Ok(Self::Adar);
            }
            return Err(CalendarError::month().with_message("M05L only exists in leap years."));
        }
        if *code == MONTH_SIX && in_leap_year {
            return Ok(Self::AdarII);
        }
        COMMON_MONTH_CODES
            .iter()
            .position(|c| c == code)
            .map(|i| TISHREI_ORDER[i])
            .ok_or(CalendarError::month().with_message("not a valid Jewish month code."))
    }
}

impl TryFrom<u8> for JewishMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<JewishMonth> for u8 {
    fn from(value: JewishMonth) -> Self {
        value.number()
    }
}

impl fmt::Display for JewishMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.number().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn numbers() {
        assert_eq!(JewishMonth::from_number(1), Ok(JewishMonth::Nisan));
        assert_eq!(JewishMonth::from_number(7), Ok(JewishMonth::Tishrei));
        assert_eq!(JewishMonth::from_number(13), Ok(JewishMonth::AdarII));
        for invalid in [0, 14, 255] {
            assert_eq!(
                JewishMonth::try_from(invalid).map_err(|e| e.kind()),
                Err(ErrorKind::OutOfRangeMonth)
            );
        }
    }

    #[test]
    fn successor_wraps_year_and_adar() {
        assert_eq!(JewishMonth::Elul.succ(false), JewishMonth::Tishrei);
        assert_eq!(JewishMonth::Adar.succ(false), JewishMonth::Nisan);
        assert_eq!(JewishMonth::Adar.succ(true), JewishMonth::AdarII);
        assert_eq!(JewishMonth::AdarII.succ(true), JewishMonth::Nisan);
        assert_eq!(JewishMonth::Tishrei.succ(true), JewishMonth::Cheshvan);
        assert_eq!(JewishMonth::Nisan.succ(true), JewishMonth::Iyar);
    }

    #[test]
    fn predecessor_inverts_successor() {
        for leap in [false, true] {
            for month in JewishMonth::ALL {
                if month == JewishMonth::AdarII && !leap {
                    continue;
                }
                assert_eq!(month.succ(leap).pred(leap), month, "{month:?} {leap}");
            }
        }
    }

    #[test]
    fn month_codes() {
        assert_eq!(JewishMonth::Tishrei.month_code(false), tinystr!(4, "M01"));
        assert_eq!(JewishMonth::Adar.month_code(false), tinystr!(4, "M06"));
        assert_eq!(JewishMonth::Adar.month_code(true), tinystr!(4, "M05L"));
        assert_eq!(JewishMonth::AdarII.month_code(true), tinystr!(4, "M06"));
        assert_eq!(JewishMonth::Elul.month_code(true), tinystr!(4, "M12"));
        for leap in [false, true] {
            for month in JewishMonth::ALL {
                if month == JewishMonth::AdarII && !leap {
                    continue;
                }
                let code = month.month_code(leap);
                assert_eq!(JewishMonth::try_from_month_code(&code, leap), Ok(month));
            }
        }
        assert!(JewishMonth::try_from_month_code(&tinystr!(4, "M05L"), false).is_err());
        assert!(JewishMonth::try_from_month_code(&tinystr!(4, "M13"), true).is_err());
    }
}
