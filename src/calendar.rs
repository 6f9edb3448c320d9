//! This module implements `CalendarDate`, one absolute day seen through
//! both the Gregorian and the Jewish calendar.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use date_equations::hebrew::HEBREW_EPOCH;
use num_traits::ToPrimitive;
use tinystr::TinyAsciiStr;

use crate::{
    hebrew::{molad, MAX_JEWISH_YEAR},
    host::HostClock,
    luach_assert, parsers, AbsoluteDate, CalendarError, CalendarResult, CalendarUnwrap, Chalakim,
    GregorianDate, JewishDate, JewishMonth, JewishYear, Kviah, MoladTime, Now, Overflow, Unit,
    Weekday,
};


/// A date held in both calendars at once.
///
/// A `CalendarDate` binds an [`AbsoluteDate`] to its [`GregorianDate`],
/// its [`JewishDate`] and its [`Weekday`]. Every constructor and mutator
/// keeps the four in agreement, and a mutator that fails leaves the date
/// unchanged.
///
/// A date built from a molad also carries the [`MoladTime`] of the
/// conjunction. The molad time takes no part in equality, ordering or
/// hashing, which only look at the absolute day.
///
/// ```rust
/// use luach_rs::{CalendarDate, JewishMonth, Unit};
///
/// let mut date = CalendarDate::try_from_jewish(5784, JewishMonth::Elul, 29).unwrap();
/// date.forward(Unit::Day, 1).unwrap();
/// assert_eq!(date.jewish().to_string(), "5785-M01-01");
/// assert_eq!(date.gregorian().to_string(), "2024-10-03");
///
/// date.back().unwrap();
/// assert_eq!(date.jewish_month(), JewishMonth::Elul);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CalendarDate {
    absolute: AbsoluteDate,
    gregorian: GregorianDate,
    jewish: JewishDate,
    weekday: Weekday,
    molad_time: Option<MoladTime>,
}

// ==== Constructors ====

impl CalendarDate {
    /// Creates the `CalendarDate` of an `AbsoluteDate`.
    #[must_use]
    pub fn from_absolute(absolute: AbsoluteDate) -> Self {
        Self {
            absolute,
            gregorian: GregorianDate::from_absolute(absolute),
            jewish: JewishDate::from_absolute(absolute),
            weekday: absolute.day_of_week(),
            molad_time: None,
        }
    }

    /// Creates a `CalendarDate` from a raw absolute day.
    #[inline]
    pub fn try_from_absolute(day: i32) -> CalendarResult<Self> {
        AbsoluteDate::try_new(day).map(Self::from_absolute)
    }

    #[must_use]
    pub fn from_gregorian(gregorian: GregorianDate) -> Self {
        let absolute = gregorian.to_absolute();
        Self {
            absolute,
            gregorian,
            jewish: JewishDate::from_absolute(absolute),
            weekday: absolute.day_of_week(),
            molad_time: None,
        }
    }

    #[must_use]
    pub fn from_jewish(jewish: JewishDate) -> Self {
        let absolute = jewish.to_absolute();
        Self {
            absolute,
            gregorian: GregorianDate::from_absolute(absolute),
            jewish,
            weekday: absolute.day_of_week(),
            molad_time: None,
        }
    }

    /// Creates a `CalendarDate` from a Gregorian year, month and day,
    /// clamping the day to the end of the month.
    #[inline]
    pub fn try_from_gregorian(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        Self::try_from_gregorian_with_overflow(year, month, day, Overflow::Constrain)
    }

    pub fn try_from_gregorian_with_overflow(
        year: i32,
        month: u8,
        day: u8,
        overflow: Overflow,
    ) -> CalendarResult<Self> {
        GregorianDate::new_with_overflow(year, month, day, overflow).map(Self::from_gregorian)
    }

    /// Creates a `CalendarDate` from a Jewish year, month and day,
    /// clamping the day to the end of the month.
    ///
    /// ```rust
    /// use luach_rs::{CalendarDate, JewishMonth};
    ///
    /// // Iyar has 29 days.
    /// let date = CalendarDate::try_from_jewish(5784, JewishMonth::Iyar, 30).unwrap();
    /// assert_eq!(date.jewish_day(), 29);
    /// ```
    #[inline]
    pub fn try_from_jewish(year: i32, month: JewishMonth, day: u8) -> CalendarResult<Self> {
        Self::try_from_jewish_with_overflow(year, month, day, Overflow::Constrain)
    }

    pub fn try_from_jewish_with_overflow(
        year: i32,
        month: JewishMonth,
        day: u8,
        overflow: Overflow,
    ) -> CalendarResult<Self> {
        JewishDate::new_with_overflow(year, month, day, overflow).map(Self::from_jewish)
    }

    /// Creates a `CalendarDate` from a Jewish date with a molad time of
    /// day attached.
    pub fn try_from_jewish_with_molad_time(
        year: i32,
        month: JewishMonth,
        day: u8,
        hour: u8,
        minute: u8,
        part: u8,
    ) -> CalendarResult<Self> {
        let molad_time = MoladTime::try_new(hour, minute, part)?;
        let mut date = Self::try_from_jewish(year, month, day)?;
        date.molad_time = Some(molad_time);
        Ok(date)
    }

    /// Creates a `CalendarDate` from a count of chalakim since the start
    /// of the molad count.
    ///
    /// The date is the day the chalakim fall on, and the remaining
    /// chalakim are kept as the molad time.
    pub fn from_molad(chalakim: Chalakim) -> CalendarResult<Self> {
        let (days, time) = molad::split_chalakim(chalakim);
        let day = days
            .to_i32()
            .and_then(|days| days.checked_add(HEBREW_EPOCH))
            .ok_or(CalendarError::year().with_message("molad is outside the supported range."))?;
        let mut date = Self::try_from_absolute(day)?;
        date.molad_time = Some(time);
        Ok(date)
    }

    /// Parses a `CalendarDate` from a civil date, with an optional
    /// wall-clock time, e.g. `2011-01-01` or `2011-01-01T18:30`.
    #[inline]
    pub fn from_utf8(source: &[u8]) -> CalendarResult<Self> {
        parsers::parse_civil_date(source).map(Self::from_gregorian)
    }

    /// Creates today's `CalendarDate` from the provided clock.
    #[inline]
    pub fn now_with_clock(clock: &impl HostClock) -> CalendarResult<Self> {
        Now::calendar_date_with_clock(clock)
    }

    /// Creates today's `CalendarDate` from the system clock.
    ///
    /// Enable with the `sys` feature flag.
    #[cfg(feature = "sys")]
    #[inline]
    pub fn now() -> CalendarResult<Self> {
        Now::calendar_date()
    }
}

// ==== Queries ====

impl CalendarDate {
    #[inline]
    #[must_use]
    pub const fn absolute(&self) -> AbsoluteDate {
        self.absolute
    }

    #[inline]
    #[must_use]
    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    #[inline]
    #[must_use]
    pub const fn jewish(&self) -> JewishDate {
        self.jewish
    }

    /// Returns the day of the week, Sunday being 1.
    #[inline]
    #[must_use]
    pub const fn day_of_week(&self) -> Weekday {
        self.weekday
    }

    /// Returns the molad time of day, if this date was built from a molad.
    #[inline]
    #[must_use]
    pub const fn molad_time(&self) -> Option<MoladTime> {
        self.molad_time
    }

    #[inline]
    #[must_use]
    pub const fn gregorian_year(&self) -> i32 {
        self.gregorian.year()
    }

    #[inline]
    #[must_use]
    pub const fn gregorian_month(&self) -> u8 {
        self.gregorian.month()
    }

    #[inline]
    #[must_use]
    pub const fn gregorian_day(&self) -> u8 {
        self.gregorian.day()
    }

    #[inline]
    #[must_use]
    pub fn is_gregorian_leap_year(&self) -> bool {
        self.gregorian.is_leap_year()
    }

    #[inline]
    #[must_use]
    pub fn days_in_gregorian_month(&self) -> u8 {
        self.gregorian.days_in_month()
    }

    #[inline]
    #[must_use]
    pub fn days_in_gregorian_year(&self) -> u16 {
        self.gregorian.days_in_year()
    }

    #[inline]
    #[must_use]
    pub const fn jewish_year(&self) -> i32 {
        self.jewish.year()
    }

    #[inline]
    #[must_use]
    pub const fn jewish_month(&self) -> JewishMonth {
        self.jewish.month()
    }

    #[inline]
    #[must_use]
    pub const fn jewish_day(&self) -> u8 {
        self.jewish.day()
    }

    /// Returns the month code of the Jewish month, e.g. `M05L` for Adar I.
    #[inline]
    #[must_use]
    pub fn jewish_month_code(&self) -> TinyAsciiStr<4> {
        self.jewish.month().month_code(self.is_jewish_leap_year())
    }

    /// Returns the `JewishYear` oracle of this date's year.
    #[inline]
    #[must_use]
    pub const fn jewish_calendar_year(&self) -> JewishYear {
        self.jewish.jewish_year()
    }

    #[inline]
    #[must_use]
    pub const fn is_jewish_leap_year(&self) -> bool {
        self.jewish.is_leap_year()
    }

    #[inline]
    #[must_use]
    pub const fn days_in_jewish_year(&self) -> u16 {
        self.jewish_calendar_year().days_in_year()
    }

    #[inline]
    #[must_use]
    pub fn days_in_jewish_month(&self) -> u8 {
        self.jewish.days_in_month()
    }

    #[inline]
    #[must_use]
    pub const fn is_cheshvan_long(&self) -> bool {
        self.jewish_calendar_year().is_cheshvan_long()
    }

    #[inline]
    #[must_use]
    pub const fn is_kislev_short(&self) -> bool {
        self.jewish_calendar_year().is_kislev_short()
    }

    #[inline]
    #[must_use]
    pub const fn kviah(&self) -> Kviah {
        self.jewish_calendar_year().kviah()
    }

    /// Returns the chalakim from the start of the molad count to the
    /// molad of this date's Jewish month.
    #[inline]
    #[must_use]
    pub fn chalakim_since_molad_tohu(&self) -> Chalakim {
        molad::chalakim_since_molad_tohu(self.jewish.year(), self.jewish.month())
    }

    /// Returns the day of the Jewish year, 1 Tishrei being 1.
    #[inline]
    #[must_use]
    pub fn days_since_start_of_jewish_year(&self) -> u16 {
        self.jewish.days_since_start_of_year()
    }

    /// Returns the molad of this date's Jewish month.
    ///
    /// The molad day begins at 18:00 of the previous civil evening. A
    /// molad at hour 6 or later is moved onto the following civil day,
    /// and the hour is rebased onto the civil clock.
    ///
    /// The molad of Teves 3761 falls before January 1st of year 1, so
    /// the dates from 18 to 29 Teves 3761 return a `DateBeforeEpoch`
    /// error.
    ///
    /// ```rust
    /// use luach_rs::{CalendarDate, JewishMonth};
    ///
    /// let date = CalendarDate::try_from_jewish(5785, JewishMonth::Tishrei, 10).unwrap();
    /// let molad = date.molad().unwrap();
    /// assert_eq!(molad.gregorian().to_string(), "2024-10-03");
    /// assert_eq!(molad.molad_time().unwrap().to_string(), "03:21 13p");
    /// ```
    pub fn molad(&self) -> CalendarResult<Self> {
        let mut molad = Self::from_molad(self.chalakim_since_molad_tohu())?;
        let time = molad.molad_time.calendar_unwrap()?;
        if time.hour() >= 6 {
            molad = molad.next_day()?;
        }
        molad.molad_time = Some(time.to_civil_hour());
        Ok(molad)
    }
}

// ==== Mutators ====

impl CalendarDate {
    pub fn set_absolute(&mut self, absolute: AbsoluteDate) {
        *self = Self::from_absolute(absolute);
    }

    #[inline]
    pub fn set_gregorian_date(&mut self, year: i32, month: u8, day: u8) -> CalendarResult<()> {
        self.set_gregorian_date_with_overflow(year, month, day, Overflow::Constrain)
    }

    pub fn set_gregorian_date_with_overflow(
        &mut self,
        year: i32,
        month: u8,
        day: u8,
        overflow: Overflow,
    ) -> CalendarResult<()> {
        *self = Self::try_from_gregorian_with_overflow(year, month, day, overflow)?;
        Ok(())
    }

    pub fn set_gregorian_year(&mut self, year: i32) -> CalendarResult<()> {
        self.set_gregorian_date(year, self.gregorian_month(), self.gregorian_day())
    }

    pub fn set_gregorian_month(&mut self, month: u8) -> CalendarResult<()> {
        self.set_gregorian_date(self.gregorian_year(), month, self.gregorian_day())
    }

    pub fn set_gregorian_day(&mut self, day: u8) -> CalendarResult<()> {
        self.set_gregorian_date(self.gregorian_year(), self.gregorian_month(), day)
    }

    #[inline]
    pub fn set_jewish_date(&mut self, year: i32, month: JewishMonth, day: u8) -> CalendarResult<()> {
        self.set_jewish_date_with_overflow(year, month, day, Overflow::Constrain)
    }

    pub fn set_jewish_date_with_overflow(
        &mut self,
        year: i32,
        month: JewishMonth,
        day: u8,
        overflow: Overflow,
    ) -> CalendarResult<()> {
        *self = Self::try_from_jewish_with_overflow(year, month, day, overflow)?;
        Ok(())
    }

    pub fn set_jewish_date_with_molad_time(
        &mut self,
        year: i32,
        month: JewishMonth,
        day: u8,
        hour: u8,
        minute: u8,
        part: u8,
    ) -> CalendarResult<()> {
        *self = Self::try_from_jewish_with_molad_time(year, month, day, hour, minute, part)?;
        Ok(())
    }

    /// Sets the Jewish year, keeping the month and day.
    ///
    /// Adar II is rejected with `OutOfRangeMonth` when the new year is a
    /// common year.
    pub fn set_jewish_year(&mut self, year: i32) -> CalendarResult<()> {
        self.set_jewish_date(year, self.jewish_month(), self.jewish_day())
    }

    pub fn set_jewish_month(&mut self, month: JewishMonth) -> CalendarResult<()> {
        self.set_jewish_date(self.jewish_year(), month, self.jewish_day())
    }

    pub fn set_jewish_day(&mut self, day: u8) -> CalendarResult<()> {
        self.set_jewish_date(self.jewish_year(), self.jewish_month(), day)
    }

    pub fn set_molad(&mut self, chalakim: Chalakim) -> CalendarResult<()> {
        *self = Self::from_molad(chalakim)?;
        Ok(())
    }

    /// Sets this date to today according to the provided clock.
    pub fn set_now_with_clock(&mut self, clock: &impl HostClock) -> CalendarResult<()> {
        *self = Self::now_with_clock(clock)?;
        Ok(())
    }

    /// Sets this date to today according to the system clock.
    ///
    /// Enable with the `sys` feature flag.
    #[cfg(feature = "sys")]
    pub fn set_now(&mut self) -> CalendarResult<()> {
        *self = Self::now()?;
        Ok(())
    }

    /// Moves this date forward by `amount` of `unit`.
    ///
    /// - `Unit::Day` steps one day at a time, carrying month and year
    ///   boundaries in both calendars. The molad time is kept.
    /// - `Unit::Month` advances the Jewish month, rolling Elul into
    ///   Tishrei of the next year and passing through Adar II only in
    ///   leap years.
    /// - `Unit::Year` advances the Jewish year. Adar II becomes Adar when
    ///   the new year is a common year.
    ///
    /// For months and years the original day of the month is clamped once
    /// to the length of the resulting month, and the molad time is cleared.
    ///
    /// An `amount` below 1 is an `UnsupportedUnit` error. Moving past
    /// December 31st, 999,999 is an `OutOfRangeYear` error.
    ///
    /// ```rust
    /// use luach_rs::{CalendarDate, JewishMonth, Unit};
    ///
    /// let mut date = CalendarDate::try_from_jewish(5784, JewishMonth::Adar, 30).unwrap();
    /// date.forward(Unit::Month, 1).unwrap();
    /// assert_eq!((date.jewish_month(), date.jewish_day()), (JewishMonth::AdarII, 29));
    /// ```
    pub fn forward(&mut self, unit: Unit, amount: i32) -> CalendarResult<()> {
        if amount < 1 {
            return Err(CalendarError::unsupported_unit()
                .with_message("forward amount must be 1 or greater."));
        }
        *self = match unit {
            Unit::Day => self.forward_days(amount)?,
            Unit::Month => self.forward_months(amount)?,
            Unit::Year => self.forward_years(amount)?,
        };
        Ok(())
    }

    /// Moves this date back by a single day.
    ///
    /// Moving before January 1st, 1 is a `DateBeforeEpoch` error.
    pub fn back(&mut self) -> CalendarResult<()> {
        *self = self.previous_day()?;
        Ok(())
    }

    fn forward_days(&self, amount: i32) -> CalendarResult<Self> {
        let mut date = *self;
        for _ in 0..amount {
            date = date.next_day()?;
        }
        luach_assert!(
            date.jewish.to_absolute() == date.absolute
                && date.gregorian.to_absolute() == date.absolute,
            "day stepping drifted from absolute day {}",
            date.absolute
        );
        Ok(date)
    }

    fn forward_months(&self, amount: i32) -> CalendarResult<Self> {
        let (mut year, mut month) = (self.jewish.year(), self.jewish.month());
        for _ in 0..amount {
            if month == JewishMonth::Elul {
                year += 1;
                if year > MAX_JEWISH_YEAR {
                    return Err(CalendarError::year()
                        .with_message("date is after December 31st, 999,999."));
                }
            }
            month = month.succ(JewishYear::new_unchecked(year).is_leap());
        }
        Self::try_from_jewish(year, month, self.jewish.day())
    }

    fn forward_years(&self, amount: i32) -> CalendarResult<Self> {
        let year = self
            .jewish
            .year()
            .checked_add(amount)
            .filter(|year| *year <= MAX_JEWISH_YEAR)
            .ok_or(CalendarError::year().with_message("date is after December 31st, 999,999."))?;
        let month = match self.jewish.month() {
            JewishMonth::AdarII if !JewishYear::new_unchecked(year).is_leap() => JewishMonth::Adar,
            month => month,
        };
        Self::try_from_jewish(year, month, self.jewish.day())
    }

    fn next_day(&self) -> CalendarResult<Self> {
        let absolute = self
            .absolute
            .checked_next()
            .ok_or(CalendarError::year().with_message("date is after December 31st, 999,999."))?;
        Ok(Self {
            absolute,
            gregorian: self.gregorian.next_day()?,
            jewish: self.jewish.next_day(),
            weekday: self.weekday.succ(),
            molad_time: self.molad_time,
        })
    }

    fn previous_day(&self) -> CalendarResult<Self> {
        let absolute = self
            .absolute
            .checked_previous()
            .ok_or(CalendarError::before_epoch())?;
        Ok(Self {
            absolute,
            gregorian: self.gregorian.previous_day()?,
            jewish: self.jewish.previous_day(),
            weekday: self.weekday.pred(),
            molad_time: self.molad_time,
        })
    }
}

// ==== Trait impls ====

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute
    }
}

impl Eq for CalendarDate {}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute.hash(state);
    }
}

impl From<AbsoluteDate> for CalendarDate {
    fn from(value: AbsoluteDate) -> Self {
        Self::from_absolute(value)
    }
}

impl From<GregorianDate> for CalendarDate {
    fn from(value: GregorianDate) -> Self {
        Self::from_gregorian(value)
    }
}

impl From<JewishDate> for CalendarDate {
    fn from(value: JewishDate) -> Self {
        Self::from_jewish(value)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_utf8(s.as_bytes())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.gregorian, self.jewish)?;
        if let Some(time) = self.molad_time {
            write!(f, " {time}")?;
        }
        Ok(())
    }
}
