//! Hebrew Date Calculations
//!
//! This module contains the arithmetic rules of the fixed Hebrew
//! calendar. Time is counted in chalakim (parts): 1080 parts to the
//! hour, 18 parts to the minute. The mean lunar month is 29 days,
//! 12 hours and 793 parts.
//!
//! Months are numbered from Nisan (1) through Adar (12), with Adar II
//! (13) existing only in leap years. The year itself begins on the
//! first of Tishrei (7), so every year-relative quantity below is
//! anchored on Tishrei.
//!
//! Day counts are "elapsed days": the number of days between the
//! reference day of the molad count and the day before Rosh Hashana.
//! An elapsed day `d` falls on weekday `d mod 7`, with 0 for Sunday.

pub const CHALAKIM_PER_MINUTE: i64 = 18;
pub const CHALAKIM_PER_HOUR: i64 = 1080;
pub const CHALAKIM_PER_DAY: i64 = 25_920;
/// 29 days, 12 hours and 793 parts.
pub const CHALAKIM_PER_MONTH: i64 = 765_433;
/// Molad Tohu (BaHaRaD): day 1, 5 hours and 204 parts.
pub const MOLAD_TOHU: i64 = 31_524;
/// The Rata Die offset of elapsed day 0.
pub const HEBREW_EPOCH: i32 = -1_373_429;

pub const NISAN: u8 = 1;
pub const IYAR: u8 = 2;
pub const SIVAN: u8 = 3;
pub const TAMMUZ: u8 = 4;
pub const AV: u8 = 5;
pub const ELUL: u8 = 6;
pub const TISHREI: u8 = 7;
pub const CHESHVAN: u8 = 8;
pub const KISLEV: u8 = 9;
pub const TEVES: u8 = 10;
pub const SHEVAT: u8 = 11;
pub const ADAR: u8 = 12;
pub const ADAR_II: u8 = 13;

/// Postponement flag: the molad is at or after noon.
pub const MOLAD_ZAKEN: u8 = 1 << 0;
/// Postponement flag: a common year whose molad is Tuesday at or after 9h 204p.
pub const GATRAD: u8 = 1 << 1;
/// Postponement flag: a year after a leap year whose molad is Monday at or after 15h 589p.
pub const BETUTAKFOT: u8 = 1 << 2;
/// Postponement flag: Rosh Hashana would fall on Sunday, Wednesday or Friday.
pub const LO_ADU_ROSH: u8 = 1 << 3;

const MOLAD_ZAKEN_PARTS: i64 = 18 * CHALAKIM_PER_HOUR;
const GATRAD_PARTS: i64 = 9 * CHALAKIM_PER_HOUR + 204;
const BETUTAKFOT_PARTS: i64 = 15 * CHALAKIM_PER_HOUR + 589;

/// Returns whether `year` is a leap year, i.e. falls on position 3, 6,
/// 8, 11, 14, 17 or 19 of the 19 year cycle.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    (7 * year as i64 + 1).rem_euclid(19) < 7
}

/// Returns the last month of `year`: Adar II in leap years, otherwise Adar.
#[inline]
pub const fn last_month_of_year(year: i32) -> u8 {
    if is_leap_year(year) {
        ADAR_II
    } else {
        ADAR
    }
}

#[inline]
pub const fn months_in_year(year: i32) -> u8 {
    last_month_of_year(year)
}

/// Maps a Nisan based month number onto its position counted from
/// Tishrei (Tishrei is 1).
#[inline]
pub const fn month_of_year(year: i32, month: u8) -> u8 {
    if is_leap_year(year) {
        (month + 6) % 13 + 1
    } else {
        (month + 5) % 12 + 1
    }
}

/// Returns the number of lunar months between Molad Tohu and the molad
/// of `month` in `year`.
pub const fn months_elapsed(year: i32, month: u8) -> i64 {
    let prior = year as i64 - 1;
    let cycle_year = prior.rem_euclid(19);
    235 * prior.div_euclid(19)
        + 12 * cycle_year
        + (7 * cycle_year + 1) / 19
        + (month_of_year(year, month) as i64 - 1)
}

/// Returns the chalakim from the start of the molad count to the molad
/// of `month` in `year`.
#[inline]
pub const fn chalakim_since_molad_tohu(year: i32, month: u8) -> i64 {
    MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed(year, month)
}

/// Splits a chalakim count into `(day, parts into that day)`.
#[inline]
pub const fn split_chalakim(chalakim: i64) -> (i64, i64) {
    (
        chalakim.div_euclid(CHALAKIM_PER_DAY),
        chalakim.rem_euclid(CHALAKIM_PER_DAY),
    )
}

/// Splits the parts into a day into `(hour, minute, part)`.
#[inline]
pub const fn split_time_of_day(parts: i64) -> (u8, u8, u8) {
    let parts = parts.rem_euclid(CHALAKIM_PER_DAY);
    let hour = parts / CHALAKIM_PER_HOUR;
    let in_hour = parts % CHALAKIM_PER_HOUR;
    (
        hour as u8,
        (in_hour / CHALAKIM_PER_MINUTE) as u8,
        (in_hour % CHALAKIM_PER_MINUTE) as u8,
    )
}

/// Applies the dechiyos to a molad of Tishrei.
///
/// Returns the elapsed days up to Rosh Hashana along with the flags of
/// the postponements that applied. At most one of [`MOLAD_ZAKEN`],
/// [`GATRAD`] and [`BETUTAKFOT`] is set; [`LO_ADU_ROSH`] is evaluated
/// on the possibly postponed day.
///
/// `molad_day` is the day half of [`split_chalakim`], so adding the at
/// most two postponed days cannot overflow.
pub const fn postpone_rosh_hashana(
    molad_day: i64,
    molad_parts: i64,
    is_leap: bool,
    follows_leap: bool,
) -> (i64, u8) {
    let weekday = molad_day.rem_euclid(7);
    let molad_rule = if molad_parts >= MOLAD_ZAKEN_PARTS {
        MOLAD_ZAKEN
    } else if weekday == 2 && molad_parts >= GATRAD_PARTS && !is_leap {
        GATRAD
    } else if weekday == 1 && molad_parts >= BETUTAKFOT_PARTS && follows_leap {
        BETUTAKFOT
    } else {
        0
    };

    let mut day = molad_day;
    if molad_rule != 0 {
        day += 1;
    }
    match day.rem_euclid(7) {
        0 | 3 | 5 => (day + 1, molad_rule | LO_ADU_ROSH),
        _ => (day, molad_rule),
    }
}

/// Returns the postponed Rosh Hashana of `year` as `(elapsed days, flags)`.
pub const fn rosh_hashana(year: i32) -> (i32, u8) {
    let (day, parts) = split_chalakim(chalakim_since_molad_tohu(year, TISHREI));
    let (day, flags) =
        postpone_rosh_hashana(day, parts, is_leap_year(year), is_leap_year(year - 1));
    (day as i32, flags)
}

/// Returns the elapsed days from the start of the count to the day
/// before Rosh Hashana of `year`.
#[inline]
pub const fn elapsed_days(year: i32) -> i32 {
    rosh_hashana(year).0
}

/// Returns the length of `year`: 353, 354, 355, 383, 384 or 385 days.
#[inline]
pub const fn days_in_year(year: i32) -> u16 {
    (elapsed_days(year + 1) - elapsed_days(year)) as u16
}

#[inline]
pub const fn is_cheshvan_long(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

#[inline]
pub const fn is_kislev_short(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

/// Returns the number of days in `month` of `year`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        IYAR | TAMMUZ | ELUL | TEVES | ADAR_II => 29,
        CHESHVAN if !is_cheshvan_long(year) => 29,
        KISLEV if is_kislev_short(year) => 29,
        ADAR if !is_leap_year(year) => 29,
        _ => 30,
    }
}

/// Returns the days of `year` that precede the first of `month`.
pub const fn days_before_month(year: i32, month: u8) -> u16 {
    let mut days = 0;
    let mut m = TISHREI;
    if month < TISHREI {
        let last = last_month_of_year(year);
        while m <= last {
            days += days_in_month(year, m) as u16;
            m += 1;
        }
        m = NISAN;
    }
    while m < month {
        days += days_in_month(year, m) as u16;
        m += 1;
    }
    days
}

/// Calculate the Rata Die for a Hebrew date.
///
/// The month is expected to exist in `year` and the day to be in range.
#[inline]
pub const fn rata_die_from_hebrew_date(year: i32, month: u8, day: u8) -> i32 {
    elapsed_days(year) + days_before_month(year, month) as i32 + day as i32 + HEBREW_EPOCH
}

/// Returns the Rata Die of the first of Tishrei of `year`.
#[inline]
pub const fn rata_die_of_new_year(year: i32) -> i32 {
    elapsed_days(year) + 1 + HEBREW_EPOCH
}

/// Returns the Hebrew year containing `rata_die`.
///
/// The mean year of 35,975,351 / 98,496 days gives an estimate within
/// one year, which is then corrected against the actual new year days.
pub const fn year_from_rata_die(rata_die: i32) -> i32 {
    let since_epoch = (rata_die - HEBREW_EPOCH) as i64;
    let mut year = (since_epoch * 98_496 / 35_975_351) as i32 + 1;
    while year > 1 && rata_die_of_new_year(year) > rata_die {
        year -= 1;
    }
    while rata_die_of_new_year(year + 1) <= rata_die {
        year += 1;
    }
    year
}
