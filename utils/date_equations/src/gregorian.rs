/// Gregorian Date Calculations
///
/// This module contains the proleptic Gregorian leap rule, month
/// lengths, and the conversions between a `(year, month, day)` triple
/// and its Rata Die.
///
/// The forward direction sums whole years and months. The inverse is
/// the closed-form Neri-Schneider algorithm, shifted so that the
/// computational calendar (which begins on March 1st, year 0) lines up
/// with RD 1.
///
/// | Significant Date | Rata Die | Computational Rata Die |
/// | -----------------|----------|------------------------|
/// | January 1, 1 | 1 | 306 |
/// | January 1, 1970 | 719,163 | 719,468 |
/// | December 31, 999,999 | 365,242,134 | 365,242,439 |
///
pub mod neri_schneider;

pub use neri_schneider::ymd_from_rata_die;

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// `month` is expected to be in `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[inline]
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in `year` preceding the first of `month`.
pub const fn days_before_month(year: i32, month: u8) -> u16 {
    let mut days = 0;
    let mut m = 1;
    while m < month {
        days += days_in_month(year, m) as u16;
        m += 1;
    }
    days
}

/// Calculate the Rata Die for a Gregorian date.
///
/// The date is assumed to be valid with a `year` of at least 1.
pub const fn rata_die_from_gregorian_date(year: i32, month: u8, day: u8) -> i32 {
    let prior = year - 1;
    day as i32
        + days_before_month(year, month) as i32
        + 365 * prior
        + prior.div_euclid(4)
        - prior.div_euclid(100)
        + prior.div_euclid(400)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1));
        assert!(is_leap_year(4));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        let total: u16 = (1..=12).map(|m| u16::from(days_in_month(2024, m))).sum();
        assert_eq!(total, days_in_year(2024));
    }

    #[test]
    fn rata_die_reference_dates() {
        assert_eq!(rata_die_from_gregorian_date(1, 1, 1), 1);
        assert_eq!(rata_die_from_gregorian_date(1970, 1, 1), 719_163);
        assert_eq!(rata_die_from_gregorian_date(2000, 1, 1), 730_120);
        assert_eq!(rata_die_from_gregorian_date(2011, 1, 1), 734_138);
        assert_eq!(rata_die_from_gregorian_date(999_999, 12, 31), 365_242_134);
    }

    #[test]
    fn days_before_march() {
        assert_eq!(days_before_month(2023, 3), 59);
        assert_eq!(days_before_month(2024, 3), 60);
        assert_eq!(days_before_month(2024, 1), 0);
    }
}
