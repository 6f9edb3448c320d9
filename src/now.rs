//! The `luach_rs` Now component

use num_traits::ToPrimitive;

use crate::{host::HostClock, AbsoluteDate, CalendarDate, CalendarError, CalendarResult};

/// The absolute day of 1970-01-01.
const UNIX_EPOCH_ABSOLUTE_DAY: i32 = 719_163;
const MILLISECONDS_PER_DAY: i64 = 86_400_000;

/// Access to the current date.
///
/// The host clock counts from the Unix epoch in UTC, and the current day
/// is taken in UTC as well. Time zones are out of scope.
pub struct Now;

impl Now {
    /// Returns the current `AbsoluteDate` of the provided clock.
    pub fn absolute_with_clock(clock: &impl HostClock) -> CalendarResult<AbsoluteDate> {
        let milliseconds = clock.get_host_epoch_milliseconds()?;
        let day = milliseconds
            .div_euclid(MILLISECONDS_PER_DAY)
            .to_i32()
            .and_then(|days| days.checked_add(UNIX_EPOCH_ABSOLUTE_DAY))
            .ok_or(CalendarError::year().with_message("host clock is out of range."))?;
        AbsoluteDate::try_new(day)
    }

    /// Returns the current `CalendarDate` of the provided clock.
    ///
    /// ```rust
    /// use luach_rs::Now;
    ///
    /// // The unit clock is fixed at the Unix epoch.
    /// let date = Now::calendar_date_with_clock(&()).unwrap();
    /// assert_eq!(date.gregorian().to_string(), "1970-01-01");
    /// ```
    pub fn calendar_date_with_clock(clock: &impl HostClock) -> CalendarResult<CalendarDate> {
        Self::absolute_with_clock(clock).map(CalendarDate::from_absolute)
    }
}

#[cfg(feature = "sys")]
impl Now {
    /// Returns today's `CalendarDate` from the system clock.
    ///
    /// Enable with the `sys` feature flag.
    pub fn calendar_date() -> CalendarResult<CalendarDate> {
        Self::calendar_date_with_clock(&crate::sys::SystemClock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, JewishMonth};
    use alloc::string::ToString;

    struct FixedClock(i64);

    impl HostClock for FixedClock {
        fn get_host_epoch_milliseconds(&self) -> CalendarResult<i64> {
            Ok(self.0)
        }
    }

    #[test]
    fn unix_epoch() {
        let date = Now::calendar_date_with_clock(&()).unwrap();
        assert_eq!(date.absolute().as_i32(), UNIX_EPOCH_ABSOLUTE_DAY);
        assert_eq!(date.gregorian_year(), 1970);
    }

    #[test]
    fn fixed_clock() {
        // 2024-10-03T12:00:00Z, Rosh Hashana 5785.
        let date = Now::calendar_date_with_clock(&FixedClock(1_727_956_800_000)).unwrap();
        assert_eq!(date.jewish_year(), 5785);
        assert_eq!(date.jewish_month(), JewishMonth::Tishrei);
        assert_eq!(date.jewish_day(), 1);

        // A millisecond before the epoch is still the previous day.
        let date = Now::calendar_date_with_clock(&FixedClock(-1)).unwrap();
        assert_eq!(date.gregorian().to_string(), "1969-12-31");
    }

    #[test]
    fn out_of_range_clock() {
        let err = Now::calendar_date_with_clock(&FixedClock(i64::MIN)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRangeYear);
        let err = Now::calendar_date_with_clock(&FixedClock(-62_135_596_800_001)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DateBeforeEpoch);
    }

    #[cfg(feature = "sys")]
    #[test]
    fn system_clock() {
        let today = Now::calendar_date().unwrap();
        assert!(today.gregorian_year() >= 2024);
    }
}
