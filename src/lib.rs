//! The `luach_rs` crate is an exact, integer based converter between
//! the proleptic Gregorian calendar and the fixed Jewish calendar.
//!
//! ```rust
//! use luach_rs::{CalendarDate, JewishMonth, Weekday};
//!
//! // Create a date from the Gregorian calendar
//! let date = CalendarDate::try_from_gregorian(2011, 1, 1).unwrap();
//! assert_eq!(date.jewish_year(), 5771);
//! assert_eq!(date.jewish_month(), JewishMonth::Teves);
//! assert_eq!(date.jewish_day(), 25);
//! assert_eq!(date.day_of_week(), Weekday::Saturday);
//!
//! // And from the Jewish calendar
//! let pesach = CalendarDate::try_from_jewish(5784, JewishMonth::Nisan, 15).unwrap();
//! assert_eq!(pesach.gregorian().to_string(), "2024-04-23");
//! ```
//!
//! Every date is carried as an [`AbsoluteDate`], a day count where day 1
//! is January 1st of year 1. Both calendars convert to and from that
//! count, and [`CalendarDate`] keeps the two in sync while it is moved
//! forward or back.
//!
//! The months of a Jewish year are computed from first principles: the
//! molad (mean conjunction) of Tishrei, counted in chalakim since Molad
//! Tohu, is postponed by the dechiyos to give the day of Rosh Hashana,
//! and the year and month lengths follow from the distance between two
//! consecutive new years. See [`JewishYear`] and [`molad`].
//!
//! ## Crate features
//!
//! - `std`: implements `std::error::Error` for [`CalendarError`].
//! - `sys` (default): reads the system clock, enabling [`Now::calendar_date`].
//! - `log`: reports failed internal invariants through the `log` crate.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // Day and month values are range checked before they are narrowed.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod host;
pub mod options;
pub mod parsers;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod absolute;
mod calendar;
mod gregorian;
mod hebrew;
mod now;

#[doc(inline)]
pub use error::{CalendarError, ErrorKind};

/// The `luach_rs` result type
pub type CalendarResult<T> = Result<T, CalendarError>;

pub use crate::{
    absolute::{AbsoluteDate, Weekday},
    calendar::CalendarDate,
    gregorian::GregorianDate,
    hebrew::{
        molad, Chalakim, Dechiya, JewishDate, JewishMonth, JewishYear, Kviah, MoladTime,
        Postponement,
    },
    now::Now,
    options::{Overflow, Unit},
};

#[cfg(feature = "sys")]
pub use crate::sys::SystemClock;

/// A library specific trait for unwrapping assertions.
pub(crate) trait CalendarUnwrap {
    type Output;

    /// `luach_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error during runtime.
    fn calendar_unwrap(self) -> CalendarResult<Self::Output>;
}

impl<T> CalendarUnwrap for Option<T> {
    type Output = T;

    fn calendar_unwrap(self) -> CalendarResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(CalendarError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! luach_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::CalendarError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::CalendarError::assert());
        }
    };
}
