//! The fixed Jewish calendar.
//!
//! The calendar is built bottom up: the [`molad`] of Tishrei is
//! postponed by the [`Dechiya`] rules to give Rosh Hashana, the
//! [`JewishYear`] oracle derives year and month lengths from two
//! consecutive new years, and [`JewishDate`] converts to and from the
//! absolute day count.

pub mod molad;

mod date;
mod dechiyos;
mod month;
mod year;

pub use date::JewishDate;
pub use dechiyos::{Dechiya, Postponement};
pub use molad::{Chalakim, MoladTime};
pub use month::JewishMonth;
pub use year::{JewishYear, Kviah};

/// The Jewish year containing December 31st, 999,999.
pub(crate) const MAX_JEWISH_YEAR: i32 = 1_003_748;
