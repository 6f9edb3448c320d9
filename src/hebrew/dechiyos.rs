//! The dechiyos: postponements from the molad of Tishrei to the day
//! Rosh Hashana actually falls on.

use date_equations::hebrew;
use num_traits::ToPrimitive;

use super::molad::Chalakim;
use crate::{CalendarError, CalendarResult};

/// A postponement rule for Rosh Hashana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dechiya {
    /// The molad is at or after noon.
    MoladZaken,
    /// The molad of a common year is on a Tuesday at or after 9 hours and 204 parts.
    GaTRaD,
    /// The molad of a year following a leap year is on a Monday at or
    /// after 15 hours and 589 parts.
    BeTuTaKFoT,
    /// Rosh Hashana may not fall on a Sunday, Wednesday or Friday.
    LoAduRosh,
}

/// The result of applying the dechiyos to a molad of Tishrei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Postponement {
    elapsed_days: i32,
    rule: Option<Dechiya>,
    lo_adu_rosh: bool,
}

impl Postponement {
    /// Applies the dechiyos to the molad of Tishrei of a year.
    ///
    /// `is_leap` is the leap status of the year itself and `follows_leap`
    /// that of the year before it. A molad whose postponed day does not
    /// fit the elapsed day count returns an `OutOfRangeYear` error.
    pub fn resolve(molad: Chalakim, is_leap: bool, follows_leap: bool) -> CalendarResult<Self> {
        let (elapsed_days, flags) = hebrew::postpone_rosh_hashana(
            molad.days(),
            molad.parts_of_day(),
            is_leap,
            follows_leap,
        );
        let elapsed_days = elapsed_days.to_i32().ok_or(
            CalendarError::year().with_message("molad is outside the supported range."),
        )?;
        Ok(Self::from_flags(elapsed_days, flags))
    }

    /// Returns the postponement of Rosh Hashana for `year`.
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        let (elapsed_days, flags) = hebrew::rosh_hashana(year);
        Self::from_flags(elapsed_days, flags)
    }

    fn from_flags(elapsed_days: i32, flags: u8) -> Self {
        let rule = if flags & hebrew::MOLAD_ZAKEN != 0 {
            Some(Dechiya::MoladZaken)
        } else if flags & hebrew::GATRAD != 0 {
            Some(Dechiya::GaTRaD)
        } else if flags & hebrew::BETUTAKFOT != 0 {
            Some(Dechiya::BeTuTaKFoT)
        } else {
            None
        };
        Self {
            elapsed_days,
            rule,
            lo_adu_rosh: flags & hebrew::LO_ADU_ROSH != 0,
        }
    }

    /// Returns the elapsed days up to the day before Rosh Hashana.
    #[inline]
    #[must_use]
    pub const fn elapsed_days(&self) -> i32 {
        self.elapsed_days
    }

    /// Returns which of Molad Zaken, GaTRaD or BeTuTaKFoT applied, if any.
    #[inline]
    #[must_use]
    pub const fn rule(&self) -> Option<Dechiya> {
        self.rule
    }

    /// Returns whether Lo ADU Rosh postponed the day.
    #[inline]
    #[must_use]
    pub const fn lo_adu_rosh(&self) -> bool {
        self.lo_adu_rosh
    }

    /// Returns the number of days Rosh Hashana moved from the molad.
    #[inline]
    #[must_use]
    pub const fn days_postponed(&self) -> u8 {
        self.rule.is_some() as u8 + self.lo_adu_rosh as u8
    }

    /// Returns every dechiya that applied, in the order they are evaluated.
    pub fn dechiyos(&self) -> impl Iterator<Item = Dechiya> {
        self.rule
            .into_iter()
            .chain(self.lo_adu_rosh.then_some(Dechiya::LoAduRosh))
    }
}
