//! This module implements `CalendarError`.

use core::fmt;

/// `CalendarError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// SyntaxError
    Syntax,
    /// An internal invariant did not hold.
    Assert,
    /// Year outside of the supported range.
    OutOfRangeYear,
    /// Month outside of `1..=12`, or outside the months of a Jewish year.
    OutOfRangeMonth,
    /// Day below 1 or above the calendar's longest month.
    OutOfRangeDay,
    OutOfRangeHour,
    OutOfRangeMinute,
    /// Chalakim outside of `0..=17` within a minute.
    OutOfRangePart,
    /// A Jewish date earlier than 18 Teves 3761.
    DateBeforeEpoch,
    /// An unknown unit or a non-positive amount was given to `forward`.
    UnsupportedUnit,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
            Self::OutOfRangeYear => "OutOfRangeYear",
            Self::OutOfRangeMonth => "OutOfRangeMonth",
            Self::OutOfRangeDay => "OutOfRangeDay",
            Self::OutOfRangeHour => "OutOfRangeHour",
            Self::OutOfRangeMinute => "OutOfRangeMinute",
            Self::OutOfRangePart => "OutOfRangePart",
            Self::DateBeforeEpoch => "DateBeforeEpoch",
            Self::UnsupportedUnit => "UnsupportedUnit",
        }
        .fmt(f)
    }
}

/// The error type for `luach_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarError {
    kind: ErrorKind,
    msg: &'static str,
}

impl CalendarError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self { kind, msg: "" }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub const fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    pub(crate) const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
            .with_message("Implementation error: invariant was not upheld.")
    }

    #[inline]
    #[must_use]
    pub const fn year() -> Self {
        Self::new(ErrorKind::OutOfRangeYear)
    }

    #[inline]
    #[must_use]
    pub const fn month() -> Self {
        Self::new(ErrorKind::OutOfRangeMonth)
    }

    #[inline]
    #[must_use]
    pub const fn day() -> Self {
        Self::new(ErrorKind::OutOfRangeDay)
    }

    #[inline]
    #[must_use]
    pub const fn hour() -> Self {
        Self::new(ErrorKind::OutOfRangeHour)
    }

    #[inline]
    #[must_use]
    pub const fn minute() -> Self {
        Self::new(ErrorKind::OutOfRangeMinute)
    }

    #[inline]
    #[must_use]
    pub const fn part() -> Self {
        Self::new(ErrorKind::OutOfRangePart)
    }

    #[inline]
    #[must_use]
    pub const fn before_epoch() -> Self {
        Self::new(ErrorKind::DateBeforeEpoch).with_message(
            "A Jewish date earlier than 18 Teves 3761 (January 1st, 1) cannot be set.",
        )
    }

    #[inline]
    #[must_use]
    pub const fn unsupported_unit() -> Self {
        Self::new(ErrorKind::UnsupportedUnit)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub const fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CalendarError {}
