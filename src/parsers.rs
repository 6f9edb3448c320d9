//! This module implements parsing of civil date-time strings.
//!
//! Strings follow RFC 9557 / ISO 8601 as read by `ixdtf`:
//! `YYYY-MM-DD`, optionally followed by a wall-clock time
//! `THH:MM[:SS[.fff]]`. The time is validated and then discarded.
//! Offsets, `Z`, and time zone annotations are rejected, and a calendar
//! annotation may only name the Gregorian calendar.

use ixdtf::{
    encoding::Utf8,
    parsers::IxdtfParser,
    records::{DateRecord, IxdtfParseRecord},
    ParseError,
};

use crate::{gregorian::GregorianDate, options::Overflow, CalendarError, CalendarResult};

/// Maps an `ixdtf` `ParseError` to a `CalendarError`.
fn map_parse_error(err: ParseError) -> CalendarError {
    use ParseError::*;
    match err {
        InvalidMonthRange => {
            CalendarError::month().with_message("Month is outside valid range (1-12)")
        }
        InvalidDayRange => CalendarError::day()
            .with_message("Day is outside valid range for the given month/year"),
        DateYear => CalendarError::syntax().with_message("Invalid year format"),
        DateMonth => CalendarError::syntax().with_message("Invalid month format"),
        DateDay => CalendarError::syntax().with_message("Invalid day format"),
        TimeHour => CalendarError::syntax().with_message("Invalid hour format"),
        TimeMinuteSecond => {
            CalendarError::syntax().with_message("Invalid minute or second format")
        }
        TimeSecond => CalendarError::syntax().with_message("Invalid second format"),
        FractionPart => CalendarError::syntax().with_message("Invalid fractional seconds format"),
        InvalidEnd => CalendarError::syntax().with_message("Unexpected character at end of input"),
        AbruptEnd { .. } => CalendarError::syntax().with_message("Unexpected end of input"),
        _ => CalendarError::syntax().with_message("Invalid date-time string"),
    }
}

fn parse_ixdtf(source: &[u8]) -> CalendarResult<IxdtfParseRecord<'_, Utf8>> {
    let record = IxdtfParser::from_utf8(source)
        .parse()
        .map_err(map_parse_error)?;

    if record.offset.is_some() {
        return Err(CalendarError::syntax()
            .with_message("UTC offsets and the UTC designator are not supported."));
    }
    if record.tz.is_some() {
        return Err(
            CalendarError::syntax().with_message("Time zone annotations are not supported.")
        );
    }
    if let Some(calendar) = record.calendar {
        if calendar != b"gregory" && calendar != b"iso8601" {
            return Err(CalendarError::syntax()
                .with_message("Only the Gregorian calendar annotation is supported."));
        }
    }

    Ok(record)
}

fn date_from_record(record: DateRecord) -> CalendarResult<GregorianDate> {
    GregorianDate::new_with_overflow(record.year, record.month, record.day, Overflow::Reject)
}

/// Parses a civil date, with an optional wall-clock time, into a
/// `GregorianDate`.
///
/// ```rust
/// use luach_rs::parsers::parse_civil_date;
///
/// let date = parse_civil_date(b"2011-01-01T18:30").unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2011, 1, 1));
/// assert!(parse_civil_date(b"2011-01-01T18:30Z").is_err());
/// ```
pub fn parse_civil_date(source: &[u8]) -> CalendarResult<GregorianDate> {
    let record = parse_ixdtf(source)?;
    let date = record
        .date
        .ok_or(CalendarError::syntax().with_message("Date-time strings must contain a date."))?;
    date_from_record(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn kind(source: &str) -> ErrorKind {
        parse_civil_date(source.as_bytes()).unwrap_err().kind()
    }

    #[test]
    fn dates_and_times() {
        let date = parse_civil_date(b"2024-04-23").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 4, 23));
        let date = parse_civil_date(b"2024-04-23T23:59:59.5").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 4, 23));
        let date = parse_civil_date(b"20240423T0830").unwrap();
        assert_eq!(date.day(), 23);
        let date = parse_civil_date(b"+999999-12-31").unwrap();
        assert_eq!(date.year(), 999_999);
        let date = parse_civil_date(b"2024-04-23[u-ca=gregory]").unwrap();
        assert_eq!(date.month(), 4);
    }

    #[test]
    fn rejects_zones_and_offsets() {
        assert_eq!(kind("2024-04-23T10:00Z"), ErrorKind::Syntax);
        assert_eq!(kind("2024-04-23T10:00+02:00"), ErrorKind::Syntax);
        assert_eq!(kind("2024-04-23T10:00[Asia/Jerusalem]"), ErrorKind::Syntax);
        assert_eq!(kind("2024-04-23[u-ca=hebrew]"), ErrorKind::Syntax);
    }

    #[test]
    fn rejects_invalid_components() {
        assert!(parse_civil_date(b"2024-13-01").is_err());
        assert!(parse_civil_date(b"2023-02-29").is_err());
        assert!(parse_civil_date(b"2024-04-23T25:00").is_err());
        assert_eq!(kind("0000-01-01"), ErrorKind::OutOfRangeYear);
        assert_eq!(kind("not a date"), ErrorKind::Syntax);
    }
}
