//! ISO-8601 subset parsing and writing.
//!
//! The interchange contract is the subset `YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
//! `YYYY-MM-DDTHH:mm[:ss[.fff...]][Z|±HH[:mm]]`, plus the time-only forms
//! `HH:mm` and `HH:mm:ss`. Fields absent from the input stay absent in the
//! record; defaulting is the range resolver's job, not parsing's.
//! Fractional seconds and the zone designator are recognized, but only the
//! offset is retained (normalized to `Z` or `±HH:MM`); fractions are
//! discarded beyond second precision.

use alloc::format;
use core::str::FromStr;

use tinystr::TinyAsciiStr;
use writeable::{impl_display_with_writeable, Writeable};

use crate::{
    fields::PartialDateTime,
    {PickerError, PickerResult},
};

/// A byte cursor over ISO input.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn finished(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Consumes exactly `count` ASCII digits as a number.
    fn digits(&mut self, count: usize) -> PickerResult<i32> {
        let end = self.pos + count;
        if end > self.bytes.len() {
            return Err(PickerError::syntax().with_message("unexpected end of datetime string"));
        }
        let mut value = 0i32;
        for &byte in &self.bytes[self.pos..end] {
            if !byte.is_ascii_digit() {
                return Err(PickerError::syntax().with_message("expected a digit"));
            }
            value = value * 10 + i32::from(byte - b'0');
        }
        self.pos = end;
        Ok(value)
    }
}

fn in_range(value: i32, low: i32, high: i32, what: &'static str) -> PickerResult<u8> {
    if !(low..=high).contains(&value) {
        return Err(PickerError::range().with_message(what));
    }
    Ok(value as u8)
}

/// Parses an ISO-8601 subset string into a `PartialDateTime`.
pub fn parse_partial(source: &str) -> PickerResult<PartialDateTime> {
    if source.is_empty() {
        return Err(PickerError::syntax().with_message("empty datetime string"));
    }

    let mut cursor = Cursor::new(source);
    let mut record = PartialDateTime::new();

    // `HH:mm...` — the third byte disambiguates time-only input from a
    // four-digit year.
    if cursor.bytes.get(2) == Some(&b':') {
        parse_time_section(&mut cursor, &mut record)?;
    } else {
        record.year = Some(cursor.digits(4)?);
        if cursor.eat(b'-') {
            let month = cursor.digits(2)?;
            record.month = Some(in_range(month, 1, 12, "month out of range")?);
            if cursor.eat(b'-') {
                let day = cursor.digits(2)?;
                record.day = Some(in_range(day, 1, 31, "day out of range")?);
                if cursor.eat(b'T') || cursor.eat(b' ') {
                    parse_time_section(&mut cursor, &mut record)?;
                }
            }
        }
    }

    if !cursor.finished() {
        return Err(PickerError::syntax().with_message("trailing characters in datetime string"));
    }
    Ok(record)
}

/// `HH:mm[:ss[.fff...]][Z|±HH[:mm]]`
fn parse_time_section(cursor: &mut Cursor<'_>, record: &mut PartialDateTime) -> PickerResult<()> {
    let hour = cursor.digits(2)?;
    record.hour = Some(in_range(hour, 0, 23, "hour out of range")?);
    if !cursor.eat(b':') {
        return Err(PickerError::syntax().with_message("expected ':' after hour"));
    }
    let minute = cursor.digits(2)?;
    record.minute = Some(in_range(minute, 0, 59, "minute out of range")?);

    if cursor.eat(b':') {
        let second = cursor.digits(2)?;
        record.second = Some(in_range(second, 0, 59, "second out of range")?);
        if cursor.eat(b'.') {
            // Recognized, not retained.
            let mut fraction_digits = 0;
            while cursor.peek().is_some_and(|b| b.is_ascii_digit()) {
                cursor.advance();
                fraction_digits += 1;
            }
            if fraction_digits == 0 {
                return Err(PickerError::syntax().with_message("expected fractional digits"));
            }
        }
    }

    parse_offset(cursor, record)
}

/// `Z` or `±HH[:mm]` or `±HHmm`, normalized on the way in.
fn parse_offset(cursor: &mut Cursor<'_>, record: &mut PartialDateTime) -> PickerResult<()> {
    let sign = match cursor.peek() {
        Some(b'Z') => {
            cursor.advance();
            record.offset = TinyAsciiStr::try_from_str("Z").ok();
            return Ok(());
        }
        Some(b'+') => '+',
        Some(b'-') => '-',
        _ => return Ok(()),
    };
    cursor.advance();

    let hours = cursor.digits(2)?;
    in_range(hours, 0, 23, "offset hours out of range")?;
    let minutes = if cursor.eat(b':') || cursor.peek().is_some_and(|b| b.is_ascii_digit()) {
        let minutes = cursor.digits(2)?;
        i32::from(in_range(minutes, 0, 59, "offset minutes out of range")?)
    } else {
        0
    };

    let formatted = format!("{sign}{hours:02}:{minutes:02}");
    record.offset = TinyAsciiStr::try_from_str(&formatted).ok();
    Ok(())
}

impl FromStr for PartialDateTime {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_partial(s)
    }
}

impl Writeable for PartialDateTime {
    /// Writes the minimal ISO form carrying only the present fields. The
    /// `T` section needs both hour and minute; seconds and the offset
    /// only follow a time section.
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if let Some(year) = self.year {
            write!(sink, "{year:04}")?;
            if let Some(month) = self.month {
                write!(sink, "-{month:02}")?;
                if let Some(day) = self.day {
                    write!(sink, "-{day:02}")?;
                    if let (Some(hour), Some(minute)) = (self.hour, self.minute) {
                        write!(sink, "T{hour:02}:{minute:02}")?;
                        self.write_seconds_and_offset(sink)?;
                    }
                }
            }
        } else if let (Some(hour), Some(minute)) = (self.hour, self.minute) {
            write!(sink, "{hour:02}:{minute:02}")?;
            self.write_seconds_and_offset(sink)?;
        }
        Ok(())
    }
}

impl PartialDateTime {
    fn write_seconds_and_offset<W: core::fmt::Write + ?Sized>(
        &self,
        sink: &mut W,
    ) -> core::fmt::Result {
        if let Some(second) = self.second {
            write!(sink, ":{second:02}")?;
        }
        if let Some(offset) = self.offset {
            sink.write_str(offset.as_str())?;
        }
        Ok(())
    }

    /// Renders this record to its minimal ISO-8601 form.
    #[must_use]
    pub fn to_iso(&self) -> alloc::string::String {
        self.write_to_string().into_owned()
    }
}

impl_display_with_writeable!(PartialDateTime);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn parses_each_granularity() {
        let record = parse_partial("1994").unwrap();
        assert_eq!(record, PartialDateTime::new().with_year(Some(1994)));

        let record = parse_partial("1994-12").unwrap();
        assert_eq!(record.month, Some(12));
        assert_eq!(record.day, None);

        let record = parse_partial("1994-12-15").unwrap();
        assert_eq!(record.day, Some(15));
        assert_eq!(record.hour, None);

        let record = parse_partial("1994-12-15T13:47").unwrap();
        assert_eq!(record.hour, Some(13));
        assert_eq!(record.minute, Some(47));
        assert_eq!(record.second, None);
    }

    #[test]
    fn parses_fraction_and_zone() {
        let record = parse_partial("1994-12-15T13:47:20.789Z").unwrap();
        assert_eq!(record.year, Some(1994));
        assert_eq!(record.month, Some(12));
        assert_eq!(record.day, Some(15));
        assert_eq!(record.hour, Some(13));
        assert_eq!(record.minute, Some(47));
        assert_eq!(record.second, Some(20));
        assert_eq!(record.offset.map(|o| o.as_str() == "Z"), Some(true));
    }

    #[test]
    fn normalizes_numeric_offsets() {
        let record = parse_partial("1994-12-15T13:47:20+05:30").unwrap();
        assert_eq!(record.offset.map(|o| o.as_str() == "+05:30"), Some(true));
        let record = parse_partial("1994-12-15T13:47:20-0800").unwrap();
        assert_eq!(record.offset.map(|o| o.as_str() == "-08:00"), Some(true));
        let record = parse_partial("1994-12-15T13:47:20+05").unwrap();
        assert_eq!(record.offset.map(|o| o.as_str() == "+05:00"), Some(true));
    }

    #[test]
    fn parses_time_only() {
        let record = parse_partial("13:47").unwrap();
        assert_eq!(record.year, None);
        assert_eq!(record.hour, Some(13));
        assert_eq!(record.minute, Some(47));

        let record = parse_partial("13:47:20").unwrap();
        assert_eq!(record.second, Some(20));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_partial("").is_err());
        assert!(parse_partial("94-12").is_err());
        assert!(parse_partial("1994-").is_err());
        assert!(parse_partial("1994-12-15X").is_err());
        assert!(parse_partial("1994-12-15T25:00").is_err());
        assert_eq!(
            parse_partial("1994-13").unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn writes_minimal_forms() {
        let record = PartialDateTime::new().with_year(Some(1994));
        assert_eq!(record.to_iso(), "1994");

        let record = record.with_month(Some(12));
        assert_eq!(record.to_iso(), "1994-12");

        let record = record.with_day(Some(15));
        assert_eq!(record.to_iso(), "1994-12-15");

        let record = record.with_hour(Some(13)).with_minute(Some(47));
        assert_eq!(record.to_iso(), "1994-12-15T13:47");

        let record = record.with_second(Some(20));
        assert_eq!(record.to_iso(), "1994-12-15T13:47:20");

        let record = PartialDateTime::new()
            .with_hour(Some(8))
            .with_minute(Some(5));
        assert_eq!(record.to_iso(), "08:05");
    }

    #[test]
    fn iso_round_trip_preserves_present_fields() {
        for source in [
            "1994",
            "2016-02",
            "2020-10-31",
            "1994-12-15T13:47",
            "1994-12-15T13:47:20",
            "13:47",
            "13:47:20",
        ] {
            let record = parse_partial(source).unwrap();
            assert_eq!(record.to_iso(), source, "round trip for {source}");
            assert_eq!(parse_partial(&record.to_iso()).unwrap(), record);
        }
    }
}
