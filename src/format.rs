//! Format template scanning and text rendering.
//!
//! A template such as `"MMM DD, YYYY HH:mm"` is an ordered mix of format
//! tokens and literal separators. A run of 1-4 identical format characters
//! (`Y M D H h m s a A Z`) is one token; every other character is a
//! literal. Tokenizing never fails: unrecognized characters simply pass
//! through as literals, and a template that yields zero tokens falls back
//! to [`DEFAULT_FORMAT`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use tinystr::TinyAsciiStr;

use crate::fields::{FieldKey, PartialDateTime};
use crate::options::LocaleNames;
use crate::utils;

/// The built-in fallback template.
pub const DEFAULT_FORMAT: &str = "MMM D, YYYY";

/// Characters that start a format token.
const FORMAT_CHARS: &[char] = &['Y', 'M', 'D', 'H', 'h', 'm', 's', 'a', 'A', 'Z'];

/// Stand-in for a stripped day-name token while deciding whether a
/// numeric day column is needed.
const DAY_NAME_PLACEHOLDER: &str = "{~}";

/// A single format token: the canonical field it selects plus the literal
/// pattern that drives its rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatToken {
    pub key: FieldKey,
    pub pattern: TinyAsciiStr<4>,
}

impl FormatToken {
    /// Two-character numeric patterns render with a leading zero.
    #[inline]
    pub(crate) fn zero_pads(&self) -> bool {
        matches!(self.pattern.len(), 2) && !self.is_name()
    }

    /// Whether this token renders a month or day name rather than a number.
    #[inline]
    pub(crate) fn is_name(&self) -> bool {
        matches!(self.pattern.as_str(), "MMM" | "MMMM" | "DDD" | "DDDD")
    }

    /// Whether this token renders the hour on a 12-hour clock.
    #[inline]
    pub(crate) fn twelve_hour(&self) -> bool {
        self.pattern.as_str().starts_with('h')
    }
}

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'t> {
    Token(FormatToken),
    Literal(&'t str),
}

fn key_for(format_char: char) -> Option<FieldKey> {
    match format_char {
        'Y' => Some(FieldKey::Year),
        'M' => Some(FieldKey::Month),
        'D' => Some(FieldKey::Day),
        'H' | 'h' => Some(FieldKey::Hour),
        'm' => Some(FieldKey::Minute),
        's' => Some(FieldKey::Second),
        'a' | 'A' => Some(FieldKey::Meridiem),
        'Z' => Some(FieldKey::Offset),
        _ => None,
    }
}

/// Splits a template into tokens and literal separators, left to right.
fn scan(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let bytes = template.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        let ch = bytes[pos] as char;
        if let Some(key) = FORMAT_CHARS.contains(&ch).then(|| key_for(ch)).flatten() {
            let mut end = pos + 1;
            while end < bytes.len() && bytes[end] as char == ch && end - pos < 4 {
                end += 1;
            }
            // The format characters are all ASCII, so the slice is at
            // most 4 bytes and the conversion cannot fail.
            if let Ok(pattern) = TinyAsciiStr::try_from_str(&template[pos..end]) {
                segments.push(Segment::Token(FormatToken { key, pattern }));
            }
            pos = end;
        } else {
            let start = pos;
            while pos < bytes.len() && !FORMAT_CHARS.contains(&(bytes[pos] as char)) {
                pos += 1;
            }
            // Literal runs split on char boundaries because every format
            // character is single-byte ASCII.
            segments.push(Segment::Literal(&template[start..pos]));
        }
    }
    segments
}

/// Tokenizes a template in appearance order, literals dropped.
#[must_use]
pub fn tokenize(template: &str) -> Vec<FormatToken> {
    scan(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Token(token) => Some(token),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Tokenizes a template for column generation.
///
/// Day-name tokens are not selectable: `DDDD` and `DDD` are stripped, and
/// a numeric `D` is substituted only when no other day token exists in the
/// template, so at most one day column results. Zero tokens fall back to
/// [`DEFAULT_FORMAT`].
#[must_use]
pub fn tokenize_for_columns(template: &str) -> Vec<FormatToken> {
    let mut template = template
        .replace("DDDD", DAY_NAME_PLACEHOLDER)
        .replace("DDD", DAY_NAME_PLACEHOLDER);
    if !template.contains('D') {
        template = template.replacen(DAY_NAME_PLACEHOLDER, "D", 1);
    }
    let template = template.replace(DAY_NAME_PLACEHOLDER, "");

    let tokens = tokenize(&template);
    if tokens.is_empty() {
        return tokenize(DEFAULT_FORMAT);
    }
    tokens
}

/// Renders a single field value under a token's pattern, as used for
/// column option text.
#[must_use]
pub(crate) fn render_field(token: &FormatToken, value: i32, names: &LocaleNames) -> String {
    match token.pattern.as_str() {
        "YYYY" => value.to_string(),
        "YY" => zero_pad(value.rem_euclid(100)),
        "MMMM" => names.month_name(value as u8).to_string(),
        "MMM" => names.month_short_name(value as u8).to_string(),
        "a" => if value == 0 { "am" } else { "pm" }.to_string(),
        "A" => if value == 0 { "AM" } else { "PM" }.to_string(),
        _ if token.twelve_hour() => {
            let hour12 = twelve_hour_value(value);
            if token.zero_pads() {
                zero_pad(hour12)
            } else {
                hour12.to_string()
            }
        }
        _ if token.zero_pads() => zero_pad(value),
        _ => value.to_string(),
    }
}

/// Renders a full template against a record: tokens substitute the
/// record's fields, literals pass through verbatim, absent fields render
/// as the empty string.
#[must_use]
pub(crate) fn render_datetime(
    template: &str,
    record: &PartialDateTime,
    names: &LocaleNames,
) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in scan(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Token(token) => out.push_str(&render_record_field(&token, record, names)),
        }
    }
    out
}

fn render_record_field(
    token: &FormatToken,
    record: &PartialDateTime,
    names: &LocaleNames,
) -> String {
    match token.key {
        FieldKey::Offset => record
            .offset
            .map(|offset| offset.as_str().to_string())
            .unwrap_or_default(),
        FieldKey::Day if token.is_name() => {
            // Day-of-week names need the whole civil date.
            let (Some(year), Some(month), Some(day)) = (record.year, record.month, record.day)
            else {
                return String::new();
            };
            let weekday = utils::day_of_week(year, month, day);
            if token.pattern.len() == 4 {
                names.day_name(weekday).to_string()
            } else {
                names.day_short_name(weekday).to_string()
            }
        }
        key => record
            .field(key)
            .map(|value| render_field(token, value, names))
            .unwrap_or_default(),
    }
}

fn zero_pad(value: i32) -> String {
    alloc::format!("{value:02}")
}

/// Maps a 24-hour value onto the 1-12 clock face.
pub(crate) fn twelve_hour_value(hour: i32) -> i32 {
    match hour.rem_euclid(12) {
        0 => 12,
        hour12 => hour12,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinystr::tinystr;

    fn keys(tokens: &[FormatToken]) -> Vec<FieldKey> {
        tokens.iter().map(|t| t.key).collect()
    }

    #[test]
    fn tokenizes_in_template_order() {
        let tokens = tokenize("MMM DD, YYYY HH:mm");
        assert_eq!(
            keys(&tokens),
            [
                FieldKey::Month,
                FieldKey::Day,
                FieldKey::Year,
                FieldKey::Hour,
                FieldKey::Minute
            ]
        );
        assert_eq!(tokens[0].pattern, tinystr!(4, "MMM"));
        assert_eq!(tokens[1].pattern, tinystr!(4, "DD"));
    }

    #[test]
    fn unrecognized_characters_are_literals() {
        let tokens = tokenize("YYYY?!MM");
        assert_eq!(keys(&tokens), [FieldKey::Year, FieldKey::Month]);
    }

    #[test]
    fn day_names_strip_without_numeric_day() {
        // A numeric day exists elsewhere: the day name is dropped.
        let tokens = tokenize_for_columns("DDDD MMM D, YYYY");
        assert_eq!(keys(&tokens), [FieldKey::Month, FieldKey::Day, FieldKey::Year]);

        // No numeric day: a single-`D` token is substituted in place.
        let tokens = tokenize_for_columns("DDD MMM, YYYY");
        assert_eq!(keys(&tokens), [FieldKey::Day, FieldKey::Month, FieldKey::Year]);
        assert_eq!(tokens[0].pattern, tinystr!(4, "D"));

        // Never more than one day column.
        let tokens = tokenize_for_columns("DDDD DDD D YYYY");
        assert_eq!(keys(&tokens), [FieldKey::Day, FieldKey::Year]);
    }

    #[test]
    fn empty_template_falls_back() {
        let tokens = tokenize_for_columns("");
        assert_eq!(tokens, tokenize(DEFAULT_FORMAT));
        let tokens = tokenize_for_columns("-- --");
        assert_eq!(tokens, tokenize(DEFAULT_FORMAT));
    }

    #[test]
    fn field_rendering() {
        let names = LocaleNames::default();
        let token = |pattern: &str, key: FieldKey| FormatToken {
            key,
            pattern: TinyAsciiStr::try_from_str(pattern).unwrap(),
        };
        assert_eq!(render_field(&token("YYYY", FieldKey::Year), 1994, &names), "1994");
        assert_eq!(render_field(&token("YY", FieldKey::Year), 1994, &names), "94");
        assert_eq!(render_field(&token("MM", FieldKey::Month), 6, &names), "06");
        assert_eq!(render_field(&token("M", FieldKey::Month), 6, &names), "6");
        assert_eq!(render_field(&token("MMM", FieldKey::Month), 6, &names), "Jun");
        assert_eq!(render_field(&token("MMMM", FieldKey::Month), 6, &names), "June");
        assert_eq!(render_field(&token("hh", FieldKey::Hour), 13, &names), "01");
        assert_eq!(render_field(&token("h", FieldKey::Hour), 0, &names), "12");
        assert_eq!(render_field(&token("A", FieldKey::Meridiem), 1, &names), "PM");
    }

    #[test]
    fn template_rendering() {
        let names = LocaleNames::default();
        let record = PartialDateTime::new()
            .with_year(Some(2005))
            .with_month(Some(6))
            .with_day(Some(17))
            .with_hour(Some(11))
            .with_minute(Some(6));
        assert_eq!(
            render_datetime("MMM DD, YYYY HH:mm", &record, &names),
            "Jun 17, 2005 11:06"
        );
        // 2005-06-17 was a Friday.
        assert_eq!(render_datetime("DDD MMM D", &record, &names), "Fri Jun 17");
        assert_eq!(render_datetime("h:mm A", &record, &names), "11:06 AM");
    }

    #[test]
    fn absent_fields_render_empty() {
        let names = LocaleNames::default();
        let record = PartialDateTime::new().with_year(Some(2020));
        assert_eq!(render_datetime("MM/YYYY", &record, &names), "/2020");
    }
}
