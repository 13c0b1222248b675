//! Picker configuration options.
//!
//! Everything a host can tune lives here: templates, textual bounds,
//! explicit per-field candidate lists, and locale name tables. All of it
//! is structured configuration; nothing is looked up by synthesized
//! property names.

use alloc::string::String;
use alloc::vec::Vec;

use crate::fields::FieldKey;

/// Built-in English month names.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Built-in English short month names.
pub(crate) const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Built-in English day-of-week names, Sunday first.
pub(crate) const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Built-in English short day-of-week names, Sunday first.
pub(crate) const DAY_SHORT_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Explicit candidate lists, one optional list per selectable field.
///
/// A present list replaces the domain-derived candidate set for that
/// column verbatim (after sorting and deduplication); range disabling is
/// still applied against it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldOverrides {
    pub year: Option<Vec<i32>>,
    pub month: Option<Vec<i32>>,
    pub day: Option<Vec<i32>>,
    pub hour: Option<Vec<i32>>,
    pub minute: Option<Vec<i32>>,
}

impl FieldOverrides {
    /// Returns the override list for a field key, if one was provided.
    #[must_use]
    pub fn get(&self, key: FieldKey) -> Option<&[i32]> {
        match key {
            FieldKey::Year => self.year.as_deref(),
            FieldKey::Month => self.month.as_deref(),
            FieldKey::Day => self.day.as_deref(),
            FieldKey::Hour => self.hour.as_deref(),
            FieldKey::Minute => self.minute.as_deref(),
            _ => None,
        }
    }

    pub fn set(&mut self, key: FieldKey, values: Vec<i32>) {
        match key {
            FieldKey::Year => self.year = Some(values),
            FieldKey::Month => self.month = Some(values),
            FieldKey::Day => self.day = Some(values),
            FieldKey::Hour => self.hour = Some(values),
            FieldKey::Minute => self.minute = Some(values),
            _ => {}
        }
    }
}

/// Coerces a comma separated string of numbers into a list, discarding
/// whitespace, brackets, and entries that fail to parse. An empty result
/// is the caller's cue to report a malformed override and fall back.
#[must_use]
pub fn parse_number_list(input: &str) -> Vec<i32> {
    input
        .split(',')
        .map(|entry| {
            entry
                .trim()
                .trim_start_matches('[')
                .trim_end_matches(']')
                .trim()
        })
        .filter_map(|entry| entry.parse::<i32>().ok())
        .collect()
}

/// Coerces a comma separated string into a list of trimmed names,
/// discarding empty entries.
#[must_use]
pub fn parse_name_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|entry| entry.trim().trim_matches(|c| c == '[' || c == ']').trim())
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Month and day-of-week name tables, with built-in English fallback.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocaleNames {
    pub month_names: Option<Vec<String>>,
    pub month_short_names: Option<Vec<String>>,
    pub day_names: Option<Vec<String>>,
    pub day_short_names: Option<Vec<String>>,
}

impl LocaleNames {
    /// Full month name for a 1-based month.
    #[must_use]
    pub fn month_name(&self, month: u8) -> &str {
        let index = usize::from(month.saturating_sub(1)) % 12;
        lookup(self.month_names.as_deref(), index).unwrap_or(MONTH_NAMES[index])
    }

    /// Short month name for a 1-based month.
    #[must_use]
    pub fn month_short_name(&self, month: u8) -> &str {
        let index = usize::from(month.saturating_sub(1)) % 12;
        lookup(self.month_short_names.as_deref(), index).unwrap_or(MONTH_SHORT_NAMES[index])
    }

    /// Full day-of-week name, 0 = Sunday.
    #[must_use]
    pub fn day_name(&self, weekday: u8) -> &str {
        let index = usize::from(weekday) % 7;
        lookup(self.day_names.as_deref(), index).unwrap_or(DAY_NAMES[index])
    }

    /// Short day-of-week name, 0 = Sunday.
    #[must_use]
    pub fn day_short_name(&self, weekday: u8) -> &str {
        let index = usize::from(weekday) % 7;
        lookup(self.day_short_names.as_deref(), index).unwrap_or(DAY_SHORT_NAMES[index])
    }
}

fn lookup(table: Option<&[String]>, index: usize) -> Option<&str> {
    table.and_then(|names| names.get(index)).map(String::as_str)
}

/// The full configuration for one picker session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// How the committed value is displayed as text. Also determines the
    /// columns when `picker_format` is absent.
    pub display_format: Option<String>,
    /// Which columns the picker shows, their order, and per-column
    /// rendering. Falls back to `display_format`.
    pub picker_format: Option<String>,
    /// The minimum datetime, as an ISO-8601 subset string.
    pub min: Option<String>,
    /// The maximum datetime, as an ISO-8601 subset string.
    pub max: Option<String>,
    /// Explicit per-field candidate lists.
    pub overrides: FieldOverrides,
    /// Month and day-of-week name tables.
    pub names: LocaleNames,
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
