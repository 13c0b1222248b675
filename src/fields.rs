//! The partial datetime value model and its field keys.

use tinystr::TinyAsciiStr;

/// The canonical datetime component a format token maps to.
///
/// `Meridiem` and `Offset` are presentation keys: `Meridiem` may produce a
/// picker column but never participates in range constraints, and `Offset`
/// is render-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Meridiem,
    Offset,
}

impl FieldKey {
    /// Whether this key produces a selectable picker column.
    #[inline]
    #[must_use]
    pub fn is_column(self) -> bool {
        !matches!(self, Self::Offset)
    }

    /// The position of this field in the composite (year, month, day,
    /// hour, minute) ordering, for fields the validator constrains.
    #[inline]
    pub(crate) fn composite_index(self) -> Option<usize> {
        match self {
            Self::Year => Some(0),
            Self::Month => Some(1),
            Self::Day => Some(2),
            Self::Hour => Some(3),
            Self::Minute => Some(4),
            _ => None,
        }
    }

    /// A short human readable name for diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Meridiem => "meridiem",
            Self::Offset => "offset",
        }
    }
}

/// A `PartialDateTime` represents a partially filled datetime value.
///
/// Any subset of fields may be present; an absent field means the value's
/// granularity does not reach it. Day validity against (month, year) is a
/// validation-time concern, not a construction-time one, since interim
/// states are allowed while the user is editing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PartialDateTime {
    // A potentially set `year` field.
    pub year: Option<i32>,
    // A potentially set `month` field (1-12).
    pub month: Option<u8>,
    // A potentially set `day` field (1-31).
    pub day: Option<u8>,
    // A potentially set `hour` field (0-23).
    pub hour: Option<u8>,
    // A potentially set `minute` field (0-59).
    pub minute: Option<u8>,
    // A potentially set `second` field (0-59).
    pub second: Option<u8>,
    // A potentially set UTC offset, normalized to `Z` or `±HH:MM`.
    pub offset: Option<TinyAsciiStr<8>>,
}

impl PartialDateTime {
    pub const fn new() -> Self {
        Self {
            year: None,
            month: None,
            day: None,
            hour: None,
            minute: None,
            second: None,
            offset: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub const fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub const fn with_month(mut self, month: Option<u8>) -> Self {
        self.month = month;
        self
    }

    pub const fn with_day(mut self, day: Option<u8>) -> Self {
        self.day = day;
        self
    }

    pub const fn with_hour(mut self, hour: Option<u8>) -> Self {
        self.hour = hour;
        self
    }

    pub const fn with_minute(mut self, minute: Option<u8>) -> Self {
        self.minute = minute;
        self
    }

    pub const fn with_second(mut self, second: Option<u8>) -> Self {
        self.second = second;
        self
    }

    /// Merges the present fields of `other` into this record, leaving
    /// fields absent in `other` untouched.
    pub fn update(&mut self, other: &Self) {
        if other.year.is_some() {
            self.year = other.year;
        }
        if other.month.is_some() {
            self.month = other.month;
        }
        if other.day.is_some() {
            self.day = other.day;
        }
        if other.hour.is_some() {
            self.hour = other.hour;
        }
        if other.minute.is_some() {
            self.minute = other.minute;
        }
        if other.second.is_some() {
            self.second = other.second;
        }
        if other.offset.is_some() {
            self.offset = other.offset;
        }
    }

    /// Returns the numeric value of a field, if present. Presentation
    /// keys resolve through their backing field: `Meridiem` derives from
    /// the hour; `Offset` has no numeric value.
    #[must_use]
    pub fn field(&self, key: FieldKey) -> Option<i32> {
        match key {
            FieldKey::Year => self.year,
            FieldKey::Month => self.month.map(i32::from),
            FieldKey::Day => self.day.map(i32::from),
            FieldKey::Hour => self.hour.map(i32::from),
            FieldKey::Minute => self.minute.map(i32::from),
            FieldKey::Second => self.second.map(i32::from),
            FieldKey::Meridiem => self.hour.map(|h| i32::from(h >= 12)),
            FieldKey::Offset => None,
        }
    }

    /// Sets a field from a column value. Presentation keys are ignored;
    /// the hour column already carries the 24-hour value.
    pub(crate) fn set_field(&mut self, key: FieldKey, value: i32) {
        match key {
            FieldKey::Year => self.year = Some(value),
            FieldKey::Month => self.month = Some(value as u8),
            FieldKey::Day => self.day = Some(value as u8),
            FieldKey::Hour => self.hour = Some(value as u8),
            FieldKey::Minute => self.minute = Some(value as u8),
            FieldKey::Second => self.second = Some(value as u8),
            FieldKey::Meridiem | FieldKey::Offset => {}
        }
    }
}

/// The current civil date, used for bound defaulting and the validator's
/// year fallback. Hosts supply one directly or, with the `sys` feature,
/// read it from the system clock via `Today::system`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Today {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Today {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}
