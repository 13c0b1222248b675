//! Effective minimum/maximum bound resolution.
//!
//! User bounds arrive as optional ISO subset strings at any granularity.
//! The resolver fills every absent field with its directional extreme so
//! comparisons are always well-defined, and repairs inverted bounds
//! instead of rejecting them: the picker must always render.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::fields::{PartialDateTime, Today};
use crate::parsers::parse_partial;
use crate::utils;

/// A fully populated datetime bound.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoundDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl BoundDateTime {
    /// The (year, month, day, hour, minute) tuple the validator compares.
    pub(crate) fn composite_fields(&self) -> [i32; 5] {
        [
            self.year,
            i32::from(self.month),
            i32::from(self.day),
            i32::from(self.hour),
            i32::from(self.minute),
        ]
    }
}

/// The resolved `[min, max]` constraint window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: BoundDateTime,
    pub max: BoundDateTime,
}

/// Resolves effective bounds from optional textual bounds, an optional
/// explicit year candidate list, and the current date.
pub(crate) fn resolve(
    min: Option<&str>,
    max: Option<&str>,
    year_values: Option<&[i32]>,
    today: Today,
    diagnostics: &mut Diagnostics,
) -> Bounds {
    let mut min_record = parse_bound(min, diagnostics);
    let mut max_record = parse_bound(max, diagnostics);

    // An explicit year list pins absent bounds to its extrema; otherwise
    // the defaults span from 100 years back through the end of this year.
    if let Some(years) = year_values.filter(|years| !years.is_empty()) {
        if min_record.year.is_none() {
            min_record.year = years.iter().min().copied();
        }
        if max_record.year.is_none() {
            max_record.year = years.iter().max().copied();
        }
    } else {
        if min.is_none() {
            min_record.year = Some(today.year - 100);
        }
        if max.is_none() {
            max_record.year = Some(today.year);
        }
    }

    let min_filled = BoundDateTime {
        year: min_record.year.unwrap_or(today.year),
        month: min_record.month.unwrap_or(1),
        day: min_record.day.unwrap_or(1),
        hour: min_record.hour.unwrap_or(0),
        minute: min_record.minute.unwrap_or(0),
        second: min_record.second.unwrap_or(0),
    };

    let max_year = max_record.year.unwrap_or(today.year);
    let max_month = max_record.month.unwrap_or(12);
    let max_filled = BoundDateTime {
        year: max_year,
        month: max_month,
        day: max_record
            .day
            .unwrap_or_else(|| utils::days_in_month(i32::from(max_month), max_year)),
        hour: max_record.hour.unwrap_or(23),
        minute: max_record.minute.unwrap_or(59),
        second: max_record.second.unwrap_or(59),
    };

    repair(min_filled, max_filled, diagnostics)
}

fn parse_bound(bound: Option<&str>, diagnostics: &mut Diagnostics) -> PartialDateTime {
    let Some(text) = bound else {
        return PartialDateTime::new();
    };
    match parse_partial(text) {
        Ok(record) => record,
        Err(err) => {
            diagnostics.report(
                DiagnosticKind::UnparsableBound,
                alloc::format!("could not parse bound {text:?}: {err}"),
            );
            PartialDateTime::new()
        }
    }
}

/// Best-effort repair when `min > max`: the offending field of `min`
/// collapses rather than the bounds being rejected.
fn repair(mut min: BoundDateTime, max: BoundDateTime, diagnostics: &mut Diagnostics) -> Bounds {
    if min.year > max.year {
        diagnostics.report(DiagnosticKind::InvertedBounds, "min.year > max.year");
        min.year = max.year - 100;
    }
    if min.year == max.year {
        if min.month > max.month {
            diagnostics.report(DiagnosticKind::InvertedBounds, "min.month > max.month");
            min.month = 1;
        } else if min.month == max.month && min.day > max.day {
            diagnostics.report(DiagnosticKind::InvertedBounds, "min.day > max.day");
            min.day = 1;
        }
    }
    Bounds { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: Today = Today::new(2026, 8, 27);

    fn resolve_quiet(min: Option<&str>, max: Option<&str>, years: Option<&[i32]>) -> Bounds {
        let mut diagnostics = Diagnostics::default();
        resolve(min, max, years, TODAY, &mut diagnostics)
    }

    #[test]
    fn default_window_spans_a_century() {
        let bounds = resolve_quiet(None, None, None);
        assert_eq!(
            bounds.min,
            BoundDateTime {
                year: 1926,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0
            }
        );
        assert_eq!(
            bounds.max,
            BoundDateTime {
                year: 2026,
                month: 12,
                day: 31,
                hour: 23,
                minute: 59,
                second: 59
            }
        );
    }

    #[test]
    fn partial_bounds_fill_directionally() {
        let bounds = resolve_quiet(Some("2016"), Some("2020-10"), None);
        assert_eq!(bounds.min.month, 1);
        assert_eq!(bounds.min.day, 1);
        assert_eq!(bounds.max.year, 2020);
        assert_eq!(bounds.max.month, 10);
        // October has 31 days; February of a leap year would get 29.
        assert_eq!(bounds.max.day, 31);
        assert_eq!(bounds.max.hour, 23);

        let bounds = resolve_quiet(None, Some("2020-02"), None);
        assert_eq!(bounds.max.day, 29);
    }

    #[test]
    fn year_list_supplies_missing_extremes() {
        let years = [2024, 2008, 2016, 2012];
        let bounds = resolve_quiet(None, None, Some(&years));
        assert_eq!(bounds.min.year, 2008);
        assert_eq!(bounds.max.year, 2024);

        // An explicit bound still wins over the list.
        let bounds = resolve_quiet(Some("2010"), None, Some(&years));
        assert_eq!(bounds.min.year, 2010);
        assert_eq!(bounds.max.year, 2024);
    }

    #[test]
    fn inverted_bounds_are_repaired_not_rejected() {
        let mut diagnostics = Diagnostics::default();
        let bounds = resolve(Some("2030"), Some("2020"), None, TODAY, &mut diagnostics);
        assert_eq!(bounds.min.year, 1920);
        assert_eq!(bounds.max.year, 2020);
        assert_eq!(
            diagnostics.as_slice()[0].kind,
            DiagnosticKind::InvertedBounds
        );

        let mut diagnostics = Diagnostics::default();
        let bounds = resolve(
            Some("2020-11"),
            Some("2020-03"),
            None,
            TODAY,
            &mut diagnostics,
        );
        assert_eq!(bounds.min.month, 1);
        assert!(!diagnostics.is_empty());

        let mut diagnostics = Diagnostics::default();
        let bounds = resolve(
            Some("2020-03-25"),
            Some("2020-03-10"),
            None,
            TODAY,
            &mut diagnostics,
        );
        assert_eq!(bounds.min.day, 1);
    }

    #[test]
    fn unparsable_bound_degrades_to_default() {
        let mut diagnostics = Diagnostics::default();
        let bounds = resolve(Some("not-a-date"), None, None, TODAY, &mut diagnostics);
        // The malformed string is reported and the parse result treated
        // as absent, which leaves the field-level defaults in place.
        assert_eq!(
            diagnostics.as_slice()[0].kind,
            DiagnosticKind::UnparsableBound
        );
        assert_eq!(bounds.min.year, TODAY.year);
        assert_eq!(bounds.min.month, 1);
    }
}
