//! Cross-column range constraint validation.
//!
//! After generation and after every selection change, each column's
//! options are re-marked against the global `[min, max]` window. The
//! pass walks year -> month -> day -> hour -> minute, feeding each
//! step's resolved selection into the next: for every candidate a lower
//! and an upper probe composite are built (unresolved lower-order fields
//! filled with their domain extremes) to test whether *any* completion
//! of the remaining fields could stay inside the window. Probes are
//! constructed immutably from the pure [`composite`] key; nothing here
//! ever moves a column's `selected_index`.
//!
//! [`composite`]: crate::utils::composite

use crate::bounds::Bounds;
use crate::columns::ColumnSet;
use crate::fields::FieldKey;
use crate::utils::{composite, days_in_month};

/// Re-marks the disabled state of every constrained column.
pub(crate) fn run(set: &mut ColumnSet, bounds: &Bounds, today_year: i32) {
    let min_composite = composite(bounds.min.composite_fields());
    let max_composite = composite(bounds.max.composite_fields());

    let year = resolve_year(set, today_year);

    let month = mark_column(
        set,
        FieldKey::Month,
        [year, 0, 0, 0, 0],
        [year, 12, 31, 23, 59],
        min_composite,
        max_composite,
    );
    // The day domain tracks the resolved (month, year) every pass.
    let month_days = i32::from(days_in_month(month, year));
    let day = mark_column(
        set,
        FieldKey::Day,
        [year, month, 0, 0, 0],
        [year, month, month_days, 23, 59],
        min_composite,
        max_composite,
    );
    let hour = mark_column(
        set,
        FieldKey::Hour,
        [year, month, day, 0, 0],
        [year, month, day, 23, 59],
        min_composite,
        max_composite,
    );
    mark_column(
        set,
        FieldKey::Minute,
        [year, month, day, hour, 0],
        [year, month, day, hour, 59],
        min_composite,
        max_composite,
    );
}

/// The year the rest of the pass is conditioned on: the year column's
/// current selection when present, else the current real-world year,
/// else the first year candidate.
fn resolve_year(set: &ColumnSet, today_year: i32) -> i32 {
    let Some(column) = set.column(FieldKey::Year) else {
        return today_year;
    };
    let mut year = today_year;
    if !column.options.iter().any(|option| option.value == today_year) {
        if let Some(first) = column.options.first() {
            year = first.value;
        }
    }
    if let Some(selected) = column.selected() {
        year = selected.value;
    }
    year
}

/// Marks one column's options and returns its resolved value. An absent
/// column resolves to 0, a neutral value that never narrows anything
/// downstream.
fn mark_column(
    set: &mut ColumnSet,
    key: FieldKey,
    lower: [i32; 5],
    upper: [i32; 5],
    min_composite: i64,
    max_composite: i64,
) -> i32 {
    let Some(index) = key.composite_index() else {
        debug_assert!(false, "cannot mark an unconstrained column");
        return 0;
    };
    let Some(column) = set.column_mut(key) else {
        return 0;
    };

    let column_min = lower[index];
    let column_max = upper[index];
    for option in &mut column.options {
        let value = option.value;
        option.disabled = value < column_min
            || value > column_max
            || composite(substitute(upper, index, value)) < min_composite
            || composite(substitute(lower, index, value)) > max_composite;
    }

    column.selected().map_or(0, |option| option.value)
}

/// A probe: the composite fields with one candidate substituted in.
fn substitute(mut fields: [i32; 5], index: usize, value: i32) -> [i32; 5] {
    fields[index] = value;
    fields
}
