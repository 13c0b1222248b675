//! Picker column generation.
//!
//! One column per distinct field key in the template tokens, populated
//! with candidate values from an explicit override list or the field's
//! min/max-derived domain, each candidate rendered under its token's
//! pattern. Options are strictly ascending by value.

use alloc::string::String;
use alloc::vec::Vec;

use crate::bounds::Bounds;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::fields::{FieldKey, PartialDateTime};
use crate::format::{render_field, FormatToken};
use crate::options::{FieldOverrides, LocaleNames};
use crate::utils;

/// Horizontal alignment hint for a rendered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Right,
}

/// A single selectable candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOption {
    pub value: i32,
    pub text: String,
    /// Recomputed by every validation pass, never persisted.
    pub disabled: bool,
}

/// The candidate values plus current selection for one field key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerColumn {
    pub key: FieldKey,
    pub selected_index: usize,
    pub options: Vec<ColumnOption>,
    /// Layout metadata; none of these affect selection semantics.
    pub align: Option<ColumnAlign>,
    /// Shared rendered width, in characters, for paired columns.
    pub options_width: Option<usize>,
    /// Independent rendered width, in characters, for a middle column.
    pub column_width: Option<usize>,
}

impl PickerColumn {
    fn new(key: FieldKey, options: Vec<ColumnOption>) -> Self {
        Self {
            key,
            selected_index: 0,
            options,
            align: None,
            options_width: None,
            column_width: None,
        }
    }

    /// The currently selected option, if the column is non-empty.
    #[must_use]
    pub fn selected(&self) -> Option<&ColumnOption> {
        self.options.get(self.selected_index)
    }

    fn longest_text(&self) -> usize {
        self.options
            .iter()
            .map(|option| option.text.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// The ordered, named-column picker surface.
///
/// This is the in-process stand-in for the scrollable wheel UI: the
/// engine populates it and re-marks disabled options; a rendering layer
/// reads it back out.
#[derive(Debug, Default, Clone)]
pub struct ColumnSet {
    columns: Vec<PickerColumn>,
}

impl ColumnSet {
    pub fn add_column(&mut self, column: PickerColumn) {
        self.columns.push(column);
    }

    #[must_use]
    pub fn column(&self, key: FieldKey) -> Option<&PickerColumn> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn column_mut(&mut self, key: FieldKey) -> Option<&mut PickerColumn> {
        self.columns.iter_mut().find(|column| column.key == key)
    }

    #[must_use]
    pub fn columns(&self) -> &[PickerColumn] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [PickerColumn] {
        &mut self.columns
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Generates the ordered column set for a token sequence. Duplicate keys
/// collapse to one column rendered under the first-seen pattern.
pub(crate) fn generate(
    tokens: &[FormatToken],
    bounds: &Bounds,
    overrides: &FieldOverrides,
    value: &PartialDateTime,
    names: &LocaleNames,
    diagnostics: &mut Diagnostics,
) -> ColumnSet {
    let mut set = ColumnSet::default();
    for token in tokens {
        if !token.key.is_column() || set.column(token.key).is_some() {
            continue;
        }

        let values = candidate_values(token.key, bounds, overrides, diagnostics);
        let options = values
            .into_iter()
            .map(|candidate| ColumnOption {
                value: candidate,
                text: render_field(token, candidate, names),
                disabled: false,
            })
            .collect();

        let mut column = PickerColumn::new(token.key, options);
        if let Some(selected) = value.field(token.key) {
            if let Some(index) = column
                .options
                .iter()
                .position(|option| option.value == selected)
            {
                column.selected_index = index;
            }
        }
        set.add_column(column);
    }

    divy(&mut set);
    set
}

/// The candidate value list for one field: an explicit override when
/// usable, otherwise the legal domain intersected with the bounds.
fn candidate_values(
    key: FieldKey,
    bounds: &Bounds,
    overrides: &FieldOverrides,
    diagnostics: &mut Diagnostics,
) -> Vec<i32> {
    if let Some(list) = overrides.get(key) {
        let mut values: Vec<i32> = list.to_vec();
        values.sort_unstable();
        values.dedup();
        if !values.is_empty() {
            return values;
        }
        diagnostics.report(
            DiagnosticKind::MalformedOverride,
            alloc::format!(
                "invalid {}Values: must be a list of numbers",
                key.as_str()
            ),
        );
    }
    domain_values(key, bounds)
}

fn domain_values(key: FieldKey, bounds: &Bounds) -> Vec<i32> {
    let min = &bounds.min;
    let max = &bounds.max;
    let (low, high) = match key {
        FieldKey::Year => (min.year, max.year),
        // A boundary year pins the month window; likewise a boundary
        // month pins the day window.
        FieldKey::Month if min.year == max.year => (i32::from(min.month), i32::from(max.month)),
        FieldKey::Month => (1, 12),
        FieldKey::Day if min.year == max.year && min.month == max.month => (
            i32::from(min.day),
            i32::from(max.day)
                .min(i32::from(utils::days_in_month(i32::from(max.month), max.year))),
        ),
        FieldKey::Day => (1, 31),
        FieldKey::Hour => (0, 23),
        FieldKey::Minute | FieldKey::Second => (0, 59),
        FieldKey::Meridiem => (0, 1),
        FieldKey::Offset => return Vec::new(),
    };
    (low..=high).collect()
}

/// Attaches pairing/alignment layout metadata: two columns share a width
/// and face each other; with three, the outer pair aligns and the middle
/// is sized independently.
fn divy(set: &mut ColumnSet) {
    let widths: Vec<usize> = set
        .columns()
        .iter()
        .map(PickerColumn::longest_text)
        .collect();
    let columns = set.columns_mut();
    match widths.as_slice() {
        [first, second] => {
            let width = (*first).max(*second);
            columns[0].align = Some(ColumnAlign::Right);
            columns[1].align = Some(ColumnAlign::Left);
            columns[0].options_width = Some(width);
            columns[1].options_width = Some(width);
        }
        [first, middle, last] => {
            let width = (*first).max(*last);
            columns[0].align = Some(ColumnAlign::Right);
            columns[2].align = Some(ColumnAlign::Left);
            columns[0].options_width = Some(width);
            columns[2].options_width = Some(width);
            columns[1].column_width = Some(*middle);
        }
        _ => {}
    }
}
