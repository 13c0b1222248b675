//! The picker session engine.
//!
//! A `DateTimePicker` owns one value record, one resolved bound window,
//! and one column set. Everything runs synchronously on the calling
//! thread; every entry point leaves the model fully re-validated, so the
//! engine tolerates any number of selection changes between commits.

use alloc::string::String;
use alloc::vec::Vec;

use crate::bounds::{self, Bounds};
use crate::columns::{self, ColumnSet, PickerColumn};
use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::fields::{FieldKey, PartialDateTime, Today};
use crate::format::{self, DEFAULT_FORMAT};
use crate::options::PickerConfig;
use crate::validate;
use crate::PickerResult;

/// A template-driven datetime picker session.
#[derive(Debug, Clone)]
pub struct DateTimePicker {
    config: PickerConfig,
    today: Today,
    value: PartialDateTime,
    bounds: Bounds,
    /// Bounds with absent-column fields neutralized to 0 so they never
    /// contribute to disabling; recomputed by every `generate`.
    validation_bounds: Bounds,
    columns: ColumnSet,
    diagnostics: Diagnostics,
}

impl DateTimePicker {
    /// Creates a session with an explicit current date.
    pub fn new(config: PickerConfig, today: Today) -> Self {
        Self {
            config,
            today,
            value: PartialDateTime::new(),
            bounds: Bounds::default(),
            validation_bounds: Bounds::default(),
            columns: ColumnSet::default(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Creates a session dated from the system clock.
    #[cfg(feature = "sys")]
    pub fn with_system_clock(config: PickerConfig) -> PickerResult<Self> {
        Ok(Self::new(config, Today::system()?))
    }

    /// The template that determines the picker's columns.
    fn column_template(&self) -> &str {
        self.config
            .picker_format
            .as_deref()
            .or(self.config.display_format.as_deref())
            .unwrap_or(DEFAULT_FORMAT)
    }

    /// The template used for display text.
    fn display_template(&self) -> &str {
        self.config
            .display_format
            .as_deref()
            .or(self.config.picker_format.as_deref())
            .unwrap_or(DEFAULT_FORMAT)
    }

    /// Builds the column set for the session: resolve bounds, tokenize
    /// the picker template, populate and preselect every column, then
    /// run a first validation pass.
    pub fn generate(&mut self) {
        self.check_name_tables();
        let template = self.column_template();
        let tokens = format::tokenize_for_columns(template);
        if format::tokenize(template).is_empty() {
            self.diagnostics.report(
                DiagnosticKind::EmptyTemplate,
                alloc::format!("template {template:?} has no format tokens, using the default"),
            );
        }
        self.bounds = bounds::resolve(
            self.config.min.as_deref(),
            self.config.max.as_deref(),
            self.config.overrides.year.as_deref(),
            self.today,
            &mut self.diagnostics,
        );
        self.columns = columns::generate(
            &tokens,
            &self.bounds,
            &self.config.overrides,
            &self.value,
            &self.config.names,
            &mut self.diagnostics,
        );
        self.validation_bounds = self.neutralized_bounds();
        self.revalidate();
    }

    /// A provided name table that is too short still renders (entries
    /// past its end fall back to English), but the host should hear
    /// about it.
    fn check_name_tables(&mut self) {
        let names = &self.config.names;
        let tables = [
            ("monthNames", names.month_names.as_deref(), 12),
            ("monthShortNames", names.month_short_names.as_deref(), 12),
            ("dayNames", names.day_names.as_deref(), 7),
            ("dayShortNames", names.day_short_names.as_deref(), 7),
        ];
        for (label, table, expected) in tables {
            if let Some(table) = table {
                if table.len() < expected {
                    self.diagnostics.report(
                        DiagnosticKind::MalformedNames,
                        alloc::format!(
                            "{label} has {} entries, expected {expected}",
                            table.len()
                        ),
                    );
                }
            }
        }
    }

    /// Bounds where each of month/day/hour/minute without a column is
    /// zeroed on both sides, so an absent field can never disable.
    fn neutralized_bounds(&self) -> Bounds {
        let mut bounds = self.bounds;
        if self.columns.column(FieldKey::Month).is_none() {
            bounds.min.month = 0;
            bounds.max.month = 0;
        }
        if self.columns.column(FieldKey::Day).is_none() {
            bounds.min.day = 0;
            bounds.max.day = 0;
        }
        if self.columns.column(FieldKey::Hour).is_none() {
            bounds.min.hour = 0;
            bounds.max.hour = 0;
        }
        if self.columns.column(FieldKey::Minute).is_none() {
            bounds.min.minute = 0;
            bounds.max.minute = 0;
        }
        bounds
    }

    /// Re-marks every column's disabled options. The host's
    /// column-change subscription should land here (or in [`select`],
    /// which calls through).
    ///
    /// [`select`]: Self::select
    pub fn revalidate(&mut self) {
        validate::run(&mut self.columns, &self.validation_bounds, self.today.year);
    }

    /// Applies a user selection change and re-validates. Returns `false`
    /// for an unknown column or out-of-range index, leaving the model
    /// untouched.
    pub fn select(&mut self, key: FieldKey, index: usize) -> bool {
        let Some(column) = self.columns.column_mut(key) else {
            return false;
        };
        if index >= column.options.len() {
            return false;
        }
        column.selected_index = index;
        self.revalidate();
        true
    }

    /// The currently selected value of a column, if it exists.
    #[must_use]
    pub fn selected_value(&self, key: FieldKey) -> Option<i32> {
        self.columns
            .column(key)
            .and_then(PickerColumn::selected)
            .map(|option| option.value)
    }

    /// Merges a partial record into the current value. Fields absent
    /// from the incoming record are preserved untouched.
    pub fn set_value(&mut self, value: &PartialDateTime) {
        self.value.update(value);
    }

    /// Parses an ISO-8601 subset string and merges it into the value.
    pub fn set_iso(&mut self, text: &str) -> PickerResult<()> {
        let parsed = crate::parsers::parse_partial(text)?;
        self.value.update(&parsed);
        Ok(())
    }

    /// The current value record.
    #[must_use]
    pub fn value(&self) -> &PartialDateTime {
        &self.value
    }

    /// Renders the current value under the session's display format.
    #[must_use]
    pub fn display_text(&self) -> String {
        format::render_datetime(self.display_template(), &self.value, &self.config.names)
    }

    /// Renders the current value under an arbitrary template.
    #[must_use]
    pub fn render_text(&self, template: &str) -> String {
        format::render_datetime(template, &self.value, &self.config.names)
    }

    /// Commits the current selections: column values merge into the
    /// value record (fields outside the template stay untouched) and the
    /// result is serialized to its minimal ISO form.
    pub fn commit(&mut self) -> String {
        for column in self.columns.columns() {
            if matches!(column.key, FieldKey::Meridiem | FieldKey::Offset) {
                continue;
            }
            if let Some(option) = column.selected() {
                self.value.set_field(column.key, option.value);
            }
        }
        self.value.to_iso()
    }

    /// The populated picker surface.
    #[must_use]
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// One column of the surface, by field key.
    #[must_use]
    pub fn column(&self, key: FieldKey) -> Option<&PickerColumn> {
        self.columns.column(key)
    }

    /// The resolved bound window (meaningful after [`generate`]).
    ///
    /// [`generate`]: Self::generate
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Issues reported so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    /// Removes and returns all reported issues.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const TODAY: Today = Today::new(2026, 8, 27);

    fn picker(config: PickerConfig) -> DateTimePicker {
        let mut picker = DateTimePicker::new(config, TODAY);
        picker.generate();
        picker
    }

    fn config(template: &str, min: Option<&str>, max: Option<&str>) -> PickerConfig {
        PickerConfig {
            display_format: Some(template.to_string()),
            min: min.map(String::from),
            max: max.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn generates_columns_in_template_order() {
        let picker = picker(config("MM/YYYY", None, None));
        let keys: Vec<FieldKey> = picker
            .columns()
            .columns()
            .iter()
            .map(|column| column.key)
            .collect();
        assert_eq!(keys, [FieldKey::Month, FieldKey::Year]);
    }

    #[test]
    fn picker_format_wins_over_display_format() {
        let mut config = config("MM/YYYY", None, None);
        config.picker_format = Some("MMMM YYYY".to_string());
        let picker = picker(config);
        let month = picker.column(FieldKey::Month).unwrap();
        assert_eq!(month.options[0].text, "January");
    }

    #[test]
    fn select_updates_and_revalidates() {
        let mut picker = picker(config("MM/DD/YYYY", Some("2016"), Some("2020-10-31")));
        let year_index = picker
            .column(FieldKey::Year)
            .unwrap()
            .options
            .iter()
            .position(|option| option.value == 2020)
            .unwrap();
        assert!(picker.select(FieldKey::Year, year_index));
        let month = picker.column(FieldKey::Month).unwrap();
        assert!(month.options[10].disabled);
        assert!(month.options[11].disabled);
        assert!(!month.options[9].disabled);
    }

    #[test]
    fn select_rejects_bad_input() {
        let mut picker = picker(config("MM/YYYY", None, None));
        assert!(!picker.select(FieldKey::Hour, 0));
        assert!(!picker.select(FieldKey::Month, 999));
    }

    #[test]
    fn commit_merges_only_template_fields() {
        let mut picker = picker(config("HH:mm", None, None));
        picker.set_iso("1994-12-15T13:47").unwrap();
        picker.generate();
        let hour_index = picker
            .column(FieldKey::Hour)
            .unwrap()
            .options
            .iter()
            .position(|option| option.value == 8)
            .unwrap();
        picker.select(FieldKey::Hour, hour_index);
        let iso = picker.commit();
        // The date fields outside the template are preserved.
        assert_eq!(iso, "1994-12-15T08:47");
        assert_eq!(picker.value().day, Some(15));
    }

    #[test]
    fn display_text_uses_display_format() {
        let mut picker = picker(config("MMM DD, YYYY", None, None));
        picker.set_iso("2005-06-17").unwrap();
        assert_eq!(picker.display_text(), "Jun 17, 2005");
        assert_eq!(picker.render_text("DD.MM.YYYY"), "17.06.2005");
    }

    #[test]
    fn rapid_scrubbing_keeps_model_consistent() {
        let mut picker = picker(config("MM/DD/YYYY", Some("2016"), Some("2020-10-31")));
        for _ in 0..3 {
            for index in 0..5 {
                picker.select(FieldKey::Year, index);
            }
            for index in 0..12 {
                picker.select(FieldKey::Month, index);
            }
        }
        // Last selection: year 2020, month 12 -> December is marked but
        // still selected, and the day column tracks December's length.
        assert_eq!(picker.selected_value(FieldKey::Year), Some(2020));
        let month = picker.column(FieldKey::Month).unwrap();
        assert!(month.selected().unwrap().disabled);
        let day = picker.column(FieldKey::Day).unwrap();
        assert!(day.options.iter().all(|option| option.disabled));
    }

    #[test]
    fn configuration_problems_are_reported_not_fatal() {
        let mut bad = config("-- --", None, None);
        bad.names.month_short_names = Some(alloc::vec![String::from("jan")]);
        let mut picker = picker(bad);
        let kinds: Vec<DiagnosticKind> = picker
            .take_diagnostics()
            .into_iter()
            .map(|diagnostic| diagnostic.kind)
            .collect();
        assert!(kinds.contains(&DiagnosticKind::MalformedNames));
        assert!(kinds.contains(&DiagnosticKind::EmptyTemplate));
        assert!(picker.diagnostics().is_empty());
        // The default template still produced columns.
        assert!(!picker.columns().is_empty());
    }

    #[test]
    fn empty_value_commit_is_empty() {
        let mut picker = DateTimePicker::new(PickerConfig::default(), TODAY);
        assert_eq!(picker.commit(), "");
    }
}
