//! The `wheelpicker` crate is a template-driven datetime picker model:
//! given a display format, optional bounds, and optional per-field value
//! lists, it generates the wheel columns a picker UI should show and keeps
//! their options validated against the bounds as the user scrolls.
//!
//! ```rust
//! use wheelpicker::{DateTimePicker, FieldKey, PickerConfig, Today};
//!
//! let config = PickerConfig {
//!     display_format: Some("MM/DD/YYYY".into()),
//!     min: Some("2016".into()),
//!     max: Some("2020-10-31".into()),
//!     ..Default::default()
//! };
//! let mut picker = DateTimePicker::new(config, Today::new(2026, 8, 27));
//! picker.generate();
//!
//! // Scroll the year wheel to its last entry (2020): November and
//! // December become disabled because the maximum is October 31st.
//! picker.select(FieldKey::Year, 4);
//! let month = picker.column(FieldKey::Month).unwrap();
//! assert!(month.options[10].disabled && month.options[11].disabled);
//!
//! assert_eq!(picker.commit(), "2020-01-01");
//! ```
//!
//! The crate is `no_std` (with `alloc`); the `sys` feature adds a system
//! clock source for the "today" anchor.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // Currently throws a false positive regarding dependencies that are only used with features off.
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bounds;
pub mod columns;
pub mod diagnostics;
pub mod error;
pub mod fields;
pub mod format;
pub mod options;
pub mod parsers;
pub mod picker;

#[cfg(feature = "sys")]
pub(crate) mod sys;

pub(crate) mod utils;
pub(crate) mod validate;

/// Re-export of `TinyAsciiStr` from `tinystr`, used for stored offsets.
pub use tinystr::TinyAsciiStr;

#[doc(inline)]
pub use error::{ErrorKind, PickerError};

/// The `wheelpicker` result type
pub type PickerResult<T> = Result<T, PickerError>;

pub use crate::{
    bounds::{BoundDateTime, Bounds},
    columns::{ColumnAlign, ColumnOption, ColumnSet, PickerColumn},
    diagnostics::{Diagnostic, DiagnosticKind},
    fields::{FieldKey, PartialDateTime, Today},
    format::DEFAULT_FORMAT,
    options::{FieldOverrides, LocaleNames, PickerConfig},
    picker::DateTimePicker,
};
