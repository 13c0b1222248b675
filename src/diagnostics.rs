//! Structured diagnostics for best-effort degradation.
//!
//! Malformed configuration never aborts picker construction; the engine
//! repairs or falls back and records what it did here. Hosts can drain
//! the channel and decide whether anything is worth surfacing.

use alloc::string::String;
use alloc::vec::Vec;

/// The category of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiagnosticKind {
    /// An explicit value list coerced to zero usable entries; the
    /// domain-derived list was used instead.
    MalformedOverride,
    /// A name table coerced to zero usable entries; built-in English
    /// names were used instead.
    MalformedNames,
    /// `min` exceeded `max` at some granularity and was repaired.
    InvertedBounds,
    /// A textual bound failed to parse and was replaced by its default.
    UnparsableBound,
    /// The template produced zero tokens; the built-in default template
    /// was used.
    EmptyTemplate,
}

/// A single reported issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// An ordered collection of [`Diagnostic`]s for one picker session.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    reports: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        #[cfg(feature = "log")]
        log::warn!("{kind:?}: {message}");
        self.reports.push(Diagnostic { kind, message });
    }

    /// Returns the reports collected so far.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.reports
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Removes and returns all collected reports.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        core::mem::take(&mut self.reports)
    }
}
