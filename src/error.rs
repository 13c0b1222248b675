//! This module implements `PickerError`.

use alloc::borrow::Cow;
use core::fmt;

/// `ErrorKind` maps to the broad category of failure the
/// engine can produce.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A generic error, usually a failed host interaction.
    #[default]
    Generic,
    /// A malformed textual input.
    Syntax,
    /// A value outside its legal domain.
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "generic".fmt(f),
            Self::Syntax => "syntax".fmt(f),
            Self::Range => "range".fmt(f),
        }
    }
}

/// The error type produced by the picker engine.
///
/// Most malformed configuration is deliberately *not* an error: the
/// engine degrades and reports through [`Diagnostics`][crate::diagnostics::Diagnostics]
/// instead, so a picker can always be rendered. `PickerError` is reserved
/// for host-facing entry points with no degradation path, such as parsing
/// an ISO value handed to [`set_iso`][crate::DateTimePicker::set_iso].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl PickerError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a general error with the provided message.
    #[inline]
    #[must_use]
    pub fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Creates a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Attaches a message to this error.
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the attached message, if any.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for PickerError {}
