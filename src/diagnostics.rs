//! Non-fatal findings collected while normalising and laying out a schedule.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Wrapped text is wider than its rectangle plus the correction margin.
    TextTooWide,
    /// Wrapped text is taller than its rectangle.
    TextTooHigh,
    /// Event shorter than the recommended minimum duration.
    ShortEvent,
    /// Event starts before or ends after the document's time window.
    OutsideTimeWindow,
    /// Event references a category that is not defined.
    UnknownCategory,
    /// Event lists no columns.
    NoColumns,
    /// None of the event's columns is part of the day's column layout.
    UnmatchedColumn,
    /// Two days share the same offset.
    DuplicateOffset,
}

impl DiagnosticKind {
    /// Short kebab-case name used when printing diagnostics.
    pub fn tag(self) -> &'static str {
        match self {
            DiagnosticKind::TextTooWide => "text-too-wide",
            DiagnosticKind::TextTooHigh => "text-too-high",
            DiagnosticKind::ShortEvent => "short-event",
            DiagnosticKind::OutsideTimeWindow => "outside-time-window",
            DiagnosticKind::UnknownCategory => "unknown-category",
            DiagnosticKind::NoColumns => "no-columns",
            DiagnosticKind::UnmatchedColumn => "unmatched-column",
            DiagnosticKind::DuplicateOffset => "duplicate-offset",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("{message}");
        Self { kind, message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
