pub mod check;
pub mod config;
pub mod render;
pub mod schema;

use crate::diagnostics::Diagnostic;
use crate::ui::messages::{diagnostic, warning};

/// Print collected diagnostics to stderr, one tagged line each, then a count.
pub(crate) fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for d in diagnostics {
        diagnostic(d);
    }
    if !diagnostics.is_empty() {
        warning(format!("{} warning(s)", diagnostics.len()));
    }
}
