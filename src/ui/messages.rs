//! User-facing status lines. Info and success go to stdout; warnings,
//! diagnostics and errors go to stderr so `render ... > log` keeps them
//! visible. ANSI colours are only emitted when the stream is a terminal.

use crate::diagnostics::Diagnostic;
use std::fmt;
use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

fn emit(level: Level, msg: impl fmt::Display) {
    let line = |styled: bool| {
        if styled {
            format!("{}{}{}{} {}", level.color(), BOLD, level.icon(), RESET, msg)
        } else {
            format!("{} {}", level.icon(), msg)
        }
    };

    // a closed pipe is not worth a panic
    if level.to_stderr() {
        let stderr = io::stderr();
        let styled = stderr.is_terminal();
        writeln!(stderr.lock(), "{}", line(styled)).ok();
    } else {
        let stdout = io::stdout();
        let styled = stdout.is_terminal();
        writeln!(stdout.lock(), "{}", line(styled)).ok();
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Layout or validation finding, tagged with its kind:
/// `[text-too-wide] Text too wide in 'Run': 60.0 > 51.0`.
pub fn diagnostic(d: &Diagnostic) {
    emit(Level::Warning, format_args!("[{}] {}", d.kind.tag(), d.message));
}

/// Section header for tabular output.
pub fn header<T: fmt::Display>(msg: T) {
    let styled = io::stdout().is_terminal();
    if styled {
        println!("{}{}== {} =={}", Level::Info.color(), BOLD, msg, RESET);
    } else {
        println!("== {} ==", msg);
    }
}
