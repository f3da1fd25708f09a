//! Console lines shown while a report runs. Progress goes to stdout, HTTP
//! failures to stderr, next to the tracing output.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

fn emit(tone: Tone, msg: impl fmt::Display) {
    let line = format!("{}{}{} {}{}", tone.color(), BOLD, tone.icon(), RESET, msg);
    match tone {
        Tone::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

/// Progress, e.g. the course being processed.
pub fn info<T: fmt::Display>(msg: T) {
    emit(Tone::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Tone::Success, msg);
}

/// Degraded but recoverable, e.g. a course name that could not be looked up.
pub fn warning<T: fmt::Display>(msg: T) {
    emit(Tone::Warning, msg);
}

/// A failed Canvas request (`Error: <status>`). Written to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    emit(Tone::Error, msg);
}

/// Course banner printed before its assignments are fetched.
pub fn header<T: fmt::Display>(label: T) {
    println!("{}{}== {} =={}", Tone::Info.color(), BOLD, label, RESET);
}
