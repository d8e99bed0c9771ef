// hdentropy/src/ui/output_format.rs
//! Formatting of status messages written to stderr.
//!
//! Colour is applied only when the caller says the destination supports it,
//! so redirected output stays free of escape codes.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warn,
    Error,
}

impl MessageKind {
    fn prefix(self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "done",
            MessageKind::Warn => "warning",
            MessageKind::Error => "error",
        }
    }
}

/// Writes `prefix: message` followed by a newline.
pub fn print_message<W: Write + ?Sized>(
    writer: &mut W,
    kind: MessageKind,
    message: &str,
    supports_color: bool,
) -> io::Result<()> {
    let prefix = kind.prefix();
    if !supports_color {
        return writeln!(writer, "{}: {}", prefix, message);
    }
    match kind {
        MessageKind::Info => writeln!(writer, "{}: {}", prefix.cyan(), message),
        MessageKind::Success => writeln!(writer, "{}: {}", prefix.green().bold(), message),
        MessageKind::Warn => writeln!(writer, "{}: {}", prefix.yellow().bold(), message),
        MessageKind::Error => writeln!(writer, "{}: {}", prefix.red().bold(), message),
    }
}

pub fn print_info_message<W: Write + ?Sized>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Info, message, supports_color)
}

pub fn print_success_message<W: Write + ?Sized>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Success, message, supports_color)
}

pub fn print_warn_message<W: Write + ?Sized>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Warn, message, supports_color)
}

pub fn print_error_message<W: Write + ?Sized>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, MessageKind::Error, message, supports_color)
}
