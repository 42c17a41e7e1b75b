use std::fmt;
use std::sync::RwLock;

use colored::Colorize;
use once_cell::sync::Lazy;

use crate::core::{Notice, NoticeLevel};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    /// No colours and ASCII-only decorations.
    pub plain_mode: bool,
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind, plain: bool) -> &'static str {
    match (kind, plain) {
        (MessageKind::Info, _) => "",
        (MessageKind::Success, true) => "OK:",
        (MessageKind::Success, false) => "✔",
        (MessageKind::Warning, true) => "WARNING:",
        (MessageKind::Warning, false) => "⚠",
        (MessageKind::Error, true) => "ERROR:",
        (MessageKind::Error, false) => "✖",
        (MessageKind::Hint, _) => "hint:",
        (MessageKind::Section, _) => "",
    }
}

/// Builds the final line for `message`, honouring the active preferences.
pub fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let prefs = current_preferences();
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => match label(kind, prefs.plain_mode) {
            "" => text,
            prefix => format!("{prefix} {text}"),
        },
    };

    if prefs.plain_mode {
        return base;
    }

    match kind {
        MessageKind::Success => base.green().to_string(),
        MessageKind::Warning => base.yellow().to_string(),
        MessageKind::Error => base.red().to_string(),
        MessageKind::Hint => base.dimmed().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let line = styled(kind, message);
    match kind {
        MessageKind::Section => println!("\n{line}"),
        _ => println!("{line}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn notice_kind(level: NoticeLevel) -> MessageKind {
    match level {
        NoticeLevel::Info => MessageKind::Info,
        NoticeLevel::Success => MessageKind::Success,
        NoticeLevel::Warning => MessageKind::Warning,
        NoticeLevel::Error => MessageKind::Error,
    }
}

pub fn notice(notice: &Notice) {
    print(notice_kind(notice.level), &notice.message);
}
