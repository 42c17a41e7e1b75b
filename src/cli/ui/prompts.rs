//! Terminal prompts backing the interactive wizards.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{self, ClearType},
    ExecutableCommand,
};
use dialoguer::{theme::ColorfulTheme, Select};

pub enum TextPromptResult {
    Value(String),
    Keep,
    Back,
    Help,
    Cancel,
}

pub enum ChoicePromptResult {
    Value(String),
    Back,
    Cancel,
}

pub enum ConfirmationPromptResult {
    Confirm,
    Back,
    Cancel,
}

const BACK_LABEL: &str = "← Back";

/// Reads one line in raw mode. Esc or Ctrl+C cancel, Ctrl+U clears the buffer,
/// and an empty line keeps `default` when there is one.
pub fn text_input(label: &str, default: Option<&str>) -> io::Result<TextPromptResult> {
    match default {
        Some(value) if !value.is_empty() => println!("{label} [{value}]"),
        _ => println!("{label}"),
    }

    let mut guard = RawModeGuard::activate()?;
    let mut stdout = io::stdout();
    let mut buffer = String::new();
    redraw_input(&mut stdout, &buffer)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') if ctrl => {
                guard.deactivate();
                println!();
                return Ok(TextPromptResult::Cancel);
            }
            KeyCode::Char('u') | KeyCode::Char('U') if ctrl => buffer.clear(),
            KeyCode::Esc => {
                guard.deactivate();
                println!();
                return Ok(TextPromptResult::Cancel);
            }
            KeyCode::Enter => {
                guard.deactivate();
                println!();
                return Ok(interpret_buffer(&buffer, default));
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(ch) => buffer.push(ch),
            _ => continue,
        }
        redraw_input(&mut stdout, &buffer)?;
    }
}

pub fn choice_menu(
    title: &str,
    options: &[String],
    default: Option<&str>,
    enable_back: bool,
) -> io::Result<ChoicePromptResult> {
    if options.is_empty() {
        return Ok(ChoicePromptResult::Cancel);
    }

    let mut items: Vec<String> = options.to_vec();
    if enable_back {
        items.push(BACK_LABEL.to_string());
    }
    let initial = default
        .and_then(|label| {
            options
                .iter()
                .position(|candidate| candidate.eq_ignore_ascii_case(label))
        })
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(title)
        .items(&items)
        .default(initial)
        .interact_opt()
        .map_err(dialoguer_to_io)?;

    Ok(match selection {
        Some(index) if index >= options.len() => ChoicePromptResult::Back,
        Some(index) => ChoicePromptResult::Value(options[index].clone()),
        None => ChoicePromptResult::Cancel,
    })
}

pub fn confirm_menu(summary: &[String]) -> io::Result<ConfirmationPromptResult> {
    for line in summary {
        println!("{line}");
    }
    let items = ["Confirm", "Edit previous field", "Cancel"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Review entries")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(dialoguer_to_io)?;

    Ok(match selection {
        Some(0) => ConfirmationPromptResult::Confirm,
        Some(1) => ConfirmationPromptResult::Back,
        _ => ConfirmationPromptResult::Cancel,
    })
}

fn dialoguer_to_io(err: dialoguer::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}

fn redraw_input(stdout: &mut Stdout, buffer: &str) -> io::Result<()> {
    stdout.execute(cursor::MoveToColumn(0))?;
    stdout.execute(terminal::Clear(ClearType::CurrentLine))?;
    write!(stdout, "> {buffer}")?;
    stdout.flush()
}

fn interpret_buffer(buffer: &str, default: Option<&str>) -> TextPromptResult {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return if default.is_some() {
            TextPromptResult::Keep
        } else {
            TextPromptResult::Value(String::new())
        };
    }

    match trimmed.to_ascii_lowercase().as_str() {
        ":cancel" => TextPromptResult::Cancel,
        ":back" => TextPromptResult::Back,
        ":help" | "?" => TextPromptResult::Help,
        _ => TextPromptResult::Value(buffer.to_string()),
    }
}

struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }

    fn deactivate(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_keeps_default_only_when_present() {
        assert!(matches!(
            interpret_buffer("  ", Some("500")),
            TextPromptResult::Keep
        ));
        assert!(matches!(
            interpret_buffer("", None),
            TextPromptResult::Value(value) if value.is_empty()
        ));
    }

    #[test]
    fn control_words_are_recognised() {
        assert!(matches!(interpret_buffer(":back", None), TextPromptResult::Back));
        assert!(matches!(interpret_buffer(":cancel", None), TextPromptResult::Cancel));
        assert!(matches!(interpret_buffer("?", None), TextPromptResult::Help));
        assert!(matches!(
            interpret_buffer("Rent", None),
            TextPromptResult::Value(value) if value == "Rent"
        ));
    }
}
