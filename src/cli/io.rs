use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Mirrors display-related configuration into the output module.
pub fn apply_config(config: &Config) {
    let mut prefs: OutputPreferences = output::current_preferences();
    prefs.plain_mode = config.plain_mode || std::env::var_os("NO_COLOR").is_some();
    output::set_preferences(prefs);
}

/// Yes/no question on the terminal.
pub fn confirm_action(prompt: &str) -> Result<bool, dialoguer::Error> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
}
