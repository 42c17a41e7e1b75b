use std::fmt;

use colored::Colorize;

use crate::cli::output::{current_preferences, OutputPreferences};

/// Text builders shared by the page renderers. Nothing here prints.
pub struct Formatter {
    prefs: OutputPreferences,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            prefs: current_preferences(),
        }
    }

    pub fn header(&self, title: impl fmt::Display) -> String {
        let text = format!("=== {title} ===");
        if self.prefs.plain_mode {
            text
        } else {
            text.bold().to_string()
        }
    }

    pub fn caption(&self, text: impl fmt::Display) -> String {
        if self.prefs.plain_mode {
            text.to_string()
        } else {
            text.to_string().dimmed().to_string()
        }
    }

    /// `label: value` with the label padded so metric blocks line up.
    pub fn metric(&self, label: &str, value: impl fmt::Display) -> String {
        format!("  {:<18} {}", format!("{label}:"), value)
    }

    /// Status word coloured green when within budget and red otherwise.
    pub fn status(&self, within_budget: bool, label: &str) -> String {
        if self.prefs.plain_mode {
            return label.to_string();
        }
        if within_budget {
            label.green().to_string()
        } else {
            label.red().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_pads_label() {
        let line = Formatter::new().metric("Total budget", "S/ 600.00");
        assert!(line.starts_with("  Total budget:"));
        assert!(line.ends_with("S/ 600.00"));
    }
}
