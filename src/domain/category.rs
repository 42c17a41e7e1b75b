//! Fixed category set offered by the activity forms.

use std::{fmt, str::FromStr};

use crate::errors::ActivityError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActivityCategory {
    #[default]
    Income,
    Expense,
    Savings,
    Investment,
    Housing,
    Food,
    Transport,
}

impl ActivityCategory {
    /// Menu order.
    pub const ALL: [ActivityCategory; 7] = [
        ActivityCategory::Income,
        ActivityCategory::Expense,
        ActivityCategory::Savings,
        ActivityCategory::Investment,
        ActivityCategory::Housing,
        ActivityCategory::Food,
        ActivityCategory::Transport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Income => "Income",
            ActivityCategory::Expense => "Expense",
            ActivityCategory::Savings => "Savings",
            ActivityCategory::Investment => "Investment",
            ActivityCategory::Housing => "Housing",
            ActivityCategory::Food => "Food",
            ActivityCategory::Transport => "Transport",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|kind| kind.label().to_string()).collect()
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the label in any case or the 1-based menu position.
impl FromStr for ActivityCategory {
    type Err = ActivityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Ok(position) = trimmed.parse::<usize>() {
            if let Some(kind) = position
                .checked_sub(1)
                .and_then(|idx| Self::ALL.get(idx))
            {
                return Ok(*kind);
            }
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ActivityError::validation(format!(
                    "Category must be one of: {}",
                    Self::labels().join(", ")
                ))
            })
    }
}
