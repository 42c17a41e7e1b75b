use crate::config::MAX_AMOUNT;
use crate::utils::format::format_money;

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Record-level checks run by a store before accepting a record.
pub trait Validate {
    fn validate(&self) -> crate::errors::Result<()>;
}

/// Shared amount check for budgets and spends.
pub(crate) fn ensure_amount(label: &str, value: f64) -> crate::errors::Result<()> {
    if !value.is_finite() {
        return Err(crate::errors::ActivityError::validation(format!(
            "{label} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(crate::errors::ActivityError::validation(format!(
            "{label} must be zero or positive"
        )));
    }
    if value > MAX_AMOUNT {
        return Err(crate::errors::ActivityError::validation(format!(
            "{label} must not exceed {}",
            format_money("", MAX_AMOUNT)
        )));
    }
    Ok(())
}

/// Trimmed name or a validation error when nothing is left.
pub(crate) fn ensure_name(raw: &str) -> crate::errors::Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(crate::errors::ActivityError::validation(
            "Enter the activity name.",
        ))
    } else {
        Ok(trimmed.to_string())
    }
}
