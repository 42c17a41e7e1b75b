//! Activity records captured by the budgeting pages.

use crate::core::evaluator::{self, BudgetEvaluation};
use crate::domain::category::ActivityCategory;
use crate::domain::common::{ensure_amount, ensure_name, NamedEntity, Validate};
use crate::errors::Result;
use crate::utils::format::format_money;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "S/";

/// A named entry with a category, a budget, and what was actually spent.
///
/// Derived values (difference, percentage used, status) are computed on demand
/// and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub category: ActivityCategory,
    pub budget: f64,
    pub actual_spend: f64,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        category: ActivityCategory,
        budget: f64,
        actual_spend: f64,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            category,
            budget,
            actual_spend,
        }
    }

    pub fn evaluation(&self) -> BudgetEvaluation {
        evaluator::evaluate(self.budget, self.actual_spend)
    }

    pub fn is_within_budget(&self) -> bool {
        self.evaluation().within_budget
    }

    pub fn difference(&self) -> f64 {
        self.evaluation().difference
    }

    pub fn percent_used(&self) -> Option<f64> {
        evaluator::percent_used(self.budget, self.actual_spend)
    }

    /// Amount spent beyond the budget, `None` while within it.
    pub fn excess(&self) -> Option<f64> {
        if self.is_within_budget() {
            None
        } else {
            Some(self.actual_spend - self.budget)
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_within_budget() {
            "Within budget"
        } else {
            "Over budget"
        }
    }

    pub fn describe(&self) -> String {
        self.describe_with(DEFAULT_CURRENCY_SYMBOL)
    }

    pub fn describe_with(&self, symbol: &str) -> String {
        [
            self.name.clone(),
            format!("- Category: {}", self.category),
            format!("- Budget: {}", format_money(symbol, self.budget)),
            format!("- Actual spend: {}", format_money(symbol, self.actual_spend)),
            format!("- Difference: {}", format_money(symbol, self.difference())),
            format!("- Status: {}", self.status_label()),
        ]
        .join("\n")
    }
}

impl NamedEntity for Activity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Validate for Activity {
    fn validate(&self) -> Result<()> {
        ensure_name(&self.name)?;
        ensure_amount("Budget", self.budget)?;
        ensure_amount("Actual spend", self.actual_spend)
    }
}

/// An amount invested for the return-projection page. Rate and term are
/// supplied per computation, not per record.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnActivity {
    pub name: String,
    pub budget: f64,
}

impl ReturnActivity {
    pub fn new(name: impl Into<String>, budget: f64) -> Self {
        Self {
            name: name.into().trim().to_string(),
            budget,
        }
    }
}

impl NamedEntity for ReturnActivity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Validate for ReturnActivity {
    fn validate(&self) -> Result<()> {
        ensure_name(&self.name)?;
        ensure_amount("Budget", self.budget)
    }
}
