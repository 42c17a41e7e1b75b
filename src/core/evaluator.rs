//! Budget-versus-spend evaluation shared by every page.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetEvaluation {
    pub within_budget: bool,
    /// `budget - spend`; negative when over budget.
    pub difference: f64,
}

/// Inputs are expected to be non-negative; the intake layer enforces that.
pub fn evaluate(budget: f64, spend: f64) -> BudgetEvaluation {
    BudgetEvaluation {
        within_budget: spend <= budget,
        difference: budget - spend,
    }
}

/// Share of the budget already spent, undefined for a zero budget.
pub fn percent_used(budget: f64, spend: f64) -> Option<f64> {
    if budget > 0.0 {
        Some(spend / budget * 100.0)
    } else {
        None
    }
}
