//! Single-record budget check: one month, one budget, one spend.

use crate::cli::forms::BudgetCheckForm;
use crate::cli::output::{styled, MessageKind};
use crate::cli::pages::{
    actions_hint, collect, entry, unsupported, PageAction, PageOutcome, PageView,
};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::Formatter;
use crate::core::Notice;
use crate::domain::PageId;
use crate::utils::format::format_money;

pub fn render(view: &PageView<'_>) -> String {
    let fmt = Formatter::new();
    let state = &view.session.budget_check;
    let money = |amount: f64| format_money(view.currency, amount);

    let evaluation = state.evaluation();

    let mut lines = vec![
        fmt.header(PageId::BudgetCheck.title()),
        "Monthly budget evaluation".into(),
        fmt.metric("Month", state.month.name()),
        fmt.metric("Budget", money(state.budget)),
        fmt.metric("Spend", money(state.spend)),
        fmt.metric("Difference", money(evaluation.difference)),
        String::new(),
        "Result".into(),
    ];

    // Only the verdict waits for `evaluate`.
    if state.evaluated {
        lines.push(if evaluation.within_budget {
            styled(MessageKind::Success, "Spend is within the budget.")
        } else {
            styled(MessageKind::Warning, "Spend exceeds the budget.")
        });
    } else {
        lines.push(fmt.caption("Run `evaluate` to show the result."));
    }

    lines.push(String::new());
    lines.push(fmt.caption(format!(
        "{} (set <month> <budget> <spend>)",
        actions_hint(PageId::BudgetCheck)
    )));
    lines.join("\n")
}

pub fn handle(context: &mut ShellContext, action: PageAction, args: &[&str]) -> PageOutcome {
    match action {
        PageAction::Set => {
            let form = BudgetCheckForm::new(&context.session.budget_check);
            if let Some(input) = collect(context, &form, args)? {
                context
                    .session
                    .budget_check
                    .set_inputs(input.month, input.budget, input.spend)?;
                context.session.push_notice(
                    PageId::BudgetCheck,
                    Notice::info(format!("Values updated for {}.", input.month.name())),
                );
            }
        }
        PageAction::Evaluate => {
            context.session.budget_check.evaluated = true;
            tracing::info!(
                within_budget = context.session.budget_check.evaluation().within_budget,
                "budget check evaluated"
            );
        }
        PageAction::Reset => context.session.reset_budget_check(),
        other => return Err(unsupported(entry(PageId::BudgetCheck), other)),
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionContext;
    use chrono::Month;

    fn view(session: &SessionContext) -> String {
        render(&PageView {
            session,
            currency: "S/",
        })
    }

    #[test]
    fn verdict_is_hidden_until_evaluated() {
        let mut session = SessionContext::new();
        let text = view(&session);
        assert!(text.contains("Run `evaluate`"));
        assert!(!text.contains("within the budget"));
        assert!(text.contains("S/ 1,000.00"));

        session.budget_check.evaluated = true;
        let text = view(&session);
        assert!(text.contains("within the budget"));
        assert!(!text.contains("Run `evaluate`"));
    }

    #[test]
    fn summary_always_shows_difference() {
        let session = SessionContext::new();
        assert!(!session.budget_check.evaluated);
        let text = view(&session);
        let line = text
            .lines()
            .find(|line| line.contains("Difference:"))
            .expect("difference line");
        assert!(line.ends_with("S/ 350.00"));
    }

    #[test]
    fn over_budget_shows_negative_difference() {
        let mut session = SessionContext::new();
        session
            .budget_check
            .set_inputs(Month::April, 100.0, 140.0)
            .unwrap();
        session.budget_check.evaluated = true;
        let text = view(&session);
        assert!(text.contains("April"));
        assert!(text.contains("exceeds the budget"));
        assert!(text.contains("S/ -40.00"));
    }
}
