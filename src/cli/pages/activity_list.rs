//! Activity list with a table, per-activity cards, and page totals.

use crate::cli::forms::ActivityForm;
use crate::cli::output::{styled, MessageKind};
use crate::cli::pages::{
    actions_hint, collect, delete_notice, delete_numbered, entry, record_number, unsupported,
    PageAction, PageOutcome, PageView,
};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::Formatter;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::core::Notice;
use crate::domain::{Activity, PageId};
use crate::utils::format::{format_money, format_percent};

pub fn render(view: &PageView<'_>) -> String {
    let fmt = Formatter::new();
    let state = &view.session.activity_list;
    let money = |amount: f64| format_money(view.currency, amount);

    let mut lines = vec![fmt.header(PageId::ActivityList.title())];

    if state.store.is_empty() {
        lines.push(styled(
            MessageKind::Info,
            "No activities recorded yet. Add one with `add <name> <category> <budget> <spend>`.",
        ));
        lines.push(fmt.caption(actions_hint(PageId::ActivityList)));
        return lines.join("\n");
    }

    lines.push("Recorded activities".into());
    lines.push(activity_table(state.store.list(), view.currency, &fmt));

    lines.push(String::new());
    lines.push("Per-activity evaluation".into());
    for (number, activity) in state.store.list().iter().enumerate().map(|(i, a)| (i + 1, a)) {
        lines.push(format!("Activity {number}: {}", activity.name));
        lines.push(fmt.metric("Category", activity.category));
        lines.push(fmt.metric("Budget", money(activity.budget)));
        lines.push(fmt.metric("Actual spend", money(activity.actual_spend)));
        lines.push(fmt.metric(
            "Status",
            fmt.status(activity.is_within_budget(), activity.status_label()),
        ));
        lines.push(fmt.metric("Difference", money(activity.difference())));
        let used = match activity.percent_used() {
            Some(percent) => format_percent(Some(percent)),
            None => format!("{} (budget = 0)", format_percent(None)),
        };
        lines.push(fmt.metric("% used", used));
    }

    let summary = state.summary();
    lines.push(String::new());
    lines.push("Summary".into());
    lines.push(fmt.metric("Total budget", money(summary.total_budget)));
    lines.push(fmt.metric("Total spend", money(summary.total_spend)));
    lines.push(fmt.metric("Difference", money(summary.difference)));
    lines.push(fmt.metric("Within budget", summary.ratio_label()));
    lines.push(String::new());
    lines.push(fmt.caption(actions_hint(PageId::ActivityList)));
    lines.join("\n")
}

pub(crate) fn activity_table(activities: &[Activity], currency: &str, fmt: &Formatter) -> String {
    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Name").max(24),
        TableColumn::left("Category"),
        TableColumn::right("Budget"),
        TableColumn::right("Actual spend"),
        TableColumn::right("Difference"),
        TableColumn::left("Status"),
    ]);
    for (idx, activity) in activities.iter().enumerate() {
        table.push_row(vec![
            (idx + 1).to_string(),
            activity.name.clone(),
            activity.category.to_string(),
            format_money(currency, activity.budget),
            format_money(currency, activity.actual_spend),
            format_money(currency, activity.difference()),
            fmt.status(activity.is_within_budget(), activity.status_label()),
        ]);
    }
    table.render()
}

pub fn handle(context: &mut ShellContext, action: PageAction, args: &[&str]) -> PageOutcome {
    let page = PageId::ActivityList;
    match action {
        PageAction::Add => {
            let Some(activity) = collect(context, &ActivityForm::new(), args)? else {
                return Ok(None);
            };
            let name = activity.name.clone();
            match context.session.activity_list.store.add(activity) {
                Ok(()) => context
                    .session
                    .push_notice(page, Notice::success(format!("Activity '{name}' recorded."))),
                Err(err) => context
                    .session
                    .push_notice(page, Notice::warning(err.to_string())),
            }
        }
        PageAction::Clear => {
            context.session.activity_list.store.clear();
            context
                .session
                .push_notice(page, Notice::success("Activity list cleared."));
        }
        PageAction::Delete => {
            let number = record_number(args)?;
            let result = delete_numbered(&mut context.session.activity_list.store, number);
            let notice = delete_notice(number, result, "activity", |a: &Activity| a.name.clone());
            context.session.push_notice(page, notice);
        }
        other => return Err(unsupported(entry(page), other)),
    }
    Ok(None)
}
