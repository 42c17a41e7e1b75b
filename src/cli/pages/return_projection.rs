//! Expected returns: records hold an amount, `calc` applies one rate and term
//! to all of them.

use crate::cli::forms::{ProjectionForm, ReturnForm};
use crate::cli::output::{styled, MessageKind};
use crate::cli::pages::{
    actions_hint, collect, delete_notice, delete_numbered, entry, record_number, unsupported,
    PageAction, PageOutcome, PageView,
};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::Formatter;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::core::services::{Projection, ProjectionParams, ProjectionService, ProjectionTotals};
use crate::core::Notice;
use crate::domain::{PageId, ReturnActivity};
use crate::utils::format::{format_money, group_thousands};

const EMPTY_MESSAGE: &str = "Add at least one activity to run the calculation.";

pub fn render(view: &PageView<'_>) -> String {
    let fmt = Formatter::new();
    let records = view.session.returns.store.list();
    let mut lines = vec![fmt.header(PageId::ReturnProjection.title())];

    if records.is_empty() {
        lines.push(styled(MessageKind::Info, EMPTY_MESSAGE));
    } else {
        let mut table = Table::new(vec![
            TableColumn::right("#"),
            TableColumn::left("Name").max(24),
            TableColumn::right("Amount invested"),
        ]);
        for (idx, record) in records.iter().enumerate() {
            table.push_row(vec![
                (idx + 1).to_string(),
                record.name.clone(),
                format_money(view.currency, record.budget),
            ]);
        }
        lines.push(table.render());
    }

    lines.push(String::new());
    lines.push(fmt.caption(format!(
        "{} (add <name> <amount>, calc [rate%] [months])",
        actions_hint(PageId::ReturnProjection)
    )));
    lines.join("\n")
}

/// Projection table and totals for one `calc` run.
pub fn render_results(records: &[ReturnActivity], params: ProjectionParams, currency: &str) -> String {
    let fmt = Formatter::new();
    let rows: Vec<Projection> = ProjectionService::project(records, params).collect();
    let totals = ProjectionTotals::collect(&rows);

    let mut table = Table::new(vec![
        TableColumn::left("Name").max(24),
        TableColumn::right("Amount invested"),
        TableColumn::right("Expected return"),
    ]);
    for row in &rows {
        table.push_row(vec![
            row.name.clone(),
            format_money(currency, row.budget),
            format_money(currency, row.expected_return),
        ]);
    }

    [
        fmt.header(format!(
            "Results ({}% over {} month(s))",
            group_thousands(params.rate_percent(), 1),
            params.term_months()
        )),
        table.render(),
        String::new(),
        fmt.metric("Total invested", format_money(currency, totals.total_invested)),
        fmt.metric("Total return", format_money(currency, totals.total_return)),
        fmt.metric("Gain", format_money(currency, totals.gain)),
    ]
    .join("\n")
}

pub fn handle(context: &mut ShellContext, action: PageAction, args: &[&str]) -> PageOutcome {
    let page = PageId::ReturnProjection;
    match action {
        PageAction::Add => {
            let Some(record) = collect(context, &ReturnForm::new(), args)? else {
                return Ok(None);
            };
            let name = record.name.clone();
            match context.session.returns.store.add(record) {
                Ok(()) => context
                    .session
                    .push_notice(page, Notice::success(format!("Activity '{name}' added."))),
                Err(err) => context
                    .session
                    .push_notice(page, Notice::warning(err.to_string())),
            }
        }
        PageAction::Calc => {
            let form = ProjectionForm::new(
                context.config.default_rate_percent,
                context.config.default_term_months,
            );
            let Some(params) = collect(context, &form, args)? else {
                return Ok(None);
            };
            let records = context.session.returns.store.list();
            if records.is_empty() {
                context.session.push_notice(page, Notice::info(EMPTY_MESSAGE));
                return Ok(None);
            }
            tracing::info!(
                records = records.len(),
                rate = params.rate(),
                months = params.term_months(),
                "projection computed"
            );
            return Ok(Some(render_results(records, params, context.currency())));
        }
        PageAction::Clear => {
            context.session.returns.store.clear();
            context.session.push_notice(
                page,
                Notice::success("Expected-return list cleared."),
            );
        }
        PageAction::Delete => {
            let number = record_number(args)?;
            let result = delete_numbered(&mut context.session.returns.store, number);
            let notice = delete_notice(number, result, "activity", |r: &ReturnActivity| r.name.clone());
            context.session.push_notice(page, notice);
        }
        other => return Err(unsupported(entry(page), other)),
    }
    Ok(None)
}
