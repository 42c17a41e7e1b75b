//! Shell commands that forward to the current page's handler.

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::pages::{self, PageAction};
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add a record to the current page",
            "add [<name> <category> <budget> <spend>] | add [<name> <amount>] on returns",
            cmd_add,
        ),
        CommandEntry::new(
            "delete",
            "Remove a record by its listed number",
            "delete <number>",
            cmd_delete,
        ),
        CommandEntry::new("clear", "Remove every record on the current page", "clear", cmd_clear),
        CommandEntry::new(
            "set",
            "Set the budget check inputs",
            "set [<month> <budget> <spend>]",
            cmd_set,
        ),
        CommandEntry::new("evaluate", "Evaluate the budget check", "evaluate", cmd_evaluate),
        CommandEntry::new(
            "reset",
            "Restore the budget check sample values",
            "reset",
            cmd_reset,
        ),
        CommandEntry::new(
            "calc",
            "Project expected returns for every record",
            "calc [<rate%> [<months>]]",
            cmd_calc,
        ),
    ]
}

/// Runs the action, then re-renders the page followed by any one-off output.
fn run(context: &mut ShellContext, action: PageAction, args: &[&str]) -> CommandResult {
    let extra = pages::perform(context, action, args)?;
    context.show_current_page();
    if let Some(text) = extra {
        println!("{text}");
    }
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run(context, PageAction::Add, args)
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run(context, PageAction::Delete, args)
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run(context, PageAction::Clear, args)
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run(context, PageAction::Set, args)
}

fn cmd_evaluate(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run(context, PageAction::Evaluate, args)
}

fn cmd_reset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run(context, PageAction::Reset, args)
}

fn cmd_calc(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run(context, PageAction::Calc, args)
}
