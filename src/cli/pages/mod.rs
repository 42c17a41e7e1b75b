//! Page table: each `PageId` maps to one renderer and one action handler.

pub mod activity_list;
pub mod activity_objects;
pub mod budget_check;
pub mod home;
pub mod return_projection;

use std::fmt;

use crate::cli::core::CommandError;
use crate::cli::forms::{FormEngine, FormFlow, FormResult, WizardInteraction};
use crate::cli::io;
use crate::cli::shell_context::ShellContext;
use crate::core::{Notice, RecordStore, SessionContext};
use crate::domain::{NamedEntity, PageId, Validate};
use crate::errors::ActivityError;

/// Actions a page may accept from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Add,
    Clear,
    Delete,
    Set,
    Evaluate,
    Reset,
    Calc,
}

impl PageAction {
    pub fn name(self) -> &'static str {
        match self {
            PageAction::Add => "add",
            PageAction::Clear => "clear",
            PageAction::Delete => "delete",
            PageAction::Set => "set",
            PageAction::Evaluate => "evaluate",
            PageAction::Reset => "reset",
            PageAction::Calc => "calc",
        }
    }
}

impl fmt::Display for PageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only inputs of a renderer.
pub struct PageView<'a> {
    pub session: &'a SessionContext,
    pub currency: &'a str,
}

/// Text shown once after the page, such as computed projection results.
pub type PageOutcome = Result<Option<String>, CommandError>;
pub type RenderFn = fn(&PageView<'_>) -> String;
pub type HandleFn = fn(&mut ShellContext, PageAction, &[&str]) -> PageOutcome;

pub struct PageEntry {
    pub id: PageId,
    pub summary: &'static str,
    pub actions: &'static [PageAction],
    pub render: RenderFn,
    pub handle: HandleFn,
}

static PAGES: [PageEntry; 5] = [
    PageEntry {
        id: PageId::Home,
        summary: "Overview and page directory",
        actions: &[],
        render: home::render,
        handle: home::handle,
    },
    PageEntry {
        id: PageId::BudgetCheck,
        summary: "Variables and conditionals: is one month's spend within budget?",
        actions: &[PageAction::Set, PageAction::Evaluate, PageAction::Reset],
        render: budget_check::render,
        handle: budget_check::handle,
    },
    PageEntry {
        id: PageId::ActivityList,
        summary: "Lists and dictionaries: activities with per-row evaluation and totals",
        actions: &[PageAction::Add, PageAction::Delete, PageAction::Clear],
        render: activity_list::render,
        handle: activity_list::handle,
    },
    PageEntry {
        id: PageId::ReturnProjection,
        summary: "Functions and mapping: expected return over a shared rate and term",
        actions: &[
            PageAction::Add,
            PageAction::Calc,
            PageAction::Delete,
            PageAction::Clear,
        ],
        render: return_projection::render,
        handle: return_projection::handle,
    },
    PageEntry {
        id: PageId::ActivityObjects,
        summary: "Objects: activity records that evaluate and describe themselves",
        actions: &[PageAction::Add, PageAction::Delete, PageAction::Clear],
        render: activity_objects::render,
        handle: activity_objects::handle,
    },
];

pub fn entries() -> &'static [PageEntry] {
    &PAGES
}

pub fn entry(id: PageId) -> &'static PageEntry {
    PAGES
        .iter()
        .find(|entry| entry.id == id)
        .unwrap_or(&PAGES[0])
}

pub fn render(id: PageId, view: &PageView<'_>) -> String {
    (entry(id).render)(view)
}

/// Runs `action` on the current page, rejecting actions the page lacks.
pub fn perform(context: &mut ShellContext, action: PageAction, args: &[&str]) -> PageOutcome {
    let page = entry(context.current_page());
    if !page.actions.contains(&action) {
        return Err(unsupported(page, action));
    }
    (page.handle)(context, action, args)
}

pub(crate) fn unsupported(page: &PageEntry, action: PageAction) -> CommandError {
    let available = if page.actions.is_empty() {
        "none; use `go <page>` to open an exercise".to_string()
    } else {
        page.actions
            .iter()
            .map(|action| action.name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    CommandError::InvalidArguments(format!(
        "`{action}` is not available on {}. Available here: {available}",
        page.id.title()
    ))
}

pub(crate) fn actions_hint(id: PageId) -> String {
    let names: Vec<&str> = entry(id).actions.iter().map(|a| a.name()).collect();
    format!("Actions: {}", names.join(", "))
}

/// Collects a form either from arguments or, interactively, through a wizard.
/// `Ok(None)` means the wizard was cancelled.
pub(crate) fn collect<F: FormFlow>(
    context: &ShellContext,
    flow: &F,
    args: &[&str],
) -> Result<Option<F::Output>, CommandError> {
    let engine = FormEngine::new(flow);
    if context.uses_wizard(args) {
        return Ok(match engine.run(&mut WizardInteraction) {
            FormResult::Completed(output) => Some(output),
            FormResult::Cancelled => {
                io::print_info("Cancelled.");
                None
            }
        });
    }
    Ok(Some(engine.from_args(args)?))
}

/// Parses the 1-based record number shown in listings.
pub(crate) fn record_number(args: &[&str]) -> Result<usize, CommandError> {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("Usage: delete <number>".into()))?;
    raw.parse::<usize>().map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw}` is not a record number"))
    })
}

/// Removes the record listed as `number` (1-based).
pub(crate) fn delete_numbered<T: Validate + NamedEntity>(
    store: &mut RecordStore<T>,
    number: usize,
) -> Result<T, ActivityError> {
    match number.checked_sub(1) {
        Some(index) => store.delete(index),
        None => Err(ActivityError::IndexOutOfRange {
            index: number,
            len: store.len(),
        }),
    }
}

/// Outcome of removing a record by its listed number. Missing numbers only
/// queue a warning.
pub(crate) fn delete_notice<T>(
    number: usize,
    result: Result<T, ActivityError>,
    noun: &str,
    describe: impl FnOnce(&T) -> String,
) -> Notice {
    match result {
        Ok(removed) => Notice::success(format!("Removed {noun} #{number}: {}.", describe(&removed))),
        Err(ActivityError::IndexOutOfRange { len, .. }) => Notice::warning(format!(
            "There is no {noun} #{number}; the list has {len} item(s)."
        )),
        Err(other) => Notice::warning(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_page_in_order() {
        let ids: Vec<PageId> = entries().iter().map(|entry| entry.id).collect();
        assert_eq!(ids, PageId::ALL);
        for id in PageId::ALL {
            assert_eq!(entry(id).id, id);
        }
    }

    #[test]
    fn home_accepts_no_actions() {
        let page = entry(PageId::Home);
        let err = unsupported(page, PageAction::Add);
        assert!(err.to_string().contains("not available on Home"));
    }

    #[test]
    fn record_numbers_must_be_numeric() {
        assert_eq!(record_number(&["3"]).unwrap(), 3);
        assert!(record_number(&["x"]).is_err());
        assert!(record_number(&[]).is_err());
    }

    #[test]
    fn missing_record_becomes_warning() {
        let notice = delete_notice::<String>(
            6,
            Err(ActivityError::IndexOutOfRange { index: 5, len: 2 }),
            "activity",
            |name| name.clone(),
        );
        assert_eq!(notice.level, crate::core::NoticeLevel::Warning);
        assert!(notice.message.contains("#6"));
    }
}
