//! `help` output. Page actions are listed against the pages that accept them,
//! so the overview can tell which commands work where the user is.

use crate::cli::core::ShellContext;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::pages;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::domain::PageId;

/// Pages whose action list includes `command`. Empty for global commands.
pub fn pages_accepting(command: &str) -> Vec<PageId> {
    pages::entries()
        .iter()
        .filter(|entry| entry.actions.iter().any(|action| action.name() == command))
        .map(|entry| entry.id)
        .collect()
}

/// Command table with a column marking what runs on `current`.
pub fn overview_table(context: &ShellContext, current: PageId) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Command"),
        TableColumn::left("Description").max(48),
        TableColumn::left("Here"),
    ]);
    for entry in context.registry.list() {
        let accepted_by = pages_accepting(entry.name);
        let here = if accepted_by.is_empty() || accepted_by.contains(&current) {
            "yes"
        } else {
            "-"
        };
        table.push_row(vec![
            entry.name.to_string(),
            entry.description.to_string(),
            here.to_string(),
        ]);
    }
    table.render()
}

pub fn print_overview(context: &ShellContext) {
    let current = context.current_page();
    output_section("Available commands");
    println!("{}", overview_table(context, current));

    if pages::entry(current).actions.is_empty() {
        io::print_info(format!(
            "{} has no page actions; open an exercise with `go <page>`.",
            current.title()
        ));
    } else {
        io::print_info(format!("On {}: {}", current.title(), pages::actions_hint(current)));
    }
    io::print_hint("`help <command>` shows usage; `pages` lists every page.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));

    let accepted_by = pages_accepting(entry.name);
    if !accepted_by.is_empty() {
        let titles: Vec<&str> = accepted_by.iter().map(|page| page.title()).collect();
        io::print_info(format!("  Pages: {}", titles.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::CliMode;
    use crate::config::ConfigManager;

    #[test]
    fn page_actions_map_to_their_pages() {
        assert_eq!(pages_accepting("evaluate"), vec![PageId::BudgetCheck]);
        assert_eq!(pages_accepting("calc"), vec![PageId::ReturnProjection]);
        assert_eq!(
            pages_accepting("delete"),
            vec![
                PageId::ActivityList,
                PageId::ReturnProjection,
                PageId::ActivityObjects
            ]
        );
        assert!(pages_accepting("go").is_empty());
    }

    #[test]
    fn overview_marks_commands_unavailable_on_the_current_page() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let context = ShellContext::with_config_manager(CliMode::Script, manager).unwrap();

        let text = overview_table(&context, PageId::BudgetCheck);
        let row = |name: &str| {
            text.lines()
                .find(|line| line.trim_start().starts_with(&format!("{name} ")))
                .map(str::to_string)
                .unwrap_or_default()
        };
        assert!(row("evaluate").trim_end().ends_with("yes"));
        assert!(row("calc").trim_end().ends_with('-'));
        assert!(row("go").trim_end().ends_with("yes"));
    }
}
