use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::pages;
use crate::cli::registry::CommandEntry;
use crate::domain::PageId;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("pages", "List the workbook pages", "pages", cmd_pages),
        CommandEntry::new(
            "go",
            "Open a page by slug or number",
            "go <home|check|activities|returns|objects|0-4>",
            cmd_go,
        ),
        CommandEntry::new("show", "Render the current page", "show", cmd_show),
    ]
}

fn cmd_pages(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Pages");
    let current = context.current_page();
    for entry in pages::entries() {
        let marker = if entry.id == current { ">" } else { " " };
        io::print_info(format!(
            "{marker} {} {:<10} {}",
            entry.id.position(),
            entry.id.slug(),
            entry.id.title()
        ));
    }
    Ok(())
}

fn cmd_go(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let target = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("Usage: go <page>".into()))?;
    let page: PageId = target.parse()?;
    context.session.navigate(page);
    context.show_current_page();
    Ok(())
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.show_current_page();
    Ok(())
}
