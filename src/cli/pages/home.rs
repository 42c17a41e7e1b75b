use crate::cli::pages::{entries, entry, unsupported, PageAction, PageOutcome, PageView};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::Formatter;
use crate::domain::PageId;

pub fn render(view: &PageView<'_>) -> String {
    let fmt = Formatter::new();
    let mut lines = vec![
        fmt.header("Activity budget workbook"),
        "Record activities against a budget, check whether each one stays within it,".into(),
        "and project simple returns. Records live only for this session.".into(),
        String::new(),
        "Pages:".into(),
    ];

    for page in entries() {
        let count = match page.id {
            PageId::Home | PageId::BudgetCheck => String::new(),
            id => format!(" ({} record(s))", view.session.record_count(id)),
        };
        lines.push(format!(
            "  {} {:<10} {}{}",
            page.id.position(),
            page.id.slug(),
            page.id.title(),
            count
        ));
        lines.push(fmt.caption(format!("               {}", page.summary)));
    }

    lines.push(String::new());
    lines.push(fmt.caption("Open a page with `go <page>`, e.g. `go 2` or `go activities`."));
    lines.join("\n")
}

pub fn handle(_context: &mut ShellContext, action: PageAction, _args: &[&str]) -> PageOutcome {
    Err(unsupported(entry(PageId::Home), action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionContext;

    #[test]
    fn lists_every_page_with_counts() {
        let session = SessionContext::new();
        let text = render(&PageView {
            session: &session,
            currency: "S/",
        });
        for id in PageId::ALL {
            assert!(text.contains(id.slug()), "missing {id:?}");
        }
        assert!(text.contains("(0 record(s))"));
    }
}
