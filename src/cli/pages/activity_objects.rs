//! Activity objects: each record describes and evaluates itself.

use crate::cli::forms::ActivityForm;
use crate::cli::output::{styled, MessageKind};
use crate::cli::pages::{
    actions_hint, collect, delete_notice, delete_numbered, entry, record_number, unsupported,
    PageAction, PageOutcome, PageView,
};
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::formatting::Formatter;
use crate::core::Notice;
use crate::domain::{Activity, PageId};
use crate::utils::format::format_money;

pub fn render(view: &PageView<'_>) -> String {
    let fmt = Formatter::new();
    let objects = view.session.objects.store.list();
    let mut lines = vec![fmt.header(PageId::ActivityObjects.title())];

    if objects.is_empty() {
        lines.push(styled(
            MessageKind::Info,
            "Create at least one activity object to see the summary.",
        ));
    } else {
        lines.push("Object summary".into());
        for (idx, object) in objects.iter().enumerate() {
            lines.push(format!("Object {}", idx + 1));
            lines.extend(
                object
                    .describe_with(view.currency)
                    .lines()
                    .map(|line| format!("  {line}")),
            );
            let badge = match object.excess() {
                None => styled(MessageKind::Success, "Within budget"),
                Some(excess) => styled(
                    MessageKind::Warning,
                    format!("Excess: {}", format_money(view.currency, excess)),
                ),
            };
            lines.push(format!("  {badge}"));
            lines.push(fmt.caption(format!("  delete {} to remove", idx + 1)));
        }
    }

    lines.push(String::new());
    lines.push(fmt.caption(actions_hint(PageId::ActivityObjects)));
    lines.join("\n")
}

pub fn handle(context: &mut ShellContext, action: PageAction, args: &[&str]) -> PageOutcome {
    let page = PageId::ActivityObjects;
    match action {
        PageAction::Add => {
            let Some(object) = collect(context, &ActivityForm::new(), args)? else {
                return Ok(None);
            };
            let name = object.name.clone();
            match context.session.objects.store.add(object) {
                Ok(()) => context.session.push_notice(
                    page,
                    Notice::success(format!("Activity object '{name}' created.")),
                ),
                Err(err) => context
                    .session
                    .push_notice(page, Notice::warning(err.to_string())),
            }
        }
        PageAction::Clear => {
            context.session.objects.store.clear();
            context
                .session
                .push_notice(page, Notice::success("Object list cleared."));
        }
        PageAction::Delete => {
            let number = record_number(args)?;
            let result = delete_numbered(&mut context.session.objects.store, number);
            let notice = delete_notice(number, result, "object", |a: &Activity| a.name.clone());
            context.session.push_notice(page, notice);
        }
        other => return Err(unsupported(entry(page), other)),
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionContext;
    use crate::domain::ActivityCategory;

    #[test]
    fn objects_render_description_and_excess() {
        let mut session = SessionContext::new();
        session
            .objects
            .store
            .add(Activity::new("Taxi", ActivityCategory::Transport, 50.0, 80.0))
            .unwrap();
        let text = render(&PageView {
            session: &session,
            currency: "S/",
        });
        assert!(text.contains("Object 1"));
        assert!(text.contains("- Category: Transport"));
        assert!(text.contains("Excess: S/ 30.00"));
        assert!(text.contains("- Status: Over budget"));
    }
}
