use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::config::Config;

const USAGE: &str = "config [show|set <key> <value>|reset|path]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change saved preferences",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sub = args.first().map(|value| value.to_lowercase());
    match sub.as_deref() {
        None | Some("show") => {
            show(context);
            Ok(())
        }
        Some("set") => {
            let (Some(key), Some(_)) = (args.get(1), args.get(2)) else {
                return Err(CommandError::InvalidArguments(
                    "Usage: config set <key> <value>".into(),
                ));
            };
            let value = args[2..].join(" ");
            context.config.set(key, &value)?;
            context.persist_config()?;
            tracing::info!(key = *key, "config updated");
            io::print_success(format!("Set {key} = {}.", value.trim()));
            Ok(())
        }
        Some("reset") => {
            context.config = Config::default();
            context.persist_config()?;
            io::print_success("Preferences restored to defaults.");
            Ok(())
        }
        Some("path") => {
            io::print_info(context.config_manager.path().display());
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown config action `{other}`. Usage: {USAGE}"
        ))),
    }
}

fn show(context: &ShellContext) {
    output_section("Preferences");
    for (key, value) in context.config.entries() {
        io::print_info(format!("  {key:<22} {value}"));
    }
}
