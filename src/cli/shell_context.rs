use crate::config::{Config, ConfigManager};
use crate::core::SessionContext;
use crate::domain::PageId;

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    /// Commands come from stdin and wizards are never opened.
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: SessionContext,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn current_page(&self) -> PageId {
        self.session.current_page()
    }

    pub fn currency(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Interactive commands without arguments collect their values through a
    /// wizard instead of positional arguments.
    pub fn uses_wizard(&self, args: &[&str]) -> bool {
        self.mode == CliMode::Interactive && args.is_empty()
    }

    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, page: {:?}, last_command: {:?} }}",
            self.running,
            self.current_page(),
            self.last_command
        )
    }
}
