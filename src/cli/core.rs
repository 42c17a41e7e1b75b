//! Shell context construction, command dispatch, and error reporting.

use std::{
    io,
    panic::{self, AssertUnwindSafe},
};

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::cli::forms::ValidationError;
use crate::cli::pages::{self, PageView};
use crate::config::ConfigManager;
use crate::core::SessionContext;
use crate::errors::ActivityError;

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] ActivityError),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::InvalidArguments(err.message)
    }
}

/// Failures that end the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ActivityError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

const GENERIC_FAILURE: &str =
    "Something went wrong while running that command. Your session data is unchanged.";

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new()?)
    }

    /// Builds a shell whose preferences live under `config_manager`.
    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        cli_io::apply_config(&config);

        Ok(ShellContext {
            mode,
            registry,
            session: SessionContext::new(),
            config_manager,
            config,
            last_command: None,
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        format!("activity-budget [{}]> ", self.current_page().slug())
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Tokenizes and runs one input line.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    /// Runs a registered handler. A panic inside the handler is contained
    /// here and reported as a generic failure; the session keeps running.
    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };

        tracing::debug!(command, status = %self.status(), "dispatch");
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(self, args)));
        match outcome {
            Ok(Ok(())) => Ok(LoopControl::Continue),
            Ok(Err(CommandError::ExitRequested)) => Ok(LoopControl::Exit),
            Ok(Err(err)) => Err(err),
            Err(_) => {
                tracing::error!(command, "command handler panicked");
                cli_io::print_error(GENERIC_FAILURE);
                Ok(LoopControl::Continue)
            }
        }
    }

    pub fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 2 {
                cli_io::print_info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action("Exit shell?")?)
    }

    /// Prints a handler error. Soft failures become warnings; nothing here
    /// stops the shell.
    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_warning(message);
                if let Some(entry) = self
                    .last_command_name()
                    .and_then(|name| self.command(&name))
                {
                    cli_io::print_hint(format!("Usage: {}", entry.usage));
                }
            }
            CommandError::Core(core) if core.is_soft() => cli_io::print_warning(core.to_string()),
            other => {
                tracing::error!(error = %other, "command failed");
                cli_io::print_error(other.to_string());
            }
        }
    }

    fn last_command_name(&self) -> Option<String> {
        self.last_command
            .as_deref()
            .and_then(|line| line.split_whitespace().next())
            .map(str::to_lowercase)
    }

    /// Prints the queued notices of the current page, then the page itself.
    pub fn show_current_page(&mut self) {
        let page = self.current_page();
        for notice in self.session.take_notices(page) {
            output::notice(&notice);
        }
        let view = PageView {
            session: &self.session,
            currency: &self.config.currency_symbol,
        };
        println!("{}", pages::render(page, &view));
    }

    pub fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        cli_io::apply_config(&self.config);
        Ok(())
    }
}
