#![allow(dead_code)]

use std::sync::Mutex;

use activity_budget::cli::core::{CliMode, ShellContext};
use activity_budget::config::ConfigManager;
use activity_budget::domain::{Activity, ActivityCategory};
use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the whole test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

fn temp_home() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Script-mode shell with preferences isolated in a temp directory.
pub fn script_shell() -> ShellContext {
    let manager = ConfigManager::with_base_dir(temp_home()).expect("config manager");
    ShellContext::with_config_manager(CliMode::Script, manager).expect("shell context")
}

/// The CLI binary in script mode, reading commands from `input`.
pub fn script_command(input: &str) -> Command {
    let mut cmd = Command::cargo_bin("activity_budget_cli").expect("binary built");
    cmd.env("ACTIVITY_BUDGET_CLI_SCRIPT", "1")
        .env("ACTIVITY_BUDGET_HOME", temp_home())
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off")
        .write_stdin(input.to_string());
    cmd
}

/// Budgets `[100, 200, 300]` against spends `[50, 250, 300]`.
pub fn sample_activities() -> Vec<Activity> {
    vec![
        Activity::new("Groceries", ActivityCategory::Food, 100.0, 50.0),
        Activity::new("Rent", ActivityCategory::Housing, 200.0, 250.0),
        Activity::new("Bus pass", ActivityCategory::Transport, 300.0, 300.0),
    ]
}
