//! Terminal shell over the library: pages, commands, forms and output.

pub mod commands;
pub mod core;
pub mod forms;
pub mod help;
pub mod io;
pub mod output;
pub mod pages;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::run_cli;
