pub mod commands;
pub mod core;
pub mod formatters;
pub mod help;
pub mod output;
pub mod registry;
pub mod shell;
pub mod shell_context;
pub mod system_clock;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

pub use shell::run_cli;
