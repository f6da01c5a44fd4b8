use lease_config::{Config, ConfigManager};
use lease_core::{Clock, LeaseReport, SessionState};
use lease_domain::LeaseTerm;

use super::commands;
use super::core::{CliError, CommandError};
use super::formatters::CliFormatters;
use super::output::{self, OutputPreferences};
use super::registry::CommandRegistry;
use super::system_clock::clock_from_env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a running shell owns: configuration, the lease term it
/// derives, and the ephemeral session the commands mutate.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub term: LeaseTerm,
    pub session: SessionState,
    pub clock: Box<dyn Clock>,
    pub formatters: CliFormatters,
    pub running: bool,
}

impl ShellContext {
    /// Builds a context from the environment (`LEASE_INFO_HOME`, `LEASE_INFO_NOW`).
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        let clock = clock_from_env()?;
        Self::with_parts(mode, config_manager, clock)
    }

    pub fn with_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let (config, term) = load_or_default(&config_manager)?;
        output::set_preferences(OutputPreferences::from_config(&config));
        tracing::debug!(%term, allowance = %config.default_allowance, "shell context ready");

        Ok(ShellContext {
            mode,
            registry,
            config_manager,
            session: SessionState::new(config.default_allowance),
            config,
            term,
            clock,
            formatters: CliFormatters::default(),
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        format!("lease [{}]> ", self.session.mileage.annual_allowance)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// Lease snapshot as of the context clock.
    pub fn report(&self) -> LeaseReport {
        self.session.lease_report(&self.term, self.clock.now())
    }

    /// Persists the configuration and re-derives anything that depends on it.
    pub(crate) fn apply_config(&mut self, config: Config) -> Result<(), CommandError> {
        let term = config.lease_term()?;
        self.config_manager.save(&config)?;
        output::set_preferences(OutputPreferences::from_config(&config));
        self.term = term;
        self.config = config;
        Ok(())
    }
}

/// Falls back to the default configuration when the stored one is unusable.
fn load_or_default(manager: &ConfigManager) -> Result<(Config, LeaseTerm), CliError> {
    let loaded = manager
        .load()
        .and_then(|config| config.lease_term().map(|term| (config, term)));
    match loaded {
        Ok(pair) => Ok(pair),
        Err(err) => {
            tracing::warn!(error = %err, path = %manager.config_path().display(), "config unusable");
            output::warning(format!(
                "Ignoring {}: {}. Using default settings.",
                manager.config_path().display(),
                err
            ));
            let config = Config::default();
            let term = config.lease_term()?;
            Ok((config, term))
        }
    }
}
