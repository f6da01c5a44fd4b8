use std::result::Result as StdResult;

use lease_config::ConfigError;
use lease_core::CoreError;
use lease_domain::LeaseTermError;
use thiserror::Error;

/// Unified error type for the domain, accounting and configuration layers.
#[derive(Error, Debug)]
pub enum LeaseError {
    #[error("Invalid lease term: {0}")]
    InvalidTerm(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, LeaseError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LeaseError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for LeaseError {
    fn from(err: std::io::Error) -> Self {
        LeaseError::StorageError(err.to_string())
    }
}

impl From<LeaseTermError> for LeaseError {
    fn from(err: LeaseTermError) -> Self {
        LeaseError::InvalidTerm(err.to_string())
    }
}

impl From<CoreError> for LeaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidTimestamp(value) => {
                LeaseError::InvalidInput(format!("invalid timestamp `{}`", value))
            }
        }
    }
}

impl From<ConfigError> for LeaseError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => LeaseError::StorageError(io.to_string()),
            ConfigError::LeaseTerm(inner) => LeaseError::from(inner),
            other => LeaseError::ConfigError(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(LeaseError::from(err))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(LeaseError::from(err))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn config_term_errors_map_to_invalid_term() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = ConfigError::LeaseTerm(LeaseTermError::InvalidRange {
            start: day,
            end: day,
        });
        assert!(matches!(LeaseError::from(err), LeaseError::InvalidTerm(_)));
    }

    #[test]
    fn unknown_config_keys_are_config_errors() {
        let err = LeaseError::from(ConfigError::UnknownKey("colour".into()));
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown configuration key `colour`"
        );
    }
}
