use std::io;

use lease_domain::LeaseTermError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Invalid lease term: {0}")]
    LeaseTerm(#[from] LeaseTermError),

    #[error("Unknown configuration key `{0}`")]
    UnknownKey(String),

    #[error("Invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}
