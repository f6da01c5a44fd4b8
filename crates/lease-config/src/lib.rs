//! lease-config
//!
//! User configuration for the lease tracker: contract dates, default
//! allowance tier and output preferences, plus JSON persistence helpers.
//! Session data (mileage readings, offers) is never stored here.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, CONFIG_KEYS};
