#![doc(test(attr(deny(warnings))))]

//! Lease Info tracks mileage against a lease's annual allowance and compares
//! financing offers. This crate hosts the terminal front end; the accounting
//! itself lives in `lease-core`.

pub mod cli;
pub mod core;
pub mod utils;

pub use lease_config as config;
pub use lease_core as accounting;
pub use lease_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Lease Info tracing initialized.");
    });
}
