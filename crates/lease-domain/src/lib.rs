//! lease-domain
//!
//! Pure value types for the lease tracker (lease term, mileage, offers).
//! No I/O, no CLI, no storage.

pub mod allowance;
pub mod lease;
pub mod mileage;
pub mod offer;

pub use allowance::*;
pub use lease::*;
pub use mileage::*;
pub use offer::*;
