//! lease-core
//!
//! Lease accounting and offer comparison for the lease tracker.
//! Depends on lease-domain. No CLI, no terminal I/O, no storage.

pub mod accounting;
pub mod comparator;
pub mod error;
pub mod format;
pub mod input;
pub mod session;
pub mod time;

pub use accounting::*;
pub use comparator::*;
pub use error::CoreError;
pub use format::*;
pub use input::*;
pub use session::*;
pub use time::*;
