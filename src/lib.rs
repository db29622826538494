//! Expiremap - an in-memory key-value store bounding entry age and count
//!
//! Every stored value carries its insertion instant and is classified stale
//! once older than a fixed lifetime; writes refuse to grow the store past a
//! fixed capacity, sweeping stale entries out under pressure and handing
//! their values back to the caller.

pub mod clock;
pub mod config;
pub mod error;
pub mod store;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use store::{ExpiringStore, Lookup, StoreStats};
