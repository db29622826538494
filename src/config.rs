//! Configuration Module
//!
//! Construction-time parameters for the store, loadable from environment
//! variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Store construction parameters.
///
/// Both values are fixed for the life of a store; there is no way to change
/// them after construction.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum age an entry may reach before it is classified stale
    pub lifetime: Duration,
    /// Maximum number of entries tolerated at write time
    pub limit: usize,
}

impl StoreConfig {
    /// Creates a config with the given lifetime and entry limit.
    ///
    /// A `limit` of zero is accepted but makes every write fail.
    pub fn new(lifetime: Duration, limit: usize) -> Self {
        Self { lifetime, limit }
    }

    /// Creates a new StoreConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ENTRY_LIFETIME_SECS` - Entry lifetime in seconds (default: 300)
    /// - `MAX_ENTRIES` - Maximum entry count (default: 1000)
    pub fn from_env() -> Self {
        Self {
            lifetime: env::var("ENTRY_LIFETIME_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(300)),
            limit: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            lifetime: Duration::from_secs(300),
            limit: 1000,
        }
    }
}
