//! Store Module
//!
//! An associative container bounding both the age and the count of its
//! entries: lazy expiration on the read path, sweep-on-pressure eviction on
//! the write path.

mod engine;
mod entry;
mod lookup;
mod stats;


// Re-export public types
pub use engine::ExpiringStore;
pub use entry::Entry;
pub use lookup::Lookup;
pub use stats::StoreStats;
