//! Error types for the store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// The store's single recoverable failure class.
///
/// Lookups on missing keys are a normal [`Lookup::Absent`] result, not an
/// error, so capacity exhaustion is the only way an operation can fail.
///
/// [`Lookup::Absent`]: crate::store::Lookup::Absent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// A write could not make room even after sweeping every stale entry.
    ///
    /// Callers should treat this as back-pressure: retry later, make room
    /// with an explicit remove, or drop the write.
    #[error("store at capacity: {limit} entries and none stale")]
    OutOfCapacity {
        /// The capacity limit the store was constructed with
        limit: usize,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the store.
pub type Result<T> = std::result::Result<T, StoreError>;
