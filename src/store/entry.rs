//! Store Entry Module
//!
//! A stored value together with the instant it was inserted.

use std::time::{Duration, Instant};

// == Entry ==
/// A single stored value and its insertion timestamp.
///
/// The timestamp is written once at insertion and never refreshed by reads;
/// staleness is recomputed from it on every classification rather than being
/// cached anywhere.
#[derive(Debug, Clone)]
pub struct Entry<V> {
    /// The stored value
    pub value: V,
    /// Instant the value was inserted
    pub inserted_at: Instant,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the given instant.
    pub fn new(value: V, inserted_at: Instant) -> Self {
        Self { value, inserted_at }
    }

    // == Age ==
    /// Age of the entry at `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `lifetime` at `now`.
    ///
    /// Boundary condition: an entry is stale only once its age strictly
    /// exceeds the lifetime; an entry aged exactly `lifetime` is still
    /// fresh.
    pub fn is_stale(&self, now: Instant, lifetime: Duration) -> bool {
        self.age(now) > lifetime
    }
}
