//! Store Engine Module
//!
//! Main store engine combining HashMap storage with lazy age classification
//! and sweep-on-pressure eviction.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::clock::{Clock, MonotonicClock};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::store::{Entry, Lookup, StoreStats};

// == Expiring Store ==
/// Key-value store bounding both the age and the count of its entries.
///
/// Every value is stamped at insertion and classified against a fixed
/// lifetime on each read; a write that finds the store at capacity sweeps
/// every stale entry out before admitting the new one and hands the evicted
/// values back to the caller.
///
/// Single-threaded by design: no internal locking, no atomics. Callers
/// sharing a store across threads must provide external mutual exclusion,
/// since the capacity sweep touches the whole structure.
#[derive(Debug)]
pub struct ExpiringStore<K, V, C = MonotonicClock> {
    /// Key-value storage
    entries: HashMap<K, Entry<V>>,
    /// Timestamp source
    clock: C,
    /// Maximum age before an entry is classified stale
    lifetime: Duration,
    /// Maximum number of entries tolerated at write time
    limit: usize,
    /// Write-path statistics
    stats: StoreStats,
}

impl<K, V> ExpiringStore<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates a new store driven by the system's monotonic clock.
    ///
    /// # Arguments
    /// * `config` - Lifetime and entry limit, fixed for the life of the store
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, MonotonicClock)
    }
}

impl<K, V, C> ExpiringStore<K, V, C>
where
    K: Eq + Hash + Clone,
    C: Clock,
{
    /// Creates a new store driven by the given clock.
    ///
    /// Useful for deterministic tests with a [`ManualClock`]; production
    /// callers want [`ExpiringStore::new`].
    ///
    /// [`ManualClock`]: crate::clock::ManualClock
    pub fn with_clock(config: StoreConfig, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
            lifetime: config.lifetime,
            limit: config.limit,
            stats: StoreStats::new(),
        }
    }

    // == Get ==
    /// Classifies the entry under `key` without touching it.
    ///
    /// Returns [`Lookup::Absent`] if no entry exists, [`Lookup::Stale`] if
    /// the entry has outlived the store lifetime, and [`Lookup::Fresh`]
    /// otherwise. A stale entry is left in place: it remains addressable and
    /// keeps occupying a capacity slot, and its timestamp is not refreshed.
    pub fn get(&self, key: &K) -> Lookup<&V> {
        match self.entries.get(key) {
            None => Lookup::Absent,
            Some(entry) if entry.is_stale(self.clock.now(), self.lifetime) => {
                Lookup::Stale(&entry.value)
            }
            Some(entry) => Lookup::Fresh(&entry.value),
        }
    }

    // == Get Mut ==
    /// Same classification as [`get`](Self::get), but hands back a mutable
    /// reference for in-place mutation of large or non-copyable values.
    ///
    /// Presence and expiry are unaffected; the insertion timestamp is not
    /// refreshed.
    pub fn get_mut(&mut self, key: &K) -> Lookup<&mut V> {
        let now = self.clock.now();
        match self.entries.get_mut(key) {
            None => Lookup::Absent,
            Some(entry) if entry.is_stale(now, self.lifetime) => {
                Lookup::Stale(&mut entry.value)
            }
            Some(entry) => Lookup::Fresh(&mut entry.value),
        }
    }

    // == Put ==
    /// Stores `value` under `key`, stamped with the current instant.
    ///
    /// If the store is at capacity the whole map is swept first: every stale
    /// entry is removed and its value appended to the returned list, whose
    /// sole owner is the caller. If the sweep cannot bring the store below
    /// the limit the write fails with [`StoreError::OutOfCapacity`] and
    /// nothing is inserted; entries already swept stay gone. The at-capacity
    /// check makes no exception for overwrites: a put of an existing key
    /// into a full store of fresh entries fails like any other.
    ///
    /// Overwriting a live key discards the old value silently; it does not
    /// appear in the evicted list.
    pub fn put(&mut self, key: K, value: V) -> Result<Vec<V>> {
        let now = self.clock.now();

        let mut evicted = Vec::new();
        if self.entries.len() >= self.limit {
            evicted = self.sweep_at(now);
            if self.entries.len() >= self.limit {
                self.stats.record_rejection();
                debug!(limit = self.limit, "write rejected at capacity");
                return Err(StoreError::OutOfCapacity { limit: self.limit });
            }
        }

        if self.entries.insert(key, Entry::new(value, now)).is_some() {
            self.stats.record_overwrite();
        } else {
            self.stats.record_insertion();
        }
        trace!(len = self.entries.len(), "entry stored");

        Ok(evicted)
    }

    // == Sweep ==
    /// Removes every stale entry and returns the evicted values.
    ///
    /// Caller-facing counterpart of the sweep `put` performs under capacity
    /// pressure, with the same ownership handoff: the store keeps no
    /// reference to the returned values.
    pub fn sweep(&mut self) -> Vec<V> {
        let now = self.clock.now();
        self.sweep_at(now)
    }

    /// Full scan removing entries older than the lifetime at `now`.
    ///
    /// O(current size); the only O(n) operation in the store.
    fn sweep_at(&mut self, now: Instant) -> Vec<V> {
        let stale_keys: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_stale(now, self.lifetime))
            .map(|(key, _)| key.clone())
            .collect();

        let mut evicted = Vec::with_capacity(stale_keys.len());
        for key in &stale_keys {
            if let Some(entry) = self.entries.remove(key) {
                evicted.push(entry.value);
            }
        }

        self.stats.record_sweep(evicted.len() as u64);
        debug!(
            evicted = evicted.len(),
            remaining = self.entries.len(),
            "sweep completed"
        );

        evicted
    }

    // == Remove ==
    /// Deletes the entry under `key` regardless of freshness.
    ///
    /// Returns whether a deletion occurred. The removed value is dropped,
    /// not handed back.
    pub fn remove(&mut self, key: &K) -> bool {
        if self.entries.remove(key).is_some() {
            self.stats.record_removal();
            trace!(len = self.entries.len(), "entry removed");
            true
        } else {
            false
        }
    }

    // == Length ==
    /// Returns the current number of entries, fresh and stale combined.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Accessors ==
    /// The maximum age before an entry is classified stale.
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// The maximum entry count tolerated at write time.
    pub fn limit(&self) -> usize {
        self.limit
    }

    // == Stats ==
    /// Returns a snapshot of the write-path statistics.
    pub fn stats(&self) -> StoreStats {
        self.stats.clone()
    }
}
