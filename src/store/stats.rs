//! Store Statistics Module
//!
//! Tracks write-path events: insertions, overwrites, sweeps, and rejections.

use serde::Serialize;

// == Store Stats ==
/// Counters for the store's write path.
///
/// Reads are deliberately not counted: the lookup path takes `&self` and
/// must stay free of mutation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    /// Number of new keys admitted
    pub insertions: u64,
    /// Number of writes that replaced a live entry
    pub overwrites: u64,
    /// Number of explicit removals that deleted an entry
    pub removals: u64,
    /// Number of values evicted by sweeps
    pub evictions: u64,
    /// Number of sweep passes run
    pub sweeps: u64,
    /// Number of writes rejected at capacity
    pub rejections: u64,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Evictions Per Sweep ==
    /// Mean number of values removed per sweep pass.
    ///
    /// Returns 0.0 before any sweep has run.
    pub fn evictions_per_sweep(&self) -> f64 {
        if self.sweeps == 0 {
            0.0
        } else {
            self.evictions as f64 / self.sweeps as f64
        }
    }

    // == Record Insertion ==
    /// Increments the insertion counter.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    // == Record Overwrite ==
    /// Increments the overwrite counter.
    pub fn record_overwrite(&mut self) {
        self.overwrites += 1;
    }

    // == Record Removal ==
    /// Increments the removal counter.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    // == Record Sweep ==
    /// Records a sweep pass that evicted `count` values.
    pub fn record_sweep(&mut self, count: u64) {
        self.sweeps += 1;
        self.evictions += count;
    }

    // == Record Rejection ==
    /// Increments the rejected-write counter.
    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }
}
