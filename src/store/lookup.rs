//! Lookup Result Module
//!
//! Tri-state outcome of a read: absent, stale, or fresh.

// == Lookup ==
/// Outcome of looking up a key.
///
/// Staleness does not imply absence: a stale entry is still present, still
/// occupies a capacity slot, and its value is still readable until it is
/// swept, removed, or overwritten. The stale case therefore carries the
/// value just like the fresh case, keeping "value with status" atomic
/// instead of splitting it into a nullable plus a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    /// No entry exists for the key
    Absent,
    /// An entry exists but its age exceeds the store lifetime
    Stale(T),
    /// An entry exists and is within its lifetime
    Fresh(T),
}

impl<T> Lookup<T> {
    // == Predicates ==
    /// Returns true if no entry exists.
    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }

    /// Returns true if an entry exists but has outlived the lifetime.
    pub fn is_stale(&self) -> bool {
        matches!(self, Lookup::Stale(_))
    }

    /// Returns true if an entry exists and is within its lifetime.
    pub fn is_fresh(&self) -> bool {
        matches!(self, Lookup::Fresh(_))
    }

    // == Value Accessors ==
    /// The carried value regardless of freshness, or None if absent.
    pub fn value(self) -> Option<T> {
        match self {
            Lookup::Absent => None,
            Lookup::Stale(v) | Lookup::Fresh(v) => Some(v),
        }
    }

    /// The carried value only if fresh; stale and absent both yield None.
    pub fn fresh(self) -> Option<T> {
        match self {
            Lookup::Fresh(v) => Some(v),
            _ => None,
        }
    }

    // == Adapters ==
    /// Converts from `&Lookup<T>` to `Lookup<&T>`.
    pub fn as_ref(&self) -> Lookup<&T> {
        match self {
            Lookup::Absent => Lookup::Absent,
            Lookup::Stale(v) => Lookup::Stale(v),
            Lookup::Fresh(v) => Lookup::Fresh(v),
        }
    }

    /// Maps the carried value, preserving the classification.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Absent => Lookup::Absent,
            Lookup::Stale(v) => Lookup::Stale(f(v)),
            Lookup::Fresh(v) => Lookup::Fresh(f(v)),
        }
    }
}
