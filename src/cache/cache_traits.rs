//! # Cache Trait Hierarchy
//!
//! ```text
//!            ┌──────────────────────────────────────┐
//!            │           CoreCache<K, V>            │
//!            │                                      │
//!            │  put(&mut, K, V) → PutOutcome<K, V>  │
//!            │  get(&mut, &K) → Option<&V>          │
//!            │  contains(&, &K) → bool              │
//!            │  len / is_empty / capacity           │
//!            └──────────────────┬───────────────────┘
//!                               │
//!                               ▼
//!            ┌──────────────────────────────────────┐      ┌──────────────────────┐
//!            │        RecencyOrdered<K, V>          │      │      CacheStats      │
//!            │                                      │      │                      │
//!            │  peek_mru() → (&K, &V)               │      │  hit_ratio() → f64   │
//!            │  peek_lru() → (&K, &V)               │      │  total_gets/hits     │
//!            │  recency_rank(&K) → usize            │      │  total_evictions     │
//!            │  dump() → Vec<&K>  (MRU → LRU)       │      │  reset_stats()       │
//!            └──────────────────────────────────────┘      └──────────────────────┘
//! ```
//!
//! There is no `remove` or `clear`: an entry leaves a cache only
//! when it is the least-recently-used entry and a new key needs its place.
//! A miss is `None`, never an error.

/// What a `put` did to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome<K, V> {
    /// A new key was added without displacing anything.
    Inserted,
    /// The key was already tracked; carries the replaced value.
    Updated(V),
    /// A new key was added and the least-recently-used pair was evicted for it.
    Evicted(K, V),
}

impl<K, V> PutOutcome<K, V> {
    pub fn is_eviction(&self) -> bool {
        matches!(self, PutOutcome::Evicted(..))
    }

    pub fn evicted_key(&self) -> Option<&K> {
        match self {
            PutOutcome::Evicted(key, _) => Some(key),
            _ => None,
        }
    }
}

/// Core cache operations.
pub trait CoreCache<K, V> {
    /// Insert or update a key-value pair
    fn put(&mut self, key: K, value: V) -> PutOutcome<K, V>;

    /// Get a value by key (may update internal state for access tracking)
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Check if a key exists without updating access state
    fn contains(&self, key: &K) -> bool;

    /// Get the current number of entries
    fn len(&self) -> usize;

    /// Check if the cache is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the maximum capacity
    fn capacity(&self) -> usize;
}

/// Read-only views over the recency order.
pub trait RecencyOrdered<K, V>: CoreCache<K, V> {
    /// Peek at the most recently used entry
    fn peek_mru(&self) -> Option<(&K, &V)>;

    /// Peek at the least recently used entry (the next eviction victim)
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Get the recency rank of a key (0 = most recent, higher = less recent)
    /// Returns None if key not found
    fn recency_rank(&self, key: &K) -> Option<usize>;

    /// Keys ordered from most to least recently used
    fn dump(&self) -> Vec<&K>;
}

/// Statistics and monitoring capabilities
pub trait CacheStats {
    /// Cache hit ratio (0.0 to 1.0)
    fn hit_ratio(&self) -> f64 {
        match self.total_gets() {
            0 => 0.0,
            gets => self.total_hits() as f64 / gets as f64,
        }
    }

    /// Total number of get operations
    fn total_gets(&self) -> u64;

    /// Total number of cache hits
    fn total_hits(&self) -> u64;

    /// Total number of cache misses
    fn total_misses(&self) -> u64 {
        self.total_gets() - self.total_hits()
    }

    /// Total number of evictions
    fn total_evictions(&self) -> u64;

    /// Reset all statistics
    fn reset_stats(&mut self);
}
