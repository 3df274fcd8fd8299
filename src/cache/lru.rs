//! # Recency-Ordered (LRU) Cache
//!
//! A fixed-capacity key/value store that evicts the least-recently-used entry
//! when a new key arrives at full capacity. Every public operation is O(1).
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                        RecencyCache<K, V>                            │
//!   │                                                                      │
//!   │   index: KeyIndex<K>               ring: RecencyRing<K, V>           │
//!   │   ┌──────────────┬────────┐        ┌──────────────────────────────┐  │
//!   │   │ "github.com" │ slot 2 │──────► │ slots: [A, B, C]  free: []   │  │
//!   │   │ "youtube.com"│ slot 1 │──────► │                              │  │
//!   │   │ "google.com" │ slot 0 │──────► │ head = 2 (MRU), tail = 0     │  │
//!   │   └──────────────┴────────┘        └──────────────────────────────┘  │
//!   │                                                                      │
//!   │   capacity: usize (fixed at construction, > 0)                       │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Put Flow
//!
//! ```text
//!   put(key, value)
//!        │
//!        ▼
//!   key in index? ── YES ──► replace value, promote slot ──► Updated(old)
//!        │
//!        NO
//!        ▼
//!   len == capacity? ── YES ──► pop_back() from ring
//!        │                      remove evicted key from index
//!        ▼                      │
//!   push_front(Entry) ◄─────────┘
//!   index.insert(key, slot) ──► Inserted | Evicted(k, v)
//! ```
//!
//! The index is always updated before a freed slot can be handed out again,
//! so no key ever maps to a slot holding some other entry.
//!
//! ## Example Usage
//!
//! ```rust
//! use ringcache::cache::lru::RecencyCache;
//!
//! let mut cache = RecencyCache::new(2).unwrap();
//! cache.put("a".to_string(), 1);
//! cache.put("b".to_string(), 2);
//! assert_eq!(cache.get("a"), Some(&1));
//!
//! // "b" is now least recently used and makes room for "c".
//! cache.put("c".to_string(), 3);
//! assert_eq!(cache.get("b"), None);
//! assert_eq!(cache.to_string(), "c -> a -> (back to head)");
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::mem;

use log::{debug, info, trace};

use crate::cache::cache_traits::{CacheStats, CoreCache, PutOutcome, RecencyOrdered};
use crate::cache::entry::{Entry, SlotId};
use crate::cache::key_index::KeyIndex;
use crate::cache::metrics::{CacheMetrics, CacheMetricsSnapshot};
use crate::cache::recency_ring::RecencyRing;
use crate::common::config::CacheConfig;
use crate::common::exception::{CacheError, Result};

/// Bounded cache that evicts the least-recently-used entry.
///
/// See module-level documentation for details.
#[derive(Debug)]
pub struct RecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    capacity: usize,
    ring: RecencyRing<K, V>,
    index: KeyIndex<K>,
    metrics: CacheMetrics,
}

impl<K, V> RecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(CacheConfig::with_capacity(capacity))
    }

    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "Initializing RecencyCache with capacity {} (prealloc: {})",
            config.capacity, config.prealloc_memory
        );

        let (ring, index) = if config.prealloc_memory {
            (
                RecencyRing::with_capacity(config.capacity),
                KeyIndex::with_capacity(config.capacity),
            )
        } else {
            (RecencyRing::new(), KeyIndex::new())
        };

        Ok(Self {
            capacity: config.capacity,
            ring,
            index,
            metrics: CacheMetrics::default(),
        })
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// `None` is the miss result: the key was never stored or has been evicted.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.metrics.get_calls += 1;

        let Some(slot) = self.index.lookup(key) else {
            self.metrics.get_misses += 1;
            return None;
        };

        self.metrics.get_hits += 1;
        self.touch_slot(slot);
        self.ring.get(slot).map(Entry::value)
    }

    /// Stores `value` under `key` and marks it most recently used.
    ///
    /// An existing key is updated in place. A new key at full capacity first
    /// evicts the least-recently-used entry, which is returned in the outcome.
    pub fn put(&mut self, key: K, value: V) -> PutOutcome<K, V> {
        self.metrics.put_calls += 1;

        if let Some(slot) = self.index.lookup(&key) {
            let old = match self.ring.get_mut(slot) {
                Some(entry) => mem::replace(entry.value_mut(), value),
                None => unreachable!("index maps a key to vacant {}", slot),
            };
            self.metrics.put_updates += 1;
            self.touch_slot(slot);
            return PutOutcome::Updated(old);
        }

        let evicted = if self.ring.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let slot = self.ring.push_front(Entry::new(key.clone(), value));
        self.index.insert(key, slot);
        self.metrics.put_inserts += 1;

        match evicted {
            Some((key, value)) => PutOutcome::Evicted(key, value),
            None => PutOutcome::Inserted,
        }
    }

    fn touch_slot(&mut self, slot: SlotId) {
        if self.ring.head() == Some(slot) {
            return;
        }
        let promoted = self.ring.promote(slot);
        debug_assert!(promoted, "index maps a key to vacant {}", slot);
        self.metrics.promotions += 1;
        trace!("Promoted {} to most recently used", slot);
    }

    /// Drops the tail of the ring and its index mapping.
    fn evict_lru(&mut self) -> Option<(K, V)> {
        let entry = self.ring.pop_back()?;
        self.index.remove(entry.key());
        self.metrics.evictions += 1;
        debug!(
            "Evicted least recently used entry ({} of {} entries remain)",
            self.ring.len(),
            self.capacity
        );
        Some(entry.into_parts())
    }

    /// Returns the value for `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let slot = self.index.lookup(key)?;
        self.ring.get(slot).map(Entry::value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.lookup(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        let entry = self.ring.get(self.ring.head()?)?;
        Some((entry.key(), entry.value()))
    }

    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let entry = self.ring.get(self.ring.tail()?)?;
        Some((entry.key(), entry.value()))
    }

    /// Position of `key` in the recency order (0 = most recent).
    ///
    /// Walks the ring, so this is O(n) and meant for diagnostics.
    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let slot = self.index.lookup(key)?;
        self.ring.iter().position(|(id, _)| id == slot)
    }

    /// Keys from most to least recently used.
    pub fn dump(&self) -> Vec<&K> {
        self.ring.iter().map(|(_, entry)| entry.key()).collect()
    }

    /// Iterates `(key, value)` pairs from most to least recently used
    /// without touching recency.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.ring
            .iter()
            .map(|(_, entry)| (entry.key(), entry.value()))
    }

    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity)
    }

    /// Checks that the ring and the index describe the same set of entries
    /// and that the ring closes in both directions.
    pub fn validate(&self) -> Result<()> {
        self.ring.check_links()?;

        if self.ring.len() > self.capacity {
            return Err(CacheError::CorruptRing(format!(
                "{} entries exceed capacity {}",
                self.ring.len(),
                self.capacity
            )));
        }
        if self.index.len() != self.ring.len() {
            return Err(CacheError::CorruptRing(format!(
                "index holds {} keys but ring holds {} entries",
                self.index.len(),
                self.ring.len()
            )));
        }
        for (key, slot) in self.index.iter() {
            match self.ring.get(slot) {
                Some(entry) if entry.key() == key => {}
                Some(_) => {
                    return Err(CacheError::CorruptRing(format!(
                        "index entry for {} names a different key",
                        slot
                    )));
                }
                None => {
                    return Err(CacheError::CorruptRing(format!(
                        "index entry points at vacant {}",
                        slot
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<K, V> fmt::Display for RecencyCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        for key in self.dump() {
            write!(f, "{} -> ", key)?;
        }
        write!(f, "(back to head)")
    }
}

impl<K, V> CoreCache<K, V> for RecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn put(&mut self, key: K, value: V) -> PutOutcome<K, V> {
        RecencyCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        RecencyCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        RecencyCache::contains(self, key)
    }

    fn len(&self) -> usize {
        self.ring.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> RecencyOrdered<K, V> for RecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn peek_mru(&self) -> Option<(&K, &V)> {
        RecencyCache::peek_mru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        RecencyCache::peek_lru(self)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        RecencyCache::recency_rank(self, key)
    }

    fn dump(&self) -> Vec<&K> {
        RecencyCache::dump(self)
    }
}

impl<K, V> CacheStats for RecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn total_gets(&self) -> u64 {
        self.metrics.get_calls
    }

    fn total_hits(&self) -> u64 {
        self.metrics.get_hits
    }

    fn total_evictions(&self) -> u64 {
        self.metrics.evictions
    }

    fn reset_stats(&mut self) {
        self.metrics.reset();
    }
}
