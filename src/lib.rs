//! Bounded recency-ordered key/value cache.
//!
//! [`RecencyCache`] keeps at most `capacity` entries and evicts the
//! least-recently-used one when a new key arrives at full capacity. Entries
//! live in an arena-backed circular ring; a hash index maps keys to ring slots.

pub mod cache;
pub mod common;

pub use cache::cache_traits::{CacheStats, CoreCache, PutOutcome, RecencyOrdered};
pub use cache::lru::RecencyCache;
pub use common::config::CacheConfig;
pub use common::exception::{CacheError, Result};
