pub mod cache_traits;
pub mod entry;
pub mod key_index;
pub mod lru;
pub mod metrics;
pub mod recency_ring;
