/// Point-in-time copy of a cache's operation counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub put_calls: u64,
    pub put_inserts: u64,
    pub put_updates: u64,

    pub promotions: u64, // hits and updates that moved a non-head entry
    pub evictions: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

#[derive(Debug, Default)]
pub(crate) struct CacheMetrics {
    pub(crate) get_calls: u64,
    pub(crate) get_hits: u64,
    pub(crate) get_misses: u64,
    pub(crate) put_calls: u64,
    pub(crate) put_inserts: u64,
    pub(crate) put_updates: u64,
    pub(crate) promotions: u64,
    pub(crate) evictions: u64,
}

impl CacheMetrics {
    pub(crate) fn snapshot(&self, len: usize, capacity: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.get_calls,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            put_calls: self.put_calls,
            put_inserts: self.put_inserts,
            put_updates: self.put_updates,
            promotions: self.promotions,
            evictions: self.evictions,
            len,
            capacity,
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
