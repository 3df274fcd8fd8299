// ==============================================
// RECENCY CACHE MODEL TESTS (integration)
// ==============================================
//
// Drives the cache with seeded random operations and compares every result
// against a plain Vec kept in MRU -> LRU order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ringcache::{PutOutcome, RecencyCache};

use crate::common::logger::init_test_logger;

struct VecModel {
    entries: Vec<(u32, u32)>, // front = most recently used
    capacity: usize,
}

impl VecModel {
    fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    fn get(&mut self, key: u32) -> Option<u32> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn put(&mut self, key: u32, value: u32) -> PutOutcome<u32, u32> {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            let (_, old) = self.entries.remove(pos);
            self.entries.insert(0, (key, value));
            return PutOutcome::Updated(old);
        }
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop()
        } else {
            None
        };
        self.entries.insert(0, (key, value));
        match evicted {
            Some((k, v)) => PutOutcome::Evicted(k, v),
            None => PutOutcome::Inserted,
        }
    }

    fn keys(&self) -> Vec<u32> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }
}

fn run_against_model(seed: u64, capacity: usize, key_space: u32, steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cache = assert_ok!(RecencyCache::new(capacity));
    let mut model = VecModel::new(capacity);

    for step in 0..steps {
        let key = rng.random_range(0..key_space);

        if rng.random_bool(0.5) {
            let value = rng.random_range(0..1_000);
            assert_eq!(
                cache.put(key, value),
                model.put(key, value),
                "put({}, {}) diverged at step {} (seed {})",
                key,
                value,
                step,
                seed
            );
        } else {
            assert_eq!(
                cache.get(&key).copied(),
                model.get(key),
                "get({}) diverged at step {} (seed {})",
                key,
                step,
                seed
            );
        }

        let keys: Vec<u32> = cache.dump().into_iter().copied().collect();
        assert_eq!(keys, model.keys(), "order diverged at step {}", step);
        assert!(cache.len() <= cache.capacity());
        assert_ok!(cache.validate(), "invariants broken at step {}", step);
    }
}

mod randomized {
    use super::*;

    #[test]
    fn test_single_slot_against_model() {
        init_test_logger();
        run_against_model(7, 1, 4, 500);
    }

    #[test]
    fn test_small_cache_heavy_eviction() {
        init_test_logger();
        run_against_model(42, 3, 10, 2_000);
    }

    #[test]
    fn test_key_space_fits_in_cache() {
        init_test_logger();
        run_against_model(1234, 16, 8, 2_000);
    }

    #[test]
    fn test_many_seeds() {
        init_test_logger();
        for seed in 0..20 {
            run_against_model(seed, 5, 12, 300);
        }
    }
}

mod slot_reuse {
    use super::*;

    #[test]
    fn test_long_churn_keeps_ring_closed() {
        let mut cache = assert_ok!(RecencyCache::new(8));

        for i in 0..10_000u32 {
            cache.put(i, i);
            if i % 3 == 0 {
                let _ = cache.get(&(i / 2));
            }
        }

        assert_eq!(cache.len(), 8);
        assert_eq!(cache.iter().count(), 8);
        assert_ok!(cache.validate());
    }
}
