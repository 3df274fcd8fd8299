use ringcache::{CacheError, CacheStats, PutOutcome, RecencyCache};

use crate::common::logger::init_test_logger;

fn page(site: &str) -> String {
    format!("<html>{}</html>", site)
}

mod browser_history {
    use super::*;

    #[test]
    fn test_mru_order_after_each_step() {
        init_test_logger();
        let mut cache = assert_ok!(RecencyCache::new(3));

        cache.put("google.com".to_string(), page("Google"));
        cache.put("youtube.com".to_string(), page("YouTube"));
        cache.put("github.com".to_string(), page("GitHub"));
        assert_eq!(
            cache.to_string(),
            "github.com -> youtube.com -> google.com -> (back to head)"
        );

        assert_eq!(cache.get("google.com"), Some(&page("Google")));
        assert_eq!(
            cache.to_string(),
            "google.com -> github.com -> youtube.com -> (back to head)"
        );

        let outcome = cache.put("linkedin.com".to_string(), page("LinkedIn"));
        assert_eq!(outcome.evicted_key().map(String::as_str), Some("youtube.com"));
        assert_eq!(
            cache.to_string(),
            "linkedin.com -> google.com -> github.com -> (back to head)"
        );

        assert_eq!(cache.get("youtube.com"), None);
        assert_ok!(cache.validate());
    }

    #[test]
    fn test_revisit_keeps_page_alive() {
        init_test_logger();
        let mut cache = assert_ok!(RecencyCache::new(2));

        cache.put("a.com".to_string(), page("A"));
        cache.put("b.com".to_string(), page("B"));
        for site in ["c.com", "d.com", "e.com"] {
            // Revisiting a.com before every new page keeps it off the tail.
            assert!(cache.get("a.com").is_some());
            cache.put(site.to_string(), page(site));
        }

        assert!(cache.contains("a.com"));
        assert!(cache.contains("e.com"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.total_evictions(), 3);
    }
}

mod laws {
    use super::*;

    #[test]
    fn test_update_moves_only_the_updated_key() {
        let mut cache = assert_ok!(RecencyCache::new(5));
        for i in 0..5 {
            cache.put(i, i * 10);
        }
        assert_eq!(cache.dump(), vec![&4, &3, &2, &1, &0]);

        assert_eq!(cache.put(2, 99), PutOutcome::Updated(20));
        assert_eq!(cache.dump(), vec![&2, &4, &3, &1, &0]);
        assert_ok!(cache.validate());
    }

    #[test]
    fn test_eviction_removes_exactly_the_lru_key() {
        let mut cache = assert_ok!(RecencyCache::new(4));
        for i in 0..4 {
            cache.put(i, ());
        }
        cache.get(&0);
        cache.get(&1);
        let before: Vec<i32> = cache.dump().into_iter().copied().collect();
        let lru = *before.last().unwrap();

        assert_eq!(cache.put(100, ()), PutOutcome::Evicted(lru, ()));

        let after: Vec<i32> = cache.dump().into_iter().copied().collect();
        let mut expected = vec![100];
        expected.extend(before.iter().copied().filter(|k| *k != lru));
        assert_eq!(after, expected);
    }

    #[test]
    fn test_miss_only_for_absent_keys() {
        let mut cache = assert_ok!(RecencyCache::new(2));
        assert_eq!(cache.get(&"never"), None);

        cache.put("x", 1);
        cache.put("y", 2);
        cache.put("z", 3);
        assert_eq!(cache.get(&"x"), None);

        cache.put("x", 4);
        assert_eq!(cache.get(&"x"), Some(&4));
        assert_eq!(cache.total_misses(), 2);
    }
}

mod construction {
    use super::*;

    #[test]
    fn test_zero_capacity_is_fatal() {
        assert_err!(RecencyCache::<String, String>::new(0));
        match RecencyCache::<String, String>::new(0) {
            Err(CacheError::InvalidCapacity(0)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_independent_caches_do_not_share_capacity() {
        let mut small = assert_ok!(RecencyCache::new(1));
        let mut large = assert_ok!(RecencyCache::new(3));

        for i in 0..3 {
            small.put(i, i);
            large.put(i, i);
        }

        assert_eq!(small.capacity(), 1);
        assert_eq!(small.len(), 1);
        assert_eq!(large.capacity(), 3);
        assert_eq!(large.len(), 3);
    }
}
