//! Bounded LRU cache with TTL-on-read expiry
//!
//! Best-effort by contract: callers treat every operation as infallible and
//! a missing entry as a miss. Access is serialized behind one mutex with
//! poisoned-lock recovery; readers get clones.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use lru::LruCache;
use serde::Serialize;

struct Entry<V> {
    value: V,
    inserted_at: Instant,
    ttl: Duration,
}

/// Cache counters, snapshot by copy.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub capacity: usize,
}

pub struct TtlCache<V> {
    inner: Mutex<LruCache<String, Entry<V>>>,
    default_ttl: Duration,
    capacity: usize,
    stats: Mutex<(u64, u64)>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        let capacity = capacity.max(1);
        TtlCache {
            inner: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).expect("capacity >= 1"),
            )),
            default_ttl,
            capacity,
            stats: Mutex::new((0, 0)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<String, Entry<V>>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::debug!("cache lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Fetch a live entry; expired entries are evicted on the way out.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut cache = self.lock();
        let hit = match cache.get(key) {
            Some(entry) if entry.inserted_at.elapsed() <= entry.ttl => Some(entry.value.clone()),
            Some(_) => {
                cache.pop(key);
                None
            }
            None => None,
        };
        drop(cache);

        let mut stats = self.stats.lock().unwrap_or_else(|p| p.into_inner());
        if hit.is_some() {
            stats.0 += 1;
        } else {
            stats.1 += 1;
        }
        hit
    }

    pub fn set(&self, key: String, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    pub fn set_with_ttl(&self, key: String, value: V, ttl: Duration) {
        self.lock().put(
            key,
            Entry {
                value,
                inserted_at: Instant::now(),
                ttl,
            },
        );
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        let (hits, misses) = *self.stats.lock().unwrap_or_else(|p| p.into_inner());
        CacheStats {
            hits,
            misses,
            size: self.lock().len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let cache = TtlCache::new(10, Duration::from_secs(60));
        cache.set("k".to_string(), 42);
        assert_eq!(cache.get("k"), Some(42));
    }

    #[test]
    fn test_miss() {
        let cache: TtlCache<i32> = TtlCache::new(10, Duration::from_secs(60));
        assert_eq!(cache.get("absent"), None);
    }

    #[test]
    fn test_ttl_expiry_on_read() {
        let cache = TtlCache::new(10, Duration::from_secs(60));
        cache.set_with_ttl("k".to_string(), 1, Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get("k"), None);
        // expired entry was evicted, not just hidden
        assert_eq!(cache.stats().size, 0);
    }

    #[test]
    fn test_lru_eviction_at_capacity() {
        let cache = TtlCache::new(2, Duration::from_secs(60));
        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);
        cache.set("c".to_string(), 3);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(2));
        assert_eq!(cache.get("c"), Some(3));
    }

    #[test]
    fn test_clear() {
        let cache = TtlCache::new(10, Duration::from_secs(60));
        cache.set("k".to_string(), 1);
        cache.clear();
        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.stats().size, 0);
    }

    #[test]
    fn test_stats_counting() {
        let cache = TtlCache::new(10, Duration::from_secs(60));
        cache.set("k".to_string(), 1);
        let _ = cache.get("k");
        let _ = cache.get("nope");
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.capacity, 10);
    }
}
