use std::collections::VecDeque;

use hashbrown::HashMap as FastHashMap;

use super::stats::{CacheStats, CacheStatsSnapshot};
use crate::types::MatchedRoute;

/// Bounded mapping from composite request key to a prior match result
/// (spec.md §3, §4.8). Unlike the generation/validation [`super::lru::SmallLru`]
/// caches, eviction here is batched — when full, the oldest 25% of entries
/// are dropped at once — which amortizes the cost of keeping the hot set
/// warm under sustained high-cardinality traffic instead of evicting one
/// entry per insert.
pub struct RecognitionCache {
    capacity: usize,
    entries: FastHashMap<u64, MatchedRoute>,
    order: VecDeque<u64>,
    stats: CacheStats,
}

impl RecognitionCache {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "recognition cache capacity must be positive");
        Self {
            capacity,
            entries: FastHashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            stats: CacheStats::default(),
        }
    }

    pub fn get(&self, key: u64) -> Option<&MatchedRoute> {
        let hit = self.entries.get(&key);
        if hit.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        hit
    }

    pub fn insert(&mut self, key: u64, value: MatchedRoute) {
        if self.entries.contains_key(&key) {
            self.entries.insert(key, value);
            return;
        }
        if self.entries.len() >= self.capacity {
            self.evict_oldest_quarter();
        }
        self.order.push_back(key);
        self.entries.insert(key, value);
    }

    fn evict_oldest_quarter(&mut self) {
        let evict_count = (self.capacity / 4).max(1);
        for _ in 0..evict_count {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            } else {
                break;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn clear_counters(&self) {
        self.stats.clear();
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(route: u16) -> MatchedRoute {
        MatchedRoute {
            route,
            params: Default::default(),
            controller: "users".to_string(),
            action: "show".to_string(),
        }
    }

    #[test]
    fn insert_and_get_when_present_then_hit() {
        let mut cache = RecognitionCache::new(8);
        cache.insert(1, sample(0));
        assert!(cache.get(1).is_some());
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn get_when_absent_then_miss_recorded() {
        let cache = RecognitionCache::new(8);
        assert!(cache.get(42).is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn insert_when_full_then_evicts_oldest_quarter() {
        let mut cache = RecognitionCache::new(4);
        for i in 0..4u64 {
            cache.insert(i, sample(i as u16));
        }
        cache.insert(4, sample(4));
        // evict_count = max(4/4, 1) = 1, so the single oldest (key 0) is gone
        assert!(cache.get(0).is_none());
        assert!(cache.get(1).is_some());
        assert!(cache.get(4).is_some());
        assert!(cache.len() <= 4);
    }
}
