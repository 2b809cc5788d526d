use std::sync::Arc;

use parking_lot::Mutex;

use super::normalize::split_segments;
use crate::cache::{CacheStatsSnapshot, SmallLru, DEFAULT_CACHE_CAPACITY};

/// Memoizes [`split_segments`] keyed by the raw input string, per spec.md
/// §4.1. Results are frozen (`Arc<[Box<str>]>`) so a cache hit is a cheap
/// reference-count bump rather than a re-allocated `Vec<String>`.
pub struct TokenizationCache {
    inner: Mutex<SmallLru<String, Arc<[Box<str>]>>>,
}

impl TokenizationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(SmallLru::new(capacity)),
        }
    }

    pub fn tokenize(&self, raw_path: &str) -> Arc<[Box<str>]> {
        let mut guard = self.inner.lock();
        if let Some(hit) = guard.get(&raw_path.to_string()) {
            return hit;
        }
        let segments: Arc<[Box<str>]> = split_segments(raw_path)
            .into_iter()
            .map(String::into_boxed_str)
            .collect();
        guard.put(raw_path.to_string(), segments.clone());
        segments
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.inner.lock().stats()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Default for TokenizationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_when_called_twice_then_second_is_cache_hit() {
        let cache = TokenizationCache::new(8);
        let first = cache.tokenize("/users/1");
        let second = cache.tokenize("/users/1");
        assert_eq!(first, second);
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }
}
