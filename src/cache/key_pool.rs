use hashbrown::HashMap as FastHashMap;

use crate::enums::HttpMethod;

/// Interning table for composite `(method, path)` request keys, backed by a
/// fixed-capacity ring buffer recording insertion order (spec.md §4.8
/// "Request-key pool"). Amortizes key allocation for repeated hot paths and
/// guarantees the pool never grows past `capacity` entries.
pub struct RequestKeyPool {
    capacity: usize,
    ring: Vec<Option<(HttpMethod, String)>>,
    cursor: usize,
    len: usize,
    next_key: u64,
    table: FastHashMap<HttpMethod, FastHashMap<String, u64>>,
}

impl RequestKeyPool {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "request-key pool capacity must be positive");
        Self {
            capacity,
            ring: Vec::with_capacity(capacity),
            cursor: 0,
            len: 0,
            next_key: 0,
            table: FastHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the interned key for `(method, path)`, assigning a fresh one
    /// on first sight and evicting the oldest pool entry if at capacity.
    pub fn intern(&mut self, method: &HttpMethod, path: &str) -> u64 {
        if let Some(bucket) = self.table.get(method) {
            if let Some(&key) = bucket.get(path) {
                return key;
            }
        }

        let key = self.next_key;
        self.next_key += 1;

        self.table
            .entry(method.clone())
            .or_default()
            .insert(path.to_string(), key);

        if self.ring.len() < self.capacity {
            self.ring.push(Some((method.clone(), path.to_string())));
            self.len += 1;
        } else {
            if let Some((old_method, old_path)) = self.ring[self.cursor].take() {
                let mut remove_bucket = false;
                if let Some(bucket) = self.table.get_mut(&old_method) {
                    bucket.remove(&old_path);
                    remove_bucket = bucket.is_empty();
                }
                if remove_bucket {
                    self.table.remove(&old_method);
                }
                self.len -= 1;
            }
            self.ring[self.cursor] = Some((method.clone(), path.to_string()));
            self.len += 1;
            self.cursor = (self.cursor + 1) % self.capacity;
        }

        key
    }

    pub fn clear(&mut self) {
        self.ring.clear();
        self.table.clear();
        self.cursor = 0;
        self.len = 0;
        self.next_key = 0;
    }
}
