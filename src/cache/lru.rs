use hashbrown::HashMap as FastHashMap;
use std::hash::Hash;

use super::stats::{CacheStats, CacheStatsSnapshot};

const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Slot<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

/// Fixed-capacity LRU with strict recency ordering: `get` on a hit moves the
/// entry to most-recent, `put` evicts the least-recent entry when full.
/// Backed by an intrusive doubly linked list over a flat `Vec` so both `get`
/// and `put` are O(1) — the teacher's source had a known bug where
/// repeated `get`s on the same key did not re-promote it; this
/// implementation always re-links on a hit.
#[derive(Debug)]
pub struct SmallLru<K, V> {
    capacity: usize,
    slots: Vec<Slot<K, V>>,
    index: FastHashMap<K, usize>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    stats: CacheStats,
}

impl<K, V> SmallLru<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "LRU capacity must be positive");
        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            index: FastHashMap::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            stats: CacheStats::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Read-only peek that does not affect recency or stats — used when the
    /// caller needs to decide whether to touch the cache separately (e.g.
    /// the recognition cache's cheap-read fast path).
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.slots[slot].value)
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.index.get(key).copied() {
            Some(slot) => {
                self.move_to_front(slot);
                self.stats.record_hit();
                Some(self.slots[slot].value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    pub fn put(&mut self, key: K, value: V) {
        if let Some(&slot) = self.index.get(&key) {
            self.slots[slot].value = value;
            self.move_to_front(slot);
            return;
        }

        if self.index.len() >= self.capacity {
            self.evict_tail();
        }

        let slot = match self.free.pop() {
            Some(reused) => {
                self.slots[reused] = Slot {
                    key: key.clone(),
                    value,
                    prev: NIL,
                    next: NIL,
                };
                reused
            }
            None => {
                self.slots.push(Slot {
                    key: key.clone(),
                    value,
                    prev: NIL,
                    next: NIL,
                });
                self.slots.len() - 1
            }
        };
        self.index.insert(key, slot);
        self.push_front(slot);
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    pub fn clear_counters(&self) {
        self.stats.clear();
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot(self.len())
    }

    fn evict_tail(&mut self) {
        if self.tail == NIL {
            return;
        }
        let tail = self.tail;
        self.unlink(tail);
        self.index.remove(&self.slots[tail].key);
        self.free.push(tail);
    }

    fn move_to_front(&mut self, slot: usize) {
        if self.head == slot {
            return;
        }
        self.unlink(slot);
        self.push_front(slot);
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.slots[slot].prev, self.slots[slot].next);
        if prev != NIL {
            self.slots[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.slots[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.slots[slot].prev = NIL;
        self.slots[slot].next = NIL;
    }

    fn push_front(&mut self, slot: usize) {
        self.slots[slot].prev = NIL;
        self.slots[slot].next = self.head;
        if self.head != NIL {
            self.slots[self.head].prev = slot;
        }
        self.head = slot;
        if self.tail == NIL {
            self.tail = slot;
        }
    }
}
