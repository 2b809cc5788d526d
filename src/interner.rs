use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;

/// Process-wide string interner used by [`crate::enums::HttpMethod`]
/// canonicalization and by the radix tree's static-segment literals. A
/// read-mostly fast path (shared lock) falls back to a write lock only on
/// first sight of a given string, so repeated interning of the same literal
/// across many routes is nearly free.
///
/// Key safety: the stored key is a freshly-allocated `Box<str>` owned by the
/// interner, so mutating the caller's original `&str` afterward cannot
/// corrupt the cache entry.
#[derive(Debug, Default)]
pub struct Interner {
    map: RwLock<FastHashMap<Box<str>, u32>>,
    rev: RwLock<Vec<Box<str>>>,
}

impl Interner {
    pub fn new() -> Self {
        Self {
            map: RwLock::new(FastHashMap::new()),
            rev: RwLock::new(Vec::new()),
        }
    }

    #[inline]
    pub fn intern(&self, s: &str) -> u32 {
        if let Some(id) = self.map.read().get(s).copied() {
            return id;
        }

        let mut map = self.map.write();
        if let Some(&id) = map.get(s) {
            return id;
        }
        let mut rev = self.rev.write();
        let id = rev.len() as u32;
        let boxed: Box<str> = s.to_string().into_boxed_str();
        rev.push(boxed.clone());
        map.insert(boxed, id);
        id
    }

    #[inline]
    pub fn resolve(&self, id: u32) -> Option<Box<str>> {
        self.rev.read().get(id as usize).cloned()
    }

    pub fn len(&self) -> usize {
        self.rev.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_when_called_twice_then_returns_same_id() {
        let interner = Interner::new();
        let a = interner.intern("users");
        let b = interner.intern("users");
        assert_eq!(a, b);
    }

    #[test]
    fn intern_when_mutating_caller_string_then_cache_unaffected() {
        let interner = Interner::new();
        let mut s = String::from("posts");
        let id = interner.intern(&s);
        s.push_str("-mutated");
        assert_eq!(interner.resolve(id).as_deref(), Some("posts"));
    }
}
