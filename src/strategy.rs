use hashbrown::HashMap as FastHashMap;

use crate::enums::HttpMethod;
use crate::pattern::SegmentKind;
use crate::radix::{find as radix_find, ConstraintValidator, InsertOutcome, RadixTree};
use crate::types::{RouteKey, RouteParams};

/// Pluggable matcher facade (spec.md §4.6). `RouteSet` is generic over which
/// `Strategy` it holds; all three share the same `insert`/`find` contract so
/// swapping one in does not change `RouteSet`'s own logic.
pub enum Strategy {
    /// Delegates insert and find directly to the radix tree.
    Radix(RadixTree),
    /// O(1) exact-path lookup, valid only for routes with no `:` or `*`.
    Hash(HashStrategy),
    /// Static routes go into a two-level map, dynamic routes into the tree;
    /// find tries the static map first, then falls back to the tree.
    Hybrid(HybridStrategy),
}

impl Strategy {
    pub fn radix() -> Self {
        Strategy::Radix(RadixTree::new())
    }

    pub fn hash() -> Self {
        Strategy::Hash(HashStrategy::new())
    }

    pub fn hybrid() -> Self {
        Strategy::Hybrid(HybridStrategy::new())
    }

    /// `true` if every segment of `segments` is [`SegmentKind::Static`].
    pub fn is_static_template(segments: &[SegmentKind]) -> bool {
        segments.iter().all(|s| matches!(s, SegmentKind::Static(_)))
    }

    pub fn insert(
        &mut self,
        method: &HttpMethod,
        segments: &[SegmentKind],
        route_key: RouteKey,
    ) -> InsertOutcome {
        match self {
            Strategy::Radix(tree) => tree.insert(method, segments, route_key),
            Strategy::Hash(hash) => hash.insert(method, segments, route_key),
            Strategy::Hybrid(hybrid) => hybrid.insert(method, segments, route_key),
        }
    }

    pub fn find(
        &self,
        method: &HttpMethod,
        segments: &[Box<str>],
        params: &mut RouteParams,
        validate: &dyn ConstraintValidator,
    ) -> Option<(RouteKey, RouteParams)> {
        match self {
            Strategy::Radix(tree) => radix_find(&tree.root, method, segments, params, validate),
            Strategy::Hash(hash) => hash.find(method, segments, params, validate),
            Strategy::Hybrid(hybrid) => hybrid.find(method, segments, params, validate),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Strategy::Radix(tree) => *tree = RadixTree::new(),
            Strategy::Hash(hash) => hash.clear(),
            Strategy::Hybrid(hybrid) => hybrid.clear(),
        }
    }
}

/// Exact `UPPERMETHOD::path` lookup. Only routes whose template is entirely
/// static segments may be inserted; callers are expected to have checked
/// [`Strategy::is_static_template`] first (spec.md §4.6 "Hash strategy").
#[derive(Default)]
pub struct HashStrategy {
    table: FastHashMap<(HttpMethod, String), RouteKey>,
}

impl HashStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(method: &HttpMethod, segments: &[SegmentKind]) -> Option<(HttpMethod, String)> {
        if !Strategy::is_static_template(segments) {
            return None;
        }
        let path = render_static(segments);
        Some((method.clone(), path))
    }

    pub fn insert(
        &mut self,
        method: &HttpMethod,
        segments: &[SegmentKind],
        route_key: RouteKey,
    ) -> InsertOutcome {
        let Some(key) = Self::key(method, segments) else {
            return InsertOutcome::Inserted;
        };
        if let Some(&existing) = self.table.get(&key) {
            return InsertOutcome::AlreadyExists(existing);
        }
        self.table.insert(key, route_key);
        InsertOutcome::Inserted
    }

    pub fn find(
        &self,
        method: &HttpMethod,
        segments: &[Box<str>],
        params: &mut RouteParams,
        validate: &dyn ConstraintValidator,
    ) -> Option<(RouteKey, RouteParams)> {
        params.clear();
        let path = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("/");
        let key = self.table.get(&(method.clone(), path))?;
        if validate.validate(*key, params) {
            Some((*key, params.clone()))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }
}

/// Static routes in a two-level `path -> method -> route` map, dynamic
/// routes in a [`RadixTree`] (spec.md §4.6 "Hybrid strategy"). Static hits
/// skip the tree traversal entirely and return an empty params map.
#[derive(Default)]
pub struct HybridStrategy {
    static_routes: FastHashMap<String, FastHashMap<HttpMethod, RouteKey>>,
    tree: RadixTree,
}

impl HybridStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        method: &HttpMethod,
        segments: &[SegmentKind],
        route_key: RouteKey,
    ) -> InsertOutcome {
        if Strategy::is_static_template(segments) {
            let path = render_static(segments);
            let bucket = self.static_routes.entry(path).or_default();
            if let Some(&existing) = bucket.get(method) {
                return InsertOutcome::AlreadyExists(existing);
            }
            bucket.insert(method.clone(), route_key);
            return InsertOutcome::Inserted;
        }
        self.tree.insert(method, segments, route_key)
    }

    pub fn find(
        &self,
        method: &HttpMethod,
        segments: &[Box<str>],
        params: &mut RouteParams,
        validate: &dyn ConstraintValidator,
    ) -> Option<(RouteKey, RouteParams)> {
        params.clear();
        let path = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("/");
        if let Some(bucket) = self.static_routes.get(&path) {
            if let Some(&key) = bucket.get(method) {
                if validate.validate(key, params) {
                    return Some((key, params.clone()));
                }
            }
        }
        radix_find(&self.tree.root, method, segments, params, validate)
    }

    pub fn clear(&mut self) {
        self.static_routes.clear();
        self.tree = RadixTree::new();
    }
}

fn render_static(segments: &[SegmentKind]) -> String {
    segments
        .iter()
        .map(|s| match s {
            SegmentKind::Static(literal) => literal.as_str(),
            _ => unreachable!("render_static called on a non-static template"),
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse_template;

    fn segs(parts: &[&str]) -> Vec<SegmentKind> {
        parse_template(&parts.iter().map(|s| s.to_string()).collect::<Vec<_>>()).unwrap()
    }

    fn boxed(parts: &[&str]) -> Vec<Box<str>> {
        parts.iter().map(|s| Box::<str>::from(*s)).collect()
    }

    fn always_valid(_: RouteKey, _: &mut RouteParams) -> bool {
        true
    }

    #[test]
    fn hash_strategy_when_dynamic_template_then_find_misses() {
        let mut strategy = HashStrategy::new();
        let s = segs(&["users", ":id"]);
        strategy.insert(&HttpMethod::Get, &s, 1);
        let segs = boxed(&["users", "1"]);
        let mut params = RouteParams::new();
        assert!(strategy
            .find(&HttpMethod::Get, &segs, &mut params, &always_valid)
            .is_none());
    }

    #[test]
    fn hash_strategy_when_static_template_then_exact_lookup() {
        let mut strategy = HashStrategy::new();
        let s = segs(&["health"]);
        strategy.insert(&HttpMethod::Get, &s, 3);
        let segs = boxed(&["health"]);
        let mut params = RouteParams::new();
        let (key, _) = strategy
            .find(&HttpMethod::Get, &segs, &mut params, &always_valid)
            .unwrap();
        assert_eq!(key, 3);
    }

    #[test]
    fn hybrid_strategy_when_mixed_routes_then_both_resolve() {
        let mut strategy = HybridStrategy::new();
        strategy.insert(&HttpMethod::Get, &segs(&["health"]), 1);
        strategy.insert(&HttpMethod::Get, &segs(&["users", ":id"]), 2);

        let mut params = RouteParams::new();
        let (key, _) = strategy
            .find(&HttpMethod::Get, &boxed(&["health"]), &mut params, &always_valid)
            .unwrap();
        assert_eq!(key, 1);

        let mut params = RouteParams::new();
        let (key, params) = strategy
            .find(
                &HttpMethod::Get,
                &boxed(&["users", "7"]),
                &mut params,
                &always_valid,
            )
            .unwrap();
        assert_eq!(key, 2);
        assert_eq!(params.get("id").map(String::as_str), Some("7"));
    }
}
