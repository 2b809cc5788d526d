use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheStatsSnapshot, RecognitionCache, RequestKeyPool};
use crate::enums::HttpMethod;
use crate::errors::{RouterError, RouterErrorCode, RouterResult};
use crate::path::TokenizationCache;
use crate::radix::InsertOutcome;
use crate::route::Route;
use crate::strategy::Strategy;
use crate::types::{MatchedRoute, RouteParams};

/// Upper bound on registered routes, mirroring the teacher's `MAX_ROUTES`
/// guard in `radix/tree.rs`/`radix/insert.rs` — the full value space of
/// `RouteKey` (`u16`), so every route index still fits.
pub const MAX_ROUTES: usize = u16::MAX as usize;

fn at_route_capacity(current_len: usize) -> bool {
    current_len >= MAX_ROUTES
}

/// Owns every route, the named-route index, the matching [`Strategy`], and
/// all post-build mutable state: recognition cache, request-key pool, and
/// tokenization cache (spec.md §3 "RouteSet", §4.8). Everything but those
/// caches is set once during DSL replay and is deeply immutable afterward,
/// which is what allows concurrent lock-free reads on a cache hit.
pub struct RouteSet {
    routes: Vec<Route>,
    named: std::collections::HashMap<String, usize>,
    strategy: Strategy,
    state: Mutex<MutableState>,
    tokenizer: TokenizationCache,
}

struct MutableState {
    recognition: RecognitionCache,
    key_pool: RequestKeyPool,
}

impl RouteSet {
    /// Each cache gets its own capacity (spec.md §5 "Resource bounds",
    /// expanded): recognition cache, tokenization cache, and request-key
    /// pool no longer share one dial — a route set with a huge static
    /// table and little request-key churn can size them independently.
    pub fn new(
        strategy: Strategy,
        recognition_cache_capacity: usize,
        tokenization_cache_capacity: usize,
        request_key_capacity: usize,
    ) -> Self {
        Self {
            routes: Vec::new(),
            named: std::collections::HashMap::new(),
            strategy,
            state: Mutex::new(MutableState {
                recognition: RecognitionCache::new(recognition_cache_capacity),
                key_pool: RequestKeyPool::new(request_key_capacity),
            }),
            tokenizer: TokenizationCache::new(tokenization_cache_capacity),
        }
    }

    /// Register a fully-constructed route: reject duplicate names, insert
    /// into the strategy for each of its methods, append to the route
    /// vector (spec.md §4.8 "add").
    pub fn add(&mut self, route: Route) -> RouterResult<()> {
        if at_route_capacity(self.routes.len()) {
            return Err(RouterError::new(
                RouterErrorCode::MaxRoutesExceeded,
                "route_set",
                "add",
                format!("cannot register more than {MAX_ROUTES} routes"),
                Some(serde_json::json!({ "limit": MAX_ROUTES, "current": self.routes.len() })),
            ));
        }

        if let Some(name) = &route.name {
            if self.named.contains_key(name) {
                return Err(RouterError::new(
                    RouterErrorCode::DuplicateRouteName,
                    "route_set",
                    "add",
                    format!("route name '{name}' is already registered"),
                    None,
                ));
            }
        }

        for method in &route.methods {
            match self.strategy.insert(method, &route.segments, route.key) {
                InsertOutcome::Inserted => {}
                InsertOutcome::AlreadyExists(_) => {
                    // spec.md §8 "Duplicate route insertion is a no-op" —
                    // same (method, path) registered twice, keep the first.
                }
            }
        }

        let index = self.routes.len();
        if let Some(name) = &route.name {
            self.named.insert(name.clone(), index);
        }
        self.routes.push(route);
        Ok(())
    }

    /// Resolve `(method, path)` to a route and its captured params (spec.md
    /// §4.8 "match"). Cache hits never touch the strategy or the tree.
    #[tracing::instrument(level = "debug", skip(self), fields(method = %method, path = %path))]
    pub fn match_route(&self, method: &HttpMethod, path: &str) -> Option<MatchedRoute> {
        let normalized = crate::path::normalize_path(path);
        let mut state = self.state.lock();
        let key = state.key_pool.intern(method, &normalized);

        if let Some(hit) = state.recognition.get(key) {
            return Some(hit.clone());
        }

        let segments = self.tokenizer.tokenize(&normalized);
        let mut params = RouteParams::new();
        let validate = |route_key: crate::types::RouteKey, params: &mut RouteParams| {
            self.routes
                .get(route_key as usize)
                .is_some_and(|route| route.validate_and_fill(params))
        };
        let found = self.strategy.find(method, &segments, &mut params, &validate);

        let (route_key, params) = found?;
        let route = self.routes.get(route_key as usize)?;
        let matched = MatchedRoute {
            route: route_key,
            params,
            controller: route.controller.clone(),
            action: route.action.clone(),
        };
        state.recognition.insert(key, matched.clone());
        Some(matched)
    }

    /// Look up a named route and delegate to its path generator (spec.md
    /// §4.8 "generate_path").
    pub fn generate_path(
        &self,
        name: &str,
        params: &std::collections::HashMap<String, String>,
    ) -> RouterResult<Arc<str>> {
        let index = *self.named.get(name).ok_or_else(|| {
            RouterError::new(
                RouterErrorCode::RouteNotFound,
                "route_set",
                "generate_path",
                format!("no named route '{name}'"),
                None,
            )
        })?;
        self.routes[index].generate_path(params)
    }

    pub fn cache_stats(&self) -> CacheStatsSnapshot {
        self.state.lock().recognition.stats()
    }

    pub fn each(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn size(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn includes_named(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Empties routes, named index, recognition cache, and LRU counters;
    /// resets the strategy (spec.md §4.8 "clear!").
    pub fn clear(&mut self) {
        self.routes.clear();
        self.named.clear();
        self.strategy.clear();
        self.tokenizer.clear();
        let mut state = self.state.lock();
        state.recognition.clear();
        state.recognition.clear_counters();
        state.key_pool.clear();
    }
}
