use std::sync::Arc;

use crate::dsl::{Builder, RouteDslOptions};
use crate::errors::{RouterError, RouterResult};
use crate::route::{Route, RouteOptions};
use crate::route_set::RouteSet;
use crate::strategy::Strategy;
use crate::cache::DEFAULT_CACHE_CAPACITY;

/// Which [`Strategy`] a [`Router`] should build its [`RouteSet`] with
/// (spec.md §4.6). `Auto` defers the choice to [`choose_strategy`], mirroring
/// the teacher's `enable_automatic_optimization` (`radix_tree/builder.rs`):
/// the decision is made once at `build()` time from the recorded route
/// shape, never re-evaluated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Radix,
    Hash,
    Hybrid,
    Auto,
}

/// Route-count threshold above which [`choose_strategy`] prefers `Hybrid`
/// over plain `Radix`, mirroring the teacher's `STATIC_MAP_THRESHOLD`
/// (`radix_tree/builder.rs`) for auto-enabling a static full map.
const AUTO_STATIC_MAP_THRESHOLD: usize = 64;

/// Dynamic-route ratio (dynamic or wildcard routes / total routes) below
/// which [`choose_strategy`] prefers `Hash` over `Hybrid` — a route set
/// this uniformly static gets no benefit from carrying a radix tree at all.
const AUTO_HASH_MAX_DYNAMIC_RATIO: f64 = 0.05;

/// Resolve `StrategyKind::Auto` into a concrete strategy from the shape of
/// the recorded route specs, the same moment the teacher's builder decides
/// `enable_root_level_pruning`/`enable_static_route_full_mapping`: once, at
/// build time, never re-evaluated as routes are added afterward (there is
/// no "add route to a live Router" operation in this crate to re-trigger it).
fn choose_strategy(route_count: usize, dynamic_or_wildcard_count: usize) -> StrategyKind {
    if route_count == 0 {
        return StrategyKind::Radix;
    }
    let dynamic_ratio = dynamic_or_wildcard_count as f64 / route_count as f64;
    if dynamic_ratio <= AUTO_HASH_MAX_DYNAMIC_RATIO {
        StrategyKind::Hash
    } else if route_count >= AUTO_STATIC_MAP_THRESHOLD {
        StrategyKind::Hybrid
    } else {
        StrategyKind::Radix
    }
}

/// Build-time configuration: which matching strategy to use, and the
/// capacity of each independently-sized cache (spec.md §5 "Resource
/// bounds"): the request-recognition cache, the tokenization cache, the
/// per-route generation/validation cache, and the request-key ring pool.
#[derive(Debug, Clone, Copy)]
pub struct RouterOptions {
    pub strategy: StrategyKind,
    pub recognition_cache_capacity: usize,
    pub tokenization_cache_capacity: usize,
    pub generation_cache_capacity: usize,
    pub request_key_capacity: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Radix,
            recognition_cache_capacity: DEFAULT_CACHE_CAPACITY,
            tokenization_cache_capacity: DEFAULT_CACHE_CAPACITY,
            generation_cache_capacity: DEFAULT_CACHE_CAPACITY,
            request_key_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// A finalized, immutable route table (spec.md §4.9 "Finalize"). Routes,
/// the named index, and the matching strategy are fixed at construction;
/// the only state that still changes afterward lives inside [`RouteSet`]'s
/// caches. Safe to share across threads via `Arc` for concurrent matching
/// and generation.
///
/// By design there is no "unfinalized `Router`" — DSL recording happens
/// entirely on [`Builder`] before a `Router` ever exists (spec.md §9
/// "Builder vs. live mutation": record-then-replay with a single `build()`
/// transition). The verb methods below exist only to satisfy spec.md §8
/// invariant 8 ("finalized RouteSet rejects any DSL call"): since a
/// constructed `Router` is always already finalized, they unconditionally
/// return `RouterFinalized`.
pub struct Router {
    route_set: Arc<RouteSet>,
}

impl Router {
    /// Record DSL calls via `dsl(&mut Builder)`, compile every recorded
    /// [`crate::dsl::RouteSpec`] into a [`Route`], insert them into a fresh
    /// [`RouteSet`], and return the finalized `Router` (spec.md §6
    /// `build(dsl_block) -> Router`).
    pub fn build(options: RouterOptions, dsl: impl FnOnce(&mut Builder)) -> RouterResult<Self> {
        let mut builder = Builder::new();
        dsl(&mut builder);
        let specs = builder.into_specs();

        let mut routes = Vec::with_capacity(specs.len());
        for (index, spec) in specs.into_iter().enumerate() {
            let route = Route::new(
                index as crate::types::RouteKey,
                &spec.path,
                spec.methods,
                RouteOptions {
                    to: Some(spec.to),
                    controller: None,
                    action: None,
                    name: spec.name,
                    constraints: spec.constraints,
                    defaults: spec.defaults,
                },
                options.generation_cache_capacity,
            )?;
            routes.push(route);
        }

        let resolved_kind = match options.strategy {
            StrategyKind::Auto => {
                let dynamic_or_wildcard = routes
                    .iter()
                    .filter(|route| route.segments.iter().any(|s| !matches!(s, crate::pattern::SegmentKind::Static(_))))
                    .count();
                choose_strategy(routes.len(), dynamic_or_wildcard)
            }
            other => other,
        };
        let strategy = match resolved_kind {
            StrategyKind::Radix => Strategy::radix(),
            StrategyKind::Hash => Strategy::hash(),
            StrategyKind::Hybrid => Strategy::hybrid(),
            StrategyKind::Auto => unreachable!("Auto is resolved to a concrete kind above"),
        };
        let mut route_set = RouteSet::new(
            strategy,
            options.recognition_cache_capacity,
            options.tokenization_cache_capacity,
            options.request_key_capacity,
        );

        for route in routes {
            route_set.add(route)?;
        }

        Ok(Self {
            route_set: Arc::new(route_set),
        })
    }

    pub fn route_set(&self) -> &RouteSet {
        &self.route_set
    }

    pub fn match_route(
        &self,
        method: &crate::enums::HttpMethod,
        path: &str,
    ) -> Option<crate::types::MatchedRoute> {
        self.route_set.match_route(method, path)
    }

    pub fn generate_path(
        &self,
        name: &str,
        params: &std::collections::HashMap<String, String>,
    ) -> RouterResult<Arc<str>> {
        self.route_set.generate_path(name, params)
    }

    pub fn cache_stats(&self) -> crate::cache::CacheStatsSnapshot {
        self.route_set.cache_stats()
    }

    pub fn size(&self) -> usize {
        self.route_set.size()
    }

    pub fn is_empty(&self) -> bool {
        self.route_set.is_empty()
    }

    pub fn includes_named(&self, name: &str) -> bool {
        self.route_set.includes_named(name)
    }

    pub fn get(&self, _path: &str, _opts: RouteDslOptions) -> RouterResult<()> {
        Err(RouterError::finalized("get"))
    }

    pub fn post(&self, _path: &str, _opts: RouteDslOptions) -> RouterResult<()> {
        Err(RouterError::finalized("post"))
    }

    pub fn resources(&self, _name: &str) -> RouterResult<()> {
        Err(RouterError::finalized("resources"))
    }
}
