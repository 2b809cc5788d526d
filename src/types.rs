use std::collections::HashMap;

/// Index of a [`crate::route::Route`] inside [`crate::route_set::RouteSet`]'s
/// route vector. Kept small and `Copy` so cache entries and DSL records can
/// carry it around cheaply instead of a pointer or `Arc`.
pub type RouteKey = u16;

/// Captured (or defaulted) path parameters, string-keyed as spec.md §6
/// requires. Returned read-only from `RouteSet::match_route` — callers copy
/// before mutating via `.clone()`, matching the "frozen on return" invariant.
pub type RouteParams = HashMap<String, String>;

/// The result of resolving a `(method, path)` pair: which route matched, its
/// extracted parameters, and the `controller`/`action` pulled off of it so
/// callers needn't re-look-up the route just to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    pub route: RouteKey,
    pub params: RouteParams,
    pub controller: String,
    pub action: String,
}
