use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::SmallLru;
use crate::enums::HttpMethod;
use crate::errors::{RouterError, RouterErrorCode, RouterResult};
use crate::pattern::{parse_template, Constraint, SegmentKind};
use crate::types::{RouteKey, RouteParams};

/// Options accepted by [`Route::new`], mirroring the DSL's keyword
/// arguments (`to:`, `as:`, `constraints:`, `defaults:`) after the Builder
/// has merged in the enclosing scope stack (spec.md §4.5, §4.9).
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    pub to: Option<String>,
    pub controller: Option<String>,
    pub action: Option<String>,
    pub name: Option<String>,
    pub constraints: HashMap<String, Constraint>,
    pub defaults: HashMap<String, String>,
}

/// A compiled, immutable route (spec.md §3 "Route"). Built once during DSL
/// replay and never mutated afterward; the only thing that changes inside a
/// finalized `Route` is the generation cache, which is its own interior
/// mutability boundary.
#[derive(Debug)]
pub struct Route {
    pub key: RouteKey,
    pub path_template: String,
    pub segments: Vec<SegmentKind>,
    pub methods: Vec<HttpMethod>,
    pub controller: String,
    pub action: String,
    pub name: Option<String>,
    pub constraints: HashMap<String, Constraint>,
    pub defaults: HashMap<String, String>,
    generation_cache: Mutex<SmallLru<String, Arc<str>>>,
}

impl Route {
    /// Construct a compiled route from a raw path template and options.
    /// Validates controller/action/methods nonempty (spec.md §4.5).
    pub fn new(
        key: RouteKey,
        path_template: &str,
        methods: Vec<HttpMethod>,
        options: RouteOptions,
        generation_cache_capacity: usize,
    ) -> RouterResult<Self> {
        if methods.is_empty() {
            return Err(RouterError::new(
                RouterErrorCode::InvalidRoute,
                "route",
                "new",
                format!("route '{path_template}' has no HTTP methods"),
                None,
            ));
        }

        let (controller, action) = resolve_controller_action(path_template, &options)?;

        let raw_segments: Vec<String> = crate::path::split_segments(path_template);
        let segments = parse_template(&raw_segments).map_err(|err| {
            RouterError::new(
                RouterErrorCode::InvalidPattern,
                "route",
                "new",
                format!("route '{path_template}' has an invalid template: {err}"),
                None,
            )
        })?;

        Ok(Self {
            key,
            path_template: crate::path::normalize_path(path_template),
            segments,
            methods,
            controller,
            action,
            name: options.name,
            constraints: options.constraints,
            defaults: options.defaults,
            generation_cache: Mutex::new(SmallLru::new(generation_cache_capacity)),
        })
    }

    pub fn handles(&self, method: &HttpMethod) -> bool {
        self.methods.contains(method)
    }

    /// Validate declared constraints against captured params, then merge
    /// defaults for keys the request didn't supply (spec.md §4.5 "Fast
    /// constraint validator"). Returns `false` on the first violated
    /// constraint; the finder treats that as "endpoint did not exist".
    pub fn validate_and_fill(&self, params: &mut RouteParams) -> bool {
        for (name, constraint) in &self.constraints {
            match params.get(name) {
                Some(value) => {
                    if !constraint.is_satisfied_by(value) {
                        return false;
                    }
                }
                None => {
                    // No captured value for a constrained parameter name
                    // means the segment couldn't have produced it (e.g. a
                    // constraint on a param the template never declares);
                    // that's a no-op, not a violation.
                }
            }
        }
        for (name, value) in &self.defaults {
            params.entry(name.clone()).or_insert_with(|| value.clone());
        }
        true
    }

    /// Inverse of matching: substitute `bindings` into the template's
    /// placeholders (spec.md §4.5 "Path generation"). Errors if a
    /// placeholder has neither a binding nor a default. Cached in a bounded
    /// LRU keyed by the stringified bindings.
    pub fn generate_path(&self, bindings: &HashMap<String, String>) -> RouterResult<Arc<str>> {
        let cache_key = cache_key_for(bindings);
        if let Some(cached) = self.generation_cache.lock().get(&cache_key) {
            return Ok(cached);
        }

        let mut out = String::with_capacity(self.path_template.len());
        for segment in &self.segments {
            out.push('/');
            match segment {
                SegmentKind::Static(literal) => out.push_str(literal),
                SegmentKind::Dynamic(name) => {
                    out.push_str(&resolve_binding(name, bindings, &self.defaults)?);
                }
                SegmentKind::Wildcard(name) => {
                    out.push_str(&resolve_binding(name, bindings, &self.defaults)?);
                }
            }
        }
        let generated: Arc<str> = Arc::from(crate::path::normalize_path(&out));
        self.generation_cache
            .lock()
            .put(cache_key, generated.clone());
        Ok(generated)
    }

    /// Tokenize-and-compare match used by hash-style strategies and tests
    /// (spec.md §4.5 "Match predicate / param extraction"): equal token
    /// count is required; static tokens compare literally, dynamic tokens
    /// capture, and a wildcard consumes the rest.
    pub fn matches_path(&self, request_segments: &[String]) -> Option<RouteParams> {
        let mut params = RouteParams::new();
        let mut iter = request_segments.iter();
        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                SegmentKind::Wildcard(name) => {
                    let remainder: Vec<&str> =
                        request_segments[idx..].iter().map(String::as_str).collect();
                    if remainder.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), remainder.join("/"));
                    return Some(params);
                }
                SegmentKind::Static(literal) => {
                    if iter.next().map(String::as_str) != Some(literal.as_str()) {
                        return None;
                    }
                }
                SegmentKind::Dynamic(name) => {
                    let value = iter.next()?;
                    params.insert(name.clone(), value.clone());
                }
            }
        }
        if iter.next().is_some() {
            return None;
        }
        Some(params)
    }
}

fn resolve_binding(
    name: &str,
    bindings: &HashMap<String, String>,
    defaults: &HashMap<String, String>,
) -> RouterResult<String> {
    bindings
        .get(name)
        .or_else(|| defaults.get(name))
        .cloned()
        .ok_or_else(|| {
            RouterError::new(
                RouterErrorCode::MissingGenerationParam,
                "route",
                "generate_path",
                format!("missing required parameter '{name}' for path generation"),
                None,
            )
        })
}

fn cache_key_for(bindings: &HashMap<String, String>) -> String {
    let mut pairs: Vec<(&String, &String)> = bindings.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    let mut key = String::new();
    for (name, value) in pairs {
        key.push_str(name);
        key.push('=');
        key.push_str(value);
        key.push('&');
    }
    key
}

fn resolve_controller_action(
    path_template: &str,
    options: &RouteOptions,
) -> RouterResult<(String, String)> {
    if let (Some(controller), Some(action)) = (&options.controller, &options.action) {
        return validate_non_empty(path_template, controller.clone(), action.clone());
    }
    if let Some(to) = &options.to {
        let mut parts = to.splitn(2, '#');
        let controller = parts.next().unwrap_or_default().to_string();
        let action = parts.next().unwrap_or_default().to_string();
        return validate_non_empty(path_template, controller, action);
    }
    Err(RouterError::new(
        RouterErrorCode::InvalidRoute,
        "route",
        "new",
        format!("route '{path_template}' has no 'to:' or controller/action option"),
        None,
    ))
}

fn validate_non_empty(
    path_template: &str,
    controller: String,
    action: String,
) -> RouterResult<(String, String)> {
    if controller.is_empty() || action.is_empty() {
        return Err(RouterError::new(
            RouterErrorCode::InvalidRoute,
            "route",
            "new",
            format!("route '{path_template}' has an empty controller or action"),
            None,
        ));
    }
    Ok((controller, action))
}
