use crate::enums::HttpMethod;
use crate::types::{RouteKey, RouteParams};

use super::node::RadixTreeNode;

/// Per-route constraint check, invoked whenever the traversal considers
/// accepting a node's handler as a candidate (spec.md §4.4 step 7:
/// constraint violation is treated as "the endpoint did not exist").
pub trait ConstraintValidator {
    fn validate(&self, route: RouteKey, params: &mut RouteParams) -> bool;
}

impl<F> ConstraintValidator for F
where
    F: Fn(RouteKey, &mut RouteParams) -> bool,
{
    fn validate(&self, route: RouteKey, params: &mut RouteParams) -> bool {
        self(route, params)
    }
}

/// Traverse with strict precedence static -> dynamic -> wildcard at each
/// node. This single recursive primitive implements best-candidate
/// fallback by construction: once the deepest reachable subtree fails to
/// produce a validated match, each unwinding frame offers *its own*
/// endpoint (if any) as the fallback before giving up and letting the
/// caller's caller try the next precedence tier. Shared by both the
/// unrolled short-path entry point and the generic loop entry point so
/// their results are provably identical (spec.md §4.4 "Traversal strategy
/// selection").
fn step(
    node: &RadixTreeNode,
    method: &HttpMethod,
    segments: &[Box<str>],
    idx: usize,
    params: &mut RouteParams,
    validate: &dyn ConstraintValidator,
) -> Option<(RouteKey, RouteParams)> {
    if idx == segments.len() {
        if let Some(key) = node.route_for(method) {
            if validate.validate(key, params) {
                return Some((key, params.clone()));
            }
        }
        return None;
    }

    let segment = &segments[idx];

    if let Some(child) = node.static_children.get(segment.as_ref()) {
        if let Some(found) = step(child, method, segments, idx + 1, params, validate) {
            return Some(found);
        }
    }

    if let (Some(child), Some(name)) = (&node.dynamic_child, &node.dynamic_param_name) {
        let name = name.to_string();
        let previous = params.insert(name.clone(), segment.to_string());
        if let Some(found) = step(child, method, segments, idx + 1, params, validate) {
            return Some(found);
        }
        restore(params, &name, previous);
    }

    if let (Some(child), Some(name)) = (&node.wildcard_child, &node.wildcard_param_name) {
        let joined = segments[idx..].join("/");
        let name = name.to_string();
        let previous = params.insert(name.clone(), joined);
        if let Some(key) = child.route_for(method) {
            if validate.validate(key, params) {
                return Some((key, params.clone()));
            }
        }
        restore(params, &name, previous);
    }

    if let Some(key) = node.route_for(method) {
        if validate.validate(key, params) {
            return Some((key, params.clone()));
        }
    }

    None
}

fn restore(params: &mut RouteParams, name: &str, previous: Option<String>) {
    match previous {
        Some(value) => {
            params.insert(name.to_string(), value);
        }
        None => {
            params.remove(name);
        }
    }
}

const UNROLLED_MAX_SEGMENTS: usize = 3;

/// Entry point: dispatches to the unrolled short-path traversal for 0-3
/// segments (the common case for most requests) and the generic recursive
/// [`step`] otherwise (spec.md §4.4 "Traversal strategy selection"). The two
/// paths are genuinely different code: `find_unrolled` never calls `step` —
/// it hand-inlines exactly as many levels of the static/dynamic/wildcard
/// precedence search as there are segments, with no loop or recursive call
/// of its own, while `step` recurses once per segment to handle arbitrary
/// depth. Both implement the same precedence/fallback rules, so results are
/// identical; `find_when_long_path_uses_generic_loop_and_matches_unrolled_results`
/// and the depth-specific unrolled tests below pin that equivalence.
pub fn find(
    root: &RadixTreeNode,
    method: &HttpMethod,
    segments: &[Box<str>],
    params: &mut RouteParams,
    validate: &dyn ConstraintValidator,
) -> Option<(RouteKey, RouteParams)> {
    params.clear();
    if segments.len() <= UNROLLED_MAX_SEGMENTS {
        find_unrolled(root, method, segments, params, validate)
    } else {
        step(root, method, segments, 0, params, validate)
    }
}

/// Accept this node's own route for `method`, running it past `validate`.
/// The shared leaf check used by every level of both traversals.
#[inline]
fn accept(
    node: &RadixTreeNode,
    method: &HttpMethod,
    params: &mut RouteParams,
    validate: &dyn ConstraintValidator,
) -> Option<(RouteKey, RouteParams)> {
    let key = node.route_for(method)?;
    if validate.validate(key, params) {
        Some((key, params.clone()))
    } else {
        None
    }
}

/// Unrolled variant for 0-3 segments: a fixed, hand-inlined chain of
/// depth-specific functions (`find_depth1`/`find_depth2`/`find_depth3`)
/// rather than `step`'s single self-recursive primitive. There is no loop
/// and no generic recursion — each function's body is specialized to its
/// exact depth, matching spec.md §4.4's "avoids loop overhead" for the
/// overwhelmingly common short-path case.
#[inline]
fn find_unrolled(
    root: &RadixTreeNode,
    method: &HttpMethod,
    segments: &[Box<str>],
    params: &mut RouteParams,
    validate: &dyn ConstraintValidator,
) -> Option<(RouteKey, RouteParams)> {
    debug_assert!(segments.len() <= UNROLLED_MAX_SEGMENTS);
    match segments {
        [] => accept(root, method, params, validate),
        [a] => find_depth1(root, method, a, params, validate),
        [a, b] => find_depth2(root, method, a, b, params, validate),
        [a, b, c] => find_depth3(root, method, a, b, c, params, validate),
        _ => unreachable!("find_unrolled only handles 0..=3 segments"),
    }
}

/// Try the wildcard child at `node` against the full remaining tail
/// `tail` (always just `seg0` itself at the last unrolled level, since a
/// wildcard is always terminal). Returns `Some` only on an accepted match;
/// restores `params` itself on rejection so callers can keep trying other
/// branches.
#[inline]
fn try_wildcard(
    node: &RadixTreeNode,
    method: &HttpMethod,
    joined: String,
    params: &mut RouteParams,
    validate: &dyn ConstraintValidator,
) -> Option<(RouteKey, RouteParams)> {
    let (child, name) = match (&node.wildcard_child, &node.wildcard_param_name) {
        (Some(child), Some(name)) => (child, name),
        _ => return None,
    };
    let name = name.to_string();
    let previous = params.insert(name.clone(), joined);
    if let Some(found) = accept(child, method, params, validate) {
        return Some(found);
    }
    restore(params, &name, previous);
    None
}

/// One remaining segment: try static, then dynamic, then wildcard (which
/// consumes just `seg0`), then this node's own route.
fn find_depth1(
    node: &RadixTreeNode,
    method: &HttpMethod,
    seg0: &str,
    params: &mut RouteParams,
    validate: &dyn ConstraintValidator,
) -> Option<(RouteKey, RouteParams)> {
    if let Some(child) = node.static_children.get(seg0) {
        if let Some(found) = accept(child, method, params, validate) {
            return Some(found);
        }
    }

    if let (Some(child), Some(name)) = (&node.dynamic_child, &node.dynamic_param_name) {
        let name = name.to_string();
        let previous = params.insert(name.clone(), seg0.to_string());
        if let Some(found) = accept(child, method, params, validate) {
            return Some(found);
        }
        restore(params, &name, previous);
    }

    if let Some(found) = try_wildcard(node, method, seg0.to_string(), params, validate) {
        return Some(found);
    }

    accept(node, method, params, validate)
}

/// Two remaining segments: descend on static/dynamic into `find_depth1`
/// for the tail, or consume both via wildcard, or fall back to this node.
fn find_depth2(
    node: &RadixTreeNode,
    method: &HttpMethod,
    seg0: &str,
    seg1: &str,
    params: &mut RouteParams,
    validate: &dyn ConstraintValidator,
) -> Option<(RouteKey, RouteParams)> {
    if let Some(child) = node.static_children.get(seg0) {
        if let Some(found) = find_depth1(child, method, seg1, params, validate) {
            return Some(found);
        }
    }

    if let (Some(child), Some(name)) = (&node.dynamic_child, &node.dynamic_param_name) {
        let name = name.to_string();
        let previous = params.insert(name.clone(), seg0.to_string());
        if let Some(found) = find_depth1(child, method, seg1, params, validate) {
            return Some(found);
        }
        restore(params, &name, previous);
    }

    if let Some(found) = try_wildcard(node, method, [seg0, seg1].join("/"), params, validate) {
        return Some(found);
    }

    accept(node, method, params, validate)
}

/// Three remaining segments: descend on static/dynamic into `find_depth2`
/// for the tail, or consume all three via wildcard, or fall back to this
/// node.
#[allow(clippy::too_many_arguments)]
fn find_depth3(
    node: &RadixTreeNode,
    method: &HttpMethod,
    seg0: &str,
    seg1: &str,
    seg2: &str,
    params: &mut RouteParams,
    validate: &dyn ConstraintValidator,
) -> Option<(RouteKey, RouteParams)> {
    if let Some(child) = node.static_children.get(seg0) {
        if let Some(found) = find_depth2(child, method, seg1, seg2, params, validate) {
            return Some(found);
        }
    }

    if let (Some(child), Some(name)) = (&node.dynamic_child, &node.dynamic_param_name) {
        let name = name.to_string();
        let previous = params.insert(name.clone(), seg0.to_string());
        if let Some(found) = find_depth2(child, method, seg1, seg2, params, validate) {
            return Some(found);
        }
        restore(params, &name, previous);
    }

    if let Some(found) = try_wildcard(node, method, [seg0, seg1, seg2].join("/"), params, validate)
    {
        return Some(found);
    }

    accept(node, method, params, validate)
}
