use hashbrown::HashMap as FastHashMap;

use crate::enums::{HttpMethod, STANDARD_METHOD_COUNT};
use crate::types::RouteKey;

/// A radix tree node (spec.md §3 "Node", §4.4 "RadixTree"). Static children
/// are keyed by literal segment text; at most one dynamic child and one
/// wildcard child may exist per node (the wildcard, if present, always
/// terminates traversal beneath it — there can be no static/dynamic
/// children under a wildcard since the parser rejects non-terminal
/// wildcards).
#[derive(Debug, Default)]
pub struct RadixTreeNode {
    pub(crate) static_children: FastHashMap<Box<str>, Box<RadixTreeNode>>,
    pub(crate) dynamic_child: Option<Box<RadixTreeNode>>,
    pub(crate) dynamic_param_name: Option<Box<str>>,
    pub(crate) wildcard_child: Option<Box<RadixTreeNode>>,
    pub(crate) wildcard_param_name: Option<Box<str>>,
    pub(crate) is_endpoint: bool,
    pub(crate) routes: [Option<RouteKey>; STANDARD_METHOD_COUNT],
    pub(crate) other_routes: FastHashMap<Box<str>, RouteKey>,
}

impl RadixTreeNode {
    pub(crate) fn route_for(&self, method: &HttpMethod) -> Option<RouteKey> {
        match method {
            HttpMethod::Other(literal) => self.other_routes.get(literal.as_str()).copied(),
            _ => self.routes[method.table_index()],
        }
    }

    pub(crate) fn set_route(&mut self, method: &HttpMethod, key: RouteKey) {
        self.is_endpoint = true;
        match method {
            HttpMethod::Other(literal) => {
                self.other_routes
                    .insert(literal.clone().into_boxed_str(), key);
            }
            _ => {
                self.routes[method.table_index()] = Some(key);
            }
        }
    }

    pub(crate) fn has_any_route(&self) -> bool {
        self.routes.iter().any(Option::is_some) || !self.other_routes.is_empty()
    }
}
