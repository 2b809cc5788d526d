use crate::enums::HttpMethod;
use crate::pattern::SegmentKind;
use crate::types::RouteKey;

use super::node::RadixTreeNode;

/// Outcome of inserting a route into the tree: either it's new, or the
/// exact same `(method, path)` combination was already registered, in
/// which case insertion is a no-op (spec.md §8 "Duplicate route insertion
/// is a no-op") and the previously-registered key is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists(RouteKey),
}

/// Owns the root [`RadixTreeNode`] and exposes build-time insertion. Built
/// monotonically; becomes logically immutable once wrapped by a frozen
/// [`crate::route_set::RouteSet`] snapshot (spec.md §3 "Lifecycles").
#[derive(Debug, Default)]
pub struct RadixTree {
    pub(crate) root: RadixTreeNode,
}

impl RadixTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk from the root, creating children as needed per segment kind,
    /// then install `route_key` as the handler for `method` on the
    /// terminal node (spec.md §4.4 "Insert").
    pub fn insert(
        &mut self,
        method: &HttpMethod,
        segments: &[SegmentKind],
        route_key: RouteKey,
    ) -> InsertOutcome {
        let mut node = &mut self.root;
        for segment in segments {
            node = match segment {
                SegmentKind::Static(literal) => node
                    .static_children
                    .entry(literal.clone().into_boxed_str())
                    .or_insert_with(|| Box::new(RadixTreeNode::default())),
                SegmentKind::Dynamic(name) => {
                    if node.dynamic_child.is_none() {
                        node.dynamic_child = Some(Box::new(RadixTreeNode::default()));
                        // First route to reach this node wins the captured
                        // parameter name if a later route disagrees —
                        // consistent with the tree's general first-inserted
                        // precedence (spec.md §4.4 "Tie-breaks").
                        node.dynamic_param_name = Some(name.clone().into_boxed_str());
                    }
                    node.dynamic_child.as_mut().unwrap()
                }
                SegmentKind::Wildcard(name) => {
                    if node.wildcard_child.is_none() {
                        node.wildcard_child = Some(Box::new(RadixTreeNode::default()));
                        node.wildcard_param_name = Some(name.clone().into_boxed_str());
                    }
                    node.wildcard_child.as_mut().unwrap()
                }
            };
        }

        if let Some(existing) = node.route_for(method) {
            return InsertOutcome::AlreadyExists(existing);
        }
        node.set_route(method, route_key);
        InsertOutcome::Inserted
    }
}
