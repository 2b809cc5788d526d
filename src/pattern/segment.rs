/// One parsed segment of a path template (spec.md §4.3 "Segment kinds").
/// Precedence among sibling children at a [`crate::radix::RadixTreeNode`] is
/// always `Static -> Dynamic -> Wildcard`, enforced by the traversal, not by
/// this enum's variant order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    Static(String),
    Dynamic(String),
    Wildcard(String),
}

impl SegmentKind {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, SegmentKind::Wildcard(_))
    }
}
