use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;

/// Frontier entry. `g` rides along for the stale-entry check but ordering
/// and equality are keyed by `(f, node)` only; the node index is the
/// deterministic tie-break among equal f-scores.
#[derive(Copy, Clone)]
pub(super) struct State {
    pub(super) f: OrderedFloat<f64>,
    pub(super) g: f64,
    pub(super) node: NodeIndex,
}

// Min-heap by (f, node) (reversed from standard Rust BinaryHeap)
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.node == other.node
    }
}

impl Eq for State {}
