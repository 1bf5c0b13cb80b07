//! Statement-level diff between a previous and a current dataset graph.

use crate::graph::Graph;

/// The three-way partition of a baseline against a fresh load.
///
/// `common` is already in the store and needs no action; `to_delete` was in
/// the baseline but not the new graph; `to_add` is new.
#[derive(Debug, Default)]
pub struct GraphDiff {
    pub common: Graph,
    pub to_delete: Graph,
    pub to_add: Graph,
}

impl GraphDiff {
    pub fn compute(previous: &Graph, current: &Graph) -> Self {
        Self {
            common: previous.intersection(current),
            to_delete: previous.difference(current),
            to_add: current.difference(previous),
        }
    }

    /// No statements to push either way.
    pub fn is_noop(&self) -> bool {
        self.to_delete.is_empty() && self.to_add.is_empty()
    }
}
