//! Directed, weighted, timed graph edges.

use ev_core::Id;

/// A directed edge from `origin` to `target` with an energy and time cost.
///
/// The graph holds at most one edge per ordered `(origin, target)` pair;
/// inserting a second edge for the same pair replaces the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<K: Id> {
    pub origin: K,
    pub target: K,
    /// Energy cost to traverse, in Wh.
    pub weight_wh: f64,
    /// Time cost to traverse, in minutes.
    pub time_min: f64,
}

impl<K: Id> Edge<K> {
    pub fn new(origin: K, target: K, weight_wh: f64, time_min: f64) -> Self {
        Self { origin, target, weight_wh, time_min }
    }
}
