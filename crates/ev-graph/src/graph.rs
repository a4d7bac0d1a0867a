//! `Graph<K, A>` — the directed, weighted, capacity-aware multigraph.
//!
//! # Data layout
//!
//! Grounded on `dt_spatial::RoadNetwork`'s CSR adjacency, but generalized
//! away from it: the teacher's graph is a *static*, bulk-built, densely
//! indexed road network sized for millions of nodes, with an R-tree for
//! nearest-neighbor snapping. This graph is small, built incrementally one
//! vertex/edge at a time, keyed by an arbitrary application id, and never
//! needs spatial queries — a `HashMap`-keyed adjacency gives the same O(1)
//! edge lookup the spec requires without CSR's up-front sort-and-index step,
//! and without carrying `rstar` for a feature nothing here uses (noted in
//! DESIGN.md).

use std::collections::{HashMap, HashSet};

use ev_core::{Id, VertexType};
use tracing::warn;

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::vertex::{Capacity, Vertex};

/// Directed, weighted multigraph of typed, capacity-bounded vertices.
pub struct Graph<K: Id, A: Id> {
    vertices: HashMap<K, Vertex<K, A>>,
    edges: HashMap<(K, K), Edge<K>>,
    /// `origin -> { target }` index so `neighbors` is O(deg) rather than
    /// O(|edges|); kept in lockstep with `edges` by `add_edge` alone.
    adjacency: HashMap<K, HashSet<K>>,
}

impl<K: Id, A: Id> Graph<K, A> {
    /// An empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edges: HashMap::new(),
            adjacency: HashMap::new(),
        }
    }

    // ── Mutation ────────────────────────────────────────────────────────

    /// Add (or update) a vertex.
    ///
    /// Idempotent on `id`: calling this again for an id already present
    /// updates its `kind`/`capacity` in place rather than creating a second
    /// vertex — membership is preserved since there is only ever one
    /// `Vertex<K, A>` per key.
    pub fn add_vertex(&mut self, id: K, kind: VertexType, capacity: Capacity) {
        match self.vertices.get_mut(&id) {
            Some(v) => {
                v.kind = kind;
                v.capacity = capacity;
            }
            None => {
                self.vertices.insert(id.clone(), Vertex::new(id, kind, capacity));
            }
        }
    }

    /// Add a directed edge, auto-registering missing endpoints as `Empty`,
    /// unbounded-capacity vertices (with a warning) and replacing any
    /// existing edge for the same `(origin, target)` pair.
    pub fn add_edge(&mut self, origin: K, target: K, weight_wh: f64, time_min: f64) {
        if !self.vertices.contains_key(&origin) {
            warn!(origin = ?origin, "edge origin not found in graph; registering it");
            self.add_vertex(origin.clone(), VertexType::Empty, Capacity::Unbounded);
        }
        if !self.vertices.contains_key(&target) {
            warn!(target = ?target, "edge target not found in graph; registering it");
            self.add_vertex(target.clone(), VertexType::Empty, Capacity::Unbounded);
        }
        let edge = Edge::new(origin.clone(), target.clone(), weight_wh, time_min);
        self.adjacency.entry(origin.clone()).or_default().insert(target.clone());
        self.edges.insert((origin, target), edge);
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Look up an edge by ordered endpoint pair.
    pub fn get_edge(&self, origin: &K, target: &K) -> GraphResult<&Edge<K>> {
        self.edges
            .get(&(origin.clone(), target.clone()))
            .ok_or_else(|| GraphError::NonExistentEdge {
                origin: format!("{origin:?}"),
                target: format!("{target:?}"),
            })
    }

    /// `true` iff an edge exists from `origin` to `target`.
    pub fn adjacent(&self, origin: &K, target: &K) -> bool {
        self.edges.contains_key(&(origin.clone(), target.clone()))
    }

    /// All vertices reachable directly from `origin` via one edge. O(deg(origin)).
    pub fn neighbors(&self, origin: &K) -> Vec<&K> {
        match self.adjacency.get(origin) {
            Some(targets) => targets.iter().collect(),
            None => Vec::new(),
        }
    }

    pub fn get_vertex(&self, id: &K) -> GraphResult<&Vertex<K, A>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::UnknownVertex(format!("{id:?}")))
    }

    pub fn get_vertex_mut(&mut self, id: &K) -> GraphResult<&mut Vertex<K, A>> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| GraphError::UnknownVertex(format!("{id:?}")))
    }

    pub fn contains_vertex(&self, id: &K) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<K: Id, A: Id> Default for Graph<K, A> {
    fn default() -> Self {
        Self::new()
    }
}
