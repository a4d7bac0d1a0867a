//! Fluent builder for constructing a [`Simulator`], grounded on
//! `dt_sim::SimBuilder`'s shape: required inputs are constructor arguments,
//! optional ones are `.method(v)` calls with defaults.

use std::collections::HashSet;

use ev_action::Decision;
use ev_agent::Agent;
use ev_core::{Id, SimParams, VertexType};
use ev_graph::{Capacity, Graph};

use crate::error::{SimError, SimResult};
use crate::extractor::{DataExtractor, InMemoryExtractor};
use crate::sim::Simulator;

/// Builds a [`Simulator<K, A>`].
///
/// # Required inputs
/// - `.graph(g)`, `.agents(v)`, `.params(p)`.
///
/// # Optional inputs (have defaults)
/// | Method         | Default                |
/// |----------------|--------------------------|
/// | `.extractor(v)`| [`InMemoryExtractor`]    |
pub struct SimBuilder<K: Id, A: Id> {
    graph: Option<Graph<K, A>>,
    agents: Option<Vec<Agent<K, A>>>,
    params: Option<SimParams>,
    extractor: Option<Box<dyn DataExtractor<K, A>>>,
}

impl<K: Id, A: Id> SimBuilder<K, A> {
    /// An empty builder; every required input must still be supplied.
    pub fn new() -> Self {
        Self {
            graph: None,
            agents: None,
            params: None,
            extractor: None,
        }
    }

    pub fn graph(mut self, graph: Graph<K, A>) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn agents(mut self, agents: Vec<Agent<K, A>>) -> Self {
        self.agents = Some(agents);
        self
    }

    pub fn params(mut self, params: SimParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Supply a non-default data extractor (e.g. a CSV sink from `ev-output`).
    pub fn extractor(mut self, extractor: Box<dyn DataExtractor<K, A>>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Validates every agent's plan is non-empty, that no two agents share an
    /// id (`Vec<Agent<K, A>>` storage has no uniqueness check of its own, so
    /// this is the one place singleton-by-id is actually enforced for
    /// agents — unlike `Graph`'s `HashMap<K, Vertex<K, A>>`, which is
    /// idempotent on `add_vertex` by construction), and that each plan's
    /// first vertex exists in the graph (lazily inserting an `Empty`,
    /// unbounded-capacity vertex for any that don't — the same
    /// auto-vivification `Graph::add_edge` already performs), then assembles
    /// the [`Simulator`].
    pub fn build(self) -> SimResult<Simulator<K, A>> {
        let mut graph = self.graph.unwrap_or_default();
        let agents = self.agents.unwrap_or_default();
        let params = self.params.unwrap_or_default();
        let extractor = self
            .extractor
            .unwrap_or_else(|| Box::new(InMemoryExtractor::new()));

        let mut seen_ids = HashSet::with_capacity(agents.len());
        for agent in &agents {
            let Some(first) = agent.plan.first() else {
                return Err(SimError::EmptyPlan { agent: format!("{:?}", agent.id()) });
            };
            if !seen_ids.insert(agent.id().clone()) {
                return Err(SimError::DuplicateAgentId { agent: format!("{:?}", agent.id()) });
            }
            if !graph.contains_vertex(&first_vertex_id(first)) {
                graph.add_vertex(first_vertex_id(first), VertexType::Empty, Capacity::Unbounded);
            }
        }

        Ok(Simulator::new_raw(graph, agents, params, extractor))
    }
}

fn first_vertex_id<K: Id>(decision: &Decision<K>) -> K {
    decision.vertex.clone()
}

impl<K: Id, A: Id> Default for SimBuilder<K, A> {
    fn default() -> Self {
        Self::new()
    }
}
