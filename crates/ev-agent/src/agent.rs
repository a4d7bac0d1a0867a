//! `Agent<K, A>` — identity, plan, nameplate capacities, and live state.

use ev_action::{AgentView, Decision};
use ev_core::{Id, Uncertainty};

use crate::state::AgentState;

/// A single simulated vehicle: its identity, ordered plan, nameplate
/// capacities, noise source, and current mutable state.
///
/// Two `Agent`s constructed with the same `id` are meant to be the same
/// agent, but `Agent` itself does not enforce that — the simulator stores
/// agents in a plain `Vec<Agent<K, A>>`, which (unlike `Graph`'s
/// `HashMap<K, Vertex<K, A>>`) has no uniqueness check of its own, so two
/// `Agent`s built with an equal id would otherwise sit side by side as
/// independent entries with independent, divergent state. The
/// singleton-by-id guarantee is instead enforced by `ev_sim::SimBuilder::build`,
/// which rejects a duplicate agent id with `SimError::DuplicateAgentId`
/// before a `Simulator` is ever assembled.
pub struct Agent<K: Id, A: Id> {
    id: A,
    pub plan: Vec<Decision<K>>,
    pub battery_capacity_wh: f64,
    pub material_capacity_kg: f64,
    pub uncertainty: Box<dyn Uncertainty>,
    pub state: AgentState<K>,
}

impl<K: Id, A: Id> Agent<K, A> {
    pub fn id(&self) -> &A {
        &self.id
    }

    pub(crate) fn new_raw(
        id: A,
        plan: Vec<Decision<K>>,
        battery_capacity_wh: f64,
        material_capacity_kg: f64,
        uncertainty: Box<dyn Uncertainty>,
        state: AgentState<K>,
    ) -> Self {
        Self { id, plan, battery_capacity_wh, material_capacity_kg, uncertainty, state }
    }

    /// The decision the agent is currently working through.
    pub fn current_decision(&self) -> &Decision<K> {
        &self.plan[self.state.current_action]
    }
}

impl<K: Id, A: Id> AgentView for Agent<K, A> {
    fn observed_soc(&mut self) -> f64 {
        (self.state.soc + self.uncertainty.sample()).clamp(0.0, 1.0)
    }

    fn observed_payload(&mut self) -> f64 {
        (self.state.payload + self.uncertainty.sample()).clamp(0.0, 1.0)
    }

    fn battery_capacity_wh(&self) -> f64 {
        self.battery_capacity_wh
    }

    fn material_capacity_kg(&self) -> f64 {
        self.material_capacity_kg
    }
}
