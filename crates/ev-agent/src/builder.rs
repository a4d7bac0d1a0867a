//! Fluent `Agent` construction, grounded on `dt_sim::SimBuilder`'s shape:
//! required inputs are constructor arguments, optional ones are `.method(v)`
//! calls with defaults.

use ev_action::Decision;
use ev_core::{Id, Uncertainty, ZeroUncertainty};

use crate::agent::Agent;
use crate::error::{AgentError, AgentResult};
use crate::state::AgentState;

/// Builds an [`Agent`].
///
/// # Required inputs
/// - `id`, `plan` — passed to [`AgentBuilder::new`].
///
/// # Optional inputs (have defaults)
/// | Method                    | Default              |
/// |---------------------------|-----------------------|
/// | `.battery_capacity_wh(v)` | `100.0`               |
/// | `.material_capacity_kg(v)`| `100.0`               |
/// | `.uncertainty(v)`         | [`ZeroUncertainty`]   |
/// | `.initial_state(v)`       | `AgentState::new()`   |
pub struct AgentBuilder<K: Id, A: Id> {
    id: A,
    plan: Vec<Decision<K>>,
    battery_capacity_wh: f64,
    material_capacity_kg: f64,
    uncertainty: Box<dyn Uncertainty>,
    initial_state: Option<AgentState<K>>,
}

impl<K: Id, A: Id> AgentBuilder<K, A> {
    /// Create a builder with the two required inputs.
    pub fn new(id: A, plan: Vec<Decision<K>>) -> Self {
        Self {
            id,
            plan,
            battery_capacity_wh: 100.0,
            material_capacity_kg: 100.0,
            uncertainty: Box::new(ZeroUncertainty),
            initial_state: None,
        }
    }

    pub fn battery_capacity_wh(mut self, wh: f64) -> Self {
        self.battery_capacity_wh = wh;
        self
    }

    pub fn material_capacity_kg(mut self, kg: f64) -> Self {
        self.material_capacity_kg = kg;
        self
    }

    pub fn uncertainty(mut self, source: Box<dyn Uncertainty>) -> Self {
        self.uncertainty = source;
        self
    }

    pub fn initial_state(mut self, state: AgentState<K>) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Validates the plan is non-empty (`AgentError::EmptyPlan` otherwise)
    /// and assembles the agent.
    pub fn build(self) -> AgentResult<Agent<K, A>> {
        if self.plan.is_empty() {
            return Err(AgentError::EmptyPlan);
        }
        let state = self.initial_state.unwrap_or_default();
        Ok(Agent::new_raw(
            self.id,
            self.plan,
            self.battery_capacity_wh,
            self.material_capacity_kg,
            self.uncertainty,
            state,
        ))
    }
}
