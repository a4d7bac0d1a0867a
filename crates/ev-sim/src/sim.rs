//! `Simulator<K, A>` and its per-tick algorithm.

use ev_action::{Action, ActionError};
use ev_agent::{Agent, Phase};
use ev_core::{Id, SimControl, SimParams};
use ev_graph::Graph;
use tracing::{error, info, warn};

use crate::error::{SimError, SimResult};
use crate::extractor::{AgentSnapshot, DataExtractor, TickSnapshot};

/// Owns the graph, the agent list (in scheduling order), simulation
/// parameters/control, and the data extractor; drives the fixed-timestep
/// tick loop.
///
/// Construct via [`crate::SimBuilder`].
pub struct Simulator<K: Id, A: Id> {
    graph: Graph<K, A>,
    agents: Vec<Agent<K, A>>,
    previous_decisions: Vec<Option<ev_action::Decision<K>>>,
    params: SimParams,
    control: SimControl,
    extractor: Box<dyn DataExtractor<K, A>>,
    started: bool,
}

impl<K: Id, A: Id> Simulator<K, A> {
    pub(crate) fn new_raw(
        graph: Graph<K, A>,
        agents: Vec<Agent<K, A>>,
        params: SimParams,
        extractor: Box<dyn DataExtractor<K, A>>,
    ) -> Self {
        let previous_decisions = vec![None; agents.len()];
        Self {
            graph,
            agents,
            previous_decisions,
            params,
            control: SimControl::start(0.0),
            extractor,
            started: false,
        }
    }

    pub fn control(&self) -> &SimControl {
        &self.control
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn agents(&self) -> &[Agent<K, A>] {
        &self.agents
    }

    pub fn graph(&self) -> &Graph<K, A> {
        &self.graph
    }

    /// Initialize the run: resets `control`, writes the `t=0` snapshot.
    pub fn start(&mut self, stop_time_min: f64) -> SimResult<()> {
        self.control = SimControl::start(stop_time_min);
        self.started = true;
        info!(stop_time_min, agents = self.agents.len(), "simulation started");

        let snapshot = self.snapshot();
        if let Err(e) = self.extractor.start(snapshot) {
            error!(error = %e, "data extractor failed on start; closing simulation");
            self.control.should_close = true;
        }
        Ok(())
    }

    /// Run one tick. See module docs for the per-agent sub-phase algorithm.
    pub fn update(&mut self) -> SimResult<()> {
        if !self.started {
            return Err(SimError::NotStarted);
        }

        self.control.advance(self.params.delta_min);
        if self.control.time_bound_reached() {
            self.control.should_close = true;
        }

        let mut all_done = true;

        for idx in 0..self.agents.len() {
            let done = self.advance_one(idx)?;
            all_done &= done;
        }

        self.control.should_close |= all_done;
        if self.control.should_close && !all_done {
            warn!(
                time_min = self.control.time_min,
                "stop time reached with agents still non-terminal"
            );
        }

        let snapshot = self.snapshot();
        if let Err(e) = self.extractor.append(snapshot) {
            error!(error = %e, "data extractor failed; closing simulation");
            self.control.should_close = true;
        }

        Ok(())
    }

    /// `update()` in a loop until `should_close`.
    pub fn run(&mut self) -> SimResult<()> {
        while !self.control.should_close {
            self.update()?;
        }
        Ok(())
    }

    /// Advance agent `idx` through its travel/act/advance sub-phases for
    /// this tick. Returns `true` if the agent is `Done` (for `all_done`
    /// aggregation) — computed *before* the skip check, matching the tick
    /// algorithm's ordering.
    fn advance_one(&mut self, idx: usize) -> SimResult<bool> {
        // Destructure into disjoint field borrows up front: `graph` and
        // `agent` need to be read and written interleaved below, and this
        // lets the borrow checker see they never alias.
        let Self { graph, agents, params, .. } = self;
        let agent = &mut agents[idx];

        agent.state.action_time_min += params.delta_min;
        let is_done = agent.state.phase.is_done();
        if is_done || agent.state.out_of_charge {
            return Ok(is_done);
        }

        let decision = agent.plan[agent.state.current_action].clone();
        let vertex_id = decision.vertex.clone();
        let action = decision.action.clone();

        // ── Travel sub-phase ────────────────────────────────────────────
        if let Phase::Travelling { from, to } = agent.state.phase.clone() {
            let edge = graph.get_edge(&from, &to)?;
            let travel_time = edge.time_min;
            if agent.state.action_time_min > travel_time {
                let weight_wh = edge.weight_wh;
                agent.state.phase = Phase::JustArrived;
                agent.state.action_time_min = 0.0;
                agent.state.apply_soc_delta(-weight_wh, params.battery_eff, agent.battery_capacity_wh);
                if agent.state.out_of_charge {
                    warn!(agent = ?agent.id(), "agent ran out of charge on arrival");
                }
            }
        }

        // ── Act sub-phase ───────────────────────────────────────────────
        // The three cases below are mutually exclusive per tick: JustArrived
        // is a transient single-tick latch (spec.md §4.3) that only joins
        // membership and starts Waiting, Waiting only re-evaluates the
        // capacity predicate, and the action's cost is only ever consulted
        // once neither of those applies. Chaining them in the same tick
        // (join → immediately clear → immediately finish the action) would
        // let a solitary arriving agent race past a capacity-1 vertex before
        // a same-tick co-arrival is even counted, defeating the contention
        // this vertex exists to model.
        if !agent.state.phase.is_travelling() {
            if agent.state.phase.is_just_arrived() {
                if let Ok(v) = graph.get_vertex_mut(&vertex_id) {
                    v.members.insert(agent.id().clone());
                }
                agent.state.phase = Phase::Waiting;
            } else if agent.state.phase.is_waiting() {
                let v = graph.get_vertex(&vertex_id)?;
                if !v.capacity.is_exceeded_by(v.members.len()) {
                    agent.state.phase = Phase::Acting;
                    agent.state.action_time_min = 0.0;
                }
            } else {
                let vtype = graph.get_vertex(&vertex_id)?.kind;
                if !Action::allowed_on(action.kind(), &vtype) {
                    return Err(SimError::Action(ActionError::Forbidden {
                        action: action.kind(),
                        vertex_type: vtype.as_str(),
                    }));
                }

                let vertex_ref = graph.get_vertex(&vertex_id)?;
                let (t_cost, e_cost) = action.cost(agent, vertex_ref, params.leakage_power_w);

                if agent.state.action_time_min > t_cost {
                    if let Ok(v) = graph.get_vertex_mut(&vertex_id) {
                        v.members.remove(agent.id());
                    }
                    agent.state.finished_action = true;
                    agent.state.apply_soc_delta(e_cost, params.battery_eff, agent.battery_capacity_wh);
                }
            }
        }

        // ── Advance sub-phase ───────────────────────────────────────────
        if agent.state.finished_action {
            if agent.state.current_action + 1 >= agent.plan.len() {
                agent.state.phase = Phase::Done;
                agent.state.action_time_min = 0.0;
                info!(agent = ?agent.id(), "agent finished its plan");
            } else {
                let next_v = agent.plan[agent.state.current_action + 1].vertex.clone();
                agent.state.phase = if next_v != vertex_id {
                    Phase::Travelling { from: vertex_id.clone(), to: next_v }
                } else {
                    Phase::Acting
                };
                agent.state.action_time_min = 0.0;
                agent.state.current_action += 1;
            }
            agent.state.finished_action = false;
        }

        self.previous_decisions[idx] = Some(decision);
        // `all_done` reflects each agent's `is_done` as observed at the top
        // of this tick (`is_done`, captured above), per the spec's ordering
        // — an agent that finishes its plan *this* tick is not yet counted
        // toward termination; it reads as done starting next tick.
        Ok(is_done)
    }

    fn snapshot(&self) -> TickSnapshot<K, A> {
        let agents = self
            .agents
            .iter()
            .zip(self.previous_decisions.iter())
            .map(|(agent, prev)| AgentSnapshot {
                agent: agent.id().clone(),
                decision: agent.plan[agent.state.current_action].clone(),
                previous_decision: prev.clone(),
                state: agent.state.clone(),
            })
            .collect();
        TickSnapshot { time_min: self.control.time_min, agents }
    }
}
