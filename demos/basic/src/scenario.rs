//! The `basic` built-in scenario: 8 agents cycling depot → loading dock →
//! drop-off → charger → depot, mirroring spec.md §8's multi-stop fleet
//! scenario (S6) at a size small enough to read in one terminal screen.

use ev_action::{Action, Decision};
use ev_agent::{Agent, AgentBuilder};
use ev_core::{SimParams, VertexType};
use ev_graph::{Capacity, Graph};

const FLEET_SIZE: usize = 8;
const BATTERY_CAPACITY_WH: f64 = 500.0;
const MATERIAL_CAPACITY_KG: f64 = 200.0;

/// Builds the `basic` scenario's graph, fleet, and sim parameters.
///
/// `delta_min` comes from the CLI so `--delta` actually changes tick
/// resolution; everything else about the scenario is fixed.
pub fn build_scenario(delta_min: f64) -> (Graph<String, String>, Vec<Agent<String, String>>, SimParams) {
    let mut graph = Graph::new();
    graph.add_vertex("depot".into(), VertexType::Empty, Capacity::Unbounded);
    graph.add_vertex("dock".into(), VertexType::MaterialLoad { load_rate_kg_per_min: 50.0 }, Capacity::Unbounded);
    graph.add_vertex(
        "drop".into(),
        VertexType::MaterialDischarge { discharge_rate_kg_per_min: 50.0 },
        Capacity::Unbounded,
    );
    graph.add_vertex("charger".into(), VertexType::EvCharger { charge_power_w: 10_000.0 }, Capacity::Finite(4));
    graph.add_edge("depot".into(), "dock".into(), 5.0, 3.0);
    graph.add_edge("dock".into(), "drop".into(), 8.0, 4.0);
    graph.add_edge("drop".into(), "charger".into(), 3.0, 2.0);
    graph.add_edge("charger".into(), "depot".into(), 4.0, 3.0);

    let plan = || {
        vec![
            Decision::new("depot".into(), Action::Null),
            Decision::new("dock".into(), Action::LoadMaterial { limit: 1.0, mass_kg: None }),
            Decision::new("drop".into(), Action::DischargeMaterial { limit: 0.0, mass_kg: None }),
            Decision::new("charger".into(), Action::Charge { limit: 0.9, battery_eff: 0.75 }),
            Decision::new("depot".into(), Action::Null),
        ]
    };

    let agents = (0..FLEET_SIZE)
        .map(|i| {
            AgentBuilder::new(format!("fleet-{i}"), plan())
                .battery_capacity_wh(BATTERY_CAPACITY_WH)
                .material_capacity_kg(MATERIAL_CAPACITY_KG)
                .build()
                .expect("built-in scenario plans are never empty")
        })
        .collect();

    let params = SimParams { delta_min, battery_eff: 0.75, leakage_power_w: 0.0 };

    (graph, agents, params)
}
