use ev_core::{ActionKind, VertexType};
use ev_graph::{Capacity, Vertex};

use crate::action::Action;
use crate::agent_view::AgentView;

struct FakeAgent {
    soc: f64,
    payload: f64,
    battery_capacity_wh: f64,
    material_capacity_kg: f64,
}

impl AgentView for FakeAgent {
    fn observed_soc(&mut self) -> f64 {
        self.soc
    }
    fn observed_payload(&mut self) -> f64 {
        self.payload
    }
    fn battery_capacity_wh(&self) -> f64 {
        self.battery_capacity_wh
    }
    fn material_capacity_kg(&self) -> f64 {
        self.material_capacity_kg
    }
}

fn vertex(kind: VertexType) -> Vertex<u32, u32> {
    Vertex::new(0, kind, Capacity::Unbounded)
}

mod permissions {
    use super::*;

    #[test]
    fn each_kind_permitted_only_on_its_vertex_type() {
        assert!(Action::allowed_on(ActionKind::Null, &VertexType::Empty));
        assert!(Action::allowed_on(ActionKind::Wait, &VertexType::Empty));
        assert!(!Action::allowed_on(ActionKind::Charge, &VertexType::Empty));
        assert!(Action::allowed_on(
            ActionKind::Charge,
            &VertexType::EvCharger { charge_power_w: 1.0 }
        ));
    }

    #[test]
    fn action_kind_matches_variant() {
        assert_eq!(Action::Null.kind(), ActionKind::Null);
        assert_eq!(Action::Wait { time_min: 1.0 }.kind(), ActionKind::Wait);
        assert_eq!(
            Action::Charge { limit: 0.8, battery_eff: 0.75 }.kind(),
            ActionKind::Charge
        );
    }
}

mod cost {
    use super::*;

    #[test]
    fn null_costs_nothing() {
        let mut agent = FakeAgent { soc: 0.5, payload: 0.0, battery_capacity_wh: 100.0, material_capacity_kg: 10.0 };
        let v = vertex(VertexType::Empty);
        let (t, e) = Action::Null.cost(&mut agent, &v, 0.0);
        assert_eq!((t, e), (0.0, 0.0));
    }

    #[test]
    fn wait_drains_by_leakage_over_time() {
        let mut agent = FakeAgent { soc: 1.0, payload: 0.0, battery_capacity_wh: 100.0, material_capacity_kg: 10.0 };
        let v = vertex(VertexType::Empty);
        let (t, e) = Action::Wait { time_min: 30.0 }.cost(&mut agent, &v, 10.0);
        assert_eq!(t, 30.0);
        assert_eq!(e, -10.0 * 30.0 / 60.0);
    }

    #[test]
    fn charge_matches_scenario_s3() {
        // battery_capacity=100Wh, battery_eff=0.5, soc=0.4, limit=0.8, charge_power=6000W.
        let mut agent = FakeAgent { soc: 0.4, payload: 0.0, battery_capacity_wh: 100.0, material_capacity_kg: 10.0 };
        let v = vertex(VertexType::EvCharger { charge_power_w: 6_000.0 });
        let (t, e) = Action::Charge { limit: 0.8, battery_eff: 0.5 }.cost(&mut agent, &v, 0.0);
        assert!((e - 20.0).abs() < 1e-9, "expected 20 Wh, got {e}");
        assert!((t - 0.2).abs() < 1e-9, "expected 0.2 min, got {t}");
    }

    #[test]
    fn charge_already_at_limit_is_free() {
        let mut agent = FakeAgent { soc: 0.9, payload: 0.0, battery_capacity_wh: 100.0, material_capacity_kg: 10.0 };
        let v = vertex(VertexType::EvCharger { charge_power_w: 6_000.0 });
        let (t, e) = Action::Charge { limit: 0.8, battery_eff: 0.5 }.cost(&mut agent, &v, 0.0);
        assert_eq!((t, e), (0.0, 0.0));
    }

    #[test]
    fn load_material_uses_explicit_mass_when_given() {
        let mut agent = FakeAgent { soc: 1.0, payload: 0.2, battery_capacity_wh: 100.0, material_capacity_kg: 50.0 };
        let v = vertex(VertexType::MaterialLoad { load_rate_kg_per_min: 5.0 });
        let (t, e) = Action::LoadMaterial { limit: 1.0, mass_kg: Some(10.0) }.cost(&mut agent, &v, 12.0);
        assert_eq!(t, 2.0);
        assert_eq!(e, -12.0 * 2.0 / 60.0);
    }

    #[test]
    fn load_material_defaults_mass_from_limit_and_capacity() {
        let mut agent = FakeAgent { soc: 1.0, payload: 0.0, battery_capacity_wh: 100.0, material_capacity_kg: 50.0 };
        let v = vertex(VertexType::MaterialLoad { load_rate_kg_per_min: 5.0 });
        let (t, _e) = Action::LoadMaterial { limit: 1.0, mass_kg: None }.cost(&mut agent, &v, 0.0);
        assert_eq!(t, 10.0); // (1.0 - 0.0) * 50kg / 5kg/min
    }

    #[test]
    fn discharge_material_free_below_limit() {
        let mut agent = FakeAgent { soc: 1.0, payload: 0.0, battery_capacity_wh: 100.0, material_capacity_kg: 50.0 };
        let v = vertex(VertexType::MaterialDischarge { discharge_rate_kg_per_min: 5.0 });
        let (t, e) = Action::DischargeMaterial { limit: 0.0, mass_kg: None }.cost(&mut agent, &v, 0.0);
        assert_eq!((t, e), (0.0, 0.0));
    }
}
