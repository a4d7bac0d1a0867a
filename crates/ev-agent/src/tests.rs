use ev_action::{Action, AgentView, Decision};
use ev_core::GaussianUncertainty;

use crate::builder::AgentBuilder;
use crate::state::{AgentState, Phase};

fn one_step_plan() -> Vec<Decision<String>> {
    vec![Decision::new("v0".to_string(), Action::Null)]
}

mod soc_invariant {
    use super::*;

    #[test]
    fn assign_soc_within_range_is_plain() {
        let mut s: AgentState<String> = AgentState::new();
        s.assign_soc(0.5);
        assert_eq!(s.soc, 0.5);
        assert!(!s.out_of_charge);
        assert!(!s.overcharged);
    }

    #[test]
    fn assign_soc_at_or_below_zero_clamps_and_latches() {
        let mut s: AgentState<String> = AgentState::new();
        s.assign_soc(-0.3);
        assert_eq!(s.soc, 0.0);
        assert!(s.out_of_charge);
        assert!(matches!(s.phase, Phase::OutOfCharge));
    }

    #[test]
    fn out_of_charge_latch_is_sticky_across_later_assignments() {
        let mut s: AgentState<String> = AgentState::new();
        s.assign_soc(-1.0);
        assert!(s.out_of_charge);
        s.assign_soc(0.9);
        assert!(s.out_of_charge, "out_of_charge must remain latched once set");
    }

    #[test]
    fn assign_soc_above_one_is_not_clamped_but_latches() {
        let mut s: AgentState<String> = AgentState::new();
        s.assign_soc(1.4);
        assert_eq!(s.soc, 1.4);
        assert!(s.overcharged);
    }

    #[test]
    fn apply_soc_delta_matches_scenario_s2() {
        // battery_capacity=100Wh, battery_eff=1.0, travel weight=10Wh.
        let mut s: AgentState<String> = AgentState::new();
        s.assign_soc(1.0);
        s.apply_soc_delta(-10.0, 1.0, 100.0);
        assert!((s.soc - 0.9).abs() < 1e-12);
    }

    #[test]
    fn apply_soc_delta_matches_scenario_s5_out_of_charge() {
        // battery_capacity=100Wh, battery_eff=1.0, travel weight=200Wh, soc starts at 1.0.
        let mut s: AgentState<String> = AgentState::new();
        s.apply_soc_delta(-200.0, 1.0, 100.0);
        assert_eq!(s.soc, 0.0);
        assert!(s.out_of_charge);
    }
}

mod agent_view {
    use super::*;

    #[test]
    fn zero_uncertainty_observed_soc_matches_true_soc() {
        let mut agent = AgentBuilder::new("a1".to_string(), one_step_plan())
            .battery_capacity_wh(100.0)
            .build()
            .unwrap();
        agent.state.assign_soc(0.6);
        assert_eq!(agent.observed_soc(), 0.6);
    }

    #[test]
    fn observed_soc_is_clipped_to_unit_interval() {
        let mut agent = AgentBuilder::new("a1".to_string(), one_step_plan())
            .uncertainty(Box::new(GaussianUncertainty::new(10.0, 0.0, 1)))
            .build()
            .unwrap();
        agent.state.assign_soc(0.5);
        assert_eq!(agent.observed_soc(), 1.0);
    }

    #[test]
    fn empty_plan_is_rejected() {
        let err = AgentBuilder::new("a1".to_string(), Vec::new()).build();
        assert!(err.is_err());
    }
}
