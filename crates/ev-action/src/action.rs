//! The closed action family and its cost table.
//!
//! Grounded on `dt_behavior::BehaviorModel`'s "trait is the extension point"
//! shape, but over a *closed* enum rather than open inheritance — the
//! vertex-type/action-kind admission rule is a pure function of two tags,
//! not a "list of allowed classes" hung off each vertex type.

use ev_core::{ActionKind, VertexType};
use ev_graph::Vertex;

use crate::agent_view::AgentView;

/// A concrete action an agent can be assigned at a plan step, with its
/// per-instance parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Do nothing.
    Null,
    /// Idle in place for `time_min` minutes.
    Wait { time_min: f64 },
    /// Draw energy until observed SoC reaches `limit`, at efficiency `battery_eff`.
    Charge { limit: f64, battery_eff: f64 },
    /// Load material until observed payload reaches `limit`, or exactly `mass_kg` if given.
    LoadMaterial { limit: f64, mass_kg: Option<f64> },
    /// Discharge material until observed payload falls to `limit`, or exactly `mass_kg` if given.
    DischargeMaterial { limit: f64, mass_kg: Option<f64> },
}

impl Action {
    /// The closed tag for this action, used for vertex-permission checks.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Null => ActionKind::Null,
            Action::Wait { .. } => ActionKind::Wait,
            Action::Charge { .. } => ActionKind::Charge,
            Action::LoadMaterial { .. } => ActionKind::LoadMaterial,
            Action::DischargeMaterial { .. } => ActionKind::DischargeMaterial,
        }
    }

    /// `true` if `vtype` permits `kind`. A pure function of the two tags.
    pub fn allowed_on(kind: ActionKind, vtype: &VertexType) -> bool {
        vtype.allows(kind)
    }

    /// `(time_min, energy_wh)` for performing this action at `vertex` on
    /// behalf of `agent`, per the authoritative cost table.
    ///
    /// Sign convention: `Charge` returns a *positive* `energy_wh` (delivered
    /// to the battery); `Wait`/`LoadMaterial`/`DischargeMaterial` return an
    /// already-negated `energy_wh` (drain from leakage). The simulator adds
    /// `energy_wh` to SoC as-is in both cases.
    ///
    /// Only ever called once `allowed_on` has confirmed the pairing; calling
    /// it on a disallowed pairing is a logic error in the caller, not
    /// something this function detects (it would otherwise need to return
    /// `ActionError::Forbidden`, and the spec reserves that for the call
    /// site). In debug builds a mismatched vertex kind trips a
    /// `debug_assert!`; in release it degrades to a zero-rate no-op.
    pub fn cost<V: AgentView + ?Sized, K, A>(
        &self,
        agent: &mut V,
        vertex: &Vertex<K, A>,
        leakage_power_w: f64,
    ) -> (f64, f64)
    where
        K: ev_core::Id,
        A: ev_core::Id,
    {
        match self {
            Action::Null => (0.0, 0.0),

            Action::Wait { time_min } => (*time_min, -leakage_power_w * time_min / 60.0),

            Action::Charge { limit, battery_eff } => {
                let observed = agent.observed_soc();
                if observed >= *limit {
                    return (0.0, 0.0);
                }
                let charge_power_w = match vertex.kind {
                    VertexType::EvCharger { charge_power_w } => charge_power_w,
                    other => {
                        debug_assert!(false, "Charge costed against non-charger vertex {other:?}");
                        return (0.0, 0.0);
                    }
                };
                let e_wh = (limit - observed) * battery_eff * agent.battery_capacity_wh();
                let time_min = 60.0 * e_wh / charge_power_w;
                (time_min, e_wh)
            }

            Action::LoadMaterial { limit, mass_kg } => {
                let payload = agent.observed_payload();
                if payload >= *limit {
                    return (0.0, 0.0);
                }
                let load_rate = match vertex.kind {
                    VertexType::MaterialLoad { load_rate_kg_per_min } => load_rate_kg_per_min,
                    other => {
                        debug_assert!(false, "LoadMaterial costed against non-dock vertex {other:?}");
                        return (0.0, 0.0);
                    }
                };
                let mass = mass_kg.unwrap_or_else(|| (limit - payload) * agent.material_capacity_kg());
                let time_min = mass / load_rate;
                (time_min, -leakage_power_w * time_min / 60.0)
            }

            Action::DischargeMaterial { limit, mass_kg } => {
                let payload = agent.observed_payload();
                if payload <= *limit {
                    return (0.0, 0.0);
                }
                let discharge_rate = match vertex.kind {
                    VertexType::MaterialDischarge { discharge_rate_kg_per_min } => discharge_rate_kg_per_min,
                    other => {
                        debug_assert!(false, "DischargeMaterial costed against non-dock vertex {other:?}");
                        return (0.0, 0.0);
                    }
                };
                let mass = mass_kg.unwrap_or_else(|| (payload - limit) * agent.material_capacity_kg());
                let time_min = mass / discharge_rate;
                (time_min, -leakage_power_w * time_min / 60.0)
            }
        }
    }
}
