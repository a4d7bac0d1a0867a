//! Vertex types and the closed action-kind tag they admit.
//!
//! Both enums are "foundational" in the sense `dt_core::TransportMode` is:
//! small, `Copy`, shared by every crate downstream that needs to reason
//! about which actions a vertex permits without depending on the full
//! action-cost machinery in `ev-action`.

/// The closed family of actions an agent's plan can name.
///
/// Each vertex type permits a fixed subset (see [`VertexType::allows`]); the
/// cost formula for each kind lives in `ev-action` since it needs the full
/// [`Action`] payload (limits, explicit mass, …), not just the tag.
///
/// [`Action`]: https://docs.rs/ev-action (see `ev_action::Action`)
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Do nothing for this tick's worth of plan progress.
    Null,
    /// Idle in place for a fixed duration.
    Wait,
    /// Draw energy from an `EvCharger` vertex.
    Charge,
    /// Pick up material at a `MaterialLoad` vertex.
    LoadMaterial,
    /// Drop off material at a `MaterialDischarge` vertex.
    DischargeMaterial,
}

impl ActionKind {
    /// Single-character tag, handy for compact plan rendering in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Null => "null",
            ActionKind::Wait => "wait",
            ActionKind::Charge => "charge",
            ActionKind::LoadMaterial => "load",
            ActionKind::DischargeMaterial => "discharge",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of a graph vertex, parametrized by its rate where applicable.
///
/// `PartialEq` compares by variant and rate; two `EvCharger`s with different
/// `charge_power_w` are unequal, matching the Python model's `VertexType.__eq__`
/// (class-identity equality) generalized to cover the parametrized rate too.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexType {
    /// No special equipment; permits `Null` and `Wait` only.
    Empty,
    /// EV charging station delivering `charge_power_w` watts.
    EvCharger { charge_power_w: f64 },
    /// Material loading dock at `load_rate_kg_per_min` kg/min.
    MaterialLoad { load_rate_kg_per_min: f64 },
    /// Material discharge dock at `discharge_rate_kg_per_min` kg/min.
    MaterialDischarge { discharge_rate_kg_per_min: f64 },
}

impl VertexType {
    /// `true` if this vertex type permits `kind`.
    ///
    /// Every vertex type permits `Null` and `Wait`; the type-specific action
    /// is additionally permitted on its matching vertex type only.
    pub fn allows(self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Null | ActionKind::Wait => true,
            ActionKind::Charge => matches!(self, VertexType::EvCharger { .. }),
            ActionKind::LoadMaterial => matches!(self, VertexType::MaterialLoad { .. }),
            ActionKind::DischargeMaterial => matches!(self, VertexType::MaterialDischarge { .. }),
        }
    }

    /// Single-character tag mirroring the original model's vertex glyphs.
    pub fn as_str(self) -> &'static str {
        match self {
            VertexType::Empty => "empty",
            VertexType::EvCharger { .. } => "ev_charger",
            VertexType::MaterialLoad { .. } => "material_load",
            VertexType::MaterialDischarge { .. } => "material_discharge",
        }
    }
}

impl std::fmt::Display for VertexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for VertexType {
    fn default() -> Self {
        VertexType::Empty
    }
}
