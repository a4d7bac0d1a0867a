//! The narrow interface `Action::cost` needs from an agent.
//!
//! `ev-action` must compute costs against live agent state, but `ev-agent`
//! in turn needs `Action`/`Decision` for its plans — a straight dependency
//! either way is a cycle. Grounded on `dt_behavior::BehaviorModel`'s
//! trait-at-the-seam shape: `Agent` (in `ev-agent`) implements this trait,
//! and `ev-action` depends only on the trait, not on `ev-agent` itself.

/// Read access to the agent-side quantities an action's cost formula needs.
///
/// `observed_soc`/`observed_payload` take `&mut self` because sampling the
/// uncertainty source mutates its internal RNG state — matching the spec's
/// "noise is sampled on every read" rule.
pub trait AgentView {
    /// State of charge plus a fresh uncertainty sample, clipped to `[0, 1]`.
    fn observed_soc(&mut self) -> f64;
    /// Payload fraction plus a fresh uncertainty sample, clipped to `[0, 1]`.
    fn observed_payload(&mut self) -> f64;
    /// Nameplate battery capacity in Wh.
    fn battery_capacity_wh(&self) -> f64;
    /// Nameplate material capacity in kg.
    fn material_capacity_kg(&self) -> f64;
}
