//! Simulation time model.
//!
//! Unlike `dt_core::Tick` (an integer tick counter mapped to wall-clock
//! seconds by a fixed resolution), this framework's time unit is already a
//! floating-point number of minutes — the source scenarios specify
//! `delta_min` anywhere from `1e-3` to `1.0`, and travel/action costs are
//! computed directly in minutes. There is no wall-clock mapping to make:
//! `time_min` *is* the simulated clock.

/// Static, rarely-changing knobs for one simulation run.
///
/// Mirrors `SimulationParameters` in the source model (battery efficiency)
/// plus the tick size and leakage rate that the source passed around
/// separately.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Tick size in minutes. Typical range `1e-3..=1.0`.
    pub delta_min: f64,
    /// Fraction of battery energy retained through charge/discharge, in `(0, 1]`.
    pub battery_eff: f64,
    /// Continuous drain attributed to Wait/Load/Discharge actions, in watts.
    pub leakage_power_w: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            delta_min: 1e-3,
            battery_eff: 0.75,
            leakage_power_w: 0.0,
        }
    }
}

/// Mutable control state advanced once per tick.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimControl {
    /// Elapsed simulated minutes since `start()`.
    pub time_min: f64,
    /// Number of completed `update()` calls.
    pub iteration: u64,
    /// Set once the loop should stop — by time bound, all-done, or a fatal extractor error.
    pub should_close: bool,
    /// Upper time bound passed to `start()`.
    pub stop_time_min: f64,
}

impl SimControl {
    /// Reset to `time_min = 0`, `iteration = 0` at the given stop time.
    pub fn start(stop_time_min: f64) -> Self {
        Self {
            time_min: 0.0,
            iteration: 0,
            should_close: false,
            stop_time_min,
        }
    }

    /// Advance by one tick: `time_min += delta_min`, `iteration += 1`.
    ///
    /// Does not itself decide `should_close` — the simulator sets that after
    /// checking per-agent completion, since the time bound alone isn't
    /// sufficient to terminate (see `ev-sim`).
    pub fn advance(&mut self, delta_min: f64) {
        self.time_min += delta_min;
        self.iteration += 1;
    }

    /// `true` once `time_min` has reached or passed `stop_time_min`.
    pub fn time_bound_reached(&self) -> bool {
        self.time_min >= self.stop_time_min
    }
}
