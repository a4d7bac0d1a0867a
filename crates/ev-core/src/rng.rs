//! Pluggable uncertainty sources for agent SoC/payload observation.
//!
//! Grounded on `dt_core::rng::AgentRng` — a small, deterministically-seeded
//! `SmallRng` wrapper — but generalized from "seeded by dense agent index"
//! to "seeded explicitly by the caller", since agent ids here are arbitrary
//! hashable keys rather than `u32` indices into an SoA array.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// A source of scalar noise sampled once per SoC/payload read or write.
///
/// Implementations must be deterministic given a seed so runs are
/// reproducible; `sample` is `&mut self` for exactly that reason.
pub trait Uncertainty: Send + Sync {
    /// Draw a new sample, updating `last()`.
    fn sample(&mut self) -> f64;

    /// The most recent sample, or `0.0` if none has been drawn yet.
    fn last(&self) -> f64;
}

/// No uncertainty: always samples `0.0`. The default for every agent.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZeroUncertainty;

impl Uncertainty for ZeroUncertainty {
    fn sample(&mut self) -> f64 {
        0.0
    }

    fn last(&self) -> f64 {
        0.0
    }
}

/// Gaussian noise with a fixed mean and standard deviation.
///
/// Seeded explicitly (not derived from an agent id) so callers that need
/// reproducible noise across runs pin their own seed per agent.
pub struct GaussianUncertainty {
    mean: f64,
    std: f64,
    rng: SmallRng,
    last: f64,
}

impl GaussianUncertainty {
    /// Construct with the given distribution parameters and RNG seed.
    pub fn new(mean: f64, std: f64, seed: u64) -> Self {
        Self {
            mean,
            std,
            rng: SmallRng::seed_from_u64(seed),
            last: 0.0,
        }
    }
}

impl Uncertainty for GaussianUncertainty {
    fn sample(&mut self) -> f64 {
        // std <= 0 degenerates to the mean rather than panicking, so a
        // misconfigured scenario fails softly instead of aborting a run.
        let value = if self.std > 0.0 {
            let dist = Normal::new(self.mean, self.std).unwrap_or(Normal::new(self.mean, 1.0).unwrap());
            dist.sample(&mut self.rng)
        } else {
            self.mean
        };
        self.last = value;
        value
    }

    fn last(&self) -> f64 {
        self.last
    }
}
