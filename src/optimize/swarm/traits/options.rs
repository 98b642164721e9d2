//! Options for particle swarm optimization.

use serde::{Deserialize, Serialize};

/// Which positions act as the cognitive ("personal best") attractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BestTracking {
    /// One slot shared by the whole swarm, overwritten during every sweep.
    SharedSlot,
    /// One slot per particle (canonical PSO).
    #[default]
    PerParticle,
}

/// How often the uniform coefficients r1, r2 are drawn during a velocity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoefficientDraw {
    /// Draw once per update and reuse for every particle.
    PerUpdate,
    /// Draw a fresh pair for each particle.
    #[default]
    PerParticle,
}

/// Objective value compared against the tolerance after each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Termination {
    /// The value of the last particle evaluated in the iteration.
    LastEvaluated,
    /// The best value found so far.
    #[default]
    BestKnown,
}

/// Options for particle swarm optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmOptions {
    /// Number of particles
    pub population_size: usize,
    /// Inertia weight (omega) applied to the previous velocity
    pub inertia_weight: f64,
    /// Cognitive acceleration (c1)
    pub cognitive_acceleration: f64,
    /// Social acceleration (c2)
    pub social_acceleration: f64,
    /// Maximum number of iterations (0 means no limit; `history` then grows
    /// by one entry per iteration until the tolerance stop fires)
    pub max_iter: usize,
    /// Objective value below which the swarm stops
    pub tol: f64,
    /// Random seed (None for a fresh seed on every run)
    pub seed: Option<u64>,
    /// Personal-best scope
    pub best_tracking: BestTracking,
    /// Sampling frequency of r1, r2
    pub coefficient_draw: CoefficientDraw,
    /// Value checked against `tol`
    pub termination: Termination,
}

impl Default for SwarmOptions {
    fn default() -> Self {
        Self {
            population_size: 10,
            inertia_weight: 0.9,
            cognitive_acceleration: 0.5,
            social_acceleration: 0.3,
            max_iter: 200,
            tol: 1e-5,
            seed: None,
            best_tracking: BestTracking::default(),
            coefficient_draw: CoefficientDraw::default(),
            termination: Termination::default(),
        }
    }
}
