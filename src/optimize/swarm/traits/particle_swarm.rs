//! Particle swarm optimization trait.

use super::{SwarmOptions, VelocityPolicy};
use numr::error::Result;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Result from particle swarm optimization.
#[derive(Debug, Clone)]
pub struct ParticleSwarmResult<R: Runtime> {
    /// Best-known position, shaped like the starting point.
    pub x: Tensor<R>,
    /// Objective value reported by the run.
    pub fun: f64,
    /// Number of iterations run.
    pub iterations: usize,
    /// Number of function evaluations.
    pub nfev: usize,
    /// Whether the tolerance stop fired.
    pub converged: bool,
    /// Global best objective after each iteration.
    pub history: Vec<f64>,
}

/// Particle swarm optimization algorithm trait.
pub trait ParticleSwarmAlgorithms<R: Runtime> {
    /// Particle Swarm Optimization.
    ///
    /// Every particle starts at `x0`; the swarm minimizes `f` until the
    /// tolerance or the iteration limit in `options` is reached.
    fn particle_swarm<F>(
        &self,
        f: F,
        x0: &Tensor<R>,
        policy: VelocityPolicy,
        options: &SwarmOptions,
    ) -> Result<ParticleSwarmResult<R>>
    where
        F: Fn(&Tensor<R>) -> Result<f64>;
}
