//! Configured particle swarm optimizer.

use numr::error::Result;
use numr::ops::{AdvancedRandomOps, ScalarOps, TensorOps};
use numr::runtime::Runtime;
use numr::tensor::Tensor;

use crate::optimize::error::OptimizeResult;

use super::impl_generic::{PhiloxSource, UniformSource, particle_swarm_impl};
use super::{ParticleSwarmResult, SwarmOptions, VelocityPolicy};

/// Particle swarm optimizer holding its configuration between runs.
///
/// Construction stores values verbatim; they are validated when a run
/// starts. The best position is returned in [`ParticleSwarmResult::x`]
/// rather than written back into the starting point.
///
/// ```ignore
/// use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
/// use numr::tensor::Tensor;
/// use swarmr::optimize::swarm::{SwarmOptimizer, VelocityPolicy};
///
/// let device = CpuDevice::new();
/// let client = CpuClient::new(device.clone());
/// let x0 = Tensor::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0], &[3, 1], &device);
///
/// let mut pso = SwarmOptimizer::new(10, 0.9, 0.5, 0.3, 200, 1e-5, VelocityPolicy::inertia_weight());
/// let result = pso.optimize(&client, sphere, &x0)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SwarmOptimizer {
    options: SwarmOptions,
    policy: VelocityPolicy,
}

impl SwarmOptimizer {
    pub fn new(
        population_size: usize,
        inertia_weight: f64,
        cognitive_acceleration: f64,
        social_acceleration: f64,
        max_iter: usize,
        tol: f64,
        policy: VelocityPolicy,
    ) -> Self {
        Self {
            options: SwarmOptions {
                population_size,
                inertia_weight,
                cognitive_acceleration,
                social_acceleration,
                max_iter,
                tol,
                ..Default::default()
            },
            policy,
        }
    }

    pub fn with_options(options: SwarmOptions, policy: VelocityPolicy) -> Self {
        Self { options, policy }
    }

    /// Minimize `f` starting every particle at `x0`.
    ///
    /// Draws come from a Philox stream seeded with `options.seed`, reseeded
    /// on every call.
    pub fn optimize<R, C, F>(
        &mut self,
        client: &C,
        f: F,
        x0: &Tensor<R>,
    ) -> OptimizeResult<ParticleSwarmResult<R>>
    where
        R: Runtime,
        C: TensorOps<R> + ScalarOps<R> + AdvancedRandomOps<R>,
        F: Fn(&Tensor<R>) -> Result<f64>,
    {
        let mut source = PhiloxSource::new(client, self.options.seed);
        self.optimize_with_source(client, f, x0, &mut source)
    }

    /// Like [`optimize`](Self::optimize) with a caller-supplied random source.
    pub fn optimize_with_source<R, C, F, S>(
        &mut self,
        client: &C,
        f: F,
        x0: &Tensor<R>,
        source: &mut S,
    ) -> OptimizeResult<ParticleSwarmResult<R>>
    where
        R: Runtime,
        C: TensorOps<R> + ScalarOps<R>,
        F: Fn(&Tensor<R>) -> Result<f64>,
        S: UniformSource<R>,
    {
        particle_swarm_impl(client, f, x0, &mut self.policy, &self.options, source)
    }

    /// Like [`optimize`](Self::optimize), evaluating particles on rayon's pool.
    #[cfg(feature = "parallel")]
    pub fn optimize_parallel<R, C, F>(
        &mut self,
        client: &C,
        f: F,
        x0: &Tensor<R>,
    ) -> OptimizeResult<ParticleSwarmResult<R>>
    where
        R: Runtime,
        Tensor<R>: Sync,
        C: TensorOps<R> + ScalarOps<R> + AdvancedRandomOps<R>,
        F: Fn(&Tensor<R>) -> Result<f64> + Sync,
    {
        let mut source = PhiloxSource::new(client, self.options.seed);
        super::impl_generic::particle_swarm_parallel_impl(
            client,
            f,
            x0,
            &mut self.policy,
            &self.options,
            &mut source,
        )
    }

    pub fn options(&self) -> &SwarmOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SwarmOptions {
        &mut self.options
    }

    pub fn population_size(&self) -> usize {
        self.options.population_size
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.options.population_size = population_size;
    }

    pub fn inertia_weight(&self) -> f64 {
        self.options.inertia_weight
    }

    pub fn set_inertia_weight(&mut self, inertia_weight: f64) {
        self.options.inertia_weight = inertia_weight;
    }

    pub fn cognitive_acceleration(&self) -> f64 {
        self.options.cognitive_acceleration
    }

    pub fn set_cognitive_acceleration(&mut self, cognitive_acceleration: f64) {
        self.options.cognitive_acceleration = cognitive_acceleration;
    }

    pub fn social_acceleration(&self) -> f64 {
        self.options.social_acceleration
    }

    pub fn set_social_acceleration(&mut self, social_acceleration: f64) {
        self.options.social_acceleration = social_acceleration;
    }

    /// Maximum number of iterations (0 means no limit, with unbounded `history`).
    pub fn max_iter(&self) -> usize {
        self.options.max_iter
    }

    pub fn set_max_iter(&mut self, max_iter: usize) {
        self.options.max_iter = max_iter;
    }

    pub fn tol(&self) -> f64 {
        self.options.tol
    }

    pub fn set_tol(&mut self, tol: f64) {
        self.options.tol = tol;
    }

    pub fn seed(&self) -> Option<u64> {
        self.options.seed
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.options.seed = seed;
    }

    pub fn velocity_policy(&self) -> &VelocityPolicy {
        &self.policy
    }

    pub fn set_velocity_policy(&mut self, policy: VelocityPolicy) {
        self.policy = policy;
    }
}
