//! CPU implementation of particle swarm optimization.

use numr::error::Result;
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

use crate::optimize::swarm::optimizer::SwarmOptimizer;
use crate::optimize::swarm::traits::{
    ParticleSwarmAlgorithms, ParticleSwarmResult, SwarmOptions, VelocityPolicy,
};

impl ParticleSwarmAlgorithms<CpuRuntime> for CpuClient {
    fn particle_swarm<F>(
        &self,
        f: F,
        x0: &Tensor<CpuRuntime>,
        policy: VelocityPolicy,
        options: &SwarmOptions,
    ) -> Result<ParticleSwarmResult<CpuRuntime>>
    where
        F: Fn(&Tensor<CpuRuntime>) -> Result<f64>,
    {
        SwarmOptimizer::with_options(options.clone(), policy)
            .optimize(self, f, x0)
            .map_err(|e| {
                numr::error::Error::backend_limitation("cpu", "particle_swarm", e.to_string())
            })
    }
}
