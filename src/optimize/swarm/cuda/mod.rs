//! CUDA implementation of particle swarm optimization.

use numr::error::Result;
use numr::runtime::cuda::{CudaClient, CudaRuntime};
use numr::tensor::Tensor;

use crate::optimize::swarm::optimizer::SwarmOptimizer;
use crate::optimize::swarm::traits::{
    ParticleSwarmAlgorithms, ParticleSwarmResult, SwarmOptions, VelocityPolicy,
};

impl ParticleSwarmAlgorithms<CudaRuntime> for CudaClient {
    fn particle_swarm<F>(
        &self,
        f: F,
        x0: &Tensor<CudaRuntime>,
        policy: VelocityPolicy,
        options: &SwarmOptions,
    ) -> Result<ParticleSwarmResult<CudaRuntime>>
    where
        F: Fn(&Tensor<CudaRuntime>) -> Result<f64>,
    {
        SwarmOptimizer::with_options(options.clone(), policy)
            .optimize(self, f, x0)
            .map_err(|e| {
                numr::error::Error::backend_limitation("cuda", "particle_swarm", e.to_string())
            })
    }
}
