//! Optimization algorithms for swarmr.
//!
//! # Modules
//!
//! - [`swarm`] - Particle swarm optimization (inertia weight, constriction factor)
//!
//! # Quick Start
//!
//! ```ignore
//! use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
//! use numr::tensor::Tensor;
//! use swarmr::optimize::swarm::{ParticleSwarmAlgorithms, SwarmOptions, VelocityPolicy};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//! let x0 = Tensor::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0], &[3, 1], &device);
//!
//! // Minimize the sphere function
//! let sphere = |x: &Tensor<CpuRuntime>| {
//!     let data: Vec<f64> = x.to_vec();
//!     Ok(data.iter().map(|v| v * v).sum())
//! };
//! let opts = SwarmOptions { seed: Some(42), ..Default::default() };
//! let result = client.particle_swarm(sphere, &x0, VelocityPolicy::inertia_weight(), &opts)?;
//! ```

pub mod error;
pub mod swarm;

pub use error::{OptimizeError, OptimizeResult};
pub use swarm::{
    BestTracking, CoefficientDraw, ParticleSwarmAlgorithms, ParticleSwarmResult, SwarmOptimizer,
    SwarmOptions, Termination, VelocityPolicy,
};
