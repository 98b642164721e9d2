//! swarmr - Particle Swarm Optimization on numr tensors
//!
//! swarmr minimizes a scalar objective over a continuous search space with a
//! swarm of particles. Each particle is a tensor shaped like the starting
//! point, so the optimizer runs on any numr backend (CPU, CUDA).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      swarmr                              │
//! │   (swarm state, velocity policies, iteration control)   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                               │
//! │       (tensors, elementwise ops, Philox random)         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`optimize`] - Particle swarm optimizer and its error type
//!
//! # Feature Flags
//!
//! | Feature    | Description | Dependencies |
//! |------------|-------------|--------------|
//! | `parallel` | Evaluate the population on rayon's thread pool | rayon |
//! | `cuda`     | Enable CUDA GPU acceleration | CUDA 12.x, numr/cuda |
//!
//! # Example
//!
//! ```ignore
//! use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
//! use swarmr::{SwarmOptimizer, Tensor, VelocityPolicy};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//! let x0 = Tensor::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0], &[3, 1], &device);
//!
//! let mut pso = SwarmOptimizer::new(10, 0.9, 0.5, 0.3, 200, 1e-5, VelocityPolicy::inertia_weight());
//! let result = pso.optimize(&client, sphere, &x0)?;
//! println!("f = {} after {} iterations", result.fun, result.iterations);
//! ```

pub mod optimize;

// Re-export main types for convenience
pub use optimize::swarm::{
    BestTracking, CoefficientDraw, ConstrictionFactor, InertiaWeight, ParticleSwarmAlgorithms,
    ParticleSwarmResult, PhiloxSource, SwarmOptimizer, SwarmOptions, Termination, UniformSource,
    VelocityPolicy,
};
pub use optimize::{OptimizeError, OptimizeResult};

// Re-export numr types that users will commonly need
pub use numr::error::{Error, Result};
pub use numr::runtime::Runtime;
pub use numr::tensor::Tensor;
