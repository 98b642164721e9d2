//! Particle swarm optimization.
//!
//! A population of particles explores the search space; each particle is
//! pulled toward its own best-known position and toward the best position
//! found by the swarm:
//!
//! ```text
//! v = w·v + c1·r1 ⊙ (pbest − x) + c2·r2 ⊙ (gbest − x)     (inertia weight)
//! v = χ·(v + c1·r1 ⊙ (pbest − x) + c2·r2 ⊙ (gbest − x))   (constriction factor)
//! x = x + v
//! ```
//!
//! Particles are tensors shaped like the starting point, so matrix-shaped
//! decision variables are optimized without flattening.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995): "Particle swarm optimization"
//! - Clerc & Kennedy (2002): "The particle swarm - explosion, stability, and
//!   convergence in a multidimensional complex space"

mod cpu;
#[cfg(feature = "cuda")]
mod cuda;
pub mod impl_generic;
mod optimizer;
pub mod traits;

pub use impl_generic::{PhiloxSource, UniformSource};
pub use optimizer::SwarmOptimizer;
pub use traits::{
    BestTracking, CoefficientDraw, ConstrictionFactor, InertiaWeight, ParticleSwarmAlgorithms,
    ParticleSwarmResult, SwarmOptions, Termination, VelocityPolicy,
};
