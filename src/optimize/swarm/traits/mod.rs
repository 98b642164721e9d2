//! Trait definitions for particle swarm optimization.

mod options;
pub mod particle_swarm;
pub mod velocity;

pub use options::{BestTracking, CoefficientDraw, SwarmOptions, Termination};
pub use particle_swarm::{ParticleSwarmAlgorithms, ParticleSwarmResult};
pub use velocity::{ConstrictionFactor, InertiaWeight, VelocityPolicy};
