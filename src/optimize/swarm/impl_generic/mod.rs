//! Generic implementations of particle swarm optimization.
//!
//! All algorithms use tensor operations and are generic over `R: Runtime`.

pub mod particle_swarm;
pub mod random;
pub(crate) mod swarm;
pub(crate) mod velocity;

pub use particle_swarm::particle_swarm_impl;
#[cfg(feature = "parallel")]
pub use particle_swarm::particle_swarm_parallel_impl;
pub use random::{PhiloxSource, UniformSource};

use numr::dtype::DType;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

use crate::optimize::error::{OptimizeError, OptimizeResult};
use crate::optimize::swarm::SwarmOptions;

/// Reject configurations the swarm cannot run with.
pub(crate) fn validate_options(options: &SwarmOptions) -> OptimizeResult<()> {
    if options.population_size == 0 {
        return Err(OptimizeError::configuration(
            "population_size",
            "swarm needs at least one particle",
        ));
    }
    if options.tol.is_nan() || options.tol < 0.0 {
        return Err(OptimizeError::configuration(
            "tol",
            format!("tolerance must be non-negative, got {}", options.tol),
        ));
    }

    let coefficients = [
        ("inertia_weight", options.inertia_weight),
        ("cognitive_acceleration", options.cognitive_acceleration),
        ("social_acceleration", options.social_acceleration),
    ];
    for (name, value) in coefficients {
        if !value.is_finite() {
            return Err(OptimizeError::configuration(
                name,
                format!("must be finite, got {}", value),
            ));
        }
    }

    Ok(())
}

/// The starting point must be a non-empty, finite F64 tensor in dense layout.
pub(crate) fn validate_starting_point<R: Runtime>(x0: &Tensor<R>) -> OptimizeResult<()> {
    if x0.dtype() != DType::F64 {
        return Err(OptimizeError::InvalidInput {
            context: format!(
                "particle_swarm: starting point must be F64, got {:?}",
                x0.dtype()
            ),
        });
    }
    if x0.numel() == 0 {
        return Err(OptimizeError::InvalidInput {
            context: "particle_swarm: empty starting point".to_string(),
        });
    }

    let data: Vec<f64> = x0.to_vec();
    if let Some(i) = data.iter().position(|v| !v.is_finite()) {
        return Err(OptimizeError::InvalidInput {
            context: format!(
                "particle_swarm: non-finite starting point entry {} at index {}",
                data[i], i
            ),
        });
    }

    Ok(())
}
