//! Tensor-based velocity updates.

use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::Runtime;
use numr::tensor::Tensor;

use crate::optimize::error::{OptimizeError, OptimizeResult};
use crate::optimize::swarm::{CoefficientDraw, SwarmOptions, VelocityPolicy};

use super::random::UniformSource;
use super::swarm::Swarm;

/// Overwrite every velocity in `swarm` according to `policy`.
///
/// Positions and bests are read only. r1, r2 are drawn in that order, once
/// per call or once per particle depending on `options.coefficient_draw`.
pub(crate) fn update_velocities_impl<R, C, S>(
    client: &C,
    policy: &VelocityPolicy,
    swarm: &mut Swarm<R>,
    options: &SwarmOptions,
    source: &mut S,
) -> OptimizeResult<()>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R>,
    S: UniformSource<R>,
{
    let chi = match policy {
        VelocityPolicy::InertiaWeight(_) => None,
        VelocityPolicy::ConstrictionFactor(cf) => Some(cf.chi().ok_or_else(|| {
            OptimizeError::configuration(
                "velocity_policy",
                "constriction factor used before initialize",
            )
        })?),
    };

    let shape = swarm.global_best.shape().to_vec();
    let shared = match options.coefficient_draw {
        CoefficientDraw::PerUpdate => Some(draw_pair(source, &shape)?),
        CoefficientDraw::PerParticle => None,
    };

    for k in 0..swarm.len() {
        let (r1, r2) = match &shared {
            Some((r1, r2)) => (r1.clone(), r2.clone()),
            None => draw_pair(source, &shape)?,
        };

        let position = &swarm.positions[k];
        let cognitive = pull(
            client,
            &r1,
            swarm.personal_best_of(k),
            position,
            options.cognitive_acceleration,
        )?;
        let social = pull(
            client,
            &r2,
            &swarm.global_best,
            position,
            options.social_acceleration,
        )?;
        let attraction = client
            .add(&cognitive, &social)
            .map_err(|e| OptimizeError::NumericalError {
                message: format!("pso: attraction - {}", e),
            })?;

        let velocity = &swarm.velocities[k];
        let updated = match chi {
            None => {
                let inertia = client
                    .mul_scalar(velocity, options.inertia_weight)
                    .map_err(|e| OptimizeError::NumericalError {
                        message: format!("pso: inertia - {}", e),
                    })?;
                client
                    .add(&inertia, &attraction)
                    .map_err(|e| OptimizeError::NumericalError {
                        message: format!("pso: velocity - {}", e),
                    })?
            }
            Some(chi) => {
                let raw = client
                    .add(velocity, &attraction)
                    .map_err(|e| OptimizeError::NumericalError {
                        message: format!("pso: velocity - {}", e),
                    })?;
                client
                    .mul_scalar(&raw, chi)
                    .map_err(|e| OptimizeError::NumericalError {
                        message: format!("pso: constriction - {}", e),
                    })?
            }
        };

        swarm.velocities[k] = updated;
    }

    Ok(())
}

/// `positions[k] += velocities[k]` for every particle.
pub(crate) fn move_particles_impl<R, C>(client: &C, swarm: &mut Swarm<R>) -> OptimizeResult<()>
where
    R: Runtime,
    C: TensorOps<R>,
{
    for k in 0..swarm.len() {
        swarm.positions[k] = client
            .add(&swarm.positions[k], &swarm.velocities[k])
            .map_err(|e| OptimizeError::NumericalError {
                message: format!("pso: move particle {} - {}", k, e),
            })?;
    }
    Ok(())
}

fn draw_pair<R, S>(source: &mut S, shape: &[usize]) -> OptimizeResult<(Tensor<R>, Tensor<R>)>
where
    R: Runtime,
    S: UniformSource<R>,
{
    let r1 = source
        .uniform(shape)
        .map_err(|e| OptimizeError::NumericalError {
            message: format!("pso: draw r1 - {}", e),
        })?;
    let r2 = source
        .uniform(shape)
        .map_err(|e| OptimizeError::NumericalError {
            message: format!("pso: draw r2 - {}", e),
        })?;
    Ok((r1, r2))
}

/// coefficient * r ⊙ (target - position)
fn pull<R, C>(
    client: &C,
    r: &Tensor<R>,
    target: &Tensor<R>,
    position: &Tensor<R>,
    coefficient: f64,
) -> OptimizeResult<Tensor<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R>,
{
    let diff = client
        .sub(target, position)
        .map_err(|e| OptimizeError::NumericalError {
            message: format!("pso: pull diff - {}", e),
        })?;
    let weighted = client
        .mul(r, &diff)
        .map_err(|e| OptimizeError::NumericalError {
            message: format!("pso: pull weight - {}", e),
        })?;
    client
        .mul_scalar(&weighted, coefficient)
        .map_err(|e| OptimizeError::NumericalError {
            message: format!("pso: pull scale - {}", e),
        })
}
