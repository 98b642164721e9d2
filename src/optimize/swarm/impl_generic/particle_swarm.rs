//! Tensor-based particle swarm optimization.
//!
//! Positions and velocities are stored as Vec<Tensor<R>>, one tensor per
//! particle, each shaped like the starting point. Per iteration:
//!
//! 1. evaluate every particle (serially, or on rayon with `parallel`)
//! 2. fold the values into the personal/global bests in particle order
//! 3. update velocities through the velocity policy
//! 4. move particles: x += v
//! 5. compare against the tolerance

use numr::error::Result;
use numr::ops::{ScalarOps, TensorOps};
use numr::runtime::Runtime;
use numr::tensor::Tensor;
use tracing::{debug, info};

use crate::optimize::error::{OptimizeError, OptimizeResult};
use crate::optimize::swarm::{ParticleSwarmResult, SwarmOptions, Termination, VelocityPolicy};

use super::random::UniformSource;
use super::swarm::Swarm;
use super::velocity::{move_particles_impl, update_velocities_impl};
use super::{validate_options, validate_starting_point};

/// Particle swarm optimizer using tensor operations.
///
/// Every particle starts at `x0` with `x0` as its initial velocity. The
/// random source is reseeded once before the first iteration. Runs until the
/// tolerance test in `options.termination` passes or `options.max_iter`
/// iterations have run; `max_iter == 0` removes the iteration limit, in
/// which case `history` grows by one entry per iteration without bound.
pub fn particle_swarm_impl<R, C, F, S>(
    client: &C,
    f: F,
    x0: &Tensor<R>,
    policy: &mut VelocityPolicy,
    options: &SwarmOptions,
    source: &mut S,
) -> OptimizeResult<ParticleSwarmResult<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R>,
    F: Fn(&Tensor<R>) -> Result<f64>,
    S: UniformSource<R>,
{
    run_swarm(client, x0, policy, options, source, |positions| {
        positions
            .iter()
            .enumerate()
            .map(|(k, x)| f(x).map_err(|e| objective_error(k, e)))
            .collect()
    })
}

/// [`particle_swarm_impl`] with the population evaluated on rayon's pool.
///
/// Values are reduced in particle order after the parallel sweep, so a run
/// matches the serial one for the same seed and population size.
#[cfg(feature = "parallel")]
pub fn particle_swarm_parallel_impl<R, C, F, S>(
    client: &C,
    f: F,
    x0: &Tensor<R>,
    policy: &mut VelocityPolicy,
    options: &SwarmOptions,
    source: &mut S,
) -> OptimizeResult<ParticleSwarmResult<R>>
where
    R: Runtime,
    Tensor<R>: Sync,
    C: TensorOps<R> + ScalarOps<R>,
    F: Fn(&Tensor<R>) -> Result<f64> + Sync,
    S: UniformSource<R>,
{
    use rayon::prelude::*;

    run_swarm(client, x0, policy, options, source, |positions| {
        positions
            .par_iter()
            .enumerate()
            .map(|(k, x)| f(x).map_err(|e| objective_error(k, e)))
            .collect()
    })
}

fn objective_error(particle: usize, err: numr::error::Error) -> OptimizeError {
    OptimizeError::NumrError(format!("objective at particle {}: {}", particle, err))
}

fn run_swarm<R, C, S, E>(
    client: &C,
    x0: &Tensor<R>,
    policy: &mut VelocityPolicy,
    options: &SwarmOptions,
    source: &mut S,
    mut evaluate: E,
) -> OptimizeResult<ParticleSwarmResult<R>>
where
    R: Runtime,
    C: TensorOps<R> + ScalarOps<R>,
    S: UniformSource<R>,
    E: FnMut(&[Tensor<R>]) -> OptimizeResult<Vec<f64>>,
{
    validate_options(options)?;
    // Strided views (e.g. transposes) are copied to a dense layout first.
    let x0 = &x0.contiguous();
    validate_starting_point(x0)?;
    policy.initialize(options.cognitive_acceleration, options.social_acceleration)?;
    source.reseed();

    debug!(
        seed = ?source.stream_seed(),
        population = options.population_size,
        policy = policy.name(),
        max_iter = options.max_iter,
        tol = options.tol,
        "pso: starting"
    );

    let mut swarm = Swarm::new(x0, options.population_size, options.best_tracking);
    let mut history = Vec::new();
    let mut nfev = 0;
    let mut iteration = 0;

    while options.max_iter == 0 || iteration < options.max_iter {
        let values = evaluate(&swarm.positions)?;
        nfev += values.len();

        if swarm.record(&values, iteration) {
            debug!(iteration, best = swarm.global_best_fun, "pso: global best improved");
        }
        history.push(swarm.global_best_fun);

        update_velocities_impl(client, policy, &mut swarm, options, source)?;
        move_particles_impl(client, &mut swarm)?;
        iteration += 1;

        let checked = match options.termination {
            Termination::LastEvaluated => values.last().copied().unwrap_or(f64::INFINITY),
            Termination::BestKnown => swarm.global_best_fun,
        };
        if checked.is_finite() && checked < options.tol {
            info!(
                iteration,
                fun = checked,
                tol = options.tol,
                "pso: minimized within tolerance"
            );
            return Ok(ParticleSwarmResult {
                x: swarm.global_best,
                fun: checked,
                iterations: iteration,
                nfev,
                converged: true,
                history,
            });
        }
    }

    Ok(ParticleSwarmResult {
        x: swarm.global_best,
        fun: swarm.global_best_fun,
        iterations: iteration,
        nfev,
        converged: false,
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize::swarm::impl_generic::PhiloxSource;
    use crate::optimize::swarm::{BestTracking, CoefficientDraw};
    use numr::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime};
    use std::cell::{Cell, RefCell};

    fn sphere_tensor(x: &Tensor<CpuRuntime>) -> Result<f64> {
        let data: Vec<f64> = x.to_vec();
        Ok(data.iter().map(|&xi| xi * xi).sum())
    }

    fn run<F>(
        f: F,
        x0: &[f64],
        shape: &[usize],
        options: &SwarmOptions,
    ) -> ParticleSwarmResult<CpuRuntime>
    where
        F: Fn(&Tensor<CpuRuntime>) -> Result<f64>,
    {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        let x0 = Tensor::<CpuRuntime>::from_slice(x0, shape, &device);
        let mut source = PhiloxSource::new(&client, options.seed);
        let mut policy = VelocityPolicy::inertia_weight();
        particle_swarm_impl(&client, f, &x0, &mut policy, options, &mut source)
            .expect("PSO failed")
    }

    #[test]
    fn test_pso_sphere_matrix() {
        let opts = SwarmOptions {
            seed: Some(42),
            ..Default::default()
        };
        let result = run(sphere_tensor, &[1.0, 2.0, 3.0, -1.0], &[2, 2], &opts);
        assert!(result.fun < 1e-3, "fun = {}", result.fun);
        assert_eq!(result.x.shape(), &[2, 2]);
        assert_eq!(result.nfev, result.iterations * opts.population_size);
    }

    #[test]
    fn test_history_non_increasing() {
        let opts = SwarmOptions {
            seed: Some(3),
            max_iter: 60,
            ..Default::default()
        };
        let result = run(sphere_tensor, &[4.0, -2.0, 1.0], &[3, 1], &opts);
        assert_eq!(result.history.len(), result.iterations);
        for pair in result.history.windows(2) {
            assert!(pair[1] <= pair[0], "{} > {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_early_termination_first_evaluation() {
        let calls = Cell::new(0usize);
        let f = |_: &Tensor<CpuRuntime>| -> Result<f64> {
            calls.set(calls.get() + 1);
            Ok(1e-9)
        };
        let opts = SwarmOptions {
            seed: Some(1),
            population_size: 5,
            ..Default::default()
        };
        let result = run(f, &[10.0, 10.0], &[1, 2], &opts);
        assert_eq!(result.fun, 1e-9);
        assert_eq!(result.iterations, 1);
        assert_eq!(calls.get(), 5);
        assert!(result.converged);
    }

    #[test]
    fn test_last_evaluated_termination() {
        // Only the first particle's value is below tolerance: the best-known
        // check stops, the last-evaluated check does not.
        let calls = Cell::new(0usize);
        let f = |_: &Tensor<CpuRuntime>| -> Result<f64> {
            let n = calls.get();
            calls.set(n + 1);
            Ok(if n == 0 { 0.0 } else { 1.0 })
        };
        let opts = SwarmOptions {
            seed: Some(1),
            population_size: 3,
            max_iter: 4,
            termination: Termination::LastEvaluated,
            ..Default::default()
        };
        let result = run(f, &[1.0], &[1, 1], &opts);
        assert_eq!(result.iterations, 4);
        assert!(!result.converged);
        assert_eq!(result.fun, 0.0);
    }

    #[test]
    fn test_zero_acceleration_linear_drift() {
        let seen = RefCell::new(Vec::new());
        let f = |x: &Tensor<CpuRuntime>| -> Result<f64> {
            seen.borrow_mut().push(x.to_vec::<f64>());
            Ok(1.0)
        };
        let opts = SwarmOptions {
            seed: Some(9),
            population_size: 2,
            inertia_weight: 1.0,
            cognitive_acceleration: 0.0,
            social_acceleration: 0.0,
            max_iter: 4,
            ..Default::default()
        };
        run(f, &[1.0, -0.5], &[2, 1], &opts);

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 8);
        for (i, x) in seen.iter().enumerate() {
            let t = (i / 2 + 1) as f64;
            assert_eq!(x, &vec![t, -0.5 * t]);
        }
    }

    #[test]
    fn test_single_particle_modes_coincide() {
        let base = SwarmOptions {
            seed: Some(11),
            population_size: 1,
            max_iter: 30,
            ..Default::default()
        };
        let shared = SwarmOptions {
            best_tracking: BestTracking::SharedSlot,
            coefficient_draw: CoefficientDraw::PerUpdate,
            ..base.clone()
        };

        let a = run(sphere_tensor, &[0.7, -1.3], &[1, 2], &base);
        let b = run(sphere_tensor, &[0.7, -1.3], &[1, 2], &shared);
        assert_eq!(a.history, b.history);
        assert_eq!(a.x.to_vec::<f64>(), b.x.to_vec::<f64>());
    }

    #[test]
    fn test_non_finite_objective_never_becomes_best() {
        let calls = Cell::new(0usize);
        let f = |x: &Tensor<CpuRuntime>| -> Result<f64> {
            calls.set(calls.get() + 1);
            if calls.get() % 2 == 0 {
                Ok(f64::NAN)
            } else {
                sphere_tensor(x)
            }
        };
        let opts = SwarmOptions {
            seed: Some(5),
            population_size: 4,
            max_iter: 20,
            ..Default::default()
        };
        let result = run(f, &[1.0, 1.0], &[2, 1], &opts);
        assert!(result.fun.is_finite());
        assert!(result.history.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn test_unbounded_run_records_every_iteration() {
        let calls = Cell::new(0usize);
        let f = |_: &Tensor<CpuRuntime>| -> Result<f64> {
            calls.set(calls.get() + 1);
            Ok(if calls.get() > 6 { 0.0 } else { 1.0 })
        };
        let opts = SwarmOptions {
            seed: Some(6),
            population_size: 2,
            max_iter: 0,
            ..Default::default()
        };
        let result = run(f, &[1.0], &[1, 1], &opts);
        assert!(result.converged);
        assert_eq!(result.iterations, 4);
        assert_eq!(result.history, vec![1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_transposed_starting_point() {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        let base =
            Tensor::<CpuRuntime>::from_slice(&[1.0, 2.0, 3.0, -1.0, -2.0, -3.0], &[2, 3], &device);
        let x0 = base.t().expect("transpose");
        let mut source = PhiloxSource::new(&client, Some(4));
        let mut policy = VelocityPolicy::inertia_weight();
        let opts = SwarmOptions {
            max_iter: 20,
            ..Default::default()
        };

        let result =
            particle_swarm_impl(&client, sphere_tensor, &x0, &mut policy, &opts, &mut source)
                .expect("PSO failed");
        assert_eq!(result.x.shape(), &[3, 2]);
        assert!(result.fun <= 28.0);
    }

    #[test]
    fn test_f32_starting_point_rejected_before_evaluation() {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        let x0 = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 2.0], &[2, 1], &device);
        let mut source = PhiloxSource::new(&client, Some(0));
        let mut policy = VelocityPolicy::inertia_weight();
        let calls = Cell::new(0usize);
        let f = |_: &Tensor<CpuRuntime>| -> Result<f64> {
            calls.set(calls.get() + 1);
            Ok(1.0)
        };
        let opts = SwarmOptions {
            max_iter: 3,
            ..Default::default()
        };

        let result = particle_swarm_impl(&client, f, &x0, &mut policy, &opts, &mut source);
        assert!(matches!(result, Err(OptimizeError::InvalidInput { .. })));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_last_evaluated_ignores_non_finite_value() {
        let f = |_: &Tensor<CpuRuntime>| -> Result<f64> { Ok(f64::NEG_INFINITY) };
        let opts = SwarmOptions {
            seed: Some(2),
            population_size: 3,
            max_iter: 5,
            termination: Termination::LastEvaluated,
            ..Default::default()
        };
        let result = run(f, &[1.0, 1.0], &[2, 1], &opts);
        assert!(!result.converged);
        assert_eq!(result.iterations, 5);
        assert!(result.fun.is_infinite() && result.fun > 0.0);
    }

    #[test]
    fn test_objective_error_propagates() {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        let x0 = Tensor::<CpuRuntime>::from_slice(&[1.0], &[1, 1], &device);
        let mut source = PhiloxSource::new(&client, Some(0));
        let mut policy = VelocityPolicy::inertia_weight();
        let f = |_: &Tensor<CpuRuntime>| -> Result<f64> {
            Err(numr::error::Error::InvalidArgument {
                arg: "x",
                reason: "objective refused".to_string(),
            })
        };
        let result = particle_swarm_impl(
            &client,
            f,
            &x0,
            &mut policy,
            &SwarmOptions::default(),
            &mut source,
        );
        assert!(matches!(result, Err(OptimizeError::NumrError(_))));
    }
}
