//! Swarm state: position/velocity stacks and best-known positions.
//!
//! Each particle is one tensor slab shaped like the starting point. The
//! stacks are `Vec<Tensor<R>>` indexed by particle.

use numr::runtime::Runtime;
use numr::tensor::Tensor;
use tracing::warn;

use crate::optimize::swarm::BestTracking;

pub(crate) struct Swarm<R: Runtime> {
    pub positions: Vec<Tensor<R>>,
    pub velocities: Vec<Tensor<R>>,
    /// One slot under `SharedSlot`, one per particle under `PerParticle`.
    pub personal_best: Vec<Tensor<R>>,
    pub personal_best_fun: Vec<f64>,
    pub global_best: Tensor<R>,
    pub global_best_fun: f64,
    tracking: BestTracking,
}

impl<R: Runtime> Swarm<R> {
    /// Every particle starts at `x0`, with `x0` as its initial velocity.
    pub fn new(x0: &Tensor<R>, population_size: usize, tracking: BestTracking) -> Self {
        let slots = match tracking {
            BestTracking::SharedSlot => 1,
            BestTracking::PerParticle => population_size,
        };

        Self {
            positions: vec![x0.clone(); population_size],
            velocities: vec![x0.clone(); population_size],
            personal_best: vec![x0.clone(); slots],
            personal_best_fun: vec![f64::INFINITY; slots],
            global_best: x0.clone(),
            global_best_fun: f64::INFINITY,
            tracking,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    fn slot(&self, k: usize) -> usize {
        match self.tracking {
            BestTracking::SharedSlot => 0,
            BestTracking::PerParticle => k,
        }
    }

    /// Personal-best attractor of particle `k`.
    pub fn personal_best_of(&self, k: usize) -> &Tensor<R> {
        &self.personal_best[self.slot(k)]
    }

    /// Fold one sweep of objective values into the best-known state.
    ///
    /// Values are consumed in particle order; non-finite values never
    /// become a best. Returns whether the global best improved.
    pub fn record(&mut self, values: &[f64], iteration: usize) -> bool {
        for (k, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                warn!(iteration, particle = k, value, "non-finite objective value ignored");
                continue;
            }
            let slot = self.slot(k);
            if value < self.personal_best_fun[slot] {
                self.personal_best[slot] = self.positions[k].clone();
                self.personal_best_fun[slot] = value;
            }
        }

        // Strict comparison keeps the lowest index on ties.
        let mut best_slot = None;
        let mut best_fun = self.global_best_fun;
        for (slot, &fun) in self.personal_best_fun.iter().enumerate() {
            if fun < best_fun {
                best_fun = fun;
                best_slot = Some(slot);
            }
        }

        match best_slot {
            Some(slot) => {
                self.global_best = self.personal_best[slot].clone();
                self.global_best_fun = best_fun;
                true
            }
            None => false,
        }
    }
}
