//! Uniform random source for the stochastic PSO coefficients.
//!
//! Draws come from numr's counter-based Philox generator, so a stream is
//! fully determined by its seed and the sequence of requested shapes.

use std::marker::PhantomData;

use numr::dtype::DType;
use numr::error::Result;
use numr::ops::AdvancedRandomOps;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Source of independent samples in [0, 1).
pub trait UniformSource<R: Runtime> {
    /// Restart the stream. Called once at the start of every run.
    fn reseed(&mut self);

    /// Tensor of `shape` filled with independent uniform samples.
    fn uniform(&mut self, shape: &[usize]) -> Result<Tensor<R>>;

    /// Seed of the stream currently drawn from, when the source has one.
    fn stream_seed(&self) -> Option<u64> {
        None
    }
}

/// Philox stream on a numr client.
///
/// With a fixed seed every `reseed` rewinds to the same stream; without one
/// each `reseed` picks a fresh seed.
pub struct PhiloxSource<'a, R, C> {
    client: &'a C,
    seed: Option<u64>,
    stream_seed: u64,
    counter: u64,
    _runtime: PhantomData<R>,
}

impl<'a, R, C> PhiloxSource<'a, R, C>
where
    R: Runtime,
    C: AdvancedRandomOps<R>,
{
    pub fn new(client: &'a C, seed: Option<u64>) -> Self {
        Self {
            client,
            seed,
            stream_seed: seed.unwrap_or_else(rand::random),
            counter: 0,
            _runtime: PhantomData,
        }
    }
}

impl<R, C> UniformSource<R> for PhiloxSource<'_, R, C>
where
    R: Runtime,
    C: AdvancedRandomOps<R>,
{
    fn reseed(&mut self) {
        self.stream_seed = self.seed.unwrap_or_else(rand::random);
        self.counter = 0;
    }

    fn uniform(&mut self, shape: &[usize]) -> Result<Tensor<R>> {
        let samples = self
            .client
            .philox_uniform(shape, self.stream_seed, self.counter, DType::F64)?;
        // Advance past every block consumed so consecutive draws never overlap.
        let drawn: usize = shape.iter().product();
        self.counter += drawn.max(1) as u64;
        Ok(samples)
    }

    fn stream_seed(&self) -> Option<u64> {
        Some(self.stream_seed)
    }
}
