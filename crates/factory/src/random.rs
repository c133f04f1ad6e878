use std::convert::Infallible;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Factory;

pub const RANGE_START: i32 = 1;
/// Exclusive.
pub const RANGE_END: i32 = 100;

/// Produces integers uniformly from `RANGE_START..RANGE_END`. The generator
/// lives as long as the factory, so successive calls continue one stream.
#[derive(Clone, Debug)]
pub struct RandomNumberFactory<R = StdRng> {
    rng: R,
}

impl RandomNumberFactory<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomNumberFactory<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomNumberFactory<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Factory for RandomNumberFactory<R> {
    type Output = i32;
    type Error = Infallible;

    fn create(&mut self) -> Result<i32, Infallible> {
        Ok(self.rng.random_range(RANGE_START..RANGE_END))
    }
}
