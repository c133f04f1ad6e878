use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

const WORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` values drawn uniformly from `low..high`.
pub fn random_values<T, R>(rng: &mut R, len: usize, low: T, high: T) -> Vec<T>
where
    T: SampleUniform + Copy + PartialOrd,
    R: Rng + ?Sized,
{
    (0..len).map(|_| rng.random_range(low..high)).collect()
}

/// Lowercase ASCII words with lengths in `1..=max_len`.
pub fn random_words<R: Rng + ?Sized>(rng: &mut R, len: usize, max_len: usize) -> Vec<String> {
    (0..len)
        .map(|_| {
            let word_len = rng.random_range(1..=max_len.max(1));
            (0..word_len)
                .map(|_| WORD_ALPHABET[rng.random_range(0..WORD_ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}
