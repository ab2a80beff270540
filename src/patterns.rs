//! Provides a set of patterns useful for testing and benchmarking the
//! sorting engines. Currently limited to i32 values; callers narrow to i8
//! where the 6-lane engine is under test.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_binary(size: usize) -> Vec<i32> {
    // : : : :
    // :::::::

    random_uniform(size, 0..=1)
}

pub fn random_int_edge(size: usize) -> Vec<i32> {
    // Ordinary values mixed with the extremes of the value range, to
    // exercise signed comparison at the boundaries.
    let mut rng = new_rng();

    (0..size)
        .map(|_| match rng.gen_range(0..4) {
            0 => i32::MIN,
            1 => i32::MAX,
            _ => rng.gen::<i32>(),
        })
        .collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if let Ok(override_seed) = env::var("OVERRIDE_SEED").map(|seed| seed.parse::<u64>()) {
        return override_seed.expect("invalid OVERRIDE_SEED value");
    }

    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_rng() -> StdRng {
    // Random seed, but accessible for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
