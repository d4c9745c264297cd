use std::fmt;

use anyhow::Context as _;
use rand::{distr::Distribution, rngs::StdRng, seq::SliceRandom as _};

/// The exclusive upper bound of [`BoundedData`]
pub const BOUNDED_MAX: i32 = 500_000;
/// The exponent of [`ZipfData`]
pub const ZIPF_EXPONENT: f64 = 1.1;

/// A trait for generalizing sorting data creation
pub trait Data<T: Sized + Ord + fmt::Debug> {
    /// Initialize a vector of the given size
    fn initialize(size: usize, rng: &mut StdRng) -> anyhow::Result<Vec<T>>;
}

/// Uniformly distributed values over the whole domain of the type
#[derive(Debug)]
pub struct UniformData;

/// A random permutation of `0..size`
#[derive(Debug)]
pub struct PermutationData;

/// Uniformly distributed values in `0..BOUNDED_MAX`
#[derive(Debug)]
pub struct BoundedData;

/// Zipf distributed values in `1..=size / 10`, a handful of values make up most of the data
#[derive(Debug)]
pub struct ZipfData;

impl Data<u64> for UniformData {
    fn initialize(size: usize, rng: &mut StdRng) -> anyhow::Result<Vec<u64>> {
        Ok(rand::distr::Uniform::new_inclusive(u64::MIN, u64::MAX)
            .context("Invalid uniform range")?
            .sample_iter(rng)
            .take(size)
            .collect())
    }
}

impl Data<u64> for PermutationData {
    fn initialize(size: usize, rng: &mut StdRng) -> anyhow::Result<Vec<u64>> {
        let mut values: Vec<u64> = (0..size as u64).collect();
        values.shuffle(rng);
        Ok(values)
    }
}

impl Data<i32> for BoundedData {
    fn initialize(size: usize, rng: &mut StdRng) -> anyhow::Result<Vec<i32>> {
        Ok(rand::distr::Uniform::new(0, BOUNDED_MAX)
            .context("Invalid bounded range")?
            .sample_iter(rng)
            .take(size)
            .collect())
    }
}

impl Data<u64> for ZipfData {
    fn initialize(size: usize, rng: &mut StdRng) -> anyhow::Result<Vec<u64>> {
        let elements = std::cmp::max(size / 10, 1) as f64;
        let zipf = rand_distr::Zipf::new(elements, ZIPF_EXPONENT)
            .with_context(|| format!("Invalid zipf distribution over {elements} elements"))?;

        Ok(zipf
            .sample_iter(rng)
            .take(size)
            .map(|value| value as u64)
            .collect())
    }
}
