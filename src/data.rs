//! Input data generation for the experiments and the counters reported afterwards

use std::{fmt, marker::PhantomData, sync::atomic};

use rand::{Rng as _, distr::Distribution, rngs::StdRng, seq::SliceRandom as _};

/// The largest value produced by the bounded generators
pub const MAX_VALUE: u32 = 1000;

/// A trait for generalizing sorting data creation
pub trait Data<T: Sized + Ord + fmt::Debug> {
    /// Initialize a vector of the given size
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T>;
}

/// A uniform data distribution over the whole range of the type
#[derive(Debug)]
pub struct UniformData<T>(PhantomData<T>);

macro_rules! impl_for_integers {
    ($($type:ty),*) => {
        $(
            impl_for_integers!(@single $type);
        )*
    };
    (@single $type:ty) => {
        impl Data<$type> for UniformData<$type> {
            fn initialize(size: usize, rng: &mut StdRng) -> Vec<$type> {
                rand::distr::Uniform::new(<$type>::MIN, <$type>::MAX)
                    .unwrap()
                    .sample_iter(rng)
                    .take(size)
                    .collect()
            }
        }
    }
}

// Implement the Data trait for the integer types used by the benchmark
impl_for_integers!(u32);

/// Uniformly random values in `0..=MAX_VALUE`
#[derive(Debug)]
pub struct RandomData;

impl<T: From<u32> + Ord + fmt::Debug> Data<T> for RandomData {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T> {
        (0..size)
            .map(|_| T::from(rng.random_range(0..=MAX_VALUE)))
            .collect()
    }
}

/// Evenly spaced, weakly increasing values in `0..MAX_VALUE`
#[derive(Debug)]
pub struct SortedData;

fn sorted_values(size: usize) -> impl DoubleEndedIterator<Item = u32> {
    let step = f64::from(MAX_VALUE) / size.max(1) as f64;

    (0..size).map(move |index| (index as f64 * step) as u32)
}

impl<T: From<u32> + Ord + fmt::Debug> Data<T> for SortedData {
    fn initialize(size: usize, _rng: &mut StdRng) -> Vec<T> {
        sorted_values(size).map(T::from).collect()
    }
}

/// [`SortedData`] in reverse
#[derive(Debug)]
pub struct ReverseData;

impl<T: From<u32> + Ord + fmt::Debug> Data<T> for ReverseData {
    fn initialize(size: usize, _rng: &mut StdRng) -> Vec<T> {
        sorted_values(size).rev().map(T::from).collect()
    }
}

/// [`SortedData`] where every element was swapped with one at most `size / 10` positions
/// further right
#[derive(Debug)]
pub struct KSortedData;

impl<T: From<u32> + Ord + fmt::Debug> Data<T> for KSortedData {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T> {
        let k = size / 10;
        let mut values: Vec<u32> = sorted_values(size).collect();

        for index in 0..size {
            let max = std::cmp::min(index + k + 1, size);
            let other = rng.random_range(index..max);
            values.swap(index, other);
        }

        values.into_iter().map(T::from).collect()
    }
}

/// [`SortedData`] with `size / 20` random swaps
#[derive(Debug)]
pub struct NearlySortedData;

impl<T: From<u32> + Ord + fmt::Debug> Data<T> for NearlySortedData {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T> {
        let mut values: Vec<u32> = sorted_values(size).collect();

        if size > 0 {
            for _ in 0..size / 20 {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                values.swap(a, b);
            }
        }

        values.into_iter().map(T::from).collect()
    }
}

/// Random values taken from only 20 distinct ones
#[derive(Debug)]
pub struct DuplicatesData;

impl<T: From<u32> + Ord + fmt::Debug> Data<T> for DuplicatesData {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T> {
        const DISTINCT: u32 = 20;
        const RANGE: u32 = 100;

        (0..size)
            .map(|_| T::from(rng.random_range(0..DISTINCT) * RANGE / DISTINCT))
            .collect()
    }
}

/// Ascending plateaus of `size / 10` equal elements each
#[derive(Debug)]
pub struct PlateauData;

impl<T: From<u32> + Ord + fmt::Debug> Data<T> for PlateauData {
    fn initialize(size: usize, _rng: &mut StdRng) -> Vec<T> {
        let plateau = (size / 10).max(1);
        let plateaus = size.div_ceil(plateau).max(1) as u64;

        (0..size)
            .map(|index| {
                let value = (index / plateau) as u64 * u64::from(MAX_VALUE) / plateaus;
                T::from(value as u32)
            })
            .collect()
    }
}

/// A random permutation of `0..size`
#[derive(Debug)]
pub struct PermutationData;

impl<T: From<u32> + Ord + fmt::Debug> Data<T> for PermutationData {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T> {
        let mut values: Vec<u32> = (0..size).map(|index| index as u32).collect();
        values.shuffle(rng);

        values.into_iter().map(T::from).collect()
    }
}

/// Random runs with a geometrically distributed length of `√size` on average, half of them
/// descending
#[derive(Debug)]
pub struct RandomRunsSqrtData;

impl<T: From<u32> + Ord + fmt::Debug> Data<T> for RandomRunsSqrtData {
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T> {
        random_runs(size, size.isqrt().max(1), rng)
    }
}

/// Like [`RandomRunsSqrtData`] with an average run length of `LENGTH`
#[derive(Debug)]
pub struct RandomRunsConstData<const LENGTH: usize>;

impl<const LENGTH: usize, T: From<u32> + Ord + fmt::Debug> Data<T>
    for RandomRunsConstData<LENGTH>
{
    fn initialize(size: usize, rng: &mut StdRng) -> Vec<T> {
        random_runs(size, LENGTH.max(1), rng)
    }
}

fn random_runs<T: From<u32>>(size: usize, mean_length: usize, rng: &mut StdRng) -> Vec<T> {
    // Lengths are 1 + Geometric(p), which has mean 1 / p
    let lengths = rand_distr::Geometric::new(1.0 / mean_length as f64).unwrap();

    let mut values: Vec<u32> = (0..size).map(|_| rng.random()).collect();
    let mut start = 0;

    while start < size {
        let length = usize::try_from(lengths.sample(rng)).unwrap_or(usize::MAX);
        let end = start.saturating_add(length).saturating_add(1).min(size);

        if rng.random() {
            values[start..end].sort_unstable();
        } else {
            values[start..end].sort_unstable_by(|a, b| b.cmp(a));
        }

        start = end;
    }

    values.into_iter().map(T::from).collect()
}

/// A global counter for reporting, cheap enough to update from the merge loops
#[derive(Debug)]
pub struct GlobalCounter(atomic::AtomicU64);

impl GlobalCounter {
    pub const fn new() -> Self {
        Self(atomic::AtomicU64::new(0))
    }

    pub fn increase(&self, amount: u64) {
        self.0.fetch_add(amount, atomic::Ordering::Relaxed);
    }

    /// Returns the current count and resets it to zero
    pub fn take(&self) -> u64 {
        self.0.swap(0, atomic::Ordering::Relaxed)
    }
}

impl Default for GlobalCounter {
    fn default() -> Self {
        Self::new()
    }
}
