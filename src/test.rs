//! Contains various structs intended for testing purposes

use rand::{Rng as _, SeedableRng as _, seq::SliceRandom as _};

/// The seed shared by all tests
pub const TEST_SEED: u64 = 0xa8bf17eb656f828d;
/// The rng used by each test
pub type Rng = rand::rngs::SmallRng;

/// Generate the `Rng` for a test
pub fn test_rng() -> Rng {
    Rng::seed_from_u64(TEST_SEED)
}

/// Generate `size` random values where each value occurs about four times
pub fn duplicates(size: usize, rng: &mut Rng) -> Vec<usize> {
    let distinct = std::cmp::max(size / 4, 1);
    (0..size).map(|_| rng.random_range(0..distinct)).collect()
}

/// A struct that panics when it is compared with an element holding `POISON`.
#[derive(Debug, Clone, Copy)]
pub struct PoisonOrdered<const POISON: usize>(pub usize);

impl<const POISON: usize> PartialEq for PoisonOrdered<POISON> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const POISON: usize> Eq for PoisonOrdered<POISON> {}

impl<const POISON: usize> PartialOrd for PoisonOrdered<POISON> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<const POISON: usize> Ord for PoisonOrdered<POISON> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.0 == POISON || other.0 == POISON {
            panic!("PoisonOrdered compared against the poisoned value {POISON}");
        }
        self.0.cmp(&other.0)
    }
}

/// A Wrapper struct that tracks an original index with an ordered element,
/// used to test sort results for stability
#[derive(Debug, Clone)]
pub struct IndexedOrdered<T: Ord>(usize, T);

impl<T: Ord> IndexedOrdered<T> {
    /// Create a new iterator of `IndexedOrdered`, tracking the position of each element in `iter`
    pub fn map_iter(iter: impl Iterator<Item = T>) -> impl Iterator<Item = Self> {
        Self::map_iter_from(iter, 0)
    }

    /// Like [`Self::map_iter`] but with positions starting at `offset`
    pub fn map_iter_from(
        iter: impl Iterator<Item = T>,
        offset: usize,
    ) -> impl Iterator<Item = Self> {
        iter.enumerate()
            .map(move |(index, element)| Self(index + offset, element))
    }

    /// The original position of the element
    pub fn index(&self) -> usize {
        self.0
    }

    /// Check `slice` is sorted and check for stability, e.g. equal elements keeping initial ordering.
    pub fn is_stable_sorted(slice: &[Self]) -> bool {
        if slice.len() < 2 {
            return true;
        }

        let mut previous = &slice[0];
        for current in slice[1..].iter() {
            match current.cmp(previous) {
                // Slice is not sorted
                std::cmp::Ordering::Less => return false,
                // Elements are not stable
                std::cmp::Ordering::Equal if current.0 < previous.0 => return false,
                _ => {}
            }

            previous = current;
        }

        true
    }
}

impl<T: Ord> PartialEq for IndexedOrdered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<T: Ord> Eq for IndexedOrdered<T> {}

impl<T: Ord> PartialOrd for IndexedOrdered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for IndexedOrdered<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.1.cmp(&other.1)
    }
}

/// Test the sort on an empty slice
pub fn test_empty<S: crate::algorithms::Sort>() {
    S::sort::<usize>(&mut []);
    assert_eq!(S::sort_range::<usize>(&mut [], 0..0), Ok(()));
}

/// Test the sort on a single element slice
pub fn test_single<S: crate::algorithms::Sort>() {
    let mut values = [42];
    S::sort(&mut values);
    assert_eq!(values, [42]);
}

/// Test that sorting an already sorted slice does not change it
pub fn test_idempotent<const TEST_SIZE: usize, S: crate::algorithms::Sort>() {
    let sorted: Box<[usize]> = (0..TEST_SIZE).collect();
    let mut values = sorted.clone();
    S::sort(&mut values);
    assert_eq!(values, sorted);

    let mut rng = test_rng();
    let mut sorted = duplicates(TEST_SIZE, &mut rng);
    sorted.sort();
    let mut values = sorted.clone();
    S::sort(&mut values);
    assert_eq!(values, sorted);
}

/// Test the sort on some random ordered slices and check they are sorted afterwords and
/// still contain the same elements
pub fn test_random_sorted<const RUNS: usize, const TEST_SIZE: usize, S: crate::algorithms::Sort>() {
    let mut rng = test_rng();

    let mut values: Box<[usize]> = (0..TEST_SIZE).collect();

    for run in 0..RUNS {
        values.shuffle(&mut rng);
        S::sort(&mut values);
        assert!(
            values.iter().copied().eq(0..TEST_SIZE),
            "Run {run} was not sorted"
        );
    }

    for run in 0..RUNS {
        let mut values = duplicates(TEST_SIZE, &mut rng);
        let mut expected = values.clone();
        expected.sort();

        S::sort(&mut values);
        assert_eq!(values, expected, "Run {run} was not sorted");
    }
}

/// Like [`test_random_sorted`] but additionally checks that the sort was stable
pub fn test_random_stable_sorted<
    const RUNS: usize,
    const TEST_SIZE: usize,
    S: crate::algorithms::Sort,
>() {
    assert!(S::IS_STABLE);

    let mut rng = test_rng();
    let mut values: Box<[usize]> = std::iter::repeat_n(0..TEST_SIZE / 4, 4).flatten().collect();
    let mut ordered_values: Box<[IndexedOrdered<usize>]>;

    for run in 0..RUNS {
        values.shuffle(&mut rng);
        ordered_values = IndexedOrdered::map_iter(values.iter().copied()).collect();
        S::sort(&mut ordered_values);
        assert!(
            IndexedOrdered::is_stable_sorted(&ordered_values),
            "Run {run} was not stable sorted"
        );
    }
}
