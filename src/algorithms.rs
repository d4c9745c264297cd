//! The sorting algorithms and the [`Sort`] trait they share

pub mod insertionsort;
pub mod mergesort;
pub mod merging;
pub mod primitives;
pub mod quicksort;
pub mod selectionsort;
pub mod shellsort;

use crate::error::SortError;

/// A sorting algorithm over any totally ordered element type
pub trait Sort {
    /// Whether the sort is stable
    const IS_STABLE: bool;

    /// String representation of this sort
    fn display() -> String;

    /// Sort `slice` in ascending order
    fn sort<T: Ord>(slice: &mut [T]);

    /// Sort only `slice[range]`, leaving the rest of `slice` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidRange`] without modifying `slice` if `range` is not a
    /// sub-range of `0..slice.len()`.
    fn sort_range<T: Ord>(slice: &mut [T], range: std::ops::Range<usize>) -> Result<(), SortError> {
        crate::error::validate_range(&range, slice.len())?;
        Self::sort(&mut slice[range]);
        Ok(())
    }
}

/// The default sort of the rust standard library, used as a baseline
pub struct StdSort<const STABLE: bool = true>;

impl<const STABLE: bool> Sort for StdSort<STABLE> {
    const IS_STABLE: bool = STABLE;

    fn display() -> String {
        if STABLE {
            "std (stable)".to_string()
        } else {
            "std (unstable)".to_string()
        }
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        if STABLE {
            slice.sort();
        } else {
            slice.sort_unstable();
        }
    }
}

/// A thread safe counter used for counting operations when the `counters` feature is enabled
#[derive(Debug)]
pub struct GlobalCounter(std::sync::atomic::AtomicU64);

impl GlobalCounter {
    pub const fn new() -> Self {
        Self(std::sync::atomic::AtomicU64::new(0))
    }

    /// Increase the counter by `amount`
    pub fn increase(&self, amount: u64) {
        self.0
            .fetch_add(amount, std::sync::atomic::Ordering::Relaxed);
    }

    /// Read the current value
    pub fn read(&self) -> u64 {
        self.0.load(std::sync::atomic::Ordering::Relaxed)
    }

    /// Reset the counter to zero and return the previous value
    pub fn take(&self) -> u64 {
        self.0.swap(0, std::sync::atomic::Ordering::Relaxed)
    }
}

impl Default for GlobalCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts the calls to [`primitives::is_less`]
pub static COMPARISON_COUNTER: GlobalCounter = GlobalCounter::new();
/// Counts the calls to [`primitives::swap`] that exchanged two distinct positions
pub static SWAP_COUNTER: GlobalCounter = GlobalCounter::new();
/// Counts the elements moved by [`primitives::shift_right`]
pub static MOVE_COUNTER: GlobalCounter = GlobalCounter::new();
/// Counts the elements written back by merge procedures
pub static MERGE_COUNTER: GlobalCounter = GlobalCounter::new();
/// Counts the elements of scratch buffer capacity allocated for merging
pub static ALLOC_COUNTER: GlobalCounter = GlobalCounter::new();
