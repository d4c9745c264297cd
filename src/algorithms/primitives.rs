//! The primitive operations every algorithm is written in terms of.
//!
//! Funnelling all comparisons and exchanges through these functions makes it possible to
//! count them (see the `counters` feature) without touching the algorithm bodies.

/// Returns `true` if `a` is strictly less than `b`
#[inline]
pub fn is_less<T: Ord>(a: &T, b: &T) -> bool {
    #[cfg(feature = "counters")]
    super::COMPARISON_COUNTER.increase(1);

    a < b
}

/// Exchange the elements at `i` and `j`, doing nothing if `i == j`.
///
/// # Panics
///
/// Panics if `i` or `j` are out of bounds
#[inline]
pub fn swap<T>(slice: &mut [T], i: usize, j: usize) {
    if i == j {
        return;
    }

    #[cfg(feature = "counters")]
    super::SWAP_COUNTER.increase(1);

    slice.swap(i, j);
}

/// Move `slice[to]` to position `from` and every element of `slice[from..to]` one position
/// to the right. Counts `to - from + 1` moved elements.
///
/// # Panics
///
/// Panics if `from > to` or `to` is out of bounds
#[inline]
pub fn shift_right<T>(slice: &mut [T], from: usize, to: usize) {
    slice[from..=to].rotate_right(1);

    #[cfg(feature = "counters")]
    super::MOVE_COUNTER.increase((to - from + 1) as u64);
}

/// Record that a merge procedure wrote `count` elements
#[inline]
pub(crate) fn record_merge(count: usize) {
    #[cfg(feature = "counters")]
    super::MERGE_COUNTER.increase(count as u64);
    #[cfg(not(feature = "counters"))]
    let _ = count;
}
