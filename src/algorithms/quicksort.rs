//! The quicksort implementations

use super::merging::BufGuard;
use super::primitives::{is_less, swap};
use crate::error::{Half, SortError};

/// The quicksort [`super::Sort`], always using the first element as pivot.
///
/// There is no pivot sampling, so sorted and reversed inputs take quadratic time.
pub struct QuickSort;

impl super::Sort for QuickSort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "quicksort".to_string()
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        log::trace!("Quicksort of {} elements", slice.len());
        quicksort(slice);
    }
}

/// Quicksort the given slice
///
/// Recurses into the smaller partition and loops on the larger one, which keeps the
/// recursion depth logarithmic even when partitioning is maximally unbalanced.
pub fn quicksort<T: Ord>(mut slice: &mut [T]) {
    while slice.len() > 1 {
        let (left_end, right_start) = partition(slice);

        let (left, rest) = std::mem::take(&mut slice).split_at_mut(left_end);
        let right = &mut rest[right_start - left_end..];

        if left.len() < right.len() {
            quicksort(left);
            slice = right;
        } else {
            quicksort(right);
            slice = left;
        }
    }
}

/// Partition `slice` around its first element, using two pointers moving inwards from both
/// ends and swapping out of order pairs until they cross.
///
/// Returns `(left_end, right_start)`, such that no element of `slice[..left_end]` is greater
/// and no element of `slice[right_start..]` is less than the pivot. The pivot does not end
/// up at a fixed index. `slice[left_end..right_start]` holds at most one element, which is
/// equal to the pivot. Both `slice[..left_end]` and `slice[right_start..]` are shorter
/// than `slice`.
///
/// # Panics
///
/// Panics if `slice.len() < 2`
pub fn partition<T: Ord>(slice: &mut [T]) -> (usize, usize) {
    assert!(slice.len() >= 2, "Partitioning needs at least two elements");

    // The pivot moves when it gets swapped, so track its position
    let mut pivot = 0;
    let mut left = 0;
    let mut right = slice.len() - 1;

    loop {
        // Both scans are bounded, the pivot (or an element swapped past the other pointer)
        // stops them
        while is_less(&slice[left], &slice[pivot]) {
            left += 1;
        }
        while is_less(&slice[pivot], &slice[right]) {
            right -= 1;
        }

        if left > right {
            break;
        }

        swap(slice, left, right);
        if pivot == left {
            pivot = right;
        } else if pivot == right {
            pivot = left;
        }

        left += 1;
        if right == 0 {
            // Right pointer would move before the start
            return (0, left);
        }
        right -= 1;

        if left > right {
            break;
        }
    }

    (right + 1, left)
}

/// Quicksort with a fixed fan-out of two: both halves of the slice are quicksorted in
/// parallel, then merged.
///
/// The split is at the middle of the slice, not at a partition boundary, which is why the
/// halves need a final merge.
pub struct ParallelQuickSort;

impl ParallelQuickSort {
    /// Whether the sort is stable
    pub const IS_STABLE: bool = false;

    /// String representation of this sort
    pub fn display() -> String {
        "parallel quicksort (2 tasks)".to_string()
    }

    /// Sort `slice` in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::TaskPanicked`] if sorting either half panicked. The halves are
    /// not merged in that case and the order of `slice` is unspecified.
    pub fn sort<T: Ord + Send>(slice: &mut [T]) -> Result<(), SortError> {
        if slice.len() < 2 {
            return Ok(());
        }

        let middle = slice.len() / 2;
        log::debug!(
            "Forking quicksort of {} elements into {middle} + {}",
            slice.len(),
            slice.len() - middle
        );

        let (left, right) = slice.split_at_mut(middle);
        let (left_result, right_result) = rayon::join(
            || sort_half(Half::Left, left),
            || sort_half(Half::Right, right),
        );

        // Both halves are done at this point, never merge a failed half
        left_result?;
        right_result?;

        let mut buffer = <Vec<T> as BufGuard<T>>::with_capacity(slice.len());
        super::merging::merge_copying(slice, middle, buffer.as_uninit_slice_mut());

        Ok(())
    }

    /// Sort only `slice[range]`.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidRange`] without modifying `slice` if `range` is not a
    /// sub-range of `0..slice.len()`, otherwise see [`Self::sort`].
    pub fn sort_range<T: Ord + Send>(
        slice: &mut [T],
        range: std::ops::Range<usize>,
    ) -> Result<(), SortError> {
        crate::error::validate_range(&range, slice.len())?;
        Self::sort(&mut slice[range])
    }
}

/// Quicksort one half, turning a panic into an error
fn sort_half<T: Ord>(half: Half, slice: &mut [T]) -> Result<(), SortError> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| quicksort(slice))).map_err(
        |payload| {
            let message = if let Some(message) = payload.downcast_ref::<&str>() {
                message.to_string()
            } else if let Some(message) = payload.downcast_ref::<String>() {
                message.clone()
            } else {
                "unknown panic payload".to_string()
            };
            log::debug!("Sorting the {half} half panicked: {message}");

            SortError::TaskPanicked { half, message }
        },
    )
}
