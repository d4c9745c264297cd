//! The mergesort implementations

use super::merging::BufGuard;
use super::primitives::is_less;
use super::selectionsort::SelectionSort;

/// The default `SHARED_BUFFER` to use
pub const DEFAULT_SHARED_BUFFER: bool = true;
/// The default `SELECTION_THRESHOLD` to use
pub const DEFAULT_SELECTION_THRESHOLD: usize = 100;

/// The Top-Down Mergesort [`super::Sort`], merging with [`super::merging::merge_copying`]
///
/// With `SHARED_BUFFER` a single buffer of the size of the input is allocated up front and
/// reused by every merge, otherwise each merge allocates its own buffer. The latter
/// allocates `O(n log n)` memory in total over one sort and is slower.
pub struct TopDownMergeSort<const SHARED_BUFFER: bool = DEFAULT_SHARED_BUFFER>;

impl<const SHARED_BUFFER: bool> super::Sort for TopDownMergeSort<SHARED_BUFFER> {
    const IS_STABLE: bool = true;

    fn display() -> String {
        if SHARED_BUFFER {
            "top-down mergesort (shared buffer)".to_string()
        } else {
            "top-down mergesort (buffer per merge)".to_string()
        }
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        // Without a shared buffer every merge allocates its own
        let capacity = if SHARED_BUFFER { slice.len() } else { 0 };
        log::trace!("Top-down mergesort of {} elements", slice.len());
        let mut buffer = <Vec<T> as BufGuard<T>>::with_capacity(capacity);

        // Delegate to helper function
        Self::top_down_mergesort(slice, buffer.as_uninit_slice_mut());
    }
}

impl<const SHARED_BUFFER: bool> TopDownMergeSort<SHARED_BUFFER> {
    /// The actual top-down mergesort implementation, sorts `slice`
    fn top_down_mergesort<T: Ord>(slice: &mut [T], buffer: &mut [std::mem::MaybeUninit<T>]) {
        if slice.len() <= 1 {
            return;
        }

        let middle = slice.len() / 2;

        let (left, right) = slice.split_at_mut(middle);
        Self::top_down_mergesort(left, buffer);
        Self::top_down_mergesort(right, buffer);

        if SHARED_BUFFER {
            super::merging::merge_copying(slice, middle, buffer);
        } else {
            let mut own_buffer = <Vec<T> as BufGuard<T>>::with_capacity(slice.len());
            super::merging::merge_copying(slice, middle, own_buffer.as_uninit_slice_mut());
        }
    }
}

/// The mergesort [`super::Sort`] merging with [`super::merging::merge_through_buffer`]
///
/// Both runs are read directly from the slice and merged into a temporary area of exactly
/// the merged length, taken from one buffer allocated up front.
pub struct InPlaceMergeSort;

impl super::Sort for InPlaceMergeSort {
    const IS_STABLE: bool = true;

    fn display() -> String {
        "in-place mergesort".to_string()
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        log::trace!("In-place mergesort of {} elements", slice.len());
        let mut buffer = <Vec<T> as BufGuard<T>>::with_capacity(slice.len());
        Self::in_place_mergesort(slice, buffer.as_uninit_slice_mut());
    }
}

impl InPlaceMergeSort {
    fn in_place_mergesort<T: Ord>(slice: &mut [T], buffer: &mut [std::mem::MaybeUninit<T>]) {
        if slice.len() <= 1 {
            return;
        }

        let middle = slice.len() / 2;

        let (left, right) = slice.split_at_mut(middle);
        Self::in_place_mergesort(left, buffer);
        Self::in_place_mergesort(right, buffer);

        let len = slice.len();
        super::merging::merge_through_buffer(slice, middle, &mut buffer[..len]);
    }
}

/// The top-down mergesort [`super::Sort`] with two shortcuts: halves shorter than
/// `SELECTION_THRESHOLD` are sorted with [`SelectionSort`] instead of recursing, and two
/// halves that are already in order are not merged.
///
/// Not stable, since selection sort is not.
pub struct OptimisedMergeSort<const SELECTION_THRESHOLD: usize = DEFAULT_SELECTION_THRESHOLD>;

impl<const SELECTION_THRESHOLD: usize> super::Sort for OptimisedMergeSort<SELECTION_THRESHOLD> {
    const IS_STABLE: bool = false;

    fn display() -> String {
        format!("optimised mergesort (selection below {SELECTION_THRESHOLD})")
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        log::trace!("Optimised mergesort of {} elements", slice.len());
        let mut buffer = <Vec<T> as BufGuard<T>>::with_capacity(slice.len());
        let merges = Self::optimised_mergesort(slice, buffer.as_uninit_slice_mut());
        log::trace!("Optimised mergesort performed {merges} merges");
    }
}

impl<const SELECTION_THRESHOLD: usize> OptimisedMergeSort<SELECTION_THRESHOLD> {
    /// Sorts `slice` and returns the number of merges that were performed
    fn optimised_mergesort<T: Ord>(
        slice: &mut [T],
        buffer: &mut [std::mem::MaybeUninit<T>],
    ) -> usize {
        if slice.len() <= 1 {
            return 0;
        }

        let middle = slice.len() / 2;

        let (left, right) = slice.split_at_mut(middle);
        // The halves differ by at most one element
        let merges = if left.len() < SELECTION_THRESHOLD {
            <SelectionSort as super::Sort>::sort(left);
            <SelectionSort as super::Sort>::sort(right);
            0
        } else {
            Self::optimised_mergesort(left, buffer) + Self::optimised_mergesort(right, buffer)
        };

        // Both halves are already in order
        if is_less(&slice[middle - 1], &slice[middle]) {
            return merges;
        }

        super::merging::merge_copying(slice, middle, buffer);
        merges + 1
    }
}
