//! Procedures for merging two sorted runs, together with the scratch buffer they use.
//!
//! All merges are stable: on ties the element of the left run is taken first.

use std::mem::MaybeUninit;

use super::primitives::{is_less, record_merge};

/// Copied from [`std::slice::sort::stable::BufGuard<T>`]
pub trait BufGuard<T> {
    /// Creates new buffer that holds at least `capacity` memory.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns mutable access to uninitialized memory owned by the buffer.
    fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>];
}

impl<T> BufGuard<T> for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        #[cfg(feature = "counters")]
        super::ALLOC_COUNTER.increase(capacity as u64);

        Vec::with_capacity(capacity)
    }

    fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self.spare_capacity_mut()
    }
}

/// Merge the two sorted sequences `left` and `right` into a new sorted sequence
/// containing the elements of both.
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_less(r, l),
            _ => break,
        };

        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    // At most one of these is non-empty
    merged.extend(left);
    merged.extend(right);

    record_merge(merged.len());
    merged
}

/// Merge the sorted runs `slice[..mid]` and `slice[mid..]` by first copying both runs into
/// `buffer` and then merging the copies back into `slice`.
///
/// If a comparison panics, every element is still present in `slice` exactly once.
///
/// # Panics
///
/// Panics if `mid > slice.len()` or `buffer` is shorter than `slice`
pub fn merge_copying<T: Ord>(slice: &mut [T], mid: usize, buffer: &mut [MaybeUninit<T>]) {
    assert!(mid <= slice.len(), "Split point needs to be in bounds");
    assert!(
        buffer.len() >= slice.len(),
        "Buffer needs to have at least the size of slice"
    );

    // Zero sized elements are indistinguishable and pointer arithmetic on them does not advance
    if mid == 0 || mid == slice.len() || size_of::<T>() == 0 {
        return;
    }

    let len = slice.len();
    let buffer = &mut buffer[..len];

    // SAFETY: buffer is large enough for all of slice and does not overlap it. After the
    // copy, buffer owns the elements and slice only holds stale duplicates, which get
    // overwritten exactly once each through `hole.output`. MaybeUninit<T> has the same
    // layout as T, so the buffer pointer may be used as a pointer to T.
    unsafe {
        std::ptr::copy_nonoverlapping(slice.as_ptr(), buffer.as_mut_ptr() as *mut T, len);

        let copy = buffer.as_mut_ptr() as *const T;
        let mut hole = MergeHole {
            left: copy..copy.add(mid),
            right: copy.add(mid)..copy.add(len),
            output: slice.as_mut_ptr(),
        };

        while !hole.left.is_empty() && !hole.right.is_empty() {
            let run = if is_less(&*hole.right.start, &*hole.left.start) {
                &mut hole.right
            } else {
                &mut hole.left
            };

            std::ptr::copy_nonoverlapping(run.start, hole.output, 1);
            run.start = run.start.add(1);
            hole.output = hole.output.add(1);
        }

        // Dropping the hole copies the remaining run into the rest of slice
    }

    record_merge(len);
}

/// Merge the sorted runs `slice[..mid]` and `slice[mid..]` into `buffer[..slice.len()]`,
/// reading both runs directly from `slice`, and copy the result back.
///
/// `slice` is only written once the merge has completed, so a panicking comparison
/// leaves it untouched.
///
/// # Panics
///
/// Panics if `mid > slice.len()` or `buffer` is shorter than `slice`
pub fn merge_through_buffer<T: Ord>(slice: &mut [T], mid: usize, buffer: &mut [MaybeUninit<T>]) {
    assert!(mid <= slice.len(), "Split point needs to be in bounds");
    assert!(
        buffer.len() >= slice.len(),
        "Buffer needs to have at least the size of slice"
    );

    if mid == 0 || mid == slice.len() || size_of::<T>() == 0 {
        return;
    }

    let len = slice.len();
    let temp = &mut buffer[..len];

    let mut left_index = 0;
    let mut right_index = mid;
    let mut temp_index = 0;

    // SAFETY: every element of slice is copied into temp exactly once, the copies in temp
    // are never dropped (MaybeUninit). Only after temp holds a full permutation of slice is
    // it copied back over slice, so slice never holds duplicates.
    unsafe {
        while left_index < mid && right_index < len {
            let source = if is_less(&slice[right_index], &slice[left_index]) {
                right_index += 1;
                right_index - 1
            } else {
                left_index += 1;
                left_index - 1
            };

            std::ptr::copy_nonoverlapping(&slice[source], temp[temp_index].as_mut_ptr(), 1);
            temp_index += 1;
        }

        let (rest, rest_len) = if left_index < mid {
            (left_index, mid - left_index)
        } else {
            (right_index, len - right_index)
        };
        std::ptr::copy_nonoverlapping(
            slice.as_ptr().add(rest),
            temp.as_mut_ptr().add(temp_index) as *mut T,
            rest_len,
        );
        debug_assert_eq!(temp_index + rest_len, len);

        std::ptr::copy_nonoverlapping(temp.as_ptr() as *const T, slice.as_mut_ptr(), len);
    }

    record_merge(len);
}

/// Tracks the unmerged parts of both runs and the next output position during
/// [`merge_copying`]. When dropped, copies whatever is left of both runs to the output.
struct MergeHole<T> {
    left: std::ops::Range<*const T>,
    right: std::ops::Range<*const T>,
    output: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: the remaining elements of both runs exactly fill the remaining output
        // positions, which hold stale duplicates only.
        unsafe {
            let left_len = self.left.end.offset_from(self.left.start) as usize;
            std::ptr::copy_nonoverlapping(self.left.start, self.output, left_len);
            let output = self.output.add(left_len);

            let right_len = self.right.end.offset_from(self.right.start) as usize;
            std::ptr::copy_nonoverlapping(self.right.start, output, right_len);
        }
    }
}
