//! The insertion sort implementations

use super::primitives::{is_less, shift_right, swap};

/// The default `SHIFT` parameter for `InsertionSort`
pub const DEFAULT_SHIFT: bool = false;

/// The insertion [`super::Sort`]
///
/// With `SHIFT = false` each new element is swapped leftwards until it is in place, with
/// `SHIFT = true` the larger prefix elements are shifted right by one and the new element
/// is written once into the freed slot. Both produce the same order and are stable.
pub struct InsertionSort<const SHIFT: bool = DEFAULT_SHIFT>;

impl<const SHIFT: bool> super::Sort for InsertionSort<SHIFT> {
    const IS_STABLE: bool = true;

    fn display() -> String {
        if SHIFT {
            "insertion (shift)".to_string()
        } else {
            "insertion (swap)".to_string()
        }
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        if SHIFT {
            insertion_sort_shift(slice);
        } else {
            insertion_sort_swap(slice);
        }
    }
}

/// Sort `slice` by swapping every element leftwards while it is less than its predecessor
pub fn insertion_sort_swap<T: Ord>(slice: &mut [T]) {
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && is_less(&slice[j], &slice[j - 1]) {
            swap(slice, j, j - 1);
            j -= 1;
        }
    }
}

/// Sort `slice` by finding the slot of each element first and shifting the larger
/// elements in between one position to the right
pub fn insertion_sort_shift<T: Ord>(slice: &mut [T]) {
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && is_less(&slice[i], &slice[j - 1]) {
            j -= 1;
        }

        if j < i {
            shift_right(slice, j, i);
        }
    }
}
