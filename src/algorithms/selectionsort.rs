//! The selection sort implementation

use super::primitives::{is_less, swap};

/// The selection [`super::Sort`]
///
/// Always performs `n * (n - 1) / 2` comparisons but at most `n - 1` swaps.
pub struct SelectionSort;

impl super::Sort for SelectionSort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "selection".to_string()
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        for i in 0..slice.len() {
            let mut min = i;
            for j in i + 1..slice.len() {
                if is_less(&slice[j], &slice[min]) {
                    min = j;
                }
            }

            // No-op if the minimum is already in place
            swap(slice, i, min);
        }
    }
}
