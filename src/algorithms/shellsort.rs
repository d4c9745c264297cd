//! The shell sort implementation

use super::primitives::{is_less, swap};

/// The shell [`super::Sort`], using the `3h + 1` gap sequence
pub struct ShellSort;

impl super::Sort for ShellSort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "shell (3h + 1)".to_string()
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        let len = slice.len();

        for h in gaps(len) {
            // h-sort the slice, for h = 1 this is plain insertion sort
            for i in h..len {
                let mut j = i;
                while j >= h && is_less(&slice[j], &slice[j - h]) {
                    swap(slice, j, j - h);
                    j -= h;
                }
            }
        }
    }
}

/// The largest value of the sequence `h = 3h + 1` (starting at 1), that is
/// reached while `h < len / 3` holds
pub fn initial_gap(len: usize) -> usize {
    let mut h = 1;
    while h < len / 3 {
        h = 3 * h + 1;
    }
    h
}

/// The decreasing gap sequence used for a slice of length `len`, ending with 1
pub fn gaps(len: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(initial_gap(len)), |h| Some(h / 3).filter(|&h| h >= 1))
}
