//! Reference implementations of classic comparison sorts and disjoint-set structures.
//!
//! Every sort implements [`algorithms::Sort`] (except the fallible
//! [`algorithms::quicksort::ParallelQuickSort`]) and sorts ascending according to [`Ord`].
//!
//! ```
//! use classic_sorts::algorithms::{Sort, shellsort::ShellSort};
//!
//! let mut values = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
//! ShellSort::sort(&mut values);
//! assert_eq!(values, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```

pub mod algorithms;
pub mod error;
pub mod union_find;

#[cfg(test)]
mod test;

pub use algorithms::Sort;
pub use error::{Half, SortError, UnionFindError};
