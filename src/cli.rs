//! Command line input handling

use classic_sorts::SortError;
use classic_sorts::algorithms::{
    Sort, StdSort,
    insertionsort::InsertionSort,
    mergesort::{InPlaceMergeSort, OptimisedMergeSort, TopDownMergeSort},
    quicksort::{ParallelQuickSort, QuickSort},
    selectionsort::SelectionSort,
    shellsort::ShellSort,
};

/// Command line arguments
#[derive(clap::Parser)]
#[command(author, version, about)]
pub struct Args {
    /// The sorting algorithms to run, each one is measured on identical data
    #[arg(required = true)]
    pub algorithms: Vec<Algorithm>,
    /// The data type to use for sorting
    #[arg(short, long, default_value_t = DataType::PermutationU64)]
    pub data: DataType,
    /// The number of runs to do
    #[arg(short, long, default_value_t = 100)]
    pub runs: usize,
    /// The size of the slices to sort
    #[arg(short, long, default_value_t = 10_000)]
    pub size: usize,
    /// Seed for the rng
    #[arg(long)]
    pub seed: Option<u64>,
    /// The csv file to write the samples to
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,
    /// Log level, can be overridden with `RUST_LOG`
    #[arg(long, default_value_t = log::LevelFilter::Warn)]
    pub log_level: log::LevelFilter,
}

/// The available sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// The stable sort in [`std`]
    Std,
    /// The unstable sort in [`std`]
    StdUnstable,
    /// Insertion sort, swapping elements into place
    Insertion,
    /// Insertion sort, shifting elements to make room
    InsertionShift,
    /// Selection sort
    Selection,
    /// Shell sort
    Shell,
    /// Top-down mergesort with one shared buffer
    Mergesort,
    /// Top-down mergesort allocating a buffer per merge
    MergesortRealloc,
    /// Mergesort merging through a buffer of the merged range
    MergesortInPlace,
    /// Mergesort with selection sorted small halves, skipping merges of ordered halves
    MergesortOptimised,
    /// Quicksort with the first element as pivot
    Quicksort,
    /// Quicksort of both halves in parallel followed by a merge
    ParallelQuicksort,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match clap::ValueEnum::to_possible_value(self) {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

/// A sort function as run by the benchmark
pub type Sorter<T> = fn(&mut [T]) -> Result<(), SortError>;

/// Run an infallible [`Sort`] as a [`Sorter`]
fn infallible<T: Ord, S: Sort>(slice: &mut [T]) -> Result<(), SortError> {
    S::sort(slice);
    Ok(())
}

/// A hacky macro to dynamically "match" on the sort type (:
macro_rules! with_sort {
    ($algorithm:expr; $s:ident => $code:expr, parallel => $parallel:expr $(,)?) => {
        match $algorithm {
            Algorithm::Std => {
                type $s = StdSort<true>;
                $code
            }
            Algorithm::StdUnstable => {
                type $s = StdSort<false>;
                $code
            }
            Algorithm::Insertion => {
                type $s = InsertionSort<false>;
                $code
            }
            Algorithm::InsertionShift => {
                type $s = InsertionSort<true>;
                $code
            }
            Algorithm::Selection => {
                type $s = SelectionSort;
                $code
            }
            Algorithm::Shell => {
                type $s = ShellSort;
                $code
            }
            Algorithm::Mergesort => {
                type $s = TopDownMergeSort<true>;
                $code
            }
            Algorithm::MergesortRealloc => {
                type $s = TopDownMergeSort<false>;
                $code
            }
            Algorithm::MergesortInPlace => {
                type $s = InPlaceMergeSort;
                $code
            }
            Algorithm::MergesortOptimised => {
                type $s = OptimisedMergeSort;
                $code
            }
            Algorithm::Quicksort => {
                type $s = QuickSort;
                $code
            }
            Algorithm::ParallelQuicksort => $parallel,
        }
    };
}

impl Algorithm {
    /// Returns if this is a stable sort
    pub fn is_stable(self) -> bool {
        with_sort! { self; S => S::IS_STABLE, parallel => ParallelQuickSort::IS_STABLE }
    }

    /// Returns a description of the sort
    pub fn description(self) -> String {
        with_sort! { self; S => S::display(), parallel => ParallelQuickSort::display() }
    }

    /// Returns if the sort takes quadratic time on random input
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            Algorithm::Insertion | Algorithm::InsertionShift | Algorithm::Selection
        )
    }

    /// Returns the sorting function
    pub fn sorter<T: Ord + Send>(self) -> Sorter<T> {
        with_sort! { self; S => infallible::<T, S>, parallel => ParallelQuickSort::sort::<T> }
    }
}

/// Available data types for sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataType {
    /// Uniformly distributed u64 values
    UniformU64,
    /// A random permutation of `0..size`
    PermutationU64,
    /// Uniformly distributed i32 values in `0..500_000`
    BoundedI32,
    /// Zipf distributed u64 values with many duplicates
    ZipfU64,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match clap::ValueEnum::to_possible_value(self) {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn parse() {
        let args = Args::try_parse_from([
            "classic-sorts",
            "quicksort",
            "parallel-quicksort",
            "--data",
            "zipf-u64",
            "--runs",
            "5",
            "--seed",
            "7",
        ])
        .unwrap();

        assert_eq!(
            args.algorithms,
            [Algorithm::Quicksort, Algorithm::ParallelQuicksort]
        );
        assert_eq!(args.data, DataType::ZipfU64);
        assert_eq!(args.runs, 5);
        assert_eq!(args.size, 10_000);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.log_level, log::LevelFilter::Warn);

        assert!(Args::try_parse_from(["classic-sorts"]).is_err());
    }

    #[test]
    fn every_sorter_sorts() {
        for algorithm in <Algorithm as clap::ValueEnum>::value_variants() {
            let mut values = [5, 3, 8, 1, 9, 2];
            algorithm.sorter::<i32>()(&mut values).unwrap();
            assert_eq!(values, [1, 2, 3, 5, 8, 9], "{algorithm} did not sort");
            assert!(!algorithm.description().is_empty());
        }
    }

    #[test]
    fn stability() {
        assert!(Algorithm::Insertion.is_stable());
        assert!(Algorithm::MergesortInPlace.is_stable());
        assert!(!Algorithm::Shell.is_stable());
        assert!(!Algorithm::MergesortOptimised.is_stable());
        assert!(!Algorithm::MergesortOptimised.is_quadratic());
        assert_eq!(Algorithm::MergesortOptimised.to_string(), "mergesort-optimised");
        assert!(!Algorithm::ParallelQuicksort.is_stable());
        assert_eq!(Algorithm::MergesortRealloc.to_string(), "mergesort-realloc");
    }
}
