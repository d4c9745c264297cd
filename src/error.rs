//! Error types returned by the fallible sorting entry points

/// One of the two halves processed by [`crate::algorithms::quicksort::ParallelQuickSort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Left,
    Right,
}

impl std::fmt::Display for Half {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Half::Left => "left",
            Half::Right => "right",
        })
    }
}

/// Errors of the sorting entry points
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The requested range does not describe a sub-slice of the input.
    /// Raised before the slice is touched.
    #[error("invalid range {start}..{end} for slice of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
    /// A forked half of the parallel quicksort panicked, the merge was skipped and the
    /// slice is left in an unspecified order
    #[error("sorting the {half} half panicked: {message}")]
    TaskPanicked { half: Half, message: String },
}

/// Errors of the [`crate::union_find::UnionFind`] implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnionFindError {
    #[error("index {index} is not between 0 and {}", .len.saturating_sub(1))]
    OutOfBounds { index: usize, len: usize },
}

/// Check that `range` is a valid sub-range of a slice with length `len`
pub fn validate_range(range: &std::ops::Range<usize>, len: usize) -> Result<(), SortError> {
    if range.start > range.end || range.end > len {
        Err(SortError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ranges() {
        assert_eq!(validate_range(&(0..0), 0), Ok(()));
        assert_eq!(validate_range(&(0..10), 10), Ok(()));
        assert_eq!(validate_range(&(3..3), 10), Ok(()));
        assert_eq!(validate_range(&(10..10), 10), Ok(()));
    }

    #[test]
    fn invalid_ranges() {
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 5..2;
        assert_eq!(
            validate_range(&reversed, 10),
            Err(SortError::InvalidRange {
                start: 5,
                end: 2,
                len: 10
            })
        );
        assert!(validate_range(&(0..11), 10).is_err());
        assert!(validate_range(&(11..11), 10).is_err());
    }

    #[test]
    fn messages() {
        let error = SortError::TaskPanicked {
            half: Half::Right,
            message: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "sorting the right half panicked: boom");

        let error = UnionFindError::OutOfBounds { index: 15, len: 10 };
        assert_eq!(error.to_string(), "index 15 is not between 0 and 9");
    }
}
