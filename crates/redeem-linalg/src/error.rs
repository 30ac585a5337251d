use std::error::Error;
use std::fmt;

/// Shorthand for results returned by vector and matrix operations.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// The kind of contract violation behind a [`LinalgError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    SizeMismatch,
    IndexOutOfRange,
}

/// Errors raised when a caller violates a vector or matrix precondition.
///
/// Every operation validates before it writes, so an `Err` never leaves the
/// receiver partially updated.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Constructor input that cannot form a valid container (ragged rows, bad buffer length).
    InvalidArgument(String),
    /// Vector length does not match the length required by the operation.
    SizeMismatch { expected: usize, found: usize },
    /// Matrix dimensions (height, width) are incompatible.
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A position, row or column index outside `0..bound`.
    IndexOutOfRange { index: usize, bound: usize },
    /// A `width x height` region at `(x, y)` does not fit in the target matrix.
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        bounds: (usize, usize),
    },
}

impl LinalgError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinalgError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            LinalgError::SizeMismatch { .. } | LinalgError::ShapeMismatch { .. } => {
                ErrorKind::SizeMismatch
            }
            LinalgError::IndexOutOfRange { .. } | LinalgError::RegionOutOfBounds { .. } => {
                ErrorKind::IndexOutOfRange
            }
        }
    }

    pub(crate) fn check_index(index: usize, bound: usize) -> Result<()> {
        if index < bound {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfRange { index, bound })
        }
    }

    pub(crate) fn check_size(expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(LinalgError::SizeMismatch { expected, found })
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            LinalgError::SizeMismatch { expected, found } => write!(
                f,
                "Vector size {} does not match the required size {}",
                found, expected
            ),
            LinalgError::ShapeMismatch { expected, found } => write!(
                f,
                "Matrix shape ({}, {}) does not match the required shape ({}, {})",
                found.0, found.1, expected.0, expected.1
            ),
            LinalgError::IndexOutOfRange { index, bound } => {
                write!(f, "Index {} is out of bounds for length {}", index, bound)
            }
            LinalgError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                bounds,
            } => write!(
                f,
                "Region {}x{} at ({}, {}) exceeds matrix bounds {}x{}",
                width, height, x, y, bounds.1, bounds.0
            ),
        }
    }
}

impl Error for LinalgError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_index_is_strict() {
        assert!(LinalgError::check_index(2, 3).is_ok());
        assert_eq!(
            LinalgError::check_index(3, 3),
            Err(LinalgError::IndexOutOfRange { index: 3, bound: 3 })
        );
    }

    #[test]
    fn kinds_group_variants() {
        let shape = LinalgError::ShapeMismatch {
            expected: (2, 2),
            found: (2, 3),
        };
        assert_eq!(shape.kind(), ErrorKind::SizeMismatch);
        assert_eq!(
            LinalgError::check_size(3, 4).unwrap_err().kind(),
            ErrorKind::SizeMismatch
        );
        assert_eq!(
            LinalgError::InvalidArgument("ragged".into()).kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn region_message_reports_width_by_height() {
        let err = LinalgError::RegionOutOfBounds {
            x: 1,
            y: 2,
            width: 3,
            height: 4,
            bounds: (5, 6),
        };
        assert_eq!(
            err.to_string(),
            "Region 3x4 at (1, 2) exceeds matrix bounds 6x5"
        );
    }
}
