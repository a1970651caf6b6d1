use std::fmt;

/// Position that a checked accessor was asked for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Position {
    /// Row-major offset into the element storage.
    Linear(usize),
    Grid { row: usize, col: usize },
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Position::Linear(i) => write!(f, "[{i}]"),
            Position::Grid { row, col } => write!(f, "({row}, {col})"),
        }
    }
}

/// Error returned by the checked constructors and accessors of [`Mat`](crate::Mat).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatError {
    /// An element sequence did not hold exactly `rows * cols` values.
    SizeMismatch { expected: usize, actual: usize },
    /// An index fell outside the matrix bounds.
    IndexOutOfRange { index: Position, rows: usize, cols: usize },
}

impl fmt::Display for MatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatError::SizeMismatch { expected, actual } => {
                write!(f, "matrix size mismatch: expected {expected} elements, got {actual}")
            }
            MatError::IndexOutOfRange { index, rows, cols } => {
                write!(f, "matrix index {index} out of range for {rows}x{cols} matrix")
            }
        }
    }
}

impl std::error::Error for MatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_message() {
        let e = MatError::SizeMismatch { expected: 6, actual: 5 };
        assert_eq!(e.to_string(), "matrix size mismatch: expected 6 elements, got 5");
    }

    #[test]
    fn linear_index_message() {
        let e = MatError::IndexOutOfRange { index: Position::Linear(6), rows: 2, cols: 3 };
        assert_eq!(e.to_string(), "matrix index [6] out of range for 2x3 matrix");
    }

    #[test]
    fn grid_index_message() {
        let e = MatError::IndexOutOfRange { index: Position::Grid { row: 2, col: 0 }, rows: 2, cols: 3 };
        assert_eq!(e.to_string(), "matrix index (2, 0) out of range for 2x3 matrix");
    }
}
