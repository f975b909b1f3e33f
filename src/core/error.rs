//! Error types.
//!
//! Only caller misuse is an error here. Running out of history is not:
//! builders return empty sequences and predictions return
//! [`Prediction::Unknown`](crate::roads::Prediction::Unknown).

use thiserror::Error;

/// Errors raised when constructing grids or recording rounds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoadError {
    /// A grid was requested with a zero row or column count.
    #[error("grid dimensions must be positive (rows={rows}, columns={columns})")]
    InvalidDimensions { rows: usize, columns: usize },

    /// A round was appended whose order does not follow the last recorded one.
    #[error("round order {order} must be greater than the last recorded order {previous}")]
    OrderNotIncreasing { previous: u64, order: u64 },

    /// The last recorded order is `u64::MAX`; no later order exists.
    #[error("no round order follows {last}")]
    OrderExhausted { last: u64 },

    /// Stored grid cells do not match the grid's dimensions.
    #[error("grid of {rows}x{columns} needs {expected} cells, found {found}")]
    CellCountMismatch {
        rows: usize,
        columns: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = RoadError::InvalidDimensions { rows: 0, columns: 3 };
        assert_eq!(
            err.to_string(),
            "grid dimensions must be positive (rows=0, columns=3)"
        );

        let err = RoadError::OrderNotIncreasing { previous: 7, order: 7 };
        assert_eq!(
            err.to_string(),
            "round order 7 must be greater than the last recorded order 7"
        );

        let err = RoadError::OrderExhausted { last: u64::MAX };
        assert_eq!(err.to_string(), format!("no round order follows {}", u64::MAX));

        let err = RoadError::CellCountMismatch {
            rows: 6,
            columns: 3,
            expected: 18,
            found: 1,
        };
        assert_eq!(err.to_string(), "grid of 6x3 needs 18 cells, found 1");
    }
}
