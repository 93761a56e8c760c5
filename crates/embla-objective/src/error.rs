//! Error types for the objective crate.

use thiserror::Error;

/// Errors produced by objective and transformation evaluation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ObjectiveError {
    /// A transformation referenced an argument index outside the supplied
    /// value vector.
    #[error("transformation references argument {index} but only {len} values were supplied")]
    ArgumentOutOfRange {
        /// The referenced argument index.
        index: usize,
        /// Number of supplied values.
        len: usize,
    },

    /// The number of supplied values does not match the objective's
    /// expectation-value list.
    #[error("objective holds {expected} expectation values, got {got} values")]
    ValueCountMismatch {
        /// Number of expectation values in the objective.
        expected: usize,
        /// Number of supplied values.
        got: usize,
    },
}

/// Result type for objective operations.
pub type ObjectiveResult<T> = Result<T, ObjectiveError>;
