//! Error types for the chimes-factoradic crate.

/// Error type for all fallible operations in the chimes-factoradic crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoradicError {
    /// Returned when the bell count is zero or too large.
    #[error("invalid bell count: {bells} (must be 1..={max})")]
    InvalidBellCount {
        /// The bell count that was provided.
        bells: usize,
        /// The largest supported bell count.
        max: usize,
    },

    /// Returned when a digit sequence does not have one digit per bell.
    #[error("digit count mismatch: expected {expected} digits, got {got}")]
    DigitCountMismatch {
        /// The bell count.
        expected: usize,
        /// Length of the digit sequence that was provided.
        got: usize,
    },

    /// Returned when the digit at 1-indexed `position` is not below `position`.
    #[error("digit {digit} at position {position} is out of range (must be < {position})")]
    DigitOutOfRange {
        /// 1-indexed position of the offending digit.
        position: usize,
        /// The offending digit.
        digit: u8,
    },
}
