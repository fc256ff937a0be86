//! Error types for seqcheck
//!
//! Two layers of failure exist:
//! - [`SequenceError`]: a signal raised by a container operation itself
//!   (out-of-range access, allocation limits)
//! - [`CheckError`]: a scenario failing one of its checks
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for scenario bodies and fixture helpers
pub type CheckResult<T = ()> = std::result::Result<T, CheckError>;

/// Failure signals of the sequence contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Checked access at or past the current length
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Length at the time of the access
        len: usize,
    },

    /// Erase range outside `[0, len]` or inverted
    #[error("range {start}..{end} is invalid for length {len}")]
    InvalidRange {
        /// Resolved start of the range
        start: usize,
        /// Resolved (exclusive) end of the range
        end: usize,
        /// Length at the time of the erase
        len: usize,
    },

    /// Requested length exceeds the maximum representable length
    #[error("requested length {requested} exceeds maximum {max}")]
    LengthExceeded {
        /// Requested element count
        requested: usize,
        /// Maximum representable element count
        max: usize,
    },

    /// The allocator refused a request within the representable bound
    #[error("allocation for {requested} elements failed")]
    AllocFailed {
        /// Requested element count
        requested: usize,
    },
}

impl SequenceError {
    /// True for bounds-checked access failures
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, SequenceError::OutOfRange { .. })
    }

    /// True for both flavours of allocation-limit failure
    pub fn is_allocation_limit(&self) -> bool {
        matches!(
            self,
            SequenceError::LengthExceeded { .. } | SequenceError::AllocFailed { .. }
        )
    }
}

/// A scenario check that did not hold
#[derive(Debug, Error)]
pub enum CheckError {
    /// A `check!`/`check_eq!` condition was false
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// A container operation failed where success was expected
    #[error("unexpected container error: {0}")]
    Unexpected(#[from] SequenceError),

    /// An operation succeeded where a failure was expected
    #[error("expected {expected}, but the operation succeeded")]
    MissingError {
        /// Description of the expected failure
        expected: &'static str,
    },

    /// An operation failed, but with the wrong kind of error
    #[error("expected {expected}, got: {actual}")]
    WrongError {
        /// Description of the expected failure
        expected: &'static str,
        /// Error actually raised
        actual: SequenceError,
    },

    /// Fixture misuse (released handle, invalid helper argument)
    #[error("fixture error: {0}")]
    Fixture(String),
}
