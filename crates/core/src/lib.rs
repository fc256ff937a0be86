//! Core types and traits for seqcheck
//!
//! This crate defines the foundational pieces every scenario is built from:
//! - Sequence: the growable-container contract under test, implemented for
//!   `Vec<T>` and `VecDeque<T>`
//! - SequenceError: the failure signals of that contract
//! - CheckError: scenario failures, plus the `check!` family of macros
//! - Limits: the maximum representable length per element type
//! - Filler: seeded filler values shared by every fixture in a process
//! - CollectionFixture: per-case setup and teardown of a fresh container

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod check;
pub mod error;
pub mod filler;
pub mod fixture;
pub mod limits;
pub mod sequence;

// Re-export commonly used types and traits
pub use check::expect_error;
pub use error::{CheckError, CheckResult, SequenceError};
pub use filler::{init_seed, process_seed, Filler};
pub use fixture::CollectionFixture;
pub use limits::{max_len_for, validate_len, FILLER_MAX};
pub use sequence::Sequence;
