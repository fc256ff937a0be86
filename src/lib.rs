//! seqcheck - verification suite for standard growable sequence containers
//!
//! The suite takes the standard library's growable containers (`Vec<T>` and
//! `VecDeque<T>`) as its system under test and checks their documented
//! contracts: emptiness, size, capacity, resizing, clearing, erasing,
//! reservation, bounds-checked access and insertion.
//!
//! # Quick Start
//!
//! ```ignore
//! use seqcheck::{Backend, Runner, SuiteConfig};
//!
//! let config = SuiteConfig { backend: Backend::VecDeque, ..SuiteConfig::default() };
//! let summary = Runner::new(config).run_all();
//! assert!(summary.success());
//! ```
//!
//! # Architecture
//!
//! - `seqcheck-core`: the [`Sequence`] contract, error kinds, filler values
//!   and the per-case [`CollectionFixture`]
//! - `seqcheck-suite`: the scenario catalogue, runner and configuration

pub use seqcheck_core::*;
pub use seqcheck_suite::*;
