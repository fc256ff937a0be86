//! Scenario catalogue and runner for seqcheck
//!
//! - [`catalogue`]: every registered scenario, generic over the container
//! - [`Runner`]: runs scenarios against fresh fixtures and collects a
//!   [`RunSummary`]
//! - [`SuiteConfig`]: run configuration, optionally read from TOML

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalogue;
pub mod config;
pub mod runner;
pub mod scenario;

pub use catalogue::catalogue;
pub use config::{Backend, ConfigError, SuiteConfig, CONFIG_FILE_NAME};
pub use runner::{RunSummary, Runner, ScenarioOutcome, ScenarioStatus};
pub use scenario::{Scenario, ScenarioFn, ScenarioKind};
