//! Scenario runner
//!
//! Runs each selected scenario against its own fixture, one after another.
//! A failing check or a panic fails that scenario only; the fixture is torn
//! down before the next scenario starts.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use seqcheck_core::{init_seed, CollectionFixture, Sequence};
use tracing::{debug, info, warn};

use crate::catalogue::catalogue;
use crate::config::{Backend, SuiteConfig};
use crate::scenario::{Scenario, ScenarioKind};

/// Result of one scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Every check held
    Passed,
    /// A check failed or an unexpected error was returned
    Failed {
        /// Rendered `CheckError`
        reason: String,
    },
    /// The body panicked
    Panicked {
        /// Panic payload, when it was a string
        message: String,
    },
}

impl ScenarioStatus {
    /// True for `Passed`
    pub fn is_pass(&self) -> bool {
        matches!(self, ScenarioStatus::Passed)
    }
}

/// Outcome of one scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name
    pub name: String,
    /// Positive or negative
    pub kind: ScenarioKind,
    /// Pass/fail status
    #[serde(flatten)]
    pub status: ScenarioStatus,
    /// Wall time of setup, body and teardown, in microseconds
    pub duration_us: u64,
}

/// Aggregate of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Process seed the filler values were drawn from
    pub seed: u64,
    /// Container the scenarios ran against
    pub backend: Backend,
    /// Per-scenario outcomes, in execution order
    pub outcomes: Vec<ScenarioOutcome>,
    /// Number of passed scenarios
    pub passed: usize,
    /// Number of failed or panicked scenarios
    pub failed: usize,
}

impl RunSummary {
    fn new(seed: u64, backend: Backend, outcomes: Vec<ScenarioOutcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.status.is_pass()).count();
        let failed = outcomes.len() - passed;
        RunSummary {
            seed,
            backend,
            outcomes,
            passed,
            failed,
        }
    }

    /// True when no scenario failed
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this run: 0 on success, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }

    /// Outcomes that did not pass
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.status.is_pass())
    }
}

/// Runs scenarios according to a [`SuiteConfig`]
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: SuiteConfig,
}

impl Runner {
    /// Create a runner
    pub fn new(config: SuiteConfig) -> Self {
        Runner { config }
    }

    /// The configuration in effect
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Run the full catalogue against the configured backend
    pub fn run_all(&self) -> RunSummary {
        match self.config.backend {
            Backend::Vec => self.run(&catalogue::<Vec<i32>>()),
            Backend::VecDeque => self.run(&catalogue::<VecDeque<i32>>()),
        }
    }

    /// Run the selected subset of `scenarios`
    pub fn run<S: Sequence<Item = i32>>(&self, scenarios: &[Scenario<S>]) -> RunSummary {
        let seed = init_seed(self.config.seed);
        if let Some(requested) = self.config.seed.filter(|&s| s != seed) {
            warn!(requested, seed, "process seed already fixed; requested seed ignored");
        }
        info!(
            seed,
            backend = %self.config.backend,
            container = std::any::type_name::<S>(),
            "starting run"
        );

        let outcomes: Vec<ScenarioOutcome> = scenarios
            .iter()
            .filter(|s| self.config.selects(s.name))
            .map(run_one)
            .collect();

        let summary = RunSummary::new(seed, self.config.backend, outcomes);
        info!(
            passed = summary.passed,
            failed = summary.failed,
            "run complete"
        );
        summary
    }
}

fn run_one<S: Sequence<Item = i32>>(scenario: &Scenario<S>) -> ScenarioOutcome {
    debug!(scenario = scenario.name, "running");
    let started = Instant::now();

    let mut fixture = CollectionFixture::<S>::setup();
    let result = panic::catch_unwind(AssertUnwindSafe(|| (scenario.body)(&mut fixture)));
    drop(fixture);

    let status = match result {
        Ok(Ok(())) => ScenarioStatus::Passed,
        Ok(Err(e)) => {
            warn!(scenario = scenario.name, error = %e, "scenario failed");
            ScenarioStatus::Failed {
                reason: e.to_string(),
            }
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(scenario = scenario.name, %message, "scenario panicked");
            ScenarioStatus::Panicked { message }
        }
    };

    ScenarioOutcome {
        name: scenario.name.to_string(),
        kind: scenario.kind,
        status,
        duration_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
