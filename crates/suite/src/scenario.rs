//! Registered test cases

use serde::{Deserialize, Serialize};
use std::fmt;

use seqcheck_core::{CheckResult, CollectionFixture, Sequence};

/// Body of a scenario: mutate the fixture's container and check it
pub type ScenarioFn<S> = fn(&mut CollectionFixture<S>) -> CheckResult;

/// Whether a scenario expects the container to succeed or to signal an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Operations succeed and post-conditions hold
    Positive,
    /// An operation must signal a specific error
    Negative,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ScenarioKind::Positive => "positive",
            ScenarioKind::Negative => "negative",
        })
    }
}

/// A named test case
pub struct Scenario<S: Sequence> {
    /// Stable identifier, used for filtering and reporting
    pub name: &'static str,
    /// One-line description of what is checked
    pub description: &'static str,
    /// Positive or negative
    pub kind: ScenarioKind,
    /// Scenario body
    pub body: ScenarioFn<S>,
}

impl<S: Sequence> Scenario<S> {
    /// Register a positive scenario
    pub fn positive(name: &'static str, description: &'static str, body: ScenarioFn<S>) -> Self {
        Scenario {
            name,
            description,
            kind: ScenarioKind::Positive,
            body,
        }
    }

    /// Register a negative scenario
    pub fn negative(name: &'static str, description: &'static str, body: ScenarioFn<S>) -> Self {
        Scenario {
            name,
            description,
            kind: ScenarioKind::Negative,
            body,
        }
    }
}

impl<S: Sequence> fmt::Debug for Scenario<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
