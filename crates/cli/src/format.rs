//! Run summary → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): one `PASS`/`FAIL` line per scenario and a totals line
//! - **JSON** (`--json`): `serde_json::to_string_pretty` of the summary

use seqcheck_core::Sequence;
use seqcheck_suite::{RunSummary, Scenario, ScenarioStatus};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a run summary.
pub fn format_summary(summary: &RunSummary, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(summary)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Human => format_human(summary),
    }
}

fn format_human(summary: &RunSummary) -> String {
    let mut out = format!(
        "running {} scenarios against {} (seed {})\n",
        summary.outcomes.len(),
        summary.backend,
        summary.seed
    );
    for outcome in &summary.outcomes {
        let line = match &outcome.status {
            ScenarioStatus::Passed => {
                format!("PASS {} ({})", outcome.name, format_duration(outcome.duration_us))
            }
            ScenarioStatus::Failed { reason } => format!("FAIL {}: {}", outcome.name, reason),
            ScenarioStatus::Panicked { message } => {
                format!("FAIL {}: panicked: {}", outcome.name, message)
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{}: {} passed; {} failed\n",
        if summary.success() { "ok" } else { "FAILED" },
        summary.passed,
        summary.failed
    ));
    out
}

/// Render a microsecond count with a readable unit.
fn format_duration(micros: u64) -> String {
    if micros < 1_000 {
        format!("{} µs", micros)
    } else {
        format!("{:.2} ms", micros as f64 / 1_000.0)
    }
}

/// Format the catalogue listing.
pub fn format_catalogue<S: Sequence>(scenarios: &[Scenario<S>]) -> String {
    let width = scenarios.iter().map(|s| s.name.len()).max().unwrap_or(0);
    scenarios
        .iter()
        .map(|s| format!("{:<width$}  {:<8}  {}\n", s.name, s.kind, s.description, width = width))
        .collect()
}
