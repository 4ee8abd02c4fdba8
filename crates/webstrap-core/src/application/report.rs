//! Run report: which optional steps succeeded, failed, or were skipped.
//!
//! The original tool's outermost handler swallowed every error and printed
//! the same closing message regardless of what happened. The report
//! replaces that: each step records its outcome, the CLI prints the
//! summary, and the exit code is derived from it.

use std::fmt;

/// Outcome of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Skipped(String),
    Failed(String),
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => f.write_str("ok"),
            Self::Skipped(reason) => write!(f, "skipped ({reason})"),
            Self::Failed(reason) => write!(f, "failed ({reason})"),
        }
    }
}

/// Ordered collection of step outcomes for one scaffolding run.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    steps: Vec<(String, StepOutcome)>,
}

impl ScaffoldReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: impl Into<String>, outcome: StepOutcome) {
        self.steps.push((step.into(), outcome));
    }

    pub fn succeeded(&mut self, step: impl Into<String>) {
        self.record(step, StepOutcome::Succeeded);
    }

    pub fn skipped(&mut self, step: impl Into<String>, reason: impl Into<String>) {
        self.record(step, StepOutcome::Skipped(reason.into()));
    }

    pub fn failed(&mut self, step: impl Into<String>, reason: impl Into<String>) {
        self.record(step, StepOutcome::Failed(reason.into()));
    }

    pub fn steps(&self) -> &[(String, StepOutcome)] {
        &self.steps
    }

    pub fn has_failures(&self) -> bool {
        self.steps
            .iter()
            .any(|(_, outcome)| matches!(outcome, StepOutcome::Failed(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
