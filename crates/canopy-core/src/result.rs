use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of a single test execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The test ran and passed.
    Passed,
    /// The test ran and failed.
    Failed,
    /// The test could not run to completion (build failure, panic in setup).
    Errored,
}

impl Outcome {
    /// Returns a human-readable name for the outcome.
    pub fn display_name(&self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
            Outcome::Errored => "errored",
        }
    }
}

/// Result of one test execution, as reported by the runner.
///
/// Results identify their target the way runners do: by file location and
/// test name. The matching node, if any, stores the result verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// File the test lives in.
    pub location: PathBuf,
    /// Name of the test within that file.
    pub test_name: String,
    /// How the execution ended.
    pub outcome: Outcome,
    /// Runner output attached to the outcome (failure message, build log).
    #[serde(default)]
    pub detail: String,
}

impl TestResult {
    /// Creates a result for the test at the given location.
    pub fn new(
        location: impl Into<PathBuf>,
        test_name: impl Into<String>,
        outcome: Outcome,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            test_name: test_name.into(),
            outcome,
            detail: detail.into(),
        }
    }
}
