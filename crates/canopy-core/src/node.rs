use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::IconTheme;
use crate::result::{Outcome, TestResult};

/// A single entry in the discovered test tree.
///
/// A node is either a suite grouping child tests or a runnable leaf test.
/// Shape fields (`name`, `location`, `is_suite`, `children`) are fixed at
/// discovery time; `result` and `loading` mutate in place as run events
/// arrive for an already-discovered node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestNode {
    /// Display identifier, unique among siblings.
    pub name: String,
    /// File the node was discovered in. `None` only for the synthetic
    /// placeholder, which is never indexed.
    pub location: Option<PathBuf>,
    /// True if this node groups children rather than being runnable.
    pub is_suite: bool,
    /// Child nodes, in discovery order. Non-empty only for suites.
    #[serde(default)]
    pub children: Vec<TestNode>,
    /// Latest execution result. Set only on leaves.
    #[serde(default)]
    pub result: Option<TestResult>,
    /// True while an execution is in flight for this node.
    #[serde(default)]
    pub loading: bool,
}

impl TestNode {
    /// Creates a suite node grouping the given children.
    pub fn suite(
        name: impl Into<String>,
        location: impl Into<PathBuf>,
        children: Vec<TestNode>,
    ) -> Self {
        Self {
            name: name.into(),
            location: Some(location.into()),
            is_suite: true,
            children,
            result: None,
            loading: false,
        }
    }

    /// Creates a runnable leaf test node.
    pub fn test(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location: Some(location.into()),
            is_suite: false,
            children: Vec::new(),
            result: None,
            loading: false,
        }
    }

    /// Creates the synthetic node surfaced while discovery runs.
    ///
    /// Placeholders have no location and never enter the index.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            name: label.into(),
            location: None,
            is_suite: false,
            children: Vec::new(),
            result: None,
            loading: false,
        }
    }

    /// Marks an execution as in flight for this node.
    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    /// Attaches an execution result, ending any in-flight state.
    pub fn set_result(&mut self, result: TestResult) {
        self.result = Some(result);
        self.loading = false;
    }

    /// Outcome of the latest execution, if one has been attached.
    pub fn outcome(&self) -> Option<Outcome> {
        self.result.as_ref().map(|r| r.outcome)
    }

    /// Icon file name for the node's current state.
    ///
    /// Presentation only; reconciliation never reads this. The adapter
    /// resolves the returned name against its own resource directories.
    pub fn icon<'a>(&self, icons: &'a IconTheme) -> &'a str {
        if self.loading {
            return icons.spinner.as_str();
        }
        if self.is_suite {
            return icons.suite.as_str();
        }
        match self.outcome() {
            Some(Outcome::Passed) => icons.passed.as_str(),
            Some(Outcome::Failed) => icons.failed.as_str(),
            Some(Outcome::Errored) => icons.errored.as_str(),
            None => icons.pending.as_str(),
        }
    }

    /// Runner output of the latest execution, for hover text.
    pub fn tooltip(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.detail.as_str())
    }
}
