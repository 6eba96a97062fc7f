//! Event shapes consumed from the discovery and execution producers.

use serde::{Deserialize, Serialize};

use crate::key::NodeKey;
use crate::node::TestNode;
use crate::result::TestResult;

/// Target scope of a run-started announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunScope {
    /// Every discovered test is about to run.
    All,
    /// A single node is about to run.
    Single(NodeKey),
}

/// Events that keep the tree synchronized with the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestEvent {
    /// A full discovery pass has started.
    DiscoveryStarted,
    /// A full discovery pass finished with the complete forest.
    Discovered(Vec<TestNode>),
    /// An incremental rescan produced replacements for specific locations.
    Rediscovered(Vec<TestNode>),
    /// One or all tests started running.
    RunStarted(RunScope),
    /// A single test finished.
    Result(TestResult),
}
