use chrono::{DateTime, Utc};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

use crate::config::Config;
use crate::event::{RunScope, TestEvent};
use crate::index::{DiscoveryIndex, NodeSlot};
use crate::key::NodeKey;
use crate::node::TestNode;
use crate::notify::{ChangeNotifier, TreeChange};
use crate::phase::DiscoveryPhase;
use crate::result::TestResult;

/// Owns the discovered forest, its index, and the change stream.
///
/// All mutation flows through the event handlers below; the query methods
/// are the only read access the rendering adapter needs. Handlers run to
/// completion and never fail outward: a lookup miss, a malformed entry, or
/// an unmatched replacement leaves state unchanged for that item.
pub struct TreeManager {
    forest: Vec<TestNode>,
    index: DiscoveryIndex,
    phase: DiscoveryPhase,
    notifier: ChangeNotifier,
    placeholder: TestNode,
    pending_rediscovery: Vec<Vec<TestNode>>,
    last_discovered_at: Option<DateTime<Utc>>,
}

impl TreeManager {
    /// Creates an empty manager with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            forest: Vec::new(),
            index: DiscoveryIndex::new(),
            phase: DiscoveryPhase::Idle,
            notifier: ChangeNotifier::new(),
            placeholder: TestNode::placeholder(config.tree.placeholder_label.as_str()),
            pending_rediscovery: Vec::new(),
            last_discovered_at: None,
        }
    }

    /// Registers a change subscriber.
    pub fn subscribe(&mut self) -> UnboundedReceiver<TreeChange> {
        self.notifier.subscribe()
    }

    /// Applies one producer event.
    pub fn apply(&mut self, event: TestEvent) {
        match event {
            TestEvent::DiscoveryStarted => self.discovery_started(),
            TestEvent::Discovered(nodes) => self.discovered(nodes),
            TestEvent::Rediscovered(nodes) => self.rediscovered(nodes),
            TestEvent::RunStarted(scope) => self.run_started(scope),
            TestEvent::Result(result) => self.result(result),
        }
    }

    /// A full discovery pass has started.
    ///
    /// The forest is cleared and queries surface the placeholder until the
    /// pass completes.
    pub fn discovery_started(&mut self) {
        self.forest.clear();
        self.index.clear();
        self.phase = DiscoveryPhase::Discovering;
        self.notifier.notify(TreeChange::All);
    }

    /// A full discovery pass produced the complete forest.
    ///
    /// Replaces all prior state, including any loading flags. Also valid
    /// while idle: a fresh full replacement. An empty forest is allowed.
    pub fn discovered(&mut self, nodes: Vec<TestNode>) {
        self.forest = nodes;
        self.index.rebuild(&self.forest);
        self.phase = DiscoveryPhase::Idle;
        self.last_discovered_at = Some(Utc::now());

        // Rescans queued while the pass ran apply on top of the fresh forest
        let queued = std::mem::take(&mut self.pending_rediscovery);
        for batch in queued {
            self.replace_batch(batch);
        }

        self.notifier.notify(TreeChange::All);
    }

    /// An incremental rescan produced replacements for specific locations.
    ///
    /// Each node replaces the first top-level entry with the same location,
    /// preserving its position. One notification covers the whole batch;
    /// consumers re-query from the top. Batches arriving mid-discovery are
    /// queued and applied once the pass completes.
    pub fn rediscovered(&mut self, nodes: Vec<TestNode>) {
        if self.phase.is_discovering() {
            self.pending_rediscovery.push(nodes);
            return;
        }
        self.replace_batch(nodes);
        self.notifier.notify(TreeChange::All);
    }

    /// One or all tests started running.
    pub fn run_started(&mut self, scope: RunScope) {
        match scope {
            RunScope::Single(key) => {
                let Some(slot) = self.index.get(&key) else {
                    debug!(%key, "run started for unknown node, ignoring");
                    return;
                };
                match self.node_mut(slot) {
                    Some(node) => node.set_loading(),
                    None => return,
                }
                self.notifier.notify(TreeChange::Node(key));
            }
            RunScope::All => {
                for suite in self.forest.iter_mut().filter(|n| n.is_suite) {
                    for test in &mut suite.children {
                        test.set_loading();
                    }
                }
                self.notifier.notify(TreeChange::All);
            }
        }
    }

    /// A single test finished.
    ///
    /// The result attaches to the node indexed under the result's location
    /// and test name; no node is fabricated for an unknown test. Attaching
    /// ends the node's in-flight state.
    pub fn result(&mut self, result: TestResult) {
        let key = NodeKey::test(result.location.as_path(), result.test_name.as_str());
        let Some(slot) = self.index.get(&key) else {
            debug!(%key, "result for unknown test, dropping");
            return;
        };
        match self.node_mut(slot) {
            Some(node) => node.set_result(result),
            None => return,
        }
        self.notifier.notify(TreeChange::Node(key));
    }

    /// Children of a node, or the top of the tree when no node is given.
    ///
    /// While discovery is in flight the top of the tree is a single
    /// placeholder.
    pub fn children<'a>(&'a self, node: Option<&'a TestNode>) -> &'a [TestNode] {
        if let Some(node) = node {
            return &node.children;
        }
        if self.phase.is_discovering() {
            return std::slice::from_ref(&self.placeholder);
        }
        &self.forest
    }

    /// The current top-level forest. Empty while discovery is in flight.
    pub fn all_discovered(&self) -> &[TestNode] {
        &self.forest
    }

    /// Direct index lookup.
    pub fn by_key(&self, key: &NodeKey) -> Option<&TestNode> {
        let slot = self.index.get(key)?;
        self.node(slot)
    }

    /// Current discovery phase.
    pub fn phase(&self) -> DiscoveryPhase {
        self.phase
    }

    /// True while a full discovery pass is in flight.
    pub fn is_discovering(&self) -> bool {
        self.phase.is_discovering()
    }

    /// When the last full discovery pass completed.
    pub fn last_discovered_at(&self) -> Option<DateTime<Utc>> {
        self.last_discovered_at
    }

    /// Replaces the matching top-level entries for a rediscovery batch.
    fn replace_batch(&mut self, nodes: Vec<TestNode>) {
        for node in nodes {
            let Some(location) = node.location.clone() else {
                warn!(name = %node.name, "rediscovered node has no location, dropping");
                continue;
            };
            let position = self
                .forest
                .iter()
                .position(|existing| existing.location.as_deref() == Some(location.as_path()));
            let Some(top) = position else {
                warn!(
                    location = %location.display(),
                    "rediscovered location matches no top-level entry, dropping"
                );
                continue;
            };
            self.index.patch(top, &node);
            self.forest[top] = node;
        }
    }

    fn node(&self, slot: NodeSlot) -> Option<&TestNode> {
        let top = self.forest.get(slot.top)?;
        match slot.child {
            Some(child) => top.children.get(child),
            None => Some(top),
        }
    }

    fn node_mut(&mut self, slot: NodeSlot) -> Option<&mut TestNode> {
        let top = self.forest.get_mut(slot.top)?;
        match slot.child {
            Some(child) => top.children.get_mut(child),
            None => Some(top),
        }
    }
}

impl Default for TreeManager {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forest() -> Vec<TestNode> {
        vec![TestNode::suite(
            "pkg",
            "pkg/pkg_test.go",
            vec![
                TestNode::test("TestAlpha", "pkg/pkg_test.go"),
                TestNode::test("TestBeta", "pkg/pkg_test.go"),
            ],
        )]
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let manager = TreeManager::default();
        assert_eq!(manager.phase(), DiscoveryPhase::Idle);
        assert!(manager.all_discovered().is_empty());
        assert!(manager.children(None).is_empty());
    }

    #[test]
    fn test_discovering_surfaces_placeholder() {
        let mut manager = TreeManager::default();
        manager.discovery_started();

        assert!(manager.is_discovering());
        assert!(manager.all_discovered().is_empty());

        let top = manager.children(None);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Loading...");
        assert!(top[0].location.is_none());
    }

    #[test]
    fn test_discovered_indexes_forest() {
        let mut manager = TreeManager::default();
        manager.discovery_started();
        manager.discovered(sample_forest());

        assert!(!manager.is_discovering());
        let key = NodeKey::test("pkg/pkg_test.go", "TestAlpha");
        assert_eq!(manager.by_key(&key).unwrap().name, "TestAlpha");
        let suite_key = NodeKey::suite("pkg/pkg_test.go");
        assert!(manager.by_key(&suite_key).unwrap().is_suite);
    }

    #[test]
    fn test_placeholder_label_from_config() {
        let mut config = Config::default();
        config.tree.placeholder_label = "Scanning...".to_string();

        let mut manager = TreeManager::new(&config);
        manager.discovery_started();
        assert_eq!(manager.children(None)[0].name, "Scanning...");
    }
}
