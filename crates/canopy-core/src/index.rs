//! Keyed index over the discovered forest.

use std::collections::HashMap;

use tracing::warn;

use crate::key::NodeKey;
use crate::node::TestNode;

/// Address of a node inside the top-level forest.
///
/// `top` is the position of the top-level entry; `child` is the position
/// within that entry's children, or `None` for the top-level entry itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSlot {
    pub top: usize,
    pub child: Option<usize>,
}

/// Mapping from node key to position in the forest.
///
/// Rebuilt wholesale on full discovery, patched per top-level entry on
/// partial re-discovery. The forest stays the single owner of the nodes;
/// the index only addresses into it, so the `children` sequence and the
/// index can never disagree about which node a key names.
#[derive(Debug, Default)]
pub struct DiscoveryIndex {
    entries: HashMap<NodeKey, NodeSlot>,
}

impl DiscoveryIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the index and re-indexes the whole forest.
    ///
    /// A suite is indexed under its bare location plus one entry per child
    /// under the child's test key; a top-level leaf is indexed under its
    /// test key. Nodes without a location cannot be keyed and are skipped;
    /// the rest of the batch is indexed normally.
    pub fn rebuild(&mut self, forest: &[TestNode]) {
        self.entries.clear();
        for (top, node) in forest.iter().enumerate() {
            self.index_top_level(top, node);
        }
    }

    /// Re-indexes a single replaced top-level entry.
    ///
    /// Entries addressing other positions are left untouched. Entries left
    /// over from the previous occupant of this position are evicted first:
    /// a stale key would otherwise resolve to whatever node now happens to
    /// sit at that address.
    pub fn patch(&mut self, top: usize, node: &TestNode) {
        self.entries.retain(|_, slot| slot.top != top);
        self.index_top_level(top, node);
    }

    /// Looks up the slot for a key.
    pub fn get(&self, key: &NodeKey) -> Option<NodeSlot> {
        self.entries.get(key).copied()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_top_level(&mut self, top: usize, node: &TestNode) {
        let Some(key) = NodeKey::for_node(node) else {
            warn!(name = %node.name, "discovered node has no location, not indexing");
            return;
        };
        if node.is_suite {
            for (child, test) in node.children.iter().enumerate() {
                let Some(location) = test.location.as_deref() else {
                    warn!(
                        suite = %node.name,
                        name = %test.name,
                        "discovered test has no location, not indexing"
                    );
                    continue;
                };
                self.entries.insert(
                    NodeKey::test(location, test.name.as_str()),
                    NodeSlot {
                        top,
                        child: Some(child),
                    },
                );
            }
        }
        self.entries.insert(key, NodeSlot { top, child: None });
    }
}
