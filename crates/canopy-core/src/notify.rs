//! Change notifications for the rendering adapter.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::key::NodeKey;

/// What a consumer must re-query after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeChange {
    /// The whole tree may have changed; re-query from the top.
    All,
    /// Exactly one node changed.
    Node(NodeKey),
}

/// Fan-out pub-sub for tree changes.
///
/// Subscribers receive every notification sent after they subscribed, in
/// send order. A subscriber that hung up is pruned on the next send.
#[derive(Debug, Default)]
pub struct ChangeNotifier {
    subscribers: Vec<UnboundedSender<TreeChange>>,
}

impl ChangeNotifier {
    /// Creates a notifier with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber and returns its receiving end.
    pub fn subscribe(&mut self) -> UnboundedReceiver<TreeChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Sends a change to every live subscriber.
    pub fn notify(&mut self, change: TreeChange) {
        self.subscribers
            .retain(|tx| tx.send(change.clone()).is_ok());
    }

    /// Number of subscribers still registered.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
