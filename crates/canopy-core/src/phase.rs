use serde::{Deserialize, Serialize};

/// Discovery state of the tree.
///
/// The tree is either stable with a valid index, or mid-discovery with the
/// forest cleared and a placeholder surfaced to queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscoveryPhase {
    /// Stable forest, index valid.
    #[default]
    Idle,
    /// A full discovery pass is in flight.
    Discovering,
}

impl DiscoveryPhase {
    /// Returns true while a full discovery pass is in flight.
    pub fn is_discovering(&self) -> bool {
        matches!(self, DiscoveryPhase::Discovering)
    }

    /// Returns a human-readable name for the phase.
    pub fn display_name(&self) -> &'static str {
        match self {
            DiscoveryPhase::Idle => "idle",
            DiscoveryPhase::Discovering => "discovering",
        }
    }
}
