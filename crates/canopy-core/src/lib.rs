pub mod config;
pub mod event;
pub mod index;
pub mod key;
pub mod manager;
pub mod node;
pub mod notify;
pub mod phase;
pub mod result;

pub use config::{Config, ConfigError, IconTheme, TreeConfig};
pub use event::{RunScope, TestEvent};
pub use index::{DiscoveryIndex, NodeSlot};
pub use key::NodeKey;
pub use manager::TreeManager;
pub use node::TestNode;
pub use notify::{ChangeNotifier, TreeChange};
pub use phase::DiscoveryPhase;
pub use result::{Outcome, TestResult};
