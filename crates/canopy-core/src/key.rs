use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::node::TestNode;

/// Lookup key for an indexed test node.
///
/// Keys are the only identity the index understands: a runnable test is
/// keyed by its file location plus its name, while a suite owns an entry
/// under its bare location. The two forms cannot collide, so a suite and a
/// test in the same file coexist in the index.
///
/// Keys come into existence only through the constructors here; no other
/// component derives its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKey {
    /// A suite's own entry, keyed by file location alone.
    Suite { location: PathBuf },
    /// A runnable test, keyed by file location and test name.
    Test { location: PathBuf, name: String },
}

impl NodeKey {
    /// Creates the key for a suite at the given location.
    pub fn suite(location: impl Into<PathBuf>) -> Self {
        NodeKey::Suite {
            location: location.into(),
        }
    }

    /// Creates the key for a test at the given location.
    pub fn test(location: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        NodeKey::Test {
            location: location.into(),
            name: name.into(),
        }
    }

    /// Derives the key under which a node is indexed.
    ///
    /// Returns `None` for nodes without a location; those never enter the
    /// index. The placeholder is the only such node a well-behaved producer
    /// ever surfaces.
    pub fn for_node(node: &TestNode) -> Option<Self> {
        let location = node.location.as_deref()?;
        Some(if node.is_suite {
            Self::suite(location)
        } else {
            Self::test(location, node.name.as_str())
        })
    }

    /// The file location this key refers to.
    pub fn location(&self) -> &Path {
        match self {
            NodeKey::Suite { location } => location,
            NodeKey::Test { location, .. } => location,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Suite { location } => write!(f, "{}", location.display()),
            NodeKey::Test { location, name } => {
                write!(f, "{}__{}", location.display(), name)
            }
        }
    }
}
