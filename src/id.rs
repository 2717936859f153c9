//! Node identity.
//!
//! Every syntax construct carries a [`NodeId`]: a random 128-bit UUID that is
//! the only way callers address a node inside a tree. Ids survive edits that
//! do not replace the node and are regenerated by `copy`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Process-unique identity of a syntax node.
///
/// Serializes as the standard hyphenated UUID string.
///
/// # Examples
///
/// ```rust
/// use logic::NodeId;
/// let a = NodeId::new();
/// let b = NodeId::new();
/// assert_ne!(a, b);
/// let parsed: NodeId = a.to_string().parse().unwrap();
/// assert_eq!(a, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generates a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
