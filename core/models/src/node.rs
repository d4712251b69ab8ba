//! Records describing cluster nodes.
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

/// Information about a cluster node and its resource usage.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Unique name of the node.
    pub name: String,

    /// IP address the node is reachable at.
    #[serde(default)]
    pub ip: String,

    /// Roles the node performs in the cluster (`master`, `data`, `ingest`, ...).
    #[serde(default)]
    pub roles: BTreeSet<String>,

    /// The node is the elected master, independent of its roles.
    #[serde(default)]
    pub is_master: bool,

    #[serde(default)]
    pub heap_used_bytes: u64,

    #[serde(default)]
    pub heap_max_bytes: u64,

    #[serde(default)]
    pub disk_used_bytes: u64,

    #[serde(default)]
    pub disk_total_bytes: u64,
}

impl NodeRecord {
    /// Initialise a node record with no roles and no resource usage.
    pub fn new<S>(name: S) -> NodeRecord
    where
        S: Into<String>,
    {
        NodeRecord {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Check if the node has the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
