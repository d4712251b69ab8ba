//! Records describing individual shard copies.
use serde::Deserialize;
use serde::Serialize;

/// Allocation state of a shard copy.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum ShardState {
    /// The shard copy is allocated and serving requests.
    #[serde(rename = "STARTED")]
    Started,

    /// The shard copy is allocated and recovering its data.
    #[serde(rename = "INITIALIZING")]
    Initializing,

    /// The shard copy is moving from one node to another.
    #[serde(rename = "RELOCATING")]
    Relocating,

    /// The shard copy is not allocated to any node.
    #[serde(rename = "UNASSIGNED")]
    Unassigned,
}

impl ShardState {
    /// Iterate over all shard states in display order.
    pub fn all() -> [ShardState; 4] {
        [
            ShardState::Started,
            ShardState::Initializing,
            ShardState::Relocating,
            ShardState::Unassigned,
        ]
    }

    /// Check if shards in this state need attention.
    ///
    /// Unassigned, relocating and initialising shards all mark their index as affected.
    pub fn is_affected(&self) -> bool {
        matches!(
            self,
            ShardState::Initializing | ShardState::Relocating | ShardState::Unassigned
        )
    }

    /// Parse a state name as reported by the `_cat/shards` API.
    pub fn parse(state: &str) -> Option<ShardState> {
        match state {
            "STARTED" => Some(ShardState::Started),
            "INITIALIZING" => Some(ShardState::Initializing),
            "RELOCATING" => Some(ShardState::Relocating),
            "UNASSIGNED" => Some(ShardState::Unassigned),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShardState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Started => write!(f, "STARTED"),
            Self::Initializing => write!(f, "INITIALIZING"),
            Self::Relocating => write!(f, "RELOCATING"),
            Self::Unassigned => write!(f, "UNASSIGNED"),
        }
    }
}

/// Information about one copy (primary or replica) of an index shard.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ShardRecord {
    /// Name of the index the shard belongs to.
    pub index: String,

    /// Number of the shard within the index.
    pub shard_number: u32,

    /// The copy is the primary for the shard.
    pub primary: bool,

    /// Allocation state of the copy.
    pub state: ShardState,

    /// Name of the node the copy is allocated to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    /// Number of documents stored in the copy, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<u64>,

    /// Size of the copy on disk in bytes, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_bytes: Option<u64>,

    /// Name of the node a relocating copy is moving to, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relocating_node: Option<String>,

    /// Reason the copy is not allocated, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unassigned_reason: Option<String>,
}

impl ShardRecord {
    /// Initialise a shard record with no optional information attached.
    pub fn new<S>(index: S, shard_number: u32, primary: bool, state: ShardState) -> ShardRecord
    where
        S: Into<String>,
    {
        ShardRecord {
            index: index.into(),
            shard_number,
            primary,
            state,
            node: None,
            docs: None,
            store_bytes: None,
            relocating_node: None,
            unassigned_reason: None,
        }
    }

    /// Allocation state used to group the shard.
    ///
    /// A copy that reports no node cannot be anything but unassigned,
    /// regardless of the state it claims to be in.
    pub fn effective_state(&self) -> ShardState {
        match self.node {
            None => ShardState::Unassigned,
            Some(_) => self.state,
        }
    }

    /// Check if the shard copy needs attention.
    pub fn is_affected(&self) -> bool {
        self.effective_state().is_affected()
    }

    /// Attach the node the copy is allocated to.
    pub fn on_node<S>(mut self, node: S) -> ShardRecord
    where
        S: Into<String>,
    {
        self.node = Some(node.into());
        self
    }
}
