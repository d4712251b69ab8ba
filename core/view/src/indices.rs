//! Filter, sort and summarise indices.
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use shardview_models::ShardRecord;

use crate::locale_compare;
use crate::ShardGroups;

/// Projection applied to the list of index names.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IndexQuery {
    /// Keep only indices whose name contains this text, ignoring case.
    #[serde(default)]
    pub filter_text: String,

    /// Keep only indices with at least one shard that needs attention.
    #[serde(default)]
    pub show_only_affected: bool,

    /// Sort names in ascending order (descending otherwise).
    #[serde(default = "IndexQuery::default_sort_ascending")]
    pub sort_ascending: bool,
}

impl IndexQuery {
    fn default_sort_ascending() -> bool {
        true
    }
}

impl Default for IndexQuery {
    fn default() -> Self {
        IndexQuery {
            filter_text: String::new(),
            show_only_affected: false,
            sort_ascending: Self::default_sort_ascending(),
        }
    }
}

/// Derive the ordered list of index names to display.
///
/// - A non-empty `filter_text` keeps names containing it as a case-insensitive substring.
/// - `show_only_affected` keeps indices with an unassigned, relocating or initialising shard.
/// - Remaining names are sorted with [`locale_compare`] in the requested direction.
pub fn derive_index_list(
    by_index: &ShardGroups<String>,
    filter_text: &str,
    show_only_affected: bool,
    sort_ascending: bool,
) -> Vec<String> {
    let needle = filter_text.to_lowercase();
    let mut names: Vec<String> = by_index
        .iter()
        .filter(|(name, _)| needle.is_empty() || name.to_lowercase().contains(&needle))
        .filter(|(_, shards)| !show_only_affected || has_issues(shards))
        .map(|(name, _)| name.clone())
        .collect();
    if sort_ascending {
        names.sort_by(|left, right| locale_compare(left, right));
    } else {
        names.sort_by(|left, right| locale_compare(right, left));
    }
    names
}

/// Check if any shard in the list needs attention.
pub(crate) fn has_issues(shards: &[Arc<ShardRecord>]) -> bool {
    shards.iter().any(|shard| shard.is_affected())
}

/// Aggregated information about the shards of an index.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct IndexSummary {
    pub name: String,
    pub primary_count: usize,
    pub replica_count: usize,
    pub unassigned_count: usize,

    /// Total documents across copies reporting a count.
    pub docs: u64,

    /// Total bytes on disk across copies reporting a size.
    pub store_bytes: u64,

    /// At least one shard copy is unassigned, relocating or initialising.
    pub has_issues: bool,
}

impl IndexSummary {
    /// Summarise the shards of an index.
    pub fn new<S>(name: S, shards: &[Arc<ShardRecord>]) -> IndexSummary
    where
        S: Into<String>,
    {
        let mut summary = IndexSummary {
            name: name.into(),
            has_issues: has_issues(shards),
            ..Default::default()
        };
        for shard in shards {
            if shard.primary {
                summary.primary_count += 1;
            } else {
                summary.replica_count += 1;
            }
            if shard.node.is_none() {
                summary.unassigned_count += 1;
            }
            summary.docs += shard.docs.unwrap_or(0);
            summary.store_bytes += shard.store_bytes.unwrap_or(0);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shardview_models::ShardRecord;
    use shardview_models::ShardState;

    use super::IndexQuery;
    use super::IndexSummary;

    #[test]
    fn default_query() {
        let query = IndexQuery::default();
        assert_eq!(query.filter_text, "");
        assert!(!query.show_only_affected);
        assert!(query.sort_ascending);
    }

    #[test]
    fn summarise_index() {
        let mut primary = ShardRecord::new("logs", 0, true, ShardState::Started).on_node("n1");
        primary.docs = Some(10);
        primary.store_bytes = Some(2048);
        let mut replica = ShardRecord::new("logs", 0, false, ShardState::Started).on_node("n2");
        replica.docs = Some(10);
        let unassigned = ShardRecord::new("logs", 1, false, ShardState::Unassigned);
        let shards: Vec<Arc<ShardRecord>> = vec![primary, replica, unassigned]
            .into_iter()
            .map(Arc::new)
            .collect();

        let summary = IndexSummary::new("logs", &shards);
        assert_eq!(summary.primary_count, 1);
        assert_eq!(summary.replica_count, 2);
        assert_eq!(summary.unassigned_count, 1);
        assert_eq!(summary.docs, 20);
        assert_eq!(summary.store_bytes, 2048);
        assert!(summary.has_issues);
    }

    #[test]
    fn healthy_index() {
        let shard = ShardRecord::new("logs", 0, true, ShardState::Started).on_node("n1");
        let summary = IndexSummary::new("logs", &[Arc::new(shard)]);
        assert!(!summary.has_issues);
        assert_eq!(summary.unassigned_count, 0);
    }
}
