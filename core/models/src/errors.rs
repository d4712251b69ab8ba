//! Errors decoding wire rows into records.

/// Unable to convert a `_cat` API row into a record.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The shard number column is missing or not an unsigned integer.
    #[error("shard of index '{0}' has an invalid shard number '{1}'")]
    // (index, value)
    InvalidShardNumber(String, String),

    /// The row reports a state that is not a known shard state.
    #[error("shard {1} of index '{0}' is in unknown state '{2}'")]
    // (index, shard, state)
    UnknownState(String, u32, String),
}

impl DecodeError {
    /// The shard number column is missing or not an unsigned integer.
    pub fn invalid_shard_number<S1, S2>(index: S1, value: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        DecodeError::InvalidShardNumber(index.into(), value.into())
    }

    /// The row reports a state that is not a known shard state.
    pub fn unknown_state<S1, S2>(index: S1, shard: u32, state: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        DecodeError::UnknownState(index.into(), shard, state.into())
    }
}
