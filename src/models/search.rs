use serde::{Deserialize, Serialize};

/// One suggestion candidate derived from a collection entry
///
/// Regenerated from the current collection on every query; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndexRecord {
    pub key: String,
    pub owner_id: i64,
}
