use serde::{Deserialize, Serialize};

/// Lookup entity keyed by slug. Written by the seed loader only; the live
/// API never reads or writes this collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub slug: String,
    pub display_name: String,
    pub description: String,
}
